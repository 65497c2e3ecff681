/// Computes the mean of `values`, weighted by `weights` when supplied.
///
/// With `None` weights this is the arithmetic mean; with weights it is
/// `sum(v * w) / sum(w)`. An empty input or a non-positive total weight
/// yields `0.0` ("no data", not an error).
///
/// # Panics
///
/// Panics if `weights` is supplied with a different length than `values`.
///
/// # Examples
///
/// ```
/// use hayakuchi_stats::weighted::weighted_mean;
///
/// let values = [2.0, 4.0, 6.0];
/// assert_eq!(weighted_mean(&values, None), 4.0);
/// assert_eq!(weighted_mean(&values, Some(&[1.0, 1.0, 4.0])), 5.0);
/// ```
#[must_use]
pub fn weighted_mean(values: &[f64], weights: Option<&[f64]>) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let Some(weights) = weights else {
        #[expect(clippy::cast_precision_loss)]
        let n = values.len() as f64;
        return values.iter().sum::<f64>() / n;
    };
    assert_eq!(
        values.len(),
        weights.len(),
        "values and weights must have the same length"
    );

    let total_weight = weights.iter().sum::<f64>();
    if total_weight <= 0.0 {
        return 0.0;
    }
    let weighted_sum = values
        .iter()
        .zip(weights)
        .map(|(v, w)| v * w)
        .sum::<f64>();
    weighted_sum / total_weight
}

/// Computes the median of `values`, weighted by `weights` when supplied.
///
/// The weighted median sorts `(value, weight)` pairs by value, accumulates
/// weight, and returns the value at which the cumulative weight first reaches
/// half of the total. It never interpolates between values: it snaps to the
/// threshold-crossing value. The unweighted fallback is the classic median,
/// which for even counts averages the two central values. This asymmetry is
/// intentional and must be preserved: a duration-weighted median names an
/// observed rate, while the unweighted even-count median is the conventional
/// interpolated statistic.
///
/// An empty input or a non-positive total weight yields `0.0`.
///
/// # Panics
///
/// Panics if `weights` is supplied with a different length than `values`.
///
/// # Examples
///
/// ```
/// use hayakuchi_stats::weighted::weighted_median;
///
/// let values = [10.0, 11.0, 12.0, 13.0];
/// // Unweighted even count interpolates...
/// assert_eq!(weighted_median(&values, None), 11.5);
/// // ...while uniform weights snap to the threshold-crossing value.
/// assert_eq!(weighted_median(&values, Some(&[1.0; 4])), 11.0);
/// ```
#[must_use]
pub fn weighted_median(values: &[f64], weights: Option<&[f64]>) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let Some(weights) = weights else {
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        let mid = sorted.len() / 2;
        if sorted.len() % 2 == 1 {
            return sorted[mid];
        }
        return (sorted[mid - 1] + sorted[mid]) / 2.0;
    };
    assert_eq!(
        values.len(),
        weights.len(),
        "values and weights must have the same length"
    );

    let mut pairs = values
        .iter()
        .copied()
        .zip(weights.iter().copied())
        .collect::<Vec<_>>();
    pairs.sort_by(|(a, _), (b, _)| f64::total_cmp(a, b));

    let total_weight = pairs.iter().map(|(_, w)| w).sum::<f64>();
    if total_weight <= 0.0 {
        return 0.0;
    }
    let target = total_weight / 2.0;
    let mut accumulated = 0.0;
    for &(value, weight) in &pairs {
        accumulated += weight;
        if accumulated >= target {
            return value;
        }
    }
    pairs[pairs.len() - 1].0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_empty_is_zero() {
        assert_eq!(weighted_mean(&[], None), 0.0);
        assert_eq!(weighted_mean(&[], Some(&[])), 0.0);
    }

    #[test]
    fn mean_fallback_is_arithmetic_mean() {
        assert_eq!(weighted_mean(&[1.0, 2.0, 3.0, 4.0], None), 2.5);
    }

    #[test]
    fn mean_ignores_zero_total_weight() {
        assert_eq!(weighted_mean(&[1.0, 2.0], Some(&[0.0, 0.0])), 0.0);
    }

    #[test]
    fn mean_weights_pull_toward_heavy_values() {
        assert_eq!(weighted_mean(&[2.0, 4.0, 6.0], Some(&[1.0, 1.0, 4.0])), 5.0);
    }

    #[test]
    fn median_of_empty_is_zero() {
        assert_eq!(weighted_median(&[], None), 0.0);
    }

    #[test]
    fn unweighted_odd_median_is_middle_value() {
        assert_eq!(weighted_median(&[3.0, 1.0, 2.0], None), 2.0);
    }

    #[test]
    fn unweighted_even_median_interpolates() {
        assert_eq!(weighted_median(&[4.0, 1.0, 3.0, 2.0], None), 2.5);
    }

    #[test]
    fn uniform_weights_match_classic_median_for_odd_counts() {
        let values = [3.0, 1.0, 2.0];
        assert_eq!(
            weighted_median(&values, Some(&[1.0; 3])),
            weighted_median(&values, None),
        );
    }

    #[test]
    fn weighted_median_snaps_instead_of_interpolating() {
        // Even count: the unweighted form averages 11 and 12, the weighted
        // form stops at the value crossing half the total weight.
        let values = [10.0, 11.0, 12.0, 13.0];
        assert_eq!(weighted_median(&values, None), 11.5);
        assert_eq!(weighted_median(&values, Some(&[1.0; 4])), 11.0);
    }

    #[test]
    fn heavy_tail_moves_weighted_median() {
        assert_eq!(
            weighted_median(&[10.0, 11.0, 12.0], Some(&[1.0, 1.0, 4.0])),
            12.0
        );
    }

    #[test]
    fn zero_total_weight_is_sentinel_zero() {
        assert_eq!(weighted_median(&[1.0, 2.0], Some(&[0.0, 0.0])), 0.0);
    }
}
