/// Computes a single percentile value from sorted data.
///
/// This function uses linear interpolation between closest ranks: for `n`
/// values the fractional rank of percentile `p` is `(n - 1) * p / 100`, and
/// the result blends the values at the neighbouring integer ranks by the
/// fractional part. `p <= 0` returns the first element and `p >= 100` the
/// last, so the 0th and 100th percentiles are exactly the minimum and
/// maximum.
///
/// # Arguments
///
/// * `sorted_values` - Values sorted in ascending order
/// * `percentile` - The percentile to compute (0.0 to 100.0)
///
/// # Returns
///
/// The interpolated value at the specified percentile. Returns `0.0` when the
/// input is empty ("no data", not an error).
///
/// # Panics
///
/// Panics if `sorted_values` is not sorted in ascending order.
///
/// # Examples
///
/// ```
/// use hayakuchi_stats::percentiles::compute_percentile;
///
/// let mut values = vec![12.0, 10.0, 11.0, 100.0];
/// values.sort_by(f64::total_cmp);
///
/// assert_eq!(compute_percentile(&values, 0.0), 10.0);
/// assert_eq!(compute_percentile(&values, 100.0), 100.0);
/// assert_eq!(compute_percentile(&values, 50.0), 11.5);
/// ```
#[expect(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss
)]
#[must_use]
pub fn compute_percentile(sorted_values: &[f64], percentile: f64) -> f64 {
    assert!(
        sorted_values.is_sorted_by(|a, b| a <= b),
        "values must be sorted in ascending order"
    );

    let Some((first, last)) = sorted_values.first().zip(sorted_values.last()) else {
        return 0.0;
    };
    if percentile <= 0.0 {
        return *first;
    }
    if percentile >= 100.0 {
        return *last;
    }

    let k = ((sorted_values.len() - 1) as f64) * (percentile / 100.0);
    let floor_idx = k as usize;
    let ceil_idx = usize::min(floor_idx + 1, sorted_values.len() - 1);
    if floor_idx == ceil_idx {
        return sorted_values[floor_idx];
    }

    let (floor_rank, ceil_rank) = (floor_idx as f64, ceil_idx as f64);
    sorted_values[floor_idx] * (ceil_rank - k) + sorted_values[ceil_idx] * (k - floor_rank)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_sentinel_zero() {
        assert_eq!(compute_percentile(&[], 50.0), 0.0);
    }

    #[test]
    fn boundaries_are_min_and_max() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(compute_percentile(&values, 0.0), 1.0);
        assert_eq!(compute_percentile(&values, -10.0), 1.0);
        assert_eq!(compute_percentile(&values, 100.0), 5.0);
        assert_eq!(compute_percentile(&values, 150.0), 5.0);
    }

    #[test]
    fn single_value_at_any_percentile() {
        assert_eq!(compute_percentile(&[7.5], 37.0), 7.5);
    }

    #[test]
    fn interpolates_between_ranks() {
        let values = [10.0, 11.0, 12.0, 100.0];
        assert_eq!(compute_percentile(&values, 25.0), 10.75);
        assert_eq!(compute_percentile(&values, 75.0), 34.0);
    }

    #[test]
    fn exact_rank_needs_no_interpolation() {
        let values = [10.0, 20.0, 30.0];
        assert_eq!(compute_percentile(&values, 50.0), 20.0);
    }
}
