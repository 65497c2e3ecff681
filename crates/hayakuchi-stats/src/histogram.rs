/// Estimates the mode of a distribution as the midpoint of its heaviest bin.
///
/// The value range `[min, max]` is divided into `num_bins` equal-width bins
/// and each value contributes its weight (or 1 when `weights` is `None`) to
/// the bin it falls in. The exact maximum is absorbed into the last bin
/// instead of opening a bin of its own. The result is the midpoint of the bin
/// with the largest accumulated weight; ties are broken by the first (lowest)
/// bin.
///
/// Degenerate inputs collapse to sentinels: an empty input yields `0.0`, and
/// a single-point range (`min == max`, or `num_bins == 0`) yields the minimum
/// value itself.
///
/// # Panics
///
/// Panics if `weights` is supplied with a different length than `values`.
///
/// # Examples
///
/// ```
/// use hayakuchi_stats::histogram::histogram_mode;
///
/// // Two values land in the first of five bins over [0, 10].
/// let values = [0.0, 1.0, 10.0];
/// assert_eq!(histogram_mode(&values, None, 5), 1.0);
///
/// // Weighting the maximum flips the heaviest bin.
/// assert_eq!(histogram_mode(&values, Some(&[1.0, 1.0, 3.0]), 5), 9.0);
/// ```
#[expect(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
#[must_use]
pub fn histogram_mode(values: &[f64], weights: Option<&[f64]>, num_bins: usize) -> f64 {
    if let Some(weights) = weights {
        assert_eq!(
            values.len(),
            weights.len(),
            "values and weights must have the same length"
        );
    }

    let Some(min) = values.iter().copied().reduce(f64::min) else {
        return 0.0;
    };
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if min == max || num_bins == 0 {
        return min;
    }

    #[expect(clippy::cast_precision_loss)]
    let width = (max - min) / (num_bins as f64);

    let mut bin_weights = vec![0.0_f64; num_bins];
    for (idx, &value) in values.iter().enumerate() {
        let weight = weights.map_or(1.0, |w| w[idx]);
        // The exact maximum lands on the right edge of the range; fold it
        // into the last bin.
        let bin_idx = usize::min(((value - min) / width) as usize, num_bins - 1);
        bin_weights[bin_idx] += weight;
    }

    let heaviest = bin_weights
        .iter()
        .enumerate()
        .max_by(|(left_idx, left), (right_idx, right)| {
            left.total_cmp(right).then(right_idx.cmp(left_idx))
        })
        .map_or(0, |(idx, _)| idx);

    #[expect(clippy::cast_precision_loss)]
    let offset = (heaviest as f64 + 0.5) * width;
    min + offset
}
