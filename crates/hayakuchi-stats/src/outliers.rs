use crate::percentiles::compute_percentile;

/// Tukey fence bounding the non-outlier range of a rate population.
///
/// The fence spans `[Q1 - 1.5*IQR, Q3 + 1.5*IQR]`, where Q1/Q3 are the 25th
/// and 75th percentiles and `IQR = Q3 - Q1`. A fence is always derived from
/// the population it will filter; fences from different populations share no
/// state.
///
/// # Examples
///
/// ```
/// use hayakuchi_stats::outliers::RateFence;
///
/// let fence = RateFence::from_rates(&[10.0, 12.0, 11.0, 100.0]).unwrap();
/// assert!(fence.contains(12.0));
/// assert!(!fence.contains(100.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateFence {
    /// Lower bound of the non-outlier range (inclusive).
    pub lower: f64,
    /// Upper bound of the non-outlier range (inclusive).
    pub upper: f64,
}

impl RateFence {
    /// Derives the fence from an unsorted rate population.
    ///
    /// Returns `None` when no meaningful fence exists: the population is
    /// empty, or `IQR <= 0` (a degenerate/constant distribution). A
    /// zero-width fence would wrongly discard all but one value, so callers
    /// treat `None` as "keep everything".
    ///
    /// # Examples
    ///
    /// ```
    /// use hayakuchi_stats::outliers::RateFence;
    ///
    /// assert!(RateFence::from_rates(&[5.0, 5.0, 5.0]).is_none());
    /// ```
    #[must_use]
    pub fn from_rates(rates: &[f64]) -> Option<Self> {
        if rates.is_empty() {
            return None;
        }
        let mut sorted = rates.to_vec();
        sorted.sort_by(f64::total_cmp);

        let q1 = compute_percentile(&sorted, 25.0);
        let q3 = compute_percentile(&sorted, 75.0);
        let iqr = q3 - q1;
        if iqr <= 0.0 {
            return None;
        }
        Some(Self {
            lower: q1 - 1.5 * iqr,
            upper: q3 + 1.5 * iqr,
        })
    }

    /// Returns whether `rate` lies inside the fence (bounds inclusive).
    #[must_use]
    pub fn contains(&self, rate: f64) -> bool {
        (self.lower..=self.upper).contains(&rate)
    }
}

/// Drops the items whose rate falls outside the Tukey fence of the whole set.
///
/// The fence is computed over the rates of `items` themselves, so trimming is
/// self-contained: the same call produces the same survivors regardless of
/// what other populations were trimmed before. Auxiliary data travels with
/// each item; `rate_of` projects the rate the fence applies to. When the
/// population is degenerate (empty or `IQR <= 0`) every item is kept.
///
/// # Examples
///
/// ```
/// use hayakuchi_stats::outliers::trim_outliers;
///
/// let lines = vec![(10.0, 1.5), (12.0, 2.0), (11.0, 1.0), (100.0, 0.5)];
/// let trimmed = trim_outliers(lines, |&(rate, _)| rate);
/// assert_eq!(trimmed, vec![(10.0, 1.5), (12.0, 2.0), (11.0, 1.0)]);
/// ```
#[must_use]
pub fn trim_outliers<T, F>(items: Vec<T>, rate_of: F) -> Vec<T>
where
    F: Fn(&T) -> f64,
{
    let rates = items.iter().map(&rate_of).collect::<Vec<_>>();
    match RateFence::from_rates(&rates) {
        Some(fence) => items
            .into_iter()
            .filter(|item| fence.contains(rate_of(item)))
            .collect(),
        None => items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_fence_for_empty_population() {
        assert!(RateFence::from_rates(&[]).is_none());
    }

    #[test]
    fn no_fence_for_constant_population() {
        assert!(RateFence::from_rates(&[8.0; 10]).is_none());
    }

    #[test]
    fn fence_matches_quartile_arithmetic() {
        // Q1 = 10.75, Q3 = 34.0, IQR = 23.25
        let fence = RateFence::from_rates(&[10.0, 12.0, 11.0, 100.0]).unwrap();
        assert_eq!(fence.lower, 10.75 - 1.5 * 23.25);
        assert_eq!(fence.upper, 34.0 + 1.5 * 23.25);
    }

    #[test]
    fn trim_removes_far_outlier_and_keeps_order() {
        let trimmed = trim_outliers(vec![10.0, 12.0, 11.0, 100.0], |&v| v);
        assert_eq!(trimmed, vec![10.0, 12.0, 11.0]);
    }

    #[test]
    fn degenerate_population_is_kept_whole() {
        let values = vec![5.0, 5.0, 5.0, 5.0];
        assert_eq!(trim_outliers(values.clone(), |&v| v), values);
    }

    #[test]
    fn trim_carries_auxiliary_data() {
        let items = vec![("a", 10.0), ("b", 11.0), ("c", 200.0), ("d", 12.0)];
        let trimmed = trim_outliers(items, |&(_, rate)| rate);
        assert_eq!(trimmed, vec![("a", 10.0), ("b", 11.0), ("d", 12.0)]);
    }
}
