/// A millisecond time span, `start_ms <= end_ms`.
///
/// Input sets may overlap freely; [`merge_intervals`] reduces them to the
/// minimal sorted non-overlapping set covering the same total time, which is
/// what keeps overlapping subtitle lines from double-counting speaking time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Interval {
    /// Span start, inclusive.
    pub start_ms: u64,
    /// Span end, exclusive.
    pub end_ms: u64,
}

impl Interval {
    #[must_use]
    pub fn new(start_ms: u64, end_ms: u64) -> Self {
        debug_assert!(start_ms <= end_ms, "interval must not be inverted");
        Self { start_ms, end_ms }
    }

    /// Covered time in milliseconds.
    #[must_use]
    pub fn duration_ms(self) -> u64 {
        self.end_ms - self.start_ms
    }
}

/// Collapses spans into the minimal sorted set of non-overlapping spans
/// covering the same total time.
///
/// Spans touching exactly at a boundary are merged: adjacent subtitle lines
/// are contiguous speech, and a zero-length gap between them must not
/// depress total speaking time. Merging is idempotent — feeding the output
/// back in returns it unchanged.
///
/// # Examples
///
/// ```
/// use hayakuchi_analysis::interval::{Interval, merge_intervals};
///
/// let merged = merge_intervals(&[
///     Interval::new(500, 1500),
///     Interval::new(0, 1000),
/// ]);
/// assert_eq!(merged, vec![Interval::new(0, 1500)]);
/// ```
#[must_use]
pub fn merge_intervals(intervals: &[Interval]) -> Vec<Interval> {
    let mut sorted = intervals.to_vec();
    sorted.sort();

    let mut merged: Vec<Interval> = Vec::with_capacity(sorted.len());
    for interval in sorted {
        match merged.last_mut() {
            Some(open) if interval.start_ms <= open.end_ms => {
                open.end_ms = u64::max(open.end_ms, interval.end_ms);
            }
            _ => merged.push(interval),
        }
    }
    merged
}

/// Sum of covered milliseconds across a set of spans.
///
/// Only meaningful as a total speaking time when the spans are already
/// merged.
#[must_use]
pub fn total_duration_ms(intervals: &[Interval]) -> u64 {
    intervals.iter().map(|interval| interval.duration_ms()).sum()
}
