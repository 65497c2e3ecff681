use hayakuchi_stats::outliers;

use crate::{
    extract::LineMeasurement,
    interval::{merge_intervals, total_duration_ms},
};

const MS_PER_MINUTE: f64 = 60_000.0;

/// Aggregate articulation rate over one candidate set of lines: an episode,
/// or any other grouping the caller assembles.
///
/// `rate` is total units over total *non-overlapping* minutes; overlapping
/// line spans are merged before the duration is summed, so stacked subtitles
/// never double-count speaking time. An empty candidate set is "no data":
/// all fields zero, by convention rather than error.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct RateSummary {
    /// Sum of phonetic units across surviving lines.
    pub total_units: u64,
    /// Merged on-screen time in minutes.
    pub total_minutes: f64,
    /// `total_units / total_minutes`, or 0 when there is no covered time.
    pub rate: f64,
}

impl RateSummary {
    /// Aggregates a candidate set of line measurements.
    ///
    /// With `trim_outliers`, a Tukey fence is computed over this set's own
    /// rates and lines outside it are dropped before totals are taken; the
    /// fence never leaks between candidate sets. Overlap merging always runs
    /// over the full surviving set passed in.
    #[must_use]
    pub fn aggregate(lines: Vec<LineMeasurement>, trim_outliers: bool) -> Self {
        let lines = if trim_outliers {
            outliers::trim_outliers(lines, |line| line.rate)
        } else {
            lines
        };
        if lines.is_empty() {
            return Self::default();
        }

        let total_units = lines.iter().map(|line| line.units).sum::<u64>();
        let spans = lines.iter().map(|line| line.span).collect::<Vec<_>>();
        let merged_ms = total_duration_ms(&merge_intervals(&spans));

        #[expect(clippy::cast_precision_loss)]
        let total_minutes = merged_ms as f64 / MS_PER_MINUTE;
        let rate = if total_minutes > 0.0 {
            #[expect(clippy::cast_precision_loss)]
            let units = total_units as f64;
            units / total_minutes
        } else {
            0.0
        };
        Self {
            total_units,
            total_minutes,
            rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::interval::Interval;

    use super::*;

    fn line(start_ms: u64, end_ms: u64, units: u64) -> LineMeasurement {
        #[expect(clippy::cast_precision_loss)]
        let duration_secs = (end_ms - start_ms) as f64 / 1000.0;
        #[expect(clippy::cast_precision_loss)]
        let rate = units as f64 / (duration_secs / 60.0);
        LineMeasurement {
            span: Interval::new(start_ms, end_ms),
            units,
            rate,
            duration_secs,
        }
    }

    #[test]
    fn empty_set_is_no_data() {
        let summary = RateSummary::aggregate(vec![], true);
        assert_eq!(summary, RateSummary::default());
    }

    #[test]
    fn overlapping_lines_do_not_double_count_time() {
        // Two 1-second lines overlapping by half: 1500 ms = 0.025 min of
        // speech carrying 10 units, so 400/min, not the 300/min a naive
        // duration sum would give.
        let summary =
            RateSummary::aggregate(vec![line(0, 1_000, 5), line(500, 1_500, 5)], false);
        assert_eq!(summary.total_units, 10);
        assert_eq!(summary.total_minutes, 0.025);
        assert_eq!(summary.rate, 400.0);
    }

    #[test]
    fn disjoint_lines_sum_their_durations() {
        let summary =
            RateSummary::aggregate(vec![line(0, 1_000, 5), line(2_000, 3_000, 5)], false);
        assert_eq!(summary.total_minutes, 2.0 / 60.0);
        assert_eq!(summary.rate, 300.0);
    }

    #[test]
    fn trimming_drops_rate_outliers_before_totals() {
        let lines = vec![
            line(0, 60_000, 10),
            line(60_000, 120_000, 11),
            line(120_000, 180_000, 12),
            // 100 units/min, far outside the Tukey fence of the others.
            line(180_000, 240_000, 100),
        ];
        let trimmed = RateSummary::aggregate(lines.clone(), true);
        assert_eq!(trimmed.total_units, 33);
        assert_eq!(trimmed.total_minutes, 3.0);
        assert_eq!(trimmed.rate, 11.0);

        let untrimmed = RateSummary::aggregate(lines, false);
        assert_eq!(untrimmed.total_units, 133);
    }

    #[test]
    fn all_lines_trimmed_is_impossible_for_degenerate_sets() {
        // A constant-rate population has no fence; everything is kept.
        let lines = vec![line(0, 1_000, 5), line(1_000, 2_000, 5)];
        let summary = RateSummary::aggregate(lines, true);
        assert_eq!(summary.total_units, 10);
    }
}
