use hayakuchi_stats::{outliers, weighted};

use crate::{aggregate::RateSummary, extract::LineMeasurement};

/// Minimum line-rate population before show-level outlier trimming engages.
///
/// Quartiles of fewer than four observations say little; tiny shows keep all
/// their lines.
const MIN_TRIM_POPULATION: usize = 4;

/// One reportable show: per-episode aggregates rolled up, plus a
/// duration-weighted median of the line rates as the representative line
/// statistic.
#[derive(Debug, Clone, PartialEq)]
pub struct ShowRow {
    /// Show name (its directory name).
    pub name: String,
    /// Units summed over all episode aggregates.
    pub total_units: u64,
    /// Non-overlapping minutes summed over all episode aggregates.
    pub total_minutes: f64,
    /// `total_units / total_minutes` across the show.
    pub rate: f64,
    /// Duration-weighted median of the show's line rates.
    pub line_median: f64,
}

/// Rolls per-episode aggregates and line observations up into a [`ShowRow`].
///
/// Episodes carry independent clocks that all start near zero, so their
/// intervals are never pooled into one merge; each episode's overlaps are
/// resolved by its own aggregation and the totals accumulate here.
#[derive(Debug, Clone)]
pub struct ShowAccumulator {
    name: String,
    total_units: u64,
    total_minutes: f64,
    observations: Vec<(f64, f64)>,
}

impl ShowAccumulator {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            total_units: 0,
            total_minutes: 0.0,
            observations: vec![],
        }
    }

    /// Folds one episode's line measurements into the show.
    ///
    /// The episode aggregate is computed over the episode's own candidate
    /// set (its own outlier fence when `trim_outliers` is on). Line
    /// observations are collected untrimmed; the show-level median applies
    /// its own fence over the whole show's population in [`finish`].
    ///
    /// [`finish`]: ShowAccumulator::finish
    pub fn add_episode(&mut self, lines: Vec<LineMeasurement>, trim_outliers: bool) {
        self.observations
            .extend(lines.iter().map(LineMeasurement::observation));
        let summary = RateSummary::aggregate(lines, trim_outliers);
        self.total_units += summary.total_units;
        self.total_minutes += summary.total_minutes;
    }

    /// Produces the show row, or `None` when no episode contributed speech
    /// time; an empty show yields no row rather than a zero-rate row.
    #[must_use]
    pub fn finish(self, trim_outliers: bool) -> Option<ShowRow> {
        if self.total_minutes <= 0.0 {
            return None;
        }
        #[expect(clippy::cast_precision_loss)]
        let rate = self.total_units as f64 / self.total_minutes;

        let observations = if trim_outliers {
            trim_line_observations(self.observations)
        } else {
            self.observations
        };
        let (rates, weights): (Vec<_>, Vec<_>) = observations.into_iter().unzip();
        let line_median = weighted::weighted_median(&rates, Some(&weights));

        Some(ShowRow {
            name: self.name,
            total_units: self.total_units,
            total_minutes: self.total_minutes,
            rate,
            line_median,
        })
    }
}

/// Show-level outlier pass over `(rate, weight)` line observations.
///
/// Computes a fresh Tukey fence over this population, independent of any
/// per-episode fence, and keeps everything when the population is smaller
/// than [`MIN_TRIM_POPULATION`] or degenerate.
#[must_use]
pub fn trim_line_observations(observations: Vec<(f64, f64)>) -> Vec<(f64, f64)> {
    if observations.len() < MIN_TRIM_POPULATION {
        return observations;
    }
    outliers::trim_outliers(observations, |&(rate, _)| rate)
}
