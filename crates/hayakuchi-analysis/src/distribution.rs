use hayakuchi_stats::{histogram, weighted};

/// Bin count for the histogram-mode estimate of a show distribution.
const HISTOGRAM_BINS: usize = 20;

/// Aggregation level a distribution is sampled at.
#[derive(
    Default,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::FromStr,
    serde::Serialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// One scalar rate per episode.
    Episode,
    /// One `(rate, weight)` observation per subtitle line.
    #[default]
    Line,
}

/// One line observation in an exported distribution.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct RateSample {
    /// Articulation rate, units per minute.
    pub rate: f64,
    /// On-screen duration in seconds.
    pub weight: f64,
}

/// The samples backing one show's distribution.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DistributionSamples {
    /// Episode-granularity scalar rates.
    Episode(Vec<f64>),
    /// Line-granularity observations, weights carried for the consumer.
    Line(Vec<RateSample>),
}

/// Central-tendency summary of one show's distribution.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct DistributionSummary {
    /// (Weighted) mean rate.
    pub mean: f64,
    /// (Weighted) median rate.
    pub median: f64,
    /// Histogram-mode rate estimate.
    pub mode: f64,
    /// Number of samples summarized.
    pub samples: usize,
}

/// One show's distribution payload, handed to an external plotting
/// collaborator.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ShowDistribution {
    /// Show name (its directory name).
    pub show: String,
    /// The backing samples.
    pub samples: DistributionSamples,
    /// Summary statistics over the samples.
    pub summary: DistributionSummary,
}

impl ShowDistribution {
    /// Builds an episode-granularity distribution; `None` when no episode
    /// produced a rate.
    #[must_use]
    pub fn from_episode_rates(show: impl Into<String>, rates: Vec<f64>) -> Option<Self> {
        if rates.is_empty() {
            return None;
        }
        let summary = summarize(&rates, None);
        Some(Self {
            show: show.into(),
            samples: DistributionSamples::Episode(rates),
            summary,
        })
    }

    /// Builds a line-granularity distribution; `None` when no line survived.
    ///
    /// Weights always travel in the payload; they enter the summary only
    /// with `weight_by_duration`, mirroring the duration-weighted histogram
    /// option of the consumer.
    #[must_use]
    pub fn from_line_observations(
        show: impl Into<String>,
        observations: Vec<(f64, f64)>,
        weight_by_duration: bool,
    ) -> Option<Self> {
        if observations.is_empty() {
            return None;
        }
        let rates = observations.iter().map(|&(rate, _)| rate).collect::<Vec<_>>();
        let weights = observations
            .iter()
            .map(|&(_, weight)| weight)
            .collect::<Vec<_>>();
        let summary = summarize(&rates, weight_by_duration.then_some(weights.as_slice()));

        let samples = observations
            .into_iter()
            .map(|(rate, weight)| RateSample { rate, weight })
            .collect();
        Some(Self {
            show: show.into(),
            samples: DistributionSamples::Line(samples),
            summary,
        })
    }
}

fn summarize(rates: &[f64], weights: Option<&[f64]>) -> DistributionSummary {
    DistributionSummary {
        mean: weighted::weighted_mean(rates, weights),
        median: weighted::weighted_median(rates, weights),
        mode: histogram::histogram_mode(rates, weights, HISTOGRAM_BINS),
        samples: rates.len(),
    }
}
