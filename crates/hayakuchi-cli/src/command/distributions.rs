use std::path::{Path, PathBuf};

use anyhow::Context as _;
use chrono::{DateTime, Utc};
use hayakuchi_analysis::{
    aggregate::RateSummary,
    corpus,
    distribution::{Granularity, ShowDistribution},
    extract::LineMeasurement,
    show::trim_line_observations,
};
use hayakuchi_reading::{KanaReader, PhoneticReader, RateUnit};

use crate::util;

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct DistributionsArg {
    /// Root directory to scan for subtitle folders
    #[arg(long, default_value = ".")]
    root: PathBuf,
    /// Rate unit to compute
    #[arg(long, default_value = "mora")]
    unit: RateUnit,
    /// Distribution granularity: per episode or per subtitle line
    #[arg(long, default_value = "line")]
    granularity: Granularity,
    /// Weight line summaries by subtitle duration (line granularity only)
    #[arg(long)]
    weight_by_duration: bool,
    /// Trim rate outliers using IQR before computing distributions
    #[arg(long)]
    trim_outliers: bool,
    /// Include SubtitleBackup folders
    #[arg(long)]
    include_subtitle_backup: bool,
    /// Output file path
    #[arg(long)]
    out: Option<PathBuf>,
}

/// Everything an external plotting collaborator needs to draw per-show
/// histograms: the samples, their weights and the run configuration.
#[derive(Debug, serde::Serialize)]
struct DistributionsPayload {
    generated_at: DateTime<Utc>,
    unit: RateUnit,
    granularity: Granularity,
    weight_by_duration: bool,
    trim_outliers: bool,
    shows: Vec<ShowDistribution>,
}

pub(crate) fn run(arg: &DistributionsArg) -> anyhow::Result<()> {
    let DistributionsArg {
        root,
        unit,
        granularity,
        weight_by_duration,
        trim_outliers,
        include_subtitle_backup,
        out,
    } = arg;

    let show_dirs = corpus::collect_show_dirs(root, !include_subtitle_backup);
    if show_dirs.is_empty() {
        println!("No subtitle folders found.");
        return Ok(());
    }
    eprintln!("Found {} subtitle folders", show_dirs.len());

    let reader = KanaReader::new();
    let mut shows = vec![];
    for dir in &show_dirs {
        let distribution = match granularity {
            Granularity::Episode => episode_distribution(dir, *unit, &reader, *trim_outliers)?,
            Granularity::Line => {
                line_distribution(dir, *unit, &reader, *trim_outliers, *weight_by_duration)?
            }
        };
        if let Some(distribution) = distribution {
            shows.push(distribution);
        }
    }

    if shows.is_empty() {
        println!("No valid subtitle entries found.");
        return Ok(());
    }

    let payload = DistributionsPayload {
        generated_at: Utc::now(),
        unit: *unit,
        granularity: *granularity,
        weight_by_duration: *weight_by_duration,
        trim_outliers: *trim_outliers,
        shows,
    };
    util::write_json(&payload, out.as_deref())?;
    eprintln!(
        "Wrote {} show distributions to {}",
        payload.shows.len(),
        out.as_deref()
            .map_or_else(|| "stdout".to_string(), |path| path.display().to_string()),
    );
    Ok(())
}

/// One scalar rate per episode; episodes with no usable speech contribute
/// nothing.
fn episode_distribution(
    dir: &Path,
    unit: RateUnit,
    reader: &dyn PhoneticReader,
    trim_outliers: bool,
) -> anyhow::Result<Option<ShowDistribution>> {
    let mut rates = vec![];
    for file in episode_files(dir)? {
        let lines = util::measure_file(&file, unit, reader);
        let summary = RateSummary::aggregate(lines, trim_outliers);
        if summary.rate > 0.0 {
            rates.push(summary.rate);
        }
    }
    Ok(ShowDistribution::from_episode_rates(
        util::show_name(dir),
        rates,
    ))
}

/// One `(rate, weight)` observation per line, with the show-level outlier
/// pass applied over the whole show's population when requested.
fn line_distribution(
    dir: &Path,
    unit: RateUnit,
    reader: &dyn PhoneticReader,
    trim_outliers: bool,
    weight_by_duration: bool,
) -> anyhow::Result<Option<ShowDistribution>> {
    let mut observations = vec![];
    for file in episode_files(dir)? {
        observations.extend(
            util::measure_file(&file, unit, reader)
                .iter()
                .map(LineMeasurement::observation),
        );
    }
    if trim_outliers {
        observations = trim_line_observations(observations);
    }
    Ok(ShowDistribution::from_line_observations(
        util::show_name(dir),
        observations,
        weight_by_duration,
    ))
}

fn episode_files(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    corpus::list_episode_files(dir)
        .with_context(|| format!("Failed to list episodes in {}", dir.display()))
}
