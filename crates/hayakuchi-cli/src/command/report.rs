use std::path::PathBuf;

use anyhow::Context as _;
use hayakuchi_analysis::{
    corpus,
    show::{ShowAccumulator, ShowRow},
};
use hayakuchi_reading::{KanaReader, RateUnit};

use crate::util;

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct ReportArg {
    /// Root directory to scan for subtitle folders
    #[arg(long, default_value = ".")]
    root: PathBuf,
    /// Rate unit to compute
    #[arg(long, default_value = "mora")]
    unit: RateUnit,
    /// Keep per-line rate outliers (by default they are trimmed using IQR)
    #[arg(long)]
    include_outliers: bool,
    /// Include SubtitleBackup folders
    #[arg(long)]
    include_subtitle_backup: bool,
}

pub(crate) fn run(arg: &ReportArg) -> anyhow::Result<()> {
    let ReportArg {
        root,
        unit,
        include_outliers,
        include_subtitle_backup,
    } = arg;

    let show_dirs = corpus::collect_show_dirs(root, !include_subtitle_backup);
    if show_dirs.is_empty() {
        println!("No subtitle folders found.");
        return Ok(());
    }
    eprintln!("Found {} subtitle folders", show_dirs.len());

    let reader = KanaReader::new();
    let trim_outliers = !include_outliers;

    let mut rows = vec![];
    for dir in &show_dirs {
        let mut accumulator = ShowAccumulator::new(util::show_name(dir));
        for file in corpus::list_episode_files(dir)
            .with_context(|| format!("Failed to list episodes in {}", dir.display()))?
        {
            let lines = util::measure_file(&file, *unit, &reader);
            accumulator.add_episode(lines, trim_outliers);
        }
        if let Some(row) = accumulator.finish(trim_outliers) {
            rows.push(row);
        }
    }

    if rows.is_empty() {
        println!("No valid subtitle entries found.");
        return Ok(());
    }
    rows.sort_by(|a, b| f64::total_cmp(&a.rate, &b.rate));
    print_table(&rows, *unit);
    Ok(())
}

fn print_table(rows: &[ShowRow], unit: RateUnit) {
    println!("| DIR | {} | MIN | RATE | LINE_MEDIAN_TW |", unit.label());
    println!("| --- | --- | --- | --- | --- |");
    for row in rows {
        println!(
            "| {} | {} | {:.2} | {:.2} | {:.2} |",
            row.name, row.total_units, row.total_minutes, row.rate, row.line_median
        );
    }
}
