//! The rate-aggregation engine: from timed-text records to show-level
//! statistics.
//!
//! # Overview
//!
//! The pipeline runs strictly upward, one pure stage at a time:
//!
//! 1. **Discover** ([`corpus`]): find show directories and their episode
//!    files under a corpus root.
//! 2. **Extract** ([`extract`]): reduce each episode's parsed records to
//!    per-line `(span, units, rate, weight)` measurements, filtering out
//!    lines that carry no speech.
//! 3. **Aggregate** ([`aggregate`]): collapse a candidate set of lines into
//!    total units over non-overlapping minutes ([`interval`]), optionally
//!    after Tukey-fence trimming of rate outliers.
//! 4. **Roll up** ([`show`]): accumulate episode aggregates into a show row
//!    with a duration-weighted line-median.
//! 5. **Export** ([`distribution`]): package episode- or line-granularity
//!    samples with summary statistics for an external plotting consumer.
//!
//! Every stage is deterministic and in-memory; degenerate inputs flow
//! through as "no data" zeros rather than errors, so one empty or unreadable
//! episode never aborts a corpus run.
//!
//! # Examples
//!
//! ```
//! use hayakuchi_analysis::{aggregate::RateSummary, extract};
//! use hayakuchi_reading::{KanaReader, RateUnit};
//! use hayakuchi_subtitle::SubtitleRecord;
//!
//! let records = vec![
//!     SubtitleRecord::new(0, 1_000, "こんにちは"),
//!     SubtitleRecord::new(500, 1_500, "こんばんは"),
//! ];
//! let lines = extract::measure_lines(&records, RateUnit::Mora, &KanaReader::new());
//! let summary = RateSummary::aggregate(lines, false);
//!
//! // Overlapping spans merge: 1.5 s of speech, not 2 s.
//! assert_eq!(summary.total_minutes, 0.025);
//! assert_eq!(summary.total_units, 10);
//! assert_eq!(summary.rate, 400.0);
//! ```

pub mod aggregate;
pub mod corpus;
pub mod distribution;
pub mod extract;
pub mod interval;
pub mod show;
