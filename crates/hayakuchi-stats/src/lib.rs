//! Distribution-robust statistics for speech-rate analysis.
//!
//! This crate provides the statistical tools the rate-aggregation pipeline is
//! built on:
//!
//! - **Percentiles**: linear-interpolation percentile estimation
//! - **Outlier trimming**: Tukey-fence rejection built on the quartiles
//! - **Weighted statistics**: duration-weighted mean and median that degrade
//!   to their unweighted forms when no weights are supplied
//! - **Histogram mode**: the midpoint of the heaviest equal-width bin
//!
//! All functions absorb degenerate inputs (empty data, zero total weight,
//! constant distributions) into sentinel zero values instead of failing, so
//! callers can thread "no data" through an aggregation without error paths.
//!
//! # Examples
//!
//! ## Estimating quartiles
//!
//! ```
//! use hayakuchi_stats::percentiles::compute_percentile;
//!
//! let values = [10.0, 11.0, 12.0, 100.0];
//! assert_eq!(compute_percentile(&values, 25.0), 10.75);
//! assert_eq!(compute_percentile(&values, 75.0), 34.0);
//! ```
//!
//! ## Trimming outliers
//!
//! ```
//! use hayakuchi_stats::outliers::trim_outliers;
//!
//! let trimmed = trim_outliers(vec![10.0, 12.0, 11.0, 100.0], |&v| v);
//! assert_eq!(trimmed, vec![10.0, 12.0, 11.0]);
//! ```
//!
//! ## Weighted central tendency
//!
//! ```
//! use hayakuchi_stats::weighted::{weighted_mean, weighted_median};
//!
//! let rates = [10.0, 11.0, 12.0];
//! assert_eq!(weighted_mean(&rates, None), 11.0);
//! assert_eq!(weighted_median(&rates, Some(&[1.0, 1.0, 4.0])), 12.0);
//! ```

pub mod histogram;
pub mod outliers;
pub mod percentiles;
pub mod weighted;
