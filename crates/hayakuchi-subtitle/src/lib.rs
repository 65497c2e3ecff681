//! Timed-text containers for speech-rate analysis.
//!
//! This crate turns subtitle files into ordered sequences of
//! [`SubtitleRecord`]s and strips non-spoken annotation from their text.
//! Two container formats are supported:
//!
//! - **SRT** ([`srt::parse_srt`]): numbered cues with
//!   `HH:MM:SS,mmm --> HH:MM:SS,mmm` timing lines
//! - **ASS** ([`ass::parse_ass`]): `Dialogue:` events from the `[Events]`
//!   section, field order taken from the `Format:` line
//!
//! [`parse_file`] dispatches on the file extension; unsupported extensions
//! yield an empty sequence rather than an error, so batch callers can feed
//! arbitrary directory listings through it.
//!
//! Timing is millisecond-integer based. Records preserve the raw cue text;
//! [`markup::strip_nonspoken`] is applied by downstream analysis, not by the
//! parsers, so the raw text stays available.

use std::path::Path;

pub use self::record::SubtitleRecord;

pub mod ass;
pub mod markup;
pub mod record;
pub mod srt;
mod timecode;

/// Error raised when a subtitle file cannot be read or decoded.
///
/// Malformed cues inside a readable file are skipped, not raised; the only
/// failure class is the file itself.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum ParseError {
    /// The file could not be read or was not valid UTF-8.
    #[display("failed to read subtitle file: {_0}")]
    Io(std::io::Error),
}

/// Parses any supported subtitle file into timed-text records.
///
/// Dispatches on the (case-insensitive) file extension: `.srt` and `.ass`
/// are parsed, anything else yields an empty sequence. Returns an error only
/// when a supported file cannot be read.
pub fn parse_file(path: &Path) -> Result<Vec<SubtitleRecord>, ParseError> {
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase());
    match extension.as_deref() {
        Some("srt") => srt::parse_srt(path),
        Some("ass") => ass::parse_ass(path),
        _ => Ok(vec![]),
    }
}
