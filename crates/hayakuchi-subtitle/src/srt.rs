use std::{fs, path::Path};

use crate::{ParseError, SubtitleRecord, timecode};

/// Parses an SRT file into timed-text records.
///
/// Cues are blank-line separated blocks of the form
///
/// ```text
/// 12
/// 00:01:02,345 --> 00:01:04,000
/// 気をつけて！
/// ```
///
/// Multi-line cue text is joined with single spaces. Blocks without a valid
/// timing line are skipped; only failing to read the file is an error.
pub fn parse_srt(path: &Path) -> Result<Vec<SubtitleRecord>, ParseError> {
    let content = fs::read_to_string(path).map_err(ParseError::Io)?;
    Ok(parse_srt_str(&content))
}

/// Parses SRT cue blocks from already-loaded text.
#[must_use]
pub fn parse_srt_str(content: &str) -> Vec<SubtitleRecord> {
    let content = content.trim_start_matches('\u{feff}');

    let mut records = vec![];
    let mut block = vec![];
    for line in content.lines() {
        if line.trim().is_empty() {
            if let Some(record) = parse_cue_block(&block) {
                records.push(record);
            }
            block.clear();
        } else {
            block.push(line);
        }
    }
    if let Some(record) = parse_cue_block(&block) {
        records.push(record);
    }
    records
}

fn parse_cue_block(lines: &[&str]) -> Option<SubtitleRecord> {
    let timing_idx = lines.iter().position(|line| line.contains("-->"))?;
    let (start_ms, end_ms) = parse_timing_line(lines[timing_idx])?;

    let text = lines[timing_idx + 1..]
        .iter()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    Some(SubtitleRecord::new(start_ms, end_ms, text))
}

fn parse_timing_line(line: &str) -> Option<(u64, u64)> {
    let (start, rest) = line.split_once("-->")?;
    // Coordinate suffixes (`X1:... X2:...`) may follow the end timestamp.
    let end = rest.trim_start().split_whitespace().next()?;
    Some((
        timecode::parse_timestamp_ms(start)?,
        timecode::parse_timestamp_ms(end)?,
    ))
}
