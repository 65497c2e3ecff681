use std::{fs, path::Path};

use crate::{ParseError, SubtitleRecord, timecode};

/// Index of the `Start`, `End` and `Text` fields within a `Dialogue:` line.
#[derive(Debug, Clone, Copy)]
struct EventFormat {
    start: usize,
    end: usize,
    text: usize,
    field_count: usize,
}

impl EventFormat {
    /// Field order of ASS v4+ `[Events]` when no `Format:` line is present.
    const DEFAULT: Self = Self {
        start: 1,
        end: 2,
        text: 9,
        field_count: 10,
    };

    fn from_format_line(fields: &str) -> Option<Self> {
        let names = fields.split(',').map(str::trim).collect::<Vec<_>>();
        Some(Self {
            start: names.iter().position(|name| name.eq_ignore_ascii_case("Start"))?,
            end: names.iter().position(|name| name.eq_ignore_ascii_case("End"))?,
            text: names.iter().position(|name| name.eq_ignore_ascii_case("Text"))?,
            field_count: names.len(),
        })
    }
}

/// Parses an ASS/SSA file into timed-text records.
///
/// Only `Dialogue:` lines in the `[Events]` section are read. Field order
/// comes from the section's `Format:` line (falling back to the standard
/// v4+ order), and the `Text` field keeps its override tags; downstream
/// normalization strips them. `Comment:` events and malformed lines are
/// skipped.
pub fn parse_ass(path: &Path) -> Result<Vec<SubtitleRecord>, ParseError> {
    let content = fs::read_to_string(path).map_err(ParseError::Io)?;
    Ok(parse_ass_str(&content))
}

/// Parses ASS/SSA events from already-loaded text.
#[must_use]
pub fn parse_ass_str(content: &str) -> Vec<SubtitleRecord> {
    let content = content.trim_start_matches('\u{feff}');

    let mut records = vec![];
    let mut in_events = false;
    let mut format = EventFormat::DEFAULT;
    for line in content.lines() {
        let line = line.trim();
        if let Some(section) = line.strip_prefix('[') {
            in_events = section
                .strip_suffix(']')
                .is_some_and(|name| name.eq_ignore_ascii_case("Events"));
            continue;
        }
        if !in_events {
            continue;
        }
        if let Some(fields) = line.strip_prefix("Format:") {
            if let Some(parsed) = EventFormat::from_format_line(fields) {
                format = parsed;
            }
        } else if let Some(fields) = line.strip_prefix("Dialogue:") {
            if let Some(record) = parse_dialogue_line(fields, format) {
                records.push(record);
            }
        }
    }
    records
}

fn parse_dialogue_line(fields: &str, format: EventFormat) -> Option<SubtitleRecord> {
    // The text field is last and may itself contain commas, so only
    // `field_count - 1` splits are taken.
    let fields = fields
        .trim_start()
        .splitn(format.field_count, ',')
        .collect::<Vec<_>>();
    if fields.len() != format.field_count {
        return None;
    }

    let start_ms = timecode::parse_timestamp_ms(fields[format.start])?;
    let end_ms = timecode::parse_timestamp_ms(fields[format.end])?;
    Some(SubtitleRecord::new(
        start_ms,
        end_ms,
        fields[format.text].trim(),
    ))
}
