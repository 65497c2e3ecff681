use hayakuchi_reading::{PhoneticReader, RateUnit};
use hayakuchi_subtitle::{SubtitleRecord, markup};

use crate::interval::Interval;

const MS_PER_SECOND: f64 = 1000.0;
const SECONDS_PER_MINUTE: f64 = 60.0;

/// One subtitle line that survived filtering, reduced to the numbers the
/// aggregation pipeline works with.
///
/// Lives only within one aggregation call; nothing here is persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineMeasurement {
    /// The on-screen time span of the line.
    pub span: Interval,
    /// Phonetic units counted in the line's reading.
    pub units: u64,
    /// Articulation rate in units per minute of on-screen time.
    pub rate: f64,
    /// On-screen duration in seconds; the line's weight in duration-weighted
    /// statistics.
    pub duration_secs: f64,
}

impl LineMeasurement {
    /// The `(rate, weight)` observation this line contributes to a
    /// distribution.
    #[must_use]
    pub fn observation(&self) -> (f64, f64) {
        (self.rate, self.duration_secs)
    }
}

/// Converts timed-text records into per-line measurements.
///
/// A record is dropped when any of these filters reject it, in order:
/// empty/whitespace text, text that is empty once non-spoken annotation is
/// stripped, a non-positive duration, and a non-positive unit count. What
/// remains carries a strictly positive rate and weight, so downstream
/// statistics never see an infinity or a division by zero.
///
/// The sokuon policy follows the unit: readings are produced with
/// `strip_sokuon` only when the unit's glyph count excludes it.
#[must_use]
pub fn measure_lines(
    records: &[SubtitleRecord],
    unit: RateUnit,
    reader: &dyn PhoneticReader,
) -> Vec<LineMeasurement> {
    records
        .iter()
        .filter_map(|record| measure_line(record, unit, reader))
        .collect()
}

fn measure_line(
    record: &SubtitleRecord,
    unit: RateUnit,
    reader: &dyn PhoneticReader,
) -> Option<LineMeasurement> {
    if record.text.trim().is_empty() {
        return None;
    }
    let spoken = markup::strip_nonspoken(&record.text);
    if spoken.is_empty() {
        return None;
    }
    let duration_ms = record.duration_ms();
    if duration_ms == 0 {
        return None;
    }

    let reading = reader.to_kana(&spoken, unit.strips_sokuon());
    let units = unit.count(reader, &reading);
    if units == 0 {
        return None;
    }

    #[expect(clippy::cast_precision_loss)]
    let duration_secs = duration_ms as f64 / MS_PER_SECOND;
    #[expect(clippy::cast_precision_loss)]
    let rate = units as f64 / (duration_secs / SECONDS_PER_MINUTE);
    Some(LineMeasurement {
        span: Interval::new(record.start_ms, record.end_ms),
        units: units as u64,
        rate,
        duration_secs,
    })
}

#[cfg(test)]
mod tests {
    use hayakuchi_reading::KanaReader;

    use super::*;

    fn measure(records: &[SubtitleRecord], unit: RateUnit) -> Vec<LineMeasurement> {
        measure_lines(records, unit, &KanaReader::new())
    }

    #[test]
    fn counts_units_per_minute() {
        // 5 moras (コ・ン・ニ・チ・ハ) over one second.
        let records = [SubtitleRecord::new(0, 1_000, "こんにちは")];
        let lines = measure(&records, RateUnit::Mora);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].units, 5);
        assert_eq!(lines[0].rate, 300.0);
        assert_eq!(lines[0].duration_secs, 1.0);
    }

    #[test]
    fn rejects_blank_text() {
        let records = [SubtitleRecord::new(0, 1_000, "   ")];
        assert!(measure(&records, RateUnit::Mora).is_empty());
    }

    #[test]
    fn rejects_annotation_only_text() {
        let records = [SubtitleRecord::new(0, 1_000, "（ドアの音）")];
        assert!(measure(&records, RateUnit::Mora).is_empty());
    }

    #[test]
    fn rejects_zero_duration() {
        let records = [SubtitleRecord::new(1_000, 1_000, "こんにちは")];
        assert!(measure(&records, RateUnit::Mora).is_empty());
    }

    #[test]
    fn rejects_zero_unit_count() {
        // Latin text has no kana reading.
        let records = [SubtitleRecord::new(0, 1_000, "OK!")];
        assert!(measure(&records, RateUnit::Mora).is_empty());
    }

    #[test]
    fn sokuon_policy_follows_the_unit() {
        let records = [SubtitleRecord::new(0, 1_000, "きゃっと")];
        let mora = measure(&records, RateUnit::Mora);
        let kana = measure(&records, RateUnit::Kana);
        let syllable = measure(&records, RateUnit::Syllable);
        assert_eq!(mora[0].units, 3);
        assert_eq!(kana[0].units, 3);
        assert_eq!(syllable[0].units, 2);
    }

    #[test]
    fn surviving_lines_keep_their_spans() {
        let records = [
            SubtitleRecord::new(0, 1_000, "はい"),
            SubtitleRecord::new(500, 1_500, "いいえ"),
        ];
        let lines = measure(&records, RateUnit::Mora);
        assert_eq!(lines[0].span, Interval::new(0, 1_000));
        assert_eq!(lines[1].span, Interval::new(500, 1_500));
    }
}
