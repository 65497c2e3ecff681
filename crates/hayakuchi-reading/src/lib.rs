//! Phonetic readings and unit counting for speech-rate analysis.
//!
//! Speech density is measured in one of three phonetic units, each counted
//! from a katakana reading of the spoken text:
//!
//! - **Mora**: one rhythmic beat. Yōon digraphs (`キャ`) are one mora; the
//!   sokuon (`ッ`), the moraic nasal (`ン`) and the long-vowel mark (`ー`)
//!   are each a full mora.
//! - **Kana**: one glyph position in the reading. The sokuon is excluded
//!   from this count: it marks gemination rather than occupying a spoken
//!   glyph position, which is why [`RateUnit::strips_sokuon`] is part of
//!   the unit, not of the caller.
//! - **Syllable**: a mora that can head a syllable. The sokuon, moraic
//!   nasal and long-vowel mark attach to the preceding syllable.
//!
//! [`KanaReader`] produces readings from kana-script text; conversion of
//! kanji to kana is a dictionary problem behind the [`PhoneticReader`] seam,
//! so a dictionary-backed reader can replace [`KanaReader`] without touching
//! the pipeline.
//!
//! # Examples
//!
//! ```
//! use hayakuchi_reading::{KanaReader, PhoneticReader, RateUnit};
//!
//! let reader = KanaReader::new();
//! let unit = RateUnit::Mora;
//! let reading = reader.to_kana("きゃっと", unit.strips_sokuon());
//! assert_eq!(reading, "キャット");
//! assert_eq!(unit.count(&reader, &reading), 3);
//! ```

pub use self::reader::{KanaReader, PhoneticReader};

mod reader;

/// The phonetic unit a rate is expressed in (units per minute).
///
/// A unit is a strategy selected once per run: it fixes both the counting
/// function and the sokuon policy applied when text is converted to a
/// reading, so call sites never re-branch on the unit.
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
pub enum RateUnit {
    /// Rhythmic beats per minute.
    #[default]
    Mora,
    /// Kana glyph positions per minute.
    Kana,
    /// Syllables per minute.
    Syllable,
}

impl RateUnit {
    /// Whether the sokuon is stripped from readings counted in this unit.
    ///
    /// Only the raw kana-glyph count excludes it; mora and syllable counts
    /// need the sokuon present because it participates in timing.
    #[must_use]
    pub fn strips_sokuon(self) -> bool {
        matches!(self, Self::Kana)
    }

    /// Counts this unit in a katakana reading.
    #[must_use]
    pub fn count(self, reader: &dyn PhoneticReader, reading: &str) -> usize {
        match self {
            Self::Mora => reader.count_mora(reading),
            Self::Kana => reader.count_kana(reading),
            Self::Syllable => reader.count_syllable(reading),
        }
    }

    /// Column label for tabular reports.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Mora => "MORA",
            Self::Kana => "KANA",
            Self::Syllable => "SYLLABLE",
        }
    }
}
