/// Converts text to a katakana reading and counts phonetic units in it.
///
/// The counting methods all operate on a reading previously produced by
/// [`to_kana`](PhoneticReader::to_kana); they are split out so a unit
/// strategy can dispatch on them without re-deriving the reading.
pub trait PhoneticReader {
    /// Produces the katakana reading of `text`. With `strip_sokuon` the
    /// gemination marker `ッ` is omitted from the reading.
    fn to_kana(&self, text: &str, strip_sokuon: bool) -> String;

    /// Number of moras in a reading.
    fn count_mora(&self, reading: &str) -> usize;

    /// Number of kana glyph positions in a reading.
    fn count_kana(&self, reading: &str) -> usize;

    /// Number of syllables in a reading.
    fn count_syllable(&self, reading: &str) -> usize;
}

/// Kana-script phonetic reader.
///
/// Hiragana is transliterated to katakana (the two syllabaries are offset
/// by a fixed distance in the Basic Multilingual Plane); katakana and the
/// long-vowel mark pass through; every other character (kanji, latin,
/// punctuation) is dropped. Kanji-to-kana conversion needs a reading
/// dictionary and belongs in a separate [`PhoneticReader`] implementation.
#[derive(Default, Debug, Clone, Copy)]
pub struct KanaReader;

/// Distance from a hiragana code point to its katakana counterpart.
const HIRAGANA_TO_KATAKANA_OFFSET: u32 = 0x60;

/// Small kana forming yōon/gairaigo digraphs with the preceding glyph.
const SMALL_COMBINING_KANA: [char; 9] = ['ァ', 'ィ', 'ゥ', 'ェ', 'ォ', 'ャ', 'ュ', 'ョ', 'ヮ'];

/// Moras that never head a syllable of their own.
const NON_SYLLABIC_MORA: [char; 3] = ['ッ', 'ン', 'ー'];

impl KanaReader {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn is_small_combining(ch: char) -> bool {
        SMALL_COMBINING_KANA.contains(&ch)
    }

    fn is_non_syllabic(ch: char) -> bool {
        NON_SYLLABIC_MORA.contains(&ch)
    }
}

impl PhoneticReader for KanaReader {
    fn to_kana(&self, text: &str, strip_sokuon: bool) -> String {
        let mut reading = String::with_capacity(text.len());
        for ch in text.chars() {
            let kana = match ch {
                'ぁ'..='ゖ' => {
                    // The whole hiragana block maps into valid katakana.
                    char::from_u32(u32::from(ch) + HIRAGANA_TO_KATAKANA_OFFSET).unwrap_or(ch)
                }
                'ァ'..='ヺ' | 'ー' => ch,
                _ => continue,
            };
            if strip_sokuon && kana == 'ッ' {
                continue;
            }
            reading.push(kana);
        }
        reading
    }

    fn count_mora(&self, reading: &str) -> usize {
        reading
            .chars()
            .filter(|&ch| !Self::is_small_combining(ch))
            .count()
    }

    fn count_kana(&self, reading: &str) -> usize {
        reading.chars().count()
    }

    fn count_syllable(&self, reading: &str) -> usize {
        reading
            .chars()
            .filter(|&ch| !Self::is_small_combining(ch) && !Self::is_non_syllabic(ch))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hiragana_becomes_katakana() {
        let reader = KanaReader::new();
        assert_eq!(reader.to_kana("こんにちは", false), "コンニチハ");
    }

    #[test]
    fn katakana_and_long_vowel_pass_through() {
        let reader = KanaReader::new();
        assert_eq!(reader.to_kana("トーキョー", false), "トーキョー");
    }

    #[test]
    fn non_kana_is_dropped() {
        let reader = KanaReader::new();
        assert_eq!(reader.to_kana("はい、OK です。", false), "ハイデス");
        assert_eq!(reader.to_kana("2024年", false), "");
    }

    #[test]
    fn sokuon_is_stripped_on_request() {
        let reader = KanaReader::new();
        assert_eq!(reader.to_kana("きゃっと", false), "キャット");
        assert_eq!(reader.to_kana("きゃっと", true), "キャト");
    }

    #[test]
    fn mora_counts_treat_digraphs_as_one() {
        let reader = KanaReader::new();
        // キャ・ッ・ト
        assert_eq!(reader.count_mora("キャット"), 3);
        // ニ・ッ・ポ・ン
        assert_eq!(reader.count_mora("ニッポン"), 4);
        // ト・ー・キョ・ー
        assert_eq!(reader.count_mora("トーキョー"), 4);
        // ファ (gairaigo digraph)
        assert_eq!(reader.count_mora("ファン"), 2);
    }

    #[test]
    fn kana_counts_are_glyph_positions() {
        let reader = KanaReader::new();
        assert_eq!(reader.count_kana("キャット"), 4);
        assert_eq!(reader.count_kana("キャト"), 3);
    }

    #[test]
    fn syllable_counts_attach_checked_moras() {
        let reader = KanaReader::new();
        // キャ(ッ)・ト
        assert_eq!(reader.count_syllable("キャット"), 2);
        // ニ(ッ)・ポ(ン)
        assert_eq!(reader.count_syllable("ニッポン"), 2);
        // ト(ー)・キョ(ー)
        assert_eq!(reader.count_syllable("トーキョー"), 2);
    }

    #[test]
    fn empty_reading_counts_zero() {
        let reader = KanaReader::new();
        assert_eq!(reader.count_mora(""), 0);
        assert_eq!(reader.count_kana(""), 0);
        assert_eq!(reader.count_syllable(""), 0);
    }
}
