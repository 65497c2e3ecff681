/// A single timed-text event from a subtitle file.
///
/// Records carry millisecond timestamps and the raw cue text as it appeared
/// in the container (markup included). They are produced by the parsers,
/// consumed by analysis, and never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtitleRecord {
    /// Cue start, milliseconds from the episode origin.
    pub start_ms: u64,
    /// Cue end, milliseconds from the episode origin. A usable record has
    /// `end_ms > start_ms`; zero-length cues are kept here and rejected by
    /// analysis.
    pub end_ms: u64,
    /// Raw cue text, markup included.
    pub text: String,
}

impl SubtitleRecord {
    /// Creates a record from millisecond timestamps and raw text.
    #[must_use]
    pub fn new(start_ms: u64, end_ms: u64, text: impl Into<String>) -> Self {
        Self {
            start_ms,
            end_ms,
            text: text.into(),
        }
    }

    /// On-screen duration in milliseconds; zero when the timestamps are
    /// inverted.
    #[must_use]
    pub fn duration_ms(&self) -> u64 {
        self.end_ms.saturating_sub(self.start_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_is_end_minus_start() {
        let record = SubtitleRecord::new(500, 1500, "こんにちは");
        assert_eq!(record.duration_ms(), 1000);
    }

    #[test]
    fn inverted_timestamps_do_not_underflow() {
        let record = SubtitleRecord::new(1500, 500, "…");
        assert_eq!(record.duration_ms(), 0);
    }
}
