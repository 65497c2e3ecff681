/// Parses a subtitle timecode into milliseconds.
///
/// Accepts `HH:MM:SS,mmm` (SRT), `H:MM:SS.cc` (ASS) and the hour-less
/// `MM:SS.fff` form. The fractional separator may be a comma or a period and
/// the fraction may carry one to three digits (scaled to milliseconds);
/// longer fractions are truncated to millisecond precision.
pub(crate) fn parse_timestamp_ms(text: &str) -> Option<u64> {
    let mut fields = text.trim().split(':').rev();
    let seconds_field = fields.next()?;
    let minutes = fields.next()?.trim().parse::<u64>().ok()?;
    let hours = match fields.next() {
        Some(field) => field.trim().parse::<u64>().ok()?,
        None => 0,
    };
    if fields.next().is_some() {
        return None;
    }

    let (whole_seconds, millis) = parse_seconds_field(seconds_field)?;
    Some(((hours * 60 + minutes) * 60 + whole_seconds) * 1000 + millis)
}

fn parse_seconds_field(field: &str) -> Option<(u64, u64)> {
    let field = field.trim();
    let Some((seconds, fraction)) = field.split_once([',', '.']) else {
        return Some((field.parse().ok()?, 0));
    };
    let seconds = seconds.parse::<u64>().ok()?;
    let digits = fraction.parse::<u64>().ok()?;
    let millis = match fraction.len() {
        0 => 0,
        1 => digits * 100,
        2 => digits * 10,
        3 => digits,
        len => digits / 10_u64.pow(u32::try_from(len).ok()? - 3),
    };
    Some((seconds, millis))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn srt_timecode_with_comma_millis() {
        assert_eq!(parse_timestamp_ms("00:01:02,345"), Some(62_345));
    }

    #[test]
    fn ass_timecode_with_centiseconds() {
        assert_eq!(parse_timestamp_ms("1:02:03.45"), Some(3_723_450));
    }

    #[test]
    fn hourless_timecode() {
        assert_eq!(parse_timestamp_ms("02:03.5"), Some(123_500));
    }

    #[test]
    fn fraction_longer_than_millis_is_truncated() {
        assert_eq!(parse_timestamp_ms("00:00:01,23456"), Some(1_234));
    }

    #[test]
    fn garbage_is_rejected() {
        assert_eq!(parse_timestamp_ms("not a time"), None);
        assert_eq!(parse_timestamp_ms("1:2:3:4"), None);
        assert_eq!(parse_timestamp_ms(""), None);
    }
}
