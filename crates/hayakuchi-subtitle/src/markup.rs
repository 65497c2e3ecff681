/// Strips non-spoken annotation from cue text, preserving spoken content.
///
/// Removed, in one pass:
///
/// - ASS override blocks: `{\i1}`, `{\pos(640,360)}`, …
/// - ASS escapes `\N`, `\n` (line breaks) and `\h` (hard space), each
///   replaced by a plain space
/// - HTML-style tags: `<i>`, `<font color="#fff">`, …
/// - Bracketed annotations (speaker labels, stage directions and sound
///   effects) in half- and full-width parentheses and square brackets
/// - Song glyphs `♪` and `♫`, and the wave dash `〜` marking melisma
///
/// Corner brackets (`「…」`) are quotation marks around spoken dialogue and
/// are kept. Whitespace (including the ideographic space) is collapsed and
/// the result trimmed, so a cue that was nothing but annotation comes back
/// as an empty string.
///
/// # Examples
///
/// ```
/// use hayakuchi_subtitle::markup::strip_nonspoken;
///
/// assert_eq!(strip_nonspoken("{\\i1}おはよう{\\i0}\\Nございます"), "おはよう ございます");
/// assert_eq!(strip_nonspoken("（ドアの音）"), "");
/// assert_eq!(strip_nonspoken("♪ラララ"), "ラララ");
/// ```
#[must_use]
pub fn strip_nonspoken(text: &str) -> String {
    let mut spoken = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    let mut brace_depth = 0_usize;
    let mut angle_depth = 0_usize;
    let mut paren_depth = 0_usize;
    let mut bracket_depth = 0_usize;

    while let Some(ch) = chars.next() {
        match ch {
            '{' => brace_depth += 1,
            '}' => brace_depth = brace_depth.saturating_sub(1),
            '<' => angle_depth += 1,
            '>' => angle_depth = angle_depth.saturating_sub(1),
            '(' | '（' => paren_depth += 1,
            ')' | '）' => paren_depth = paren_depth.saturating_sub(1),
            '[' | '［' => bracket_depth += 1,
            ']' | '］' => bracket_depth = bracket_depth.saturating_sub(1),
            _ if brace_depth + angle_depth + paren_depth + bracket_depth > 0 => {}
            '\\' if matches!(chars.peek(), Some('N' | 'n' | 'h')) => {
                chars.next();
                spoken.push(' ');
            }
            '♪' | '♫' | '〜' => {}
            _ => spoken.push(ch),
        }
    }

    spoken.split_whitespace().collect::<Vec<_>>().join(" ")
}
