//! Text measurement in terminal cells.
//!
//! Width uses `unicode-width` so CJK and emoji measure as the terminal
//! renders them. Wrapping is word-based with a hard break for words
//! wider than the line.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Display width of a string in terminal cells.
pub fn string_width(s: &str) -> u16 {
    UnicodeWidthStr::width(s).min(u16::MAX as usize) as u16
}

/// Width of the widest line in a multi-line string.
pub fn max_line_width(s: &str) -> u16 {
    s.lines().map(string_width).max().unwrap_or(0)
}

/// Word-wrap `text` to `width` cells. Explicit newlines are kept;
/// words wider than a full line are broken mid-word.
pub fn wrap_text(text: &str, width: u16) -> Vec<String> {
    if width == 0 {
        return vec![String::new()];
    }

    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut line = String::new();
        let mut line_width = 0u16;

        for word in paragraph.split(' ') {
            let word_width = string_width(word);

            // Hard-break words that cannot fit on any line
            if word_width > width {
                if !line.is_empty() {
                    lines.push(std::mem::take(&mut line));
                    line_width = 0;
                }
                let mut chunk = String::new();
                let mut chunk_width = 0u16;
                for ch in word.chars() {
                    let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0) as u16;
                    if chunk_width + ch_width > width && !chunk.is_empty() {
                        lines.push(std::mem::take(&mut chunk));
                        chunk_width = 0;
                    }
                    chunk.push(ch);
                    chunk_width += ch_width;
                }
                line = chunk;
                line_width = chunk_width;
                continue;
            }

            let needed = if line.is_empty() { word_width } else { word_width + 1 };
            if line_width + needed > width && !line.is_empty() {
                lines.push(std::mem::take(&mut line));
                line_width = 0;
            }
            if !line.is_empty() {
                line.push(' ');
                line_width += 1;
            }
            line.push_str(word);
            line_width += word_width;
        }

        lines.push(line);
    }

    lines
}

/// Number of lines `text` occupies when wrapped to `width`.
pub fn measure_text_height(text: &str, width: u16) -> u16 {
    if text.is_empty() {
        return 0;
    }
    wrap_text(text, width).len().min(u16::MAX as usize) as u16
}

/// Truncate to `width` cells, appending `…` when something was cut.
pub fn truncate_text(text: &str, width: u16) -> String {
    if string_width(text) <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0u16;
    for ch in text.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0) as u16;
        if used + ch_width > width.saturating_sub(1) {
            break;
        }
        out.push(ch);
        used += ch_width;
    }
    out.push('…');
    out
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_width_ascii() {
        assert_eq!(string_width("hello"), 5);
        assert_eq!(string_width(""), 0);
    }

    #[test]
    fn test_string_width_fullwidth() {
        assert_eq!(string_width("日本"), 4);
    }

    #[test]
    fn test_wrap_simple() {
        let lines = wrap_text("the quick brown fox", 10);
        assert_eq!(lines, vec!["the quick", "brown fox"]);
    }

    #[test]
    fn test_wrap_keeps_newlines() {
        let lines = wrap_text("one\ntwo three", 20);
        assert_eq!(lines, vec!["one", "two three"]);
    }

    #[test]
    fn test_wrap_breaks_long_word() {
        let lines = wrap_text("abcdefghij", 4);
        assert_eq!(lines, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_measure_height() {
        assert_eq!(measure_text_height("", 10), 0);
        assert_eq!(measure_text_height("hi", 10), 1);
        assert_eq!(measure_text_height("the quick brown fox", 10), 2);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate_text("hello", 10), "hello");
        assert_eq!(truncate_text("hello world", 8), "hello w…");
    }
}
