//! Approximate text metrics.
//!
//! There is no font rasterizer in a headless frame, so every grapheme is
//! treated as `0.6em` wide and a line as `1.3em` tall. Layout and paint use
//! the same numbers, so wrapped paragraphs stay consistent between the two.

use unicode_segmentation::UnicodeSegmentation;

pub const ADVANCE_EM: f32 = 0.6;
pub const LINE_HEIGHT_EM: f32 = 1.3;

pub fn line_height(px: f32) -> f32 {
    px * LINE_HEIGHT_EM
}

/// Advance width of `text` at `px`.
pub fn measure_width(text: &str, px: f32) -> f32 {
    text.graphemes(true).count() as f32 * px * ADVANCE_EM
}

/// Greedy word wrap to `max_w`.
///
/// Breaks at word boundaries; a single word wider than `max_w` gets a line of
/// its own rather than being split. Returns the lines and whether `max_lines`
/// cut anything off.
pub fn wrap_lines(
    text: &str,
    px: f32,
    max_w: f32,
    max_lines: Option<usize>,
) -> (Vec<String>, bool) {
    let mut lines: Vec<String> = Vec::new();
    for paragraph in text.split('\n') {
        let mut line = String::new();
        for word in paragraph.split_word_bounds() {
            let candidate_w = measure_width(&line, px) + measure_width(word, px);
            if !line.is_empty() && candidate_w > max_w && !word.trim().is_empty() {
                lines.push(line.trim_end().to_string());
                line.clear();
            }
            if line.is_empty() && word.trim().is_empty() {
                continue;
            }
            line.push_str(word);
        }
        lines.push(line.trim_end().to_string());
    }

    match max_lines {
        Some(max) if lines.len() > max => {
            lines.truncate(max.max(1));
            (lines, true)
        }
        _ => (lines, false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_counts_graphemes() {
        assert_eq!(measure_width("abc", 10.0), 18.0);
        // One grapheme cluster, two code points.
        assert_eq!(measure_width("e\u{301}", 10.0), 6.0);
    }

    #[test]
    fn wraps_at_word_boundaries() {
        // 6px per grapheme at 10px; 60px fits ten graphemes.
        let (lines, truncated) = wrap_lines("design studio for the web", 10.0, 60.0, None);
        assert!(!truncated);
        assert_eq!(lines, vec!["design", "studio for", "the web"]);
    }

    #[test]
    fn long_word_gets_its_own_line() {
        let (lines, _) = wrap_lines("a supercalifragilistic b", 10.0, 30.0, None);
        assert_eq!(lines, vec!["a", "supercalifragilistic", "b"]);
    }

    #[test]
    fn max_lines_truncates() {
        let (lines, truncated) = wrap_lines("one two three four", 10.0, 24.0, Some(2));
        assert!(truncated);
        assert_eq!(lines, vec!["one", "two"]);
    }

    #[test]
    fn explicit_newlines_break() {
        let (lines, _) = wrap_lines("build a better web\nbuild a better future", 10.0, 1000.0, None);
        assert_eq!(lines, vec!["build a better web", "build a better future"]);
    }
}
