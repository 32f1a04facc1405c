//! Bold-tag parsing and word wrapping for terminal text.
//!
//! Metrics and painting both go through [`wrap`], so a label always occupies
//! exactly the number of rows it was measured at.

use crate::parser::EmphasisTags;
use unicode_width::UnicodeWidthChar;

/// One visible character and whether it is inside a bold span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyledChar {
    /// The character.
    pub ch: char,
    /// Inside `open`..`close` tags.
    pub bold: bool,
}

impl StyledChar {
    /// Display width in cells.
    pub fn width(&self) -> usize {
        self.ch.width().unwrap_or(0)
    }
}

/// A wrapped row of styled characters.
pub type StyledLine = Vec<StyledChar>;

/// Strip bold tags from `text`, marking the characters between them.
///
/// Tags may nest; an unmatched close tag is ignored. Newlines and other
/// control characters are dropped.
pub fn parse(text: &str, tags: &EmphasisTags) -> Vec<StyledChar> {
    let mut out = Vec::with_capacity(text.len());
    let mut depth = 0usize;
    let mut rest = text;

    while let Some(ch) = rest.chars().next() {
        if !tags.open.is_empty() && rest.starts_with(tags.open.as_str()) {
            depth += 1;
            rest = &rest[tags.open.len()..];
            continue;
        }
        if !tags.close.is_empty() && rest.starts_with(tags.close.as_str()) {
            depth = depth.saturating_sub(1);
            rest = &rest[tags.close.len()..];
            continue;
        }
        if !ch.is_control() {
            out.push(StyledChar {
                ch,
                bold: depth > 0,
            });
        }
        rest = &rest[ch.len_utf8()..];
    }
    out
}

/// Total display width of `chars`.
pub fn width(chars: &[StyledChar]) -> usize {
    chars.iter().map(StyledChar::width).sum()
}

/// Greedy word wrap at `max_width` cells.
///
/// Words are separated by single spaces; runs of spaces are kept. A word
/// wider than a row is broken across rows. Always returns at least one row.
pub fn wrap(chars: &[StyledChar], max_width: usize) -> Vec<StyledLine> {
    let max_width = max_width.max(1);
    let mut lines: Vec<StyledLine> = Vec::new();
    let mut current: StyledLine = Vec::new();
    let mut current_width = 0usize;

    for (index, word) in chars.split(|c| c.ch == ' ').enumerate() {
        let word_width = width(word);
        let separator = usize::from(index > 0);

        if current_width + separator + word_width <= max_width {
            if separator == 1 {
                current.push(StyledChar {
                    ch: ' ',
                    bold: false,
                });
            }
            current.extend_from_slice(word);
            current_width += separator + word_width;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }

        for ch in word {
            let w = ch.width();
            if current_width + w > max_width && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            current.push(*ch);
            current_width += w;
        }
    }

    lines.push(current);
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(text: &str) -> Vec<StyledChar> {
        parse(text, &EmphasisTags::default())
    }

    fn rows(text: &str, max_width: usize) -> Vec<String> {
        wrap(&plain(text), max_width)
            .into_iter()
            .map(|line| line.into_iter().map(|c| c.ch).collect())
            .collect()
    }

    #[test]
    fn parse_marks_bold_span_and_drops_tags() {
        let chars = plain("a <b>bc</b> d");
        let text: String = chars.iter().map(|c| c.ch).collect();
        assert_eq!(text, "a bc d");
        let bold: Vec<bool> = chars.iter().map(|c| c.bold).collect();
        assert_eq!(bold, vec![false, false, true, true, false, false]);
    }

    #[test]
    fn unmatched_close_tag_is_ignored() {
        let chars = plain("x</b>y");
        assert_eq!(chars.len(), 2);
        assert!(chars.iter().all(|c| !c.bold));
    }

    #[test]
    fn custom_tags_are_honored() {
        let tags = EmphasisTags {
            open: "**".to_string(),
            close: "__".to_string(),
        };
        let chars = parse("**hi__", &tags);
        assert_eq!(chars.len(), 2);
        assert!(chars.iter().all(|c| c.bold));
    }

    #[test]
    fn wide_characters_count_double() {
        assert_eq!(width(&plain("日本")), 4);
    }

    #[test]
    fn wraps_on_word_boundaries() {
        assert_eq!(rows("one two three", 7), vec!["one two", "three"]);
    }

    #[test]
    fn long_word_is_hard_broken() {
        assert_eq!(rows("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn long_word_after_text_starts_new_row() {
        assert_eq!(rows("ab cdefgh", 4), vec!["ab", "cdef", "gh"]);
    }

    #[test]
    fn empty_text_is_one_row() {
        assert_eq!(rows("", 10), vec![""]);
    }

    #[test]
    fn zero_width_wraps_as_one_column() {
        assert_eq!(rows("ab", 0), vec!["a", "b"]);
    }

    #[test]
    fn fitting_text_is_unchanged() {
        assert_eq!(rows("  - ", 10), vec!["  - "]);
    }
}
