//! Width-aware text helpers

use ratatui::style::Style;
use ratatui::text::{Line, Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

#[inline]
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Greedy word wrap to `width` columns. Words longer than a line are split.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut current = String::new();
        let mut current_width = 0;

        for word in paragraph.split_whitespace() {
            let word_width = display_width(word);
            let gap = usize::from(current_width > 0);

            if current_width + gap + word_width <= width {
                if gap == 1 {
                    current.push(' ');
                }
                current.push_str(word);
                current_width += gap + word_width;
                continue;
            }

            if current_width > 0 {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }

            if word_width <= width {
                current.push_str(word);
                current_width = word_width;
            } else {
                for ch in word.chars() {
                    let w = ch.width().unwrap_or(0);
                    if current_width + w > width {
                        lines.push(std::mem::take(&mut current));
                        current_width = 0;
                    }
                    current.push(ch);
                    current_width += w;
                }
            }
        }

        if current_width > 0 || lines.is_empty() {
            lines.push(current);
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Cut `s` to at most `width` columns, marking the cut with an ellipsis
pub fn truncate(s: &str, width: usize) -> String {
    if display_width(s) <= width {
        return s.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// `s` centered in `width` columns, padded with spaces on both sides
pub fn center(s: &str, width: usize) -> String {
    let s = truncate(s, width);
    let used = display_width(&s);
    let left = (width - used) / 2;
    let right = width - used - left;
    format!("{}{}{}", " ".repeat(left), s, " ".repeat(right))
}

/// Builds one line out of spans placed at absolute columns
#[derive(Debug, Default)]
pub struct RowBuilder {
    spans: Vec<Span<'static>>,
    column: usize,
}

impl RowBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn column(&self) -> usize {
        self.column
    }

    /// Pad with spaces up to `column`. No-op if already past it.
    pub fn pad_to(&mut self, column: usize) -> &mut Self {
        if column > self.column {
            self.spans.push(Span::raw(" ".repeat(column - self.column)));
            self.column = column;
        }
        self
    }

    pub fn push(&mut self, text: impl Into<String>, style: Style) -> &mut Self {
        let text = text.into();
        self.column += display_width(&text);
        self.spans.push(Span::styled(text, style));
        self
    }

    pub fn finish(self) -> Line<'static> {
        Line::from(self.spans)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_words() {
        assert_eq!(
            wrap("the quick brown fox jumps", 10),
            vec!["the quick", "brown fox", "jumps"]
        );
    }

    #[test]
    fn test_wrap_splits_long_word() {
        assert_eq!(wrap("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_wrap_empty_and_paragraphs() {
        assert_eq!(wrap("", 10), vec![""]);
        assert_eq!(wrap("one\ntwo", 10), vec!["one", "two"]);
    }

    #[test]
    fn test_truncate_and_center() {
        assert_eq!(truncate("Portfolio", 20), "Portfolio");
        assert_eq!(truncate("Portfolio", 5), "Port…");
        assert_eq!(center("ab", 6), "  ab  ");
        assert_eq!(display_width(&center("Rust", 9)), 9);
    }

    #[test]
    fn test_row_builder_places_spans() {
        let mut row = RowBuilder::new();
        row.pad_to(3).push("ab", Style::default()).pad_to(2).push("c", Style::default());
        assert_eq!(row.column(), 6);
        let line = row.finish();
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "   abc");
    }
}
