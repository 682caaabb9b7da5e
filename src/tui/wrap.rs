use std::ops::Range;

use unicode_segmentation::UnicodeSegmentation;

use crate::util::unicode::{display_width, grapheme_display_width};

/// A grapheme with its byte offset and display width.
struct Grapheme<'a> {
    s: &'a str,
    byte_offset: usize,
    display_width: usize,
}

fn is_space(g: &str) -> bool {
    g.chars().all(char::is_whitespace)
}

/// Wrap `text` into screen rows of at most `width` cells, returning the byte
/// range of each row.
///
/// Breaks go after whitespace; whitespace that lands on a break is dropped.
/// A word wider than a whole row is split between graphemes. There is always
/// at least one row, possibly empty.
pub fn wrap(text: &str, width: usize) -> Vec<Range<usize>> {
    if width == 0 || display_width(text) <= width {
        return vec![0..text.len()];
    }

    let gs: Vec<Grapheme<'_>> = text
        .grapheme_indices(true)
        .map(|(i, g)| Grapheme {
            s: g,
            byte_offset: i,
            display_width: grapheme_display_width(g),
        })
        .collect();
    let byte_at = |idx: usize| gs.get(idx).map_or(text.len(), |g| g.byte_offset);

    let mut rows = Vec::new();
    let mut row_start = 0;
    let mut col = 0;
    let mut i = 0;

    while i < gs.len() {
        let token_start = i;
        let token_is_space = is_space(gs[i].s);
        while i < gs.len() && is_space(gs[i].s) == token_is_space {
            i += 1;
        }
        let token_width: usize = gs[token_start..i].iter().map(|g| g.display_width).sum();

        if col + token_width <= width {
            col += token_width;
            continue;
        }

        if token_is_space {
            rows.push(byte_at(row_start)..byte_at(token_start));
            row_start = i;
            col = 0;
            continue;
        }

        if token_start > row_start {
            rows.push(byte_at(row_start)..byte_at(token_start));
            row_start = token_start;
            col = 0;
        }
        for (j, g) in gs.iter().enumerate().take(i).skip(token_start) {
            if col + g.display_width > width && col > 0 {
                rows.push(byte_at(row_start)..byte_at(j));
                row_start = j;
                col = 0;
            }
            col += g.display_width;
        }
    }

    rows.push(byte_at(row_start)..text.len());
    rows
}

/// Where the cursor sits after the last character of wrapped text, as
/// (column, row) relative to the wrap origin.
pub fn cursor_after(text: &str, width: usize) -> (usize, usize) {
    let rows = wrap(text, width);
    let last_row = rows.len() - 1;
    let last_width = rows
        .last()
        .map_or(0, |r| display_width(&text[r.clone()]));
    if width > 0 && last_width >= width {
        (0, last_row + 1)
    } else {
        (last_width, last_row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows<'a>(text: &'a str, width: usize) -> Vec<&'a str> {
        wrap(text, width).into_iter().map(|r| &text[r]).collect()
    }

    #[test]
    fn no_wrap_needed() {
        assert_eq!(rows("hello world", 80), vec!["hello world"]);
    }

    #[test]
    fn wrap_at_space() {
        assert_eq!(rows("hello world", 7), vec!["hello ", "world"]);
    }

    #[test]
    fn space_on_the_break_is_dropped() {
        assert_eq!(rows("hello world", 5), vec!["hello", "world"]);
    }

    #[test]
    fn long_word_is_split() {
        assert_eq!(rows("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn long_word_after_short_one() {
        assert_eq!(rows("ab cdefghij", 4), vec!["ab ", "cdef", "ghij"]);
    }

    #[test]
    fn wide_graphemes_respect_cells() {
        assert_eq!(rows("你好你好", 5), vec!["你好", "你好"]);
    }

    #[test]
    fn empty_text_has_one_row() {
        assert_eq!(rows("", 10), vec![""]);
    }

    #[test]
    fn zero_width_returns_everything() {
        assert_eq!(rows("hello", 0), vec!["hello"]);
    }

    #[test]
    fn cursor_follows_text() {
        assert_eq!(cursor_after("", 10), (0, 0));
        assert_eq!(cursor_after("abc", 10), (3, 0));
        assert_eq!(cursor_after("hello world", 7), (5, 1));
    }

    #[test]
    fn cursor_moves_down_on_full_row() {
        assert_eq!(cursor_after("abcd", 4), (0, 1));
        assert_eq!(cursor_after("hello ", 5), (0, 1));
    }
}
