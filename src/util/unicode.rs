use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width in terminal cells. Tabs count as 4 cells.
pub fn display_width(s: &str) -> usize {
    s.split('\t')
        .enumerate()
        .map(|(i, part)| {
            let w = UnicodeWidthStr::width(part);
            if i > 0 { w + 4 } else { w }
        })
        .sum()
}

/// Display width of a single grapheme cluster.
pub fn grapheme_display_width(g: &str) -> usize {
    if g == "\t" {
        4
    } else {
        UnicodeWidthStr::width(g)
    }
}

/// Remove the last grapheme cluster from `s`, so a backspace after typing
/// `é` as `e` + combining accent removes both.
pub fn pop_grapheme(s: &mut String) -> Option<String> {
    let start = s.grapheme_indices(true).next_back().map(|(i, _)| i)?;
    Some(s.split_off(start))
}
