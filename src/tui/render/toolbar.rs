use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

/// Toolbar commands; the first letter is the key.
const ITEMS: [&str; 7] = ["New", "Move", "Todo", "Done", "Cancel", "Remove", "Quit"];

/// Whether the full labels fit in `width` columns.
fn fits_full_labels(width: usize) -> bool {
    let joined: usize = ITEMS.iter().map(|s| s.chars().count()).sum::<usize>() + ITEMS.len() - 1;
    width > joined + ITEMS.len() * 2
}

/// Label text for one item: the whole word, or its first letter and `…`.
fn label(item: &str, full: bool) -> String {
    if full {
        item.to_string()
    } else {
        let first: String = item.chars().take(1).collect();
        format!("{first}\u{2026}")
    }
}

/// Spans for the whole toolbar at the given terminal width.
pub fn toolbar_line(app: &App, width: usize) -> Line<'static> {
    let theme = &app.theme;
    let highlight = Style::default()
        .fg(theme.label_highlight)
        .bg(theme.label_background);
    let text = Style::default()
        .fg(theme.label_text)
        .bg(theme.label_background);
    let gap = Style::default().fg(Color::Gray).bg(theme.toolbar_background);

    let full = fits_full_labels(width);
    let mut spans = Vec::with_capacity(ITEMS.len() * 3);
    for item in ITEMS {
        let name = label(item, full);
        let mut chars = name.chars();
        let first: String = chars.next().into_iter().collect();
        let rest: String = chars.collect();
        spans.push(Span::styled(format!(" {first}"), highlight));
        spans.push(Span::styled(format!("{rest} "), text));
        spans.push(Span::styled(" ", gap));
    }
    Line::from(spans)
}

/// Render the toolbar on the row just under the frame.
pub fn render_toolbar(frame: &mut Frame, app: &App, area: Rect) {
    if area.height < 2 || area.width < 2 {
        return;
    }
    let row = Rect {
        x: area.x + 1,
        y: area.y + area.height - 2,
        width: area.width - 1,
        height: 1,
    };
    let line = toolbar_line(app, area.width as usize);
    let paragraph =
        Paragraph::new(line).style(Style::default().bg(app.theme.toolbar_background));
    frame.render_widget(paragraph, row);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn full_labels_need_more_than_51_columns() {
        assert!(!fits_full_labels(51));
        assert!(fits_full_labels(52));
    }

    #[test]
    fn wide_terminal_shows_full_labels() {
        let app = app_with_tasks(&["a"]);
        let out = render_app(&app, 80, 10);
        let toolbar = out.lines().nth(8).unwrap();
        assert_eq!(
            toolbar,
            "  New   Move   Todo   Done   Cancel   Remove   Quit"
        );
    }

    #[test]
    fn narrow_terminal_abbreviates() {
        let app = app_with_tasks(&["a"]);
        let out = render_app(&app, 40, 10);
        let toolbar = out.lines().nth(8).unwrap();
        assert_eq!(toolbar, "  N…   M…   T…   D…   C…   R…   Q…");
    }

    #[test]
    fn first_letter_is_highlighted() {
        let app = app_with_tasks(&["a"]);
        let line = toolbar_line(&app, 80);
        assert_eq!(line.spans[0].content, " N");
        assert_eq!(line.spans[0].style.fg, Some(app.theme.label_highlight));
        assert_eq!(line.spans[1].content, "ew ");
        assert_eq!(line.spans[1].style.fg, Some(app.theme.label_text));
    }
}
