use ratatui::Frame;
use ratatui::layout::{Margin, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::tui::wrap;

/// Screen position of the text cursor after the last typed character,
/// kept inside `inner`.
pub fn input_cursor(input: &str, inner: Rect) -> Option<(u16, u16)> {
    if inner.width == 0 || inner.height == 0 {
        return None;
    }
    let (col, row) = wrap::cursor_after(input, inner.width as usize);
    let row = row.min(inner.height as usize - 1) as u16;
    let col = col.min(inner.width as usize - 1) as u16;
    Some((inner.x + col, inner.y + row))
}

/// Render the input buffer word-wrapped inside the frame and place the
/// cursor after it.
pub fn render_input(frame: &mut Frame, app: &App, frame_area: Rect) {
    let inner = frame_area.inner(Margin::new(1, 1));
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let lines: Vec<Line> = wrap::wrap(&app.input, inner.width as usize)
        .into_iter()
        .map(|range| Line::from(&app.input[range]))
        .collect();
    let style = Style::default()
        .fg(app.theme.todo)
        .bg(app.theme.frame_background);
    frame.render_widget(Paragraph::new(lines).style(style), inner);

    if let Some(position) = input_cursor(&app.input, inner) {
        frame.set_cursor_position(position);
    }
}
