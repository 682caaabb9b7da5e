pub mod input_view;
pub mod task_rows;
pub mod toolbar;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Block;

use super::app::{App, Mode};

/// Rows under the frame: the toolbar and one blank row.
const BOTTOM_ROWS: u16 = 2;

/// Main render function. Draws the whole screen from `app` every time;
/// nothing carries over from the previous frame.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.toolbar_background);
    frame.render_widget(Block::default().style(bg_style), area);

    let frame_area = frame_rect(area);
    render_frame(frame, app, frame_area);

    match app.mode {
        Mode::View | Mode::Move => {
            toolbar::render_toolbar(frame, app, area);
            task_rows::render_task_rows(frame, app, area, frame_area);
        }
        Mode::Entry | Mode::Edit => {
            input_view::render_input(frame, app, frame_area);
        }
    }
}

/// The bordered box: everything but the bottom two rows.
pub fn frame_rect(area: Rect) -> Rect {
    Rect {
        height: area.height.saturating_sub(BOTTOM_ROWS),
        ..area
    }
}

/// Border with the title centered in the top edge.
fn render_frame(frame: &mut Frame, app: &App, area: Rect) {
    let border_style = Style::default()
        .fg(app.theme.frame)
        .bg(app.theme.frame_background);
    let title_style = Style::default()
        .fg(app.theme.frame_background)
        .bg(app.theme.frame);

    let block = Block::bordered()
        .border_style(border_style)
        .style(Style::default().bg(app.theme.frame_background))
        .title(Line::from(Span::styled(
            format!(" {} ", app.settings.title),
            title_style,
        )))
        .title_alignment(Alignment::Center);
    frame.render_widget(block, area);
}
