use chrono::{DateTime, Local, Utc};
use ratatui::Frame;
use ratatui::layout::{Margin, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::{Task, TaskState};
use crate::tui::app::{App, Mode};

/// Columns left of the icon: marker, arrow, and a space.
const ROW_INDENT: u16 = 3;

/// Columns a row never uses: indent, the space after the icon, the right
/// border.
const ROW_GUTTER: usize = 5;

/// Width of ` (DD Mon HH:MM)`.
const DATE_SUFFIX_WIDTH: usize = 15;

/// Completion date as shown after a done or cancelled task, in local time.
pub fn format_date(date: DateTime<Utc>) -> String {
    date.with_timezone(&Local).format("%d %b %H:%M").to_string()
}

/// First list index shown so the selected row stays on screen.
pub fn scroll_offset(selection: Option<usize>, visible_rows: usize) -> usize {
    match selection {
        Some(sel) if visible_rows > 0 => sel.saturating_sub(visible_rows - 1),
        _ => 0,
    }
}

/// One task row: icon, excerpt, date suffix for finished tasks, and padding
/// out to the right border.
pub fn task_line(app: &App, task: &Task, term_width: usize) -> Line<'static> {
    let theme = &app.theme;
    let bg = theme.frame_background;
    let dated = task.state() != TaskState::Todo;

    let reserved = ROW_GUTTER + app.bullet.width() + if dated { DATE_SUFFIX_WIDTH } else { 0 };
    let budget = term_width.saturating_sub(reserved);
    let excerpt = task.excerpt(budget);
    let padding = budget.saturating_sub(excerpt.chars().count());

    let mut spans = app.bullet.spans(task.state(), bg);
    spans.push(Span::styled(
        format!(" {excerpt}"),
        Style::default().fg(theme.state_color(task.state())).bg(bg),
    ));
    if dated {
        let suffix = match task.date() {
            Some(date) => format!(" ({})", format_date(date)),
            None => " ".repeat(DATE_SUFFIX_WIDTH),
        };
        spans.push(Span::styled(suffix, Style::default().fg(theme.date).bg(bg)));
    }
    spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
    Line::from(spans)
}

/// Selection marker drawn over the left border.
fn marker_line(app: &App) -> Line<'static> {
    let border = Style::default()
        .fg(app.theme.frame)
        .bg(app.theme.frame_background);
    match app.mode {
        Mode::Move => Line::from(vec![
            Span::styled("\u{2502}", border),
            Span::styled(
                "\u{00BB}",
                Style::default()
                    .fg(app.theme.move_pointer)
                    .bg(app.theme.frame_background),
            ),
        ]),
        _ => Line::from(Span::styled("\u{251C}\u{2192}", border)),
    }
}

/// Render every visible task row and the selection marker.
pub fn render_task_rows(frame: &mut Frame, app: &App, area: Rect, frame_area: Rect) {
    let inner = frame_area.inner(Margin::new(1, 1));
    if inner.height == 0 || area.width <= ROW_INDENT + 1 {
        return;
    }

    let visible = inner.height as usize;
    let offset = scroll_offset(app.selection, visible);
    let term_width = area.width as usize;
    let row_width = area.width - ROW_INDENT - 1;

    for (row, task) in app.tasks.iter().enumerate().skip(offset).take(visible) {
        let rect = Rect {
            x: area.x + ROW_INDENT,
            y: inner.y + (row - offset) as u16,
            width: row_width,
            height: 1,
        };
        frame.render_widget(Paragraph::new(task_line(app, task, term_width)), rect);
    }

    if let Some(sel) = app.selection
        && sel >= offset
        && sel < offset + visible
    {
        let rect = Rect {
            x: area.x,
            y: inner.y + (sel - offset) as u16,
            width: 2,
            height: 1,
        };
        frame.render_widget(Paragraph::new(marker_line(app)), rect);
    }
}
