use ratatui::Terminal;
use ratatui::backend::TestBackend;

use crate::model::{Settings, Task, TaskList};
use crate::tui::app::App;

/// Render the full app into an in-memory buffer and return plain text
/// (no styles), with trailing whitespace and blank lines trimmed.
pub fn render_app(app: &App, w: u16, h: u16) -> String {
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| crate::tui::render::render(frame, app))
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w.max(1))
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// An app showing `texts` as TODO tasks with the ASCII boxxy bullets.
pub fn app_with_tasks(texts: &[&str]) -> App {
    let tasks: TaskList = texts.iter().map(|t| Task::new(*t)).collect::<Vec<_>>().into();
    let settings = Settings {
        bullet_style: "boxxy".into(),
        ..Settings::default()
    };
    App::new(tasks, settings)
}
