use crossterm::event::{KeyCode, KeyEvent};

use crate::model::Task;
use crate::tui::app::{App, Mode, wrap_down, wrap_up};

/// Keys while browsing the list. Letter commands ignore case.
pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up => {
            if let Some(sel) = app.selection {
                app.selection = Some(wrap_up(sel, app.tasks.len()));
            }
        }
        KeyCode::Down => {
            if let Some(sel) = app.selection {
                app.selection = Some(wrap_down(sel, app.tasks.len()));
            }
        }
        KeyCode::Enter => begin_edit(app),
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'q' => app.should_quit = true,
            'n' => begin_entry(app),
            'm' => {
                if app.selection.is_some() {
                    app.mode = Mode::Move;
                }
            }
            't' => update_selected(app, Task::mark_todo),
            'd' => update_selected(app, Task::mark_done),
            'c' => update_selected(app, Task::mark_cancelled),
            'r' => {
                if app.remove_selected().is_some() {
                    app.request_save();
                }
            }
            _ => {}
        },
        _ => {}
    }
}

/// Put an empty task at the top of the list and start typing into it.
fn begin_entry(app: &mut App) {
    app.tasks.insert_at(0, Task::new(""));
    app.selection = Some(0);
    app.current = Some(0);
    app.input.clear();
    app.mode = Mode::Entry;
}

/// Start rewriting the selected task's text.
fn begin_edit(app: &mut App) {
    let Some(index) = app.selection else {
        return;
    };
    let Some(task) = app.tasks.get_mut(index) else {
        return;
    };
    task.checkpoint();
    app.input = task.text().to_string();
    app.current = Some(index);
    app.mode = Mode::Edit;
}

fn update_selected(app: &mut App, transition: fn(&mut Task)) {
    if let Some(task) = app.selected_task_mut() {
        transition(task);
        app.request_save();
    }
}
