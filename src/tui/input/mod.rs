mod edit;
mod move_mode;
mod navigate;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Mode};

use edit::handle_text_entry;
use move_mode::handle_move;
use navigate::handle_navigate;

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    // Ctrl-C quits from anywhere, before any mode sees it
    if key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
    {
        app.should_quit = true;
        return;
    }

    match app.mode {
        Mode::View => handle_navigate(app, key),
        Mode::Entry | Mode::Edit => handle_text_entry(app, key),
        Mode::Move => handle_move(app, key),
    }
}


#[cfg(test)]
mod tests {
    use super::test_keys::*;
    use super::*;
    use crate::model::{Settings, Task, TaskList};

    fn app_with(texts: &[&str]) -> App {
        let tasks: TaskList = texts.iter().map(|t| Task::new(*t)).collect::<Vec<_>>().into();
        App::new(tasks, Settings::default())
    }

    #[test]
    fn ctrl_c_quits_from_every_mode() {
        for mode in [Mode::View, Mode::Entry, Mode::Edit, Mode::Move] {
            let mut app = app_with(&["a"]);
            app.mode = mode;
            app.current = Some(0);
            handle_key(
                &mut app,
                KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            );
            assert!(app.should_quit, "{mode:?}");
            assert!(!app.take_save_request());
        }
    }

    #[test]
    fn ctrl_c_does_not_cancel_task() {
        let mut app = app_with(&["a"]);
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert_eq!(app.selected_task().map(Task::state), Some(crate::model::TaskState::Todo));
    }

    #[test]
    fn modifier_only_keys_are_ignored() {
        let mut app = app_with(&["a"]);
        press(
            &mut app,
            KeyCode::Modifier(crossterm::event::ModifierKeyCode::LeftShift),
        );
        assert_eq!(app.mode, Mode::View);
        assert!(!app.should_quit);
    }
}
