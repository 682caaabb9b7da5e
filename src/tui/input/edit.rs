use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};
use crate::util::unicode;

/// Keys while typing a new task or rewriting an existing one.
pub(super) fn handle_text_entry(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => commit(app),
        KeyCode::Esc => cancel(app),
        KeyCode::Backspace => {
            unicode::pop_grapheme(&mut app.input);
            sync_text(app);
        }
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            app.input.push(c);
            sync_text(app);
        }
        _ => {}
    }
}

/// Mirror the input buffer into the task being typed.
fn sync_text(app: &mut App) {
    let text = app.input.clone();
    if let Some(task) = app.current_task_mut() {
        task.set_text(text);
    }
}

/// Keep the typed text, or drop the task if nothing is left of it.
fn commit(app: &mut App) {
    if let Some(index) = app.current.take() {
        if app.input.is_empty() {
            app.tasks.remove_at(index);
            app.clamp_selection();
        } else if let Some(task) = app.tasks.get_mut(index) {
            task.commit_edit();
        }
    }
    app.input.clear();
    app.mode = Mode::View;
    app.request_save();
}

/// Throw away a new task, or roll an edited one back to its checkpoint.
fn cancel(app: &mut App) {
    if let Some(index) = app.current.take() {
        match app.mode {
            Mode::Entry => {
                app.tasks.remove_at(index);
                app.clamp_selection();
            }
            _ => {
                if let Some(task) = app.tasks.get_mut(index) {
                    task.restore_checkpoint();
                }
            }
        }
    }
    app.input.clear();
    app.mode = Mode::View;
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use crate::model::{Settings, Task, TaskList, TaskState};
    use crate::tui::app::{App, Mode};
    use crate::tui::input::handle_key;
    use crate::tui::input::test_keys::*;

    fn app_with(texts: &[&str]) -> App {
        let tasks: TaskList = texts.iter().map(|t| Task::new(*t)).collect::<Vec<_>>().into();
        App::new(tasks, Settings::default())
    }

    fn texts(app: &App) -> Vec<&str> {
        app.tasks.iter().map(Task::text).collect()
    }

    #[test]
    fn typing_updates_buffer_and_task() {
        let mut app = app_with(&["old"]);
        press(&mut app, KeyCode::Char('n'));
        type_str(&mut app, "Buy");
        assert_eq!(app.input, "Buy");
        assert_eq!(texts(&app), vec!["Buy", "old"]);
        assert!(!app.take_save_request());
    }

    #[test]
    fn backspace_drops_last_char() {
        let mut app = app_with(&[]);
        press(&mut app, KeyCode::Char('n'));
        type_str(&mut app, "abc");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.input, "ab");
        assert_eq!(texts(&app), vec!["ab"]);
    }

    #[test]
    fn backspace_on_empty_buffer_is_harmless() {
        let mut app = app_with(&[]);
        press(&mut app, KeyCode::Char('n'));
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.input, "");
        assert_eq!(app.mode, Mode::Entry);
    }

    #[test]
    fn new_task_commit() {
        let mut app = app_with(&["existing"]);
        press(&mut app, KeyCode::Char('n'));
        type_str(&mut app, "buy milk");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.mode, Mode::View);
        assert_eq!(texts(&app), vec!["buy milk", "existing"]);
        assert_eq!(app.tasks.get(0).map(Task::state), Some(TaskState::Todo));
        assert_eq!(app.selection, Some(0));
        assert!(app.current.is_none());
        assert!(app.take_save_request());
    }

    #[test]
    fn empty_commit_discards_task() {
        let mut app = app_with(&["existing"]);
        press(&mut app, KeyCode::Char('n'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(texts(&app), vec!["existing"]);
        assert_eq!(app.mode, Mode::View);
        assert_eq!(app.selection, Some(0));
    }

    #[test]
    fn escape_discards_new_task() {
        let mut app = app_with(&["a", "b"]);
        let before = app.tasks.clone();
        press(&mut app, KeyCode::Char('n'));
        type_str(&mut app, "draft");
        press(&mut app, KeyCode::Esc);

        assert_eq!(app.tasks, before);
        assert_eq!(app.mode, Mode::View);
        assert!(!app.take_save_request());
    }

    #[test]
    fn escape_on_empty_list_leaves_no_selection() {
        let mut app = app_with(&[]);
        press(&mut app, KeyCode::Char('n'));
        press(&mut app, KeyCode::Esc);
        assert!(app.tasks.is_empty());
        assert_eq!(app.selection, None);
    }

    #[test]
    fn escape_restores_done_task() {
        let mut app = app_with(&["write report"]);
        press(&mut app, KeyCode::Char('d'));
        app.take_save_request();
        let before = app.tasks.get(0).unwrap().clone();

        press(&mut app, KeyCode::Enter);
        type_str(&mut app, " now");
        assert_eq!(app.tasks.get(0).map(Task::state), Some(TaskState::Todo));
        press(&mut app, KeyCode::Esc);

        let task = app.tasks.get(0).unwrap();
        assert_eq!(task, &before);
        assert_eq!(task.state(), TaskState::Done);
        assert_eq!(task.text(), "write report");
        assert!(task.date().is_some());
        assert!(!task.has_checkpoint());
        assert_eq!(app.mode, Mode::View);
    }

    #[test]
    fn edit_commit_keeps_new_text_as_todo() {
        let mut app = app_with(&["draft"]);
        press(&mut app, KeyCode::Char('c'));
        press(&mut app, KeyCode::Enter);
        type_str(&mut app, " v2");
        press(&mut app, KeyCode::Enter);

        let task = app.tasks.get(0).unwrap();
        assert_eq!(task.text(), "draft v2");
        assert_eq!(task.state(), TaskState::Todo);
        assert!(task.date().is_none());
        assert!(!task.has_checkpoint());
    }

    #[test]
    fn erasing_all_text_while_editing_removes_task() {
        let mut app = app_with(&["ab", "keep"]);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Enter);
        assert_eq!(texts(&app), vec!["keep"]);
        assert_eq!(app.selection, Some(0));
    }

    #[test]
    fn letters_are_text_not_commands() {
        let mut app = app_with(&[]);
        press(&mut app, KeyCode::Char('n'));
        type_str(&mut app, "qmdr");
        assert!(!app.should_quit);
        assert_eq!(app.mode, Mode::Entry);
        assert_eq!(app.input, "qmdr");
    }

    #[test]
    fn shifted_chars_are_typed() {
        let mut app = app_with(&[]);
        press(&mut app, KeyCode::Char('n'));
        handle_key(&mut app, KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT));
        assert_eq!(app.input, "A");
    }

    #[test]
    fn arrows_are_ignored_while_typing() {
        let mut app = app_with(&["a", "b"]);
        press(&mut app, KeyCode::Char('n'));
        press(&mut app, KeyCode::Down);
        assert_eq!(app.selection, Some(0));
        assert_eq!(app.mode, Mode::Entry);
    }
}
