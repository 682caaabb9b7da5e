use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Mode, wrap_down, wrap_up};

/// Keys while carrying the selected task. The task moves one row per press
/// and the selection follows it; past either end it lands on the other end.
pub(super) fn handle_move(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up => shift_selected(app, wrap_up),
        KeyCode::Down => shift_selected(app, wrap_down),
        KeyCode::Enter | KeyCode::Esc => {
            app.mode = Mode::View;
            app.request_save();
        }
        _ => {}
    }
}

fn shift_selected(app: &mut App, step: fn(usize, usize) -> usize) {
    let Some(from) = app.selection else {
        return;
    };
    let to = step(from, app.tasks.len());
    if app.tasks.move_to(from, to) {
        app.selection = Some(to);
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyCode;

    use crate::model::{Settings, Task, TaskList};
    use crate::tui::app::{App, Mode};
    use crate::tui::input::test_keys::*;

    fn app_with(texts: &[&str]) -> App {
        let tasks: TaskList = texts.iter().map(|t| Task::new(*t)).collect::<Vec<_>>().into();
        App::new(tasks, Settings::default())
    }

    fn texts(app: &App) -> Vec<&str> {
        app.tasks.iter().map(Task::text).collect()
    }

    #[test]
    fn up_twice_carries_task_to_top() {
        let mut app = app_with(&["a", "b", "c", "d", "e"]);
        app.selection = Some(2);
        press(&mut app, KeyCode::Char('m'));
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Up);

        assert_eq!(texts(&app), vec!["c", "a", "b", "d", "e"]);
        assert_eq!(app.selection, Some(0));
        assert_eq!(app.mode, Mode::Move);
        assert!(!app.take_save_request());
    }

    #[test]
    fn down_swaps_with_next() {
        let mut app = app_with(&["a", "b", "c"]);
        press(&mut app, KeyCode::Char('m'));
        press(&mut app, KeyCode::Down);
        assert_eq!(texts(&app), vec!["b", "a", "c"]);
        assert_eq!(app.selection, Some(1));
    }

    #[test]
    fn up_from_top_wraps_to_bottom() {
        let mut app = app_with(&["a", "b", "c"]);
        press(&mut app, KeyCode::Char('m'));
        press(&mut app, KeyCode::Up);
        assert_eq!(texts(&app), vec!["b", "c", "a"]);
        assert_eq!(app.selection, Some(2));
    }

    #[test]
    fn down_from_bottom_wraps_to_top() {
        let mut app = app_with(&["a", "b", "c"]);
        app.selection = Some(2);
        press(&mut app, KeyCode::Char('m'));
        press(&mut app, KeyCode::Down);
        assert_eq!(texts(&app), vec!["c", "a", "b"]);
        assert_eq!(app.selection, Some(0));
    }

    #[test]
    fn single_task_stays_put() {
        let mut app = app_with(&["only"]);
        press(&mut app, KeyCode::Char('m'));
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Down);
        assert_eq!(texts(&app), vec!["only"]);
        assert_eq!(app.selection, Some(0));
    }

    #[test]
    fn enter_and_escape_commit_order() {
        for key in [KeyCode::Enter, KeyCode::Esc] {
            let mut app = app_with(&["a", "b"]);
            press(&mut app, KeyCode::Char('m'));
            press(&mut app, KeyCode::Down);
            press(&mut app, key);
            assert_eq!(app.mode, Mode::View);
            assert_eq!(texts(&app), vec!["b", "a"]);
            assert!(app.take_save_request());
        }
    }

    #[test]
    fn letters_do_nothing_while_moving() {
        let mut app = app_with(&["a"]);
        press(&mut app, KeyCode::Char('m'));
        press(&mut app, KeyCode::Char('r'));
        press(&mut app, KeyCode::Char('q'));
        assert_eq!(app.tasks.len(), 1);
        assert!(!app.should_quit);
        assert_eq!(app.mode, Mode::Move);
    }
}
