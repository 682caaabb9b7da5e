use std::error::Error;
use std::io::{self, Write};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::Terminal;
use ratatui::backend::Backend;

use crate::io::settings_io::{read_settings, write_settings};
use crate::io::task_io::read_tasks;
use crate::io::writer::TaskWriter;
use crate::io::{DataDir, StoreError};
use crate::model::{Settings, Task, TaskList};

use super::bullet::BulletStyle;
use super::theme::Theme;
use super::{input, render, session, setup};

/// How long the window must stop changing size before we redraw.
const RESIZE_DEBOUNCE: Duration = Duration::from_millis(250);

/// Poll interval while idle.
const TICK: Duration = Duration::from_millis(250);

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Browsing the list
    View,
    /// Typing the text of a brand new task
    Entry,
    /// Rewriting the text of an existing task
    Edit,
    /// Carrying the selected task up or down
    Move,
}

/// Main application state, owned by the event loop
pub struct App {
    pub tasks: TaskList,
    pub mode: Mode,
    /// Selected row; `None` only while the list is empty
    pub selection: Option<usize>,
    /// Row being typed into during Entry/Edit
    pub current: Option<usize>,
    /// Keystrokes collected during Entry/Edit
    pub input: String,
    pub settings: Settings,
    pub theme: Theme,
    pub bullet: BulletStyle,
    pub should_quit: bool,
    save_requested: bool,
}

impl App {
    pub fn new(tasks: TaskList, settings: Settings) -> Self {
        let theme = Theme::from_overrides(&settings.colors);
        let bullet = BulletStyle::from_name(&settings.bullet_style).unwrap_or_else(|| {
            log::warn!(
                "unknown bullet style {:?} in settings, using ballot",
                settings.bullet_style
            );
            BulletStyle::Ballot
        });

        let mut app = App {
            tasks,
            mode: Mode::View,
            selection: None,
            current: None,
            input: String::new(),
            settings,
            theme,
            bullet,
            should_quit: false,
            save_requested: false,
        };
        app.clamp_selection();
        app
    }

    /// Keep the selection inside the list after its length changed.
    pub fn clamp_selection(&mut self) {
        self.selection = if self.tasks.is_empty() {
            None
        } else {
            let last = self.tasks.len() - 1;
            Some(self.selection.unwrap_or(0).min(last))
        };
    }

    pub fn selected_task(&self) -> Option<&Task> {
        self.selection.and_then(|i| self.tasks.get(i))
    }

    pub fn selected_task_mut(&mut self) -> Option<&mut Task> {
        let index = self.selection?;
        self.tasks.get_mut(index)
    }

    pub fn current_task_mut(&mut self) -> Option<&mut Task> {
        let index = self.current?;
        self.tasks.get_mut(index)
    }

    /// Remove the selected task and clamp the selection.
    pub fn remove_selected(&mut self) -> Option<Task> {
        let removed = self.tasks.remove_at(self.selection?);
        self.clamp_selection();
        removed
    }

    /// Mark the task list as needing to be written to disk.
    pub fn request_save(&mut self) {
        self.save_requested = true;
    }

    /// Whether a save was requested since the last call.
    pub fn take_save_request(&mut self) -> bool {
        std::mem::take(&mut self.save_requested)
    }
}

/// Index one step up from `index` in a list of `len`, wrapping to the end.
pub(crate) fn wrap_up(index: usize, len: usize) -> usize {
    if index == 0 { len - 1 } else { index - 1 }
}

/// Index one step down from `index` in a list of `len`, wrapping to the start.
pub(crate) fn wrap_down(index: usize, len: usize) -> usize {
    if index + 1 >= len { 0 } else { index + 1 }
}

/// Load tasks, falling back to an empty list with a notice on stdout.
fn load_tasks(data_dir: &DataDir, out: &mut impl Write) -> TaskList {
    let path = data_dir.tasks_file();
    match read_tasks(&path) {
        Ok(tasks) => {
            log::info!("loaded {} tasks from {}", tasks.len(), path.display());
            tasks
        }
        Err(e) => {
            log::info!("starting with an empty list: {e}");
            let _ = writeln!(out, "Tasks will be saved at {}", path.display());
            TaskList::new()
        }
    }
}

/// Load settings, or run first-time setup and write them out.
fn load_settings(data_dir: &DataDir) -> Result<Settings, Box<dyn Error>> {
    let path = data_dir.settings_file();
    match read_settings(&path) {
        Ok(settings) => Ok(settings),
        Err(e) => {
            log::info!("no usable settings, running setup: {e}");
            println!("Settings will be saved at {}", path.display());

            let stdin = io::stdin();
            let style = setup::run_setup(&mut io::stdout(), &mut stdin.lock())?;
            log::info!("bullet style chosen: {}", style.name());

            let settings = Settings {
                bullet_style: style.name().to_string(),
                ..Settings::default()
            };
            write_settings(&path, &settings)?;
            Ok(settings)
        }
    }
}

/// Run the TUI application
pub fn run(data_dir: &DataDir) -> Result<(), Box<dyn Error>> {
    let mut tasks = load_tasks(data_dir, &mut io::stdout());
    let settings = load_settings(data_dir)?;
    tasks.seed_if_empty();

    let mut app = App::new(tasks, settings);

    let mut terminal = session::enter()?;
    session::install_panic_hook();

    let writer = TaskWriter::spawn(data_dir.tasks_file());
    let result = run_event_loop(&mut terminal, &mut app, &writer);

    session::restore(&mut terminal)?;

    // Let the last snapshot land before reporting anything.
    let flushed = writer.finish();
    result?;
    flushed?;
    log::info!("bye");
    Ok(())
}

/// Redraw bookkeeping for the event loop. A resize holds every redraw back
/// until the window has been still for [`RESIZE_DEBOUNCE`].
#[derive(Debug)]
struct Redraw {
    pending: bool,
    resized_at: Option<Instant>,
}

impl Redraw {
    fn new() -> Self {
        Redraw {
            pending: true,
            resized_at: None,
        }
    }

    fn request(&mut self) {
        self.pending = true;
    }

    fn resized(&mut self, now: Instant) {
        self.resized_at = Some(now);
    }

    /// Whether to draw now. Clears the request when it says yes.
    fn due(&mut self, now: Instant) -> bool {
        if let Some(at) = self.resized_at {
            if now.duration_since(at) < RESIZE_DEBOUNCE {
                return false;
            }
            self.resized_at = None;
            self.pending = true;
        }
        std::mem::take(&mut self.pending)
    }

    /// How long to wait for the next event.
    fn timeout(&self, now: Instant) -> Duration {
        self.resized_at
            .map_or(TICK, |at| RESIZE_DEBOUNCE.saturating_sub(now.duration_since(at)))
    }
}

/// Apply one key press and hand the list to the writer if it changed.
fn handle_press(app: &mut App, writer: &TaskWriter, key: KeyEvent) {
    input::handle_key(app, key);
    if app.take_save_request() {
        writer.save(app.tasks.clone());
    }
}

/// Surface a failed background save as a fatal error.
fn check_writer(writer: &TaskWriter) -> Result<(), StoreError> {
    match writer.poll_error() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

fn run_event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    writer: &TaskWriter,
) -> Result<(), Box<dyn Error>> {
    let mut redraw = Redraw::new();

    loop {
        check_writer(writer)?;

        if redraw.due(Instant::now()) {
            terminal.draw(|frame| render::render(frame, app))?;
        }

        if event::poll(redraw.timeout(Instant::now()))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    handle_press(app, writer, key);
                    redraw.request();
                }
                Event::Resize(_, _) => {
                    terminal.clear()?;
                    redraw.resized(Instant::now());
                }
                _ => {}
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
