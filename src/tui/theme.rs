use indexmap::IndexMap;
use ratatui::style::Color;

use crate::model::TaskState;

/// Parsed color theme for the TUI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub toolbar_background: Color,
    pub label_background: Color,
    pub label_text: Color,
    pub label_highlight: Color,
    pub frame: Color,
    pub frame_background: Color,
    pub todo: Color,
    pub done: Color,
    pub cancelled: Color,
    pub move_pointer: Color,
    pub date: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            toolbar_background: Color::Black,
            label_background: Color::Gray,
            label_text: Color::Black,
            label_highlight: Color::Red,
            frame: Color::LightGreen,
            frame_background: Color::Black,
            todo: Color::Gray,
            done: Color::DarkGray,
            cancelled: Color::DarkGray,
            move_pointer: Color::Red,
            date: Color::DarkGray,
        }
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

impl Theme {
    /// Apply `[colors]` overrides from the settings file on top of the
    /// defaults. Unknown names and malformed values are ignored.
    pub fn from_overrides(colors: &IndexMap<String, String>) -> Self {
        let mut theme = Theme::default();

        for (key, value) in colors {
            let Some(color) = parse_hex_color(value) else {
                log::warn!("ignoring color {key} = {value:?}: expected #RRGGBB");
                continue;
            };
            match key.as_str() {
                "toolbar_background" => theme.toolbar_background = color,
                "label_background" => theme.label_background = color,
                "label_text" => theme.label_text = color,
                "label_highlight" => theme.label_highlight = color,
                "frame" => theme.frame = color,
                "frame_background" => theme.frame_background = color,
                "todo" => theme.todo = color,
                "done" => theme.done = color,
                "cancelled" => theme.cancelled = color,
                "move_pointer" => theme.move_pointer = color,
                "date" => theme.date = color,
                _ => log::warn!("ignoring unknown color name {key:?}"),
            }
        }

        theme
    }

    /// Get the text color for a task state
    pub fn state_color(&self, state: TaskState) -> Color {
        match state {
            TaskState::Todo => self.todo,
            TaskState::Done => self.done,
            TaskState::Cancelled => self.cancelled,
        }
    }
}
