use ratatui::style::{Color, Style};
use ratatui::text::Span;

use crate::model::TaskState;

/// Foreground tint for one piece of a bullet glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tint {
    White,
    Green,
    Red,
    Gray,
    /// Terminal default, used for emoji
    Plain,
}

impl Tint {
    pub fn color(self) -> Color {
        match self {
            Tint::White => Color::Gray,
            Tint::Green => Color::Green,
            Tint::Red => Color::Red,
            Tint::Gray => Color::DarkGray,
            Tint::Plain => Color::Reset,
        }
    }

    pub fn crossterm_color(self) -> crossterm::style::Color {
        use crossterm::style::Color as C;
        match self {
            Tint::White => C::Grey,
            Tint::Green => C::Green,
            Tint::Red => C::Red,
            Tint::Gray => C::DarkGrey,
            Tint::Plain => C::Reset,
        }
    }
}

/// A bullet glyph as colored segments.
pub type Glyph = &'static [(&'static str, Tint)];

/// The closed set of bullet styles a list can be drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulletStyle {
    Ballot,
    Radio,
    Plus,
    Boxxy,
    Ascii,
    Boot,
    Emoji1,
    Emoji2,
    Emoji3,
    Emoji4,
    Emoji5,
    Emoji6,
}

impl BulletStyle {
    /// Every style, in the order the setup screen lists them
    pub const ALL: [BulletStyle; 12] = [
        BulletStyle::Ballot,
        BulletStyle::Radio,
        BulletStyle::Plus,
        BulletStyle::Boxxy,
        BulletStyle::Ascii,
        BulletStyle::Boot,
        BulletStyle::Emoji1,
        BulletStyle::Emoji2,
        BulletStyle::Emoji3,
        BulletStyle::Emoji4,
        BulletStyle::Emoji5,
        BulletStyle::Emoji6,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BulletStyle::Ballot => "ballot",
            BulletStyle::Radio => "radio",
            BulletStyle::Plus => "plus",
            BulletStyle::Boxxy => "boxxy",
            BulletStyle::Ascii => "ascii",
            BulletStyle::Boot => "boot",
            BulletStyle::Emoji1 => "emoji1",
            BulletStyle::Emoji2 => "emoji2",
            BulletStyle::Emoji3 => "emoji3",
            BulletStyle::Emoji4 => "emoji4",
            BulletStyle::Emoji5 => "emoji5",
            BulletStyle::Emoji6 => "emoji6",
        }
    }

    /// Look a style up by its exact name
    pub fn from_name(name: &str) -> Option<BulletStyle> {
        BulletStyle::ALL.into_iter().find(|s| s.name() == name)
    }

    /// Declared width in cells, used for row layout. Emoji styles declare 1
    /// even though most terminals draw them two cells wide.
    pub fn width(self) -> usize {
        match self {
            BulletStyle::Radio | BulletStyle::Boxxy => 3,
            BulletStyle::Boot => 6,
            _ => 1,
        }
    }

    pub fn todo(self) -> Glyph {
        use Tint::*;
        match self {
            BulletStyle::Ballot => &[("☐", White)],
            BulletStyle::Radio => &[("( )", White)],
            BulletStyle::Plus => &[("-", White)],
            BulletStyle::Boxxy => &[("[ ]", White)],
            BulletStyle::Ascii => &[("■", Gray)],
            BulletStyle::Boot => &[("[    ]", White)],
            BulletStyle::Emoji1 => &[("🙂", Plain)],
            BulletStyle::Emoji2 => &[("👉", Plain)],
            BulletStyle::Emoji3 => &[("💙", Plain)],
            BulletStyle::Emoji4 => &[("⚪", Plain)],
            BulletStyle::Emoji5 => &[("🌀", Plain)],
            BulletStyle::Emoji6 => &[("⭕", Plain)],
        }
    }

    pub fn done(self) -> Glyph {
        use Tint::*;
        match self {
            BulletStyle::Ballot => &[("✔", Green)],
            BulletStyle::Radio => &[("(", White), ("*", Green), (")", White)],
            BulletStyle::Plus => &[("+", Green)],
            BulletStyle::Boxxy => &[("[", White), ("x", Green), ("]", White)],
            BulletStyle::Ascii => &[("√", Green)],
            BulletStyle::Boot => &[("[", White), (" OK ", Green), ("]", White)],
            BulletStyle::Emoji1 => &[("😎", Plain)],
            BulletStyle::Emoji2 => &[("👍", Plain)],
            BulletStyle::Emoji3 => &[("❤️ ", Plain)],
            BulletStyle::Emoji4 => &[("🔘", Plain)],
            BulletStyle::Emoji5 => &[("💯", Plain)],
            BulletStyle::Emoji6 => &[("✔️ ", Plain)],
        }
    }

    pub fn cancelled(self) -> Glyph {
        use Tint::*;
        match self {
            BulletStyle::Ballot => &[("✘", Red)],
            BulletStyle::Radio => &[("(", White), ("x", Red), (")", White)],
            BulletStyle::Plus => &[("x", Red)],
            BulletStyle::Boxxy => &[("[", White), ("-", Red), ("]", White)],
            BulletStyle::Ascii => &[("x", Red)],
            BulletStyle::Boot => &[("[", White), ("FAIL", Red), ("]", White)],
            BulletStyle::Emoji1 => &[("😡", Plain)],
            BulletStyle::Emoji2 => &[("💩", Plain)],
            BulletStyle::Emoji3 => &[("💔", Plain)],
            BulletStyle::Emoji4 => &[("⚫️", Plain)],
            BulletStyle::Emoji5 => &[("💢", Plain)],
            BulletStyle::Emoji6 => &[("❌", Plain)],
        }
    }

    pub fn glyph(self, state: TaskState) -> Glyph {
        match state {
            TaskState::Todo => self.todo(),
            TaskState::Done => self.done(),
            TaskState::Cancelled => self.cancelled(),
        }
    }

    /// The glyph for `state` as styled spans on `background`.
    pub fn spans(self, state: TaskState, background: Color) -> Vec<Span<'static>> {
        self.glyph(state)
            .iter()
            .map(|(text, tint)| Span::styled(*text, Style::default().fg(tint.color()).bg(background)))
            .collect()
    }
}
