use std::io::{self, BufRead, Write};

use crossterm::queue;
use crossterm::style::{Print, ResetColor, SetForegroundColor};

use crate::model::TaskState;

use super::bullet::{BulletStyle, Tint};

/// Error type for first-run setup
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error("Sorry, \"{0}\" doesn't match any known style.")]
    UnknownStyle(String),
    #[error("setup i/o error: {0}")]
    IoError(#[from] io::Error),
}

fn print_glyph(out: &mut impl Write, style: BulletStyle, state: TaskState) -> io::Result<()> {
    for (text, tint) in style.glyph(state) {
        queue!(out, SetForegroundColor(tint.crossterm_color()), Print(text))?;
    }
    queue!(out, ResetColor)
}

fn print_preview(out: &mut impl Write, style: BulletStyle) -> io::Result<()> {
    let white = SetForegroundColor(Tint::White.crossterm_color());
    queue!(out, white, Print(style.name()), Print("\n"))?;
    for (state, label) in [
        (TaskState::Todo, "Pending task"),
        (TaskState::Done, "Completed task"),
        (TaskState::Cancelled, "Cancelled task"),
    ] {
        queue!(out, Print("  "))?;
        print_glyph(out, style, state)?;
        queue!(out, white, Print(format!(" {label}\n")))?;
    }
    queue!(out, ResetColor, Print("\n"))
}

/// Show every bullet style and ask which one to use.
///
/// Runs on the normal screen before the TUI starts. An unknown name is an
/// error rather than a silent default.
pub fn run_setup(out: &mut impl Write, input: &mut impl BufRead) -> Result<BulletStyle, SetupError> {
    for style in BulletStyle::ALL {
        print_preview(out, style)?;
    }
    queue!(
        out,
        Print("Depending on your OS, some of these styles may not display properly.\n\n"),
        Print("Enter the name of your list style: ")
    )?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    writeln!(out)?;

    let name = line.trim();
    BulletStyle::from_name(name).ok_or_else(|| SetupError::UnknownStyle(name.to_string()))
}
