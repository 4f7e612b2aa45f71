//! Raw-mode terminal session guard and frame drawing.

use std::io::{Stdout, Write, stdout};

use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute, queue,
    style::Print,
    terminal::{
        self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
        enable_raw_mode,
    },
};

/// Raw-mode terminal session; restores the screen when dropped.
pub struct Terminal {
    out: Stdout,
}

impl Terminal {
    /// Enter raw mode, the alternate screen, and mouse capture.
    pub fn enter() -> anyhow::Result<Self> {
        let mut out = stdout();
        enable_raw_mode()?;
        execute!(out, EnterAlternateScreen, EnableMouseCapture, cursor::Hide)?;

        Ok(Self { out })
    }

    /// Current terminal width in columns.
    pub fn columns(&self) -> u16 {
        terminal::size().map_or(80, |(columns, _)| columns)
    }

    /// Replace the screen contents with `frame`.
    ///
    /// Raw mode does not translate `\n` into a carriage return, so each
    /// line is positioned explicitly.
    pub fn draw(&mut self, frame: &str) -> anyhow::Result<()> {
        queue!(self.out, Clear(ClearType::All), cursor::MoveTo(0, 0))?;

        for line in frame.lines() {
            queue!(self.out, Print(line), cursor::MoveToNextLine(1))?;
        }

        self.out.flush()?;
        Ok(())
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(self.out, cursor::Show, DisableMouseCapture, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}
