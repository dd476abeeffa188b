//! Terminal handling: raw-mode setup, restoration, and cell rendering.

use std::io::{self, Write};

use crossterm::{
    cursor, event, execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, ClearType},
};

use pathviz_core::{CellState, Coord, Grid};

/// Rows above the grid used by the status line.
pub const HEADER_ROWS: u16 = 1;

/// Enter raw mode on the alternate screen with mouse capture.
pub fn init() -> Result<(), Box<dyn std::error::Error>> {
    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        terminal::EnterAlternateScreen,
        cursor::Hide,
        event::EnableMouseCapture,
        terminal::Clear(ClearType::All)
    )?;
    Ok(())
}

/// Restore the terminal. Safe to call even if [`init`] failed midway.
pub fn restore() {
    let mut stdout = io::stdout();
    let _ = execute!(
        stdout,
        event::DisableMouseCapture,
        cursor::Show,
        terminal::LeaveAlternateScreen
    );
    let _ = terminal::disable_raw_mode();
}

fn glyph(state: CellState) -> (char, Color) {
    match state {
        CellState::Default => ('·', Color::DarkGrey),
        CellState::Wall => ('█', Color::Grey),
        CellState::Visited => ('░', Color::Cyan),
        CellState::ShortestPath => ('█', Color::Yellow),
        CellState::Start => ('S', Color::Green),
        CellState::Finish => ('F', Color::Red),
    }
}

/// Redraw the status line and the whole board.
pub fn draw(grid: &Grid, status: &str) -> io::Result<()> {
    let mut stdout = io::stdout();
    queue!(
        stdout,
        cursor::MoveTo(0, 0),
        terminal::Clear(ClearType::CurrentLine),
        ResetColor,
        Print(status)
    )?;
    for row in 0..grid.extent().rows {
        queue!(stdout, cursor::MoveTo(0, row as u16 + HEADER_ROWS))?;
        for col in 0..grid.extent().cols {
            let (ch, fg) = glyph(grid.state_at(Coord::new(row, col)));
            queue!(stdout, SetForegroundColor(fg), Print(ch))?;
        }
    }
    queue!(stdout, ResetColor)?;
    stdout.flush()
}
