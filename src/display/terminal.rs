// Terminal control around the frame output

use crate::grid::LifeGrid;
use crossterm::{
    cursor, queue,
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};

/// Clear the whole screen once before the first frame and optionally hide the cursor
pub fn prepare_terminal<W: Write>(out: &mut W, hide_cursor: bool) -> io::Result<()> {
    queue!(out, Clear(ClearType::All), cursor::MoveTo(0, 0))?;
    if hide_cursor {
        queue!(out, cursor::Hide)?;
    }
    out.flush()
}

/// Make the cursor visible again after the simulation stops
pub fn restore_terminal<W: Write>(out: &mut W) -> io::Result<()> {
    queue!(out, cursor::Show)?;
    out.flush()
}

/// Draw one frame over the previous one, starting from the top-left corner
pub fn draw_frame<W: Write>(
    grid: &LifeGrid,
    out: &mut W,
    clear_screen: bool,
) -> io::Result<()> {
    if clear_screen {
        queue!(out, Clear(ClearType::All))?;
    }
    queue!(out, cursor::MoveTo(0, 0))?;
    grid.render(out)?;
    out.flush()
}
