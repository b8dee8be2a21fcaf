// render.rs - Draws a grid snapshot with raw ANSI/VT100 escapes

use std::fmt;
use std::io::Write;

use crate::error::Result;
use crate::grid::Grid;

pub const HIDE_CURSOR: &str = "\x1b[?25l";
pub const SHOW_CURSOR: &str = "\x1b[?25h";
pub const BG_GREEN: &str = "\x1b[42m";
pub const BG_BLACK: &str = "\x1b[40m";
pub const RESET: &str = "\x1b[0m";

/// Cursor-position escape. `line` and `column` are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorTo {
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for CursorTo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\x1b[{};{}H", self.line, self.column)
    }
}

pub fn cursor_to(line: usize, column: usize) -> String {
    CursorTo { line, column }.to_string()
}

/// Paints every cell of `grid` onto `out` and flushes once.
///
/// Each grid cell occupies two terminal columns. Live cells show their
/// neighbour count on green, dead cells are blank on black. Cells are drawn
/// in `Grid::cells` order, so a frame always walks the screen top-left to
/// bottom-right.
pub fn render<W: Write>(grid: &Grid, out: &mut W) -> Result<()> {
    for (x, y, alive) in grid.cells() {
        write!(out, "{}", CursorTo { line: y + 1, column: x * 2 + 1 })?;
        if alive {
            let count = grid.count_neighbours(x as isize, y as isize);
            write!(out, "{BG_GREEN}{count} {RESET}")?;
        } else {
            write!(out, "{BG_BLACK}  {RESET}")?;
        }
    }
    out.flush()?;
    Ok(())
}
