//! Board rendering.
//!
//! Draws a [`Snapshot`] as a box-drawing table. All styling decisions (symbols and colours)
//! are made here, the core only reports what each cell means.

use std::io::{self, Write};

use crossterm::{
    cursor::{MoveTo, MoveToNextLine},
    queue,
    style::{Print, PrintStyledContent, StyledContent, Stylize},
    terminal::{Clear, ClearType},
};
use termsweeper_core::{CellView, Coord, GameStatus, Position, Snapshot};

const BOMB: char = '^';
const BOMB_SEEN: char = '*';
const FLAG: char = '⚑';

const HELP: &str = "arrows/hjkl move (shift: 5 cells)  space reveal  f flag  q quit";

/// Clears the screen and draws the board with its status line.
pub(crate) fn draw(out: &mut impl Write, snapshot: &Snapshot) -> io::Result<()> {
    queue!(out, MoveTo(0, 0), Clear(ClearType::All))?;
    draw_table(out, snapshot)?;
    draw_status(out, snapshot)?;
    if !snapshot.status().is_finished() {
        queue!(out, Print(HELP), MoveToNextLine(1))?;
    }
    out.flush()
}

/// Prints the board in place, used once the terminal is back to normal mode.
pub(crate) fn print_final(out: &mut impl Write, snapshot: &Snapshot) -> io::Result<()> {
    draw_table(out, snapshot)?;
    draw_status(out, snapshot)?;
    out.flush()
}

fn draw_table(out: &mut impl Write, snapshot: &Snapshot) -> io::Result<()> {
    let size = snapshot.size();

    queue!(out, Print(border(size.cols, '┏', '┳', '┓')), MoveToNextLine(1))?;
    for y in 0..size.rows {
        queue!(out, Print('┃'))?;
        for x in 0..size.cols {
            let symbol = cell_symbol(snapshot, Position::new(x, y));
            queue!(out, PrintStyledContent(symbol), Print('┃'))?;
        }
        queue!(out, MoveToNextLine(1))?;

        if y + 1 < size.rows {
            queue!(out, Print(border(size.cols, '┣', '╋', '┫')), MoveToNextLine(1))?;
        }
    }
    queue!(out, Print(border(size.cols, '┗', '┻', '┛')), MoveToNextLine(1))
}

fn draw_status(out: &mut impl Write, snapshot: &Snapshot) -> io::Result<()> {
    let line = match snapshot.status() {
        GameStatus::InProgress => format!(
            "Bombs: {}  Flags: {}",
            snapshot.bomb_count(),
            snapshot.flag_count()
        ),
        GameStatus::Won => "You won!".to_owned(),
        GameStatus::Lost => "Boom! You lost.".to_owned(),
    };
    queue!(out, Print(line), MoveToNextLine(1))
}

fn border(cols: Coord, left: char, mid: char, right: char) -> String {
    let mut line = String::new();
    line.push(left);
    for col in 0..cols {
        if col > 0 {
            line.push(mid);
        }
        line.push('━');
    }
    line.push(right);
    line
}

fn cell_symbol(snapshot: &Snapshot, pos: Position) -> StyledContent<char> {
    let symbol = match snapshot[pos] {
        CellView::Hidden => ' '.stylize(),
        CellView::Flagged => FLAG.stylize(),
        CellView::Revealed(0) => ' '.on_green(),
        CellView::Revealed(count) => char::from_digit(count.into(), 10)
            .unwrap_or('?')
            .stylize(),
        CellView::Bomb if snapshot.status().is_finished() => BOMB_SEEN.on_red(),
        CellView::Bomb => BOMB.stylize(),
        CellView::Exploded => BOMB_SEEN.on_red(),
    };

    if snapshot.is_cursor(pos) {
        (*symbol.content()).on_red()
    } else {
        symbol
    }
}
