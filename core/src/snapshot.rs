use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Player-facing state of a single cell. Carries no styling, only what the cell means.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    Hidden,
    Flagged,
    Revealed(u8),
    /// Bomb made visible by debug mode or by the end of the game.
    Bomb,
    Exploded,
}

/// Everything a renderer needs to draw the board.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    cells: Array2<CellView>,
    cursor: Option<Position>,
    status: GameStatus,
    bomb_count: CellCount,
    flag_count: CellCount,
}

impl Snapshot {
    pub(crate) fn new(
        cells: Array2<CellView>,
        cursor: Option<Position>,
        status: GameStatus,
        bomb_count: CellCount,
        flag_count: CellCount,
    ) -> Self {
        Self {
            cells,
            cursor,
            status,
            bomb_count,
            flag_count,
        }
    }

    pub fn size(&self) -> Size {
        let (rows, cols) = self.cells.dim();
        Size::new(cols as Coord, rows as Coord)
    }

    pub fn get(&self, pos: Position) -> Option<CellView> {
        self.cells.get(pos.to_nd_index()).copied()
    }

    /// `None` once the game has ended.
    pub fn cursor(&self) -> Option<Position> {
        self.cursor
    }

    pub fn is_cursor(&self, pos: Position) -> bool {
        self.cursor == Some(pos)
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn bomb_count(&self) -> CellCount {
        self.bomb_count
    }

    pub fn flag_count(&self) -> CellCount {
        self.flag_count
    }
}

impl Index<Position> for Snapshot {
    type Output = CellView;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[pos.to_nd_index()]
    }
}
