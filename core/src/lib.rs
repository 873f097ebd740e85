#![no_std]

extern crate alloc;

use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use error::*;
pub use game::*;
pub use generator::*;
pub use selection::*;
pub use snapshot::*;
pub use types::*;

mod board;
mod cell;
mod error;
mod game;
mod generator;
mod selection;
mod snapshot;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Size,
    pub bombs: CellCount,
    /// Show bomb positions before the game ends.
    pub debug: bool,
}

impl GameConfig {
    /// Validates the dimensions and clamps `bombs` to the number of cells.
    pub fn new(rows: Coord, cols: Coord, bombs: CellCount, debug: bool) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(GameError::InvalidDimensions { rows, cols });
        }

        let size = Size::new(cols, rows);
        let total_cells = size.total_cells();
        if bombs > total_cells {
            log::warn!(
                "Board only fits {} bombs, requested {}, clamping",
                total_cells,
                bombs
            );
        }

        Ok(Self {
            size,
            bombs: bombs.min(total_cells),
            debug,
        })
    }

    pub const fn total_cells(&self) -> CellCount {
        self.size.total_cells()
    }
}

/// Static bomb placement of a board, fixed once built.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BombLayout {
    size: Size,
    bomb_mask: Array2<bool>,
    bomb_count: CellCount,
}

impl BombLayout {
    /// `bomb_mask` is indexed `[row, column]`.
    pub fn from_bomb_mask(bomb_mask: Array2<bool>) -> Self {
        let (rows, cols) = bomb_mask.dim();
        let bomb_count = bomb_mask.iter().filter(|&&is_bomb| is_bomb).count();
        Self {
            size: Size::new(rows_or_cols(cols), rows_or_cols(rows)),
            bomb_mask,
            bomb_count: bomb_count as CellCount,
        }
    }

    pub fn from_positions(size: Size, bombs: &[Position]) -> Result<Self> {
        if size.cols == 0 || size.rows == 0 {
            return Err(GameError::InvalidDimensions {
                rows: size.rows,
                cols: size.cols,
            });
        }

        let mut bomb_mask: Array2<bool> = Array2::default(size.to_nd_index());
        for &pos in bombs {
            if !size.contains(pos) {
                return Err(GameError::InvalidCoords);
            }
            bomb_mask[pos.to_nd_index()] = true;
        }

        Ok(Self::from_bomb_mask(bomb_mask))
    }

    pub fn validate_position(&self, pos: Position) -> Result<Position> {
        if self.size.contains(pos) {
            Ok(pos)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn total_cells(&self) -> CellCount {
        self.size.total_cells()
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.bomb_count
    }

    pub fn bomb_count(&self) -> CellCount {
        self.bomb_count
    }

    pub fn contains_bomb(&self, pos: Position) -> bool {
        self.bomb_mask
            .get(pos.to_nd_index())
            .copied()
            .unwrap_or(false)
    }

    pub fn adjacent_bomb_count(&self, pos: Position) -> u8 {
        self.size
            .iter_neighbors(pos)
            .filter(|&neighbor| self.contains_bomb(neighbor))
            .count() as u8
    }

    /// Bomb positions in row-major order.
    pub fn bomb_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.size.positions().filter(|&pos| self.contains_bomb(pos))
    }
}

impl Index<Position> for BombLayout {
    type Output = bool;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.bomb_mask[pos.to_nd_index()]
    }
}

fn rows_or_cols(len: usize) -> Coord {
    Coord::try_from(len).unwrap_or(Coord::MAX)
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitBomb,
    Won,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            HitBomb => true,
            Won => true,
        }
    }
}

/// Whether handling an input changed anything the renderer needs to redraw.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Update {
    NoChange,
    Changed,
}

impl Update {
    pub const fn has_update(self) -> bool {
        matches!(self, Self::Changed)
    }
}

impl From<MarkOutcome> for Update {
    fn from(outcome: MarkOutcome) -> Self {
        if outcome.has_update() {
            Self::Changed
        } else {
            Self::NoChange
        }
    }
}

impl From<RevealOutcome> for Update {
    fn from(outcome: RevealOutcome) -> Self {
        if outcome.has_update() {
            Self::Changed
        } else {
            Self::NoChange
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_clamps_bombs_to_cell_count() {
        let config = GameConfig::new(2, 3, 100, false).unwrap();

        assert_eq!(config.bombs, 6);
        assert_eq!(config.total_cells(), 6);
        assert_eq!(config.size, Size::new(3, 2));
    }

    #[test]
    fn config_rejects_empty_board() {
        assert_eq!(
            GameConfig::new(0, 5, 1, false),
            Err(GameError::InvalidDimensions { rows: 0, cols: 5 })
        );
        assert_eq!(
            GameConfig::new(5, 0, 1, false),
            Err(GameError::InvalidDimensions { rows: 5, cols: 0 })
        );
    }

    #[test]
    fn layout_from_positions_counts_each_bomb_once() {
        let bombs = [Position::new(0, 0), Position::new(2, 1), Position::new(0, 0)];

        let layout = BombLayout::from_positions(Size::new(3, 2), &bombs).unwrap();

        assert_eq!(layout.bomb_count(), 2);
        assert_eq!(layout.safe_cell_count(), 4);
        assert!(layout[Position::new(2, 1)]);
        assert!(!layout.contains_bomb(Position::new(1, 1)));
        assert!(!layout.contains_bomb(Position::new(7, 7)));
    }

    #[test]
    fn layout_rejects_out_of_range_bomb() {
        let outcome = BombLayout::from_positions(Size::new(2, 2), &[Position::new(2, 0)]);

        assert_eq!(outcome, Err(GameError::InvalidCoords));
    }

    #[test]
    fn adjacent_bomb_count_ignores_center() {
        let bombs = [Position::new(0, 0), Position::new(1, 1), Position::new(2, 2)];
        let layout = BombLayout::from_positions(Size::new(3, 3), &bombs).unwrap();

        assert_eq!(layout.adjacent_bomb_count(Position::new(1, 1)), 2);
        assert_eq!(layout.adjacent_bomb_count(Position::new(2, 0)), 1);
        assert_eq!(layout.adjacent_bomb_count(Position::new(1, 0)), 2);
    }

    #[test]
    fn outcomes_convert_to_updates() {
        assert_eq!(Update::from(MarkOutcome::NoChange), Update::NoChange);
        assert_eq!(Update::from(MarkOutcome::Changed), Update::Changed);
        assert_eq!(Update::from(RevealOutcome::HitBomb), Update::Changed);
        assert_eq!(Update::from(RevealOutcome::NoChange), Update::NoChange);
    }
}
