use thiserror::Error;

use crate::Coord;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board needs at least one row and one column, got {rows}x{cols}")]
    InvalidDimensions { rows: Coord, cols: Coord },
    #[error("Invalid coordinates")]
    InvalidCoords,
}

pub type Result<T> = core::result::Result<T, GameError>;
