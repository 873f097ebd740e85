use serde::{Deserialize, Serialize};

/// Canonical cell state stored by the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Hidden,
    /// Hidden cell holding a bomb, never shown to the player before the game ends.
    Bomb,
    /// Revealed cell with 1 to 8 neighboring bombs.
    RevealedEmpty(u8),
    RevealedZero,
    ExplodedBomb,
}

impl Cell {
    pub const fn revealed(count: u8) -> Self {
        if count == 0 {
            Self::RevealedZero
        } else {
            Self::RevealedEmpty(count)
        }
    }

    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden | Self::Bomb)
    }

    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::RevealedEmpty(_) | Self::RevealedZero)
    }

    pub const fn is_bomb(self) -> bool {
        matches!(self, Self::Bomb | Self::ExplodedBomb)
    }

    /// Neighbor bomb count of a revealed cell.
    pub const fn count(self) -> Option<u8> {
        match self {
            Self::RevealedEmpty(count) => Some(count),
            Self::RevealedZero => Some(0),
            _ => None,
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::Hidden
    }
}
