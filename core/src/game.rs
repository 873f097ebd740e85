use serde::{Deserialize, Serialize};

use crate::*;

/// Discrete player intent, produced by whatever reads the input device.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Move { direction: Direction, step: Coord },
    Select,
    ToggleFlag,
}

/// One game session: a cursor wired to a board.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    selection: Selection,
}

impl Game {
    pub fn new(config: &GameConfig, seed: u64) -> Self {
        Self::from_board(Board::random(config, seed))
    }

    pub fn with_layout(layout: BombLayout, debug: bool) -> Self {
        Self::from_board(Board::new(layout, debug))
    }

    fn from_board(board: Board) -> Self {
        let selection = Selection::new(board.size());
        Self { board, selection }
    }

    /// Routes `command` through the cursor to the board. Once the game has ended every
    /// command is ignored, the cursor included.
    pub fn apply(&mut self, command: Command) -> Update {
        if self.board.is_finished() {
            log::debug!("Game already ended, ignoring {:?}", command);
            return Update::NoChange;
        }

        match command {
            Command::Move { direction, step } => {
                self.selection.move_by(direction, step, &mut self.board)
            }
            Command::Select => self.selection.select(&mut self.board),
            Command::ToggleFlag => self.selection.toggle_flag(&mut self.board),
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        self.board.snapshot(self.selection.position())
    }

    pub fn status(&self) -> GameStatus {
        self.board.status()
    }

    pub fn is_finished(&self) -> bool {
        self.board.is_finished()
    }

    pub fn cursor(&self) -> Position {
        self.selection.position()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }
}
