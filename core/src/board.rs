use alloc::collections::VecDeque;
use hashbrown::HashSet;
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        Self::InProgress
    }
}

/// Board state machine: cells, flags and game status over a fixed bomb layout.
#[derive(Clone, Debug)]
pub struct Board {
    layout: BombLayout,
    grid: Array2<Cell>,
    flags: HashSet<Position>,
    revealed_count: CellCount,
    status: GameStatus,
    exploded: Option<Position>,
    debug: bool,
}

impl Board {
    pub fn new(layout: BombLayout, debug: bool) -> Self {
        let size = layout.size();
        let grid = Array2::from_shape_fn(size.to_nd_index(), |(y, x)| {
            if layout.contains_bomb(Position::new(x as Coord, y as Coord)) {
                Cell::Bomb
            } else {
                Cell::Hidden
            }
        });
        Self {
            layout,
            grid,
            flags: HashSet::new(),
            revealed_count: 0,
            status: Default::default(),
            exploded: None,
            debug,
        }
    }

    pub fn random(config: &GameConfig, seed: u64) -> Self {
        let layout = RandomBombGenerator::new(seed).generate(config);
        Self::new(layout, config.debug)
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    pub fn size(&self) -> Size {
        self.layout.size()
    }

    pub fn is_debug(&self) -> bool {
        self.debug
    }

    pub fn bomb_count(&self) -> CellCount {
        self.layout.bomb_count()
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    pub fn flag_count(&self) -> CellCount {
        self.flags.len() as CellCount
    }

    /// Bombs not yet accounted for by a flag, negative when over-flagged.
    pub fn bombs_left(&self) -> i64 {
        i64::from(self.bomb_count()) - i64::from(self.flag_count())
    }

    pub fn cell_at(&self, pos: Position) -> Option<Cell> {
        self.grid.get(pos.to_nd_index()).copied()
    }

    pub fn has_flag(&self, pos: Position) -> bool {
        self.flags.contains(&pos)
    }

    pub fn exploded_at(&self) -> Option<Position> {
        self.exploded
    }

    /// In-bounds neighbors of `pos`, ordered NW, N, NE, W, E, SW, S, SE.
    pub fn neighbors_of(&self, pos: Position) -> SmallVec<[Position; 8]> {
        self.size().iter_neighbors(pos).collect()
    }

    /// `None` when `pos` itself holds a bomb.
    pub fn bombs_around(&self, pos: Position) -> Option<u8> {
        if self.layout.contains_bomb(pos) {
            return None;
        }
        let count = self
            .neighbors_of(pos)
            .into_iter()
            .filter(|&neighbor| self.layout.contains_bomb(neighbor))
            .count();
        Some(count as u8)
    }

    pub fn toggle_flag(&mut self, pos: Position) -> Result<MarkOutcome> {
        let pos = self.layout.validate_position(pos)?;

        if self.is_finished() {
            return Ok(MarkOutcome::NoChange);
        }

        if self.flags.remove(&pos) {
            log::debug!("Removed flag at {}", pos);
            return Ok(MarkOutcome::Changed);
        }

        if self.grid[pos.to_nd_index()].is_hidden() {
            self.flags.insert(pos);
            log::debug!("Placed flag at {}", pos);
            Ok(MarkOutcome::Changed)
        } else {
            Ok(MarkOutcome::NoChange)
        }
    }

    pub fn reveal(&mut self, pos: Position) -> Result<RevealOutcome> {
        let pos = self.layout.validate_position(pos)?;

        if self.is_finished() || self.flags.contains(&pos) {
            return Ok(RevealOutcome::NoChange);
        }

        match self.grid[pos.to_nd_index()] {
            Cell::Bomb => {
                self.grid[pos.to_nd_index()] = Cell::ExplodedBomb;
                self.exploded = Some(pos);
                log::debug!("Bomb exploded at {}", pos);
                self.end_game(GameStatus::Lost);
                Ok(RevealOutcome::HitBomb)
            }
            Cell::Hidden => {
                self.flood_reveal(pos);

                if self.revealed_count + self.bomb_count() == self.layout.total_cells() {
                    self.end_game(GameStatus::Won);
                    Ok(RevealOutcome::Won)
                } else {
                    Ok(RevealOutcome::Revealed)
                }
            }
            _ => Ok(RevealOutcome::NoChange),
        }
    }

    /// Reveals `start` and, through zero cells, everything reachable up to and including the
    /// numbered ring around the region. Flagged cells stop the fill.
    fn flood_reveal(&mut self, start: Position) {
        let mut visited = HashSet::new();
        visited.insert(start);
        let mut to_visit = VecDeque::from([start]);

        while let Some(pos) = to_visit.pop_front() {
            if !self.can_auto_reveal(pos) {
                log::trace!("Skipping cell at {}", pos);
                continue;
            }

            let count = self.reveal_cell(pos);
            if count != 0 {
                continue;
            }

            for neighbor in self.neighbors_of(pos) {
                if self.can_auto_reveal(neighbor) && visited.insert(neighbor) {
                    to_visit.push_back(neighbor);
                }
            }
        }
    }

    fn can_auto_reveal(&self, pos: Position) -> bool {
        matches!(self.grid[pos.to_nd_index()], Cell::Hidden) && !self.flags.contains(&pos)
    }

    fn reveal_cell(&mut self, pos: Position) -> u8 {
        let count = self.layout.adjacent_bomb_count(pos);
        self.grid[pos.to_nd_index()] = Cell::revealed(count);
        self.revealed_count += 1;
        self.flags.remove(&pos);
        log::trace!("Revealed cell at {}, bomb count: {}", pos, count);
        count
    }

    fn end_game(&mut self, status: GameStatus) {
        if self.status.is_finished() {
            return;
        }

        self.status = status;
        log::debug!(
            "Game ended: {:?} with {} of {} safe cells revealed",
            status,
            self.revealed_count,
            self.layout.safe_cell_count()
        );
    }

    /// Render-ready view of the board with `cursor` highlighted while the game is running.
    pub fn snapshot(&self, cursor: Position) -> Snapshot {
        let ended = self.is_finished();
        let show_bombs = ended || self.debug;

        let cells = Array2::from_shape_fn(self.size().to_nd_index(), |(y, x)| {
            let pos = Position::new(x as Coord, y as Coord);
            match self.grid[[y, x]] {
                Cell::ExplodedBomb => CellView::Exploded,
                Cell::RevealedZero => CellView::Revealed(0),
                Cell::RevealedEmpty(count) => CellView::Revealed(count),
                _ if !ended && self.flags.contains(&pos) => CellView::Flagged,
                Cell::Bomb if show_bombs => CellView::Bomb,
                Cell::Bomb | Cell::Hidden => CellView::Hidden,
            }
        });

        Snapshot::new(
            cells,
            (!ended).then_some(cursor),
            self.status,
            self.bomb_count(),
            self.flag_count(),
        )
    }
}

impl SelectionHandler for Board {
    fn handle_selection(&mut self, event: SelectionEvent) -> Update {
        let update = match event {
            SelectionEvent::Changed(_) if self.is_finished() => Ok(Update::NoChange),
            SelectionEvent::Changed(_) => Ok(Update::Changed),
            SelectionEvent::Select(pos) => self.reveal(pos).map(Update::from),
            SelectionEvent::ToggleFlag(pos) => self.toggle_flag(pos).map(Update::from),
        };

        update.unwrap_or_else(|err| {
            log::warn!("Ignoring {:?}: {}", event, err);
            Update::NoChange
        })
    }
}
