use core::fmt;
use serde::{Deserialize, Serialize};

/// Single coordinate axis used for board width, height, and positions.
pub type Coord = u16;

/// Count type used for bomb counts and total-cell counts.
pub type CellCount = u32;

/// A cell position, `x` is the column and `y` is the row, both 0-indexed.
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Position {
    pub x: Coord,
    pub y: Coord,
}

impl Position {
    pub const fn new(x: Coord, y: Coord) -> Self {
        Self { x, y }
    }

    /// Index into a row-major `Array2`, `[row, column]`.
    pub(crate) const fn to_nd_index(self) -> [usize; 2] {
        [self.y as usize, self.x as usize]
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Board dimensions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    pub cols: Coord,
    pub rows: Coord,
}

impl Size {
    pub const fn new(cols: Coord, rows: Coord) -> Self {
        Self { cols, rows }
    }

    pub const fn total_cells(self) -> CellCount {
        mult(self.cols, self.rows)
    }

    pub const fn contains(self, pos: Position) -> bool {
        pos.x < self.cols && pos.y < self.rows
    }

    pub(crate) const fn to_nd_index(self) -> [usize; 2] {
        [self.rows as usize, self.cols as usize]
    }

    /// All positions in row-major order.
    pub fn positions(self) -> impl Iterator<Item = Position> {
        (0..self.rows).flat_map(move |y| (0..self.cols).map(move |x| Position::new(x, y)))
    }

    pub fn iter_neighbors(self, center: Position) -> NeighborIter {
        NeighborIter::new(center, self)
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Neighbor offsets as `(dx, dy)`: NW, N, NE, W, E, SW, S, SE.
const DISPLACEMENTS: [(i16, i16); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Applies `delta` to `pos`, returning a value only when it remains in bounds.
fn apply_delta(pos: Position, delta: (i16, i16), bounds: Size) -> Option<Position> {
    let (dx, dy) = delta;

    let next_x = pos.x.checked_add_signed(dx)?;
    if next_x >= bounds.cols {
        return None;
    }

    let next_y = pos.y.checked_add_signed(dy)?;
    if next_y >= bounds.rows {
        return None;
    }

    Some(Position::new(next_x, next_y))
}

#[derive(Debug)]
pub struct NeighborIter {
    center: Position,
    bounds: Size,
    index: u8,
}

impl NeighborIter {
    fn new(center: Position, bounds: Size) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= DISPLACEMENTS.len() {
                return None;
            }

            let next_item =
                apply_delta(self.center, DISPLACEMENTS[self.index as usize], self.bounds);
            self.index += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_has_three_neighbors_in_fixed_order() {
        let size = Size::new(4, 3);

        let mut iter = size.iter_neighbors(Position::new(0, 0));

        assert_eq!(iter.next(), Some(Position::new(1, 0)));
        assert_eq!(iter.next(), Some(Position::new(0, 1)));
        assert_eq!(iter.next(), Some(Position::new(1, 1)));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn interior_cell_has_eight_neighbors() {
        let size = Size::new(3, 3);

        assert_eq!(size.iter_neighbors(Position::new(1, 1)).count(), 8);
        assert!(
            size.iter_neighbors(Position::new(1, 1))
                .all(|pos| pos != Position::new(1, 1) && size.contains(pos))
        );
    }

    #[test]
    fn single_cell_board_has_no_neighbors() {
        let size = Size::new(1, 1);

        assert_eq!(size.iter_neighbors(Position::new(0, 0)).count(), 0);
    }

    #[test]
    fn positions_are_row_major() {
        let size = Size::new(2, 2);

        let mut positions = size.positions();

        assert_eq!(positions.next(), Some(Position::new(0, 0)));
        assert_eq!(positions.next(), Some(Position::new(1, 0)));
        assert_eq!(positions.next(), Some(Position::new(0, 1)));
        assert_eq!(positions.next(), Some(Position::new(1, 1)));
        assert_eq!(positions.next(), None);
    }
}
