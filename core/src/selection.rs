use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// Notifications emitted by [`Selection`], each carrying the cursor position at the time.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SelectionEvent {
    Changed(Position),
    Select(Position),
    ToggleFlag(Position),
}

/// Receiver of [`SelectionEvent`]s. Events are delivered synchronously, in emission order,
/// before the emitting call returns.
pub trait SelectionHandler {
    fn handle_selection(&mut self, event: SelectionEvent) -> Update;
}

/// Cursor over a grid. Knows nothing about game rules.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    cursor: Position,
    size: Size,
}

impl Selection {
    pub fn new(size: Size) -> Self {
        Self {
            cursor: Position::default(),
            size,
        }
    }

    pub fn position(&self) -> Position {
        self.cursor
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn move_by<H>(&mut self, direction: Direction, step: Coord, handler: &mut H) -> Update
    where
        H: SelectionHandler + ?Sized,
    {
        match direction {
            Direction::Left => self.move_left(step, handler),
            Direction::Right => self.move_right(step, handler),
            Direction::Up => self.move_up(step, handler),
            Direction::Down => self.move_down(step, handler),
        }
    }

    pub fn move_left<H>(&mut self, step: Coord, handler: &mut H) -> Update
    where
        H: SelectionHandler + ?Sized,
    {
        let x = self.cursor.x.saturating_sub(step);
        self.move_to(Position::new(x, self.cursor.y), handler)
    }

    pub fn move_right<H>(&mut self, step: Coord, handler: &mut H) -> Update
    where
        H: SelectionHandler + ?Sized,
    {
        let x = self
            .cursor
            .x
            .saturating_add(step)
            .min(self.size.cols.saturating_sub(1));
        self.move_to(Position::new(x, self.cursor.y), handler)
    }

    pub fn move_up<H>(&mut self, step: Coord, handler: &mut H) -> Update
    where
        H: SelectionHandler + ?Sized,
    {
        let y = self.cursor.y.saturating_sub(step);
        self.move_to(Position::new(self.cursor.x, y), handler)
    }

    pub fn move_down<H>(&mut self, step: Coord, handler: &mut H) -> Update
    where
        H: SelectionHandler + ?Sized,
    {
        let y = self
            .cursor
            .y
            .saturating_add(step)
            .min(self.size.rows.saturating_sub(1));
        self.move_to(Position::new(self.cursor.x, y), handler)
    }

    pub fn select<H>(&self, handler: &mut H) -> Update
    where
        H: SelectionHandler + ?Sized,
    {
        handler.handle_selection(SelectionEvent::Select(self.cursor))
    }

    pub fn toggle_flag<H>(&self, handler: &mut H) -> Update
    where
        H: SelectionHandler + ?Sized,
    {
        handler.handle_selection(SelectionEvent::ToggleFlag(self.cursor))
    }

    /// Clamped moves that land on the current cell emit nothing.
    fn move_to<H>(&mut self, target: Position, handler: &mut H) -> Update
    where
        H: SelectionHandler + ?Sized,
    {
        if target == self.cursor {
            return Update::NoChange;
        }

        self.cursor = target;
        log::trace!("Cursor moved to {}", target);
        handler.handle_selection(SelectionEvent::Changed(target))
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    impl SelectionHandler for Vec<SelectionEvent> {
        fn handle_selection(&mut self, event: SelectionEvent) -> Update {
            self.push(event);
            Update::Changed
        }
    }

    #[test]
    fn move_left_at_boundary_is_silent() {
        let mut selection = Selection::new(Size::new(10, 5));
        let mut events: Vec<SelectionEvent> = Vec::new();

        assert_eq!(selection.move_left(1, &mut events), Update::NoChange);

        assert!(events.is_empty());
        assert_eq!(selection.position(), Position::new(0, 0));
    }

    #[test]
    fn move_right_by_five() {
        let mut selection = Selection::new(Size::new(10, 5));
        let mut events: Vec<SelectionEvent> = Vec::new();

        assert_eq!(selection.move_right(5, &mut events), Update::Changed);

        assert_eq!(selection.position(), Position::new(5, 0));
        assert_eq!(events, [SelectionEvent::Changed(Position::new(5, 0))]);
    }

    #[test]
    fn moves_clamp_to_grid() {
        let mut selection = Selection::new(Size::new(10, 5));
        let mut events: Vec<SelectionEvent> = Vec::new();

        selection.move_right(5, &mut events);
        selection.move_right(5, &mut events);
        selection.move_right(5, &mut events);
        selection.move_down(5, &mut events);
        selection.move_down(5, &mut events);

        assert_eq!(selection.position(), Position::new(9, 4));
        assert_eq!(
            events,
            [
                SelectionEvent::Changed(Position::new(5, 0)),
                SelectionEvent::Changed(Position::new(9, 0)),
                SelectionEvent::Changed(Position::new(9, 4)),
            ]
        );

        events.clear();
        selection.move_up(5, &mut events);
        selection.move_left(5, &mut events);
        selection.move_left(5, &mut events);

        assert_eq!(selection.position(), Position::new(0, 0));
        assert_eq!(
            events,
            [
                SelectionEvent::Changed(Position::new(9, 0)),
                SelectionEvent::Changed(Position::new(4, 0)),
                SelectionEvent::Changed(Position::new(0, 0)),
            ]
        );
    }

    #[test]
    fn actions_carry_cursor_position() {
        let mut selection = Selection::new(Size::new(4, 4));
        let mut events: Vec<SelectionEvent> = Vec::new();

        selection.move_by(Direction::Down, 2, &mut events);
        selection.move_by(Direction::Right, 1, &mut events);
        selection.select(&mut events);
        selection.toggle_flag(&mut events);

        assert_eq!(
            events,
            [
                SelectionEvent::Changed(Position::new(0, 2)),
                SelectionEvent::Changed(Position::new(1, 2)),
                SelectionEvent::Select(Position::new(1, 2)),
                SelectionEvent::ToggleFlag(Position::new(1, 2)),
            ]
        );
    }

    #[test]
    fn single_cell_grid_never_moves() {
        let mut selection = Selection::new(Size::new(1, 1));
        let mut events: Vec<SelectionEvent> = Vec::new();

        for direction in [Direction::Left, Direction::Right, Direction::Up, Direction::Down] {
            assert_eq!(selection.move_by(direction, 5, &mut events), Update::NoChange);
        }

        assert!(events.is_empty());
    }
}
