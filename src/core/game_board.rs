//! Board collaborator interface consumed by the search.
//!
//! The search only needs these queries plus deep cloning; any board type
//! implementing them can be searched.

use super::types::{Color, Position};

pub trait GameBoard: Clone {
    /// Whether `color` may place a disc at `pos`.
    fn is_valid_move(&self, color: Color, pos: Position) -> bool;

    /// Apply a placement in place. Callers clone beforehand to keep the parent.
    fn make_move(&mut self, color: Color, pos: Position);

    fn has_any_valid_move(&self, color: Color) -> bool;

    fn is_terminal_state(&self) -> bool;

    /// Signed aggregate: positive when Black leads, negative when White leads.
    fn score(&self) -> i32;

    /// Cell value in {-1, 0, +1}.
    fn cell_value_at(&self, pos: Position) -> i8;
}
