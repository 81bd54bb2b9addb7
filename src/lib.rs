//! Reversi move selection by fixed-depth game-tree search.
//!
//! `player::ai::run(color, &board, depth)` is the search entry point. The
//! rest of the crate is the board, the rules and a terminal harness.

pub mod core;
pub mod display;
pub mod game;
pub mod logic;
pub mod player;
pub mod selfplay;

mod logic_tests;

pub use crate::core::{Board, Color, GameBoard, Move, Position};
pub use crate::player::ai::run;
