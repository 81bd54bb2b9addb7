use super::types::Position;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 探索が返す指し手。rank は探索によって下から埋められる効用値
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub pos: Position,
    pub rank: i32,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} (rank {})", self.pos, self.rank)
    }
}
