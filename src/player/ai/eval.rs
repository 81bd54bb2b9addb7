//! Positional evaluation.
//!
//! Utility is absolute: positive favors Black (+1), negative favors White (-1).

use super::config::EvaluationConfig;
use crate::core::{GameBoard, Position, BOARD_SIZE};
use once_cell::sync::Lazy;

static DEFAULT_TABLE: Lazy<WeightTable> =
    Lazy::new(|| WeightTable::from_config(&EvaluationConfig::default()));

/// マスごとの重みと終局ボーナス
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightTable {
    weights: [[i32; BOARD_SIZE]; BOARD_SIZE],
    terminal_bonus: i32,
}

impl WeightTable {
    pub fn from_config(config: &EvaluationConfig) -> Self {
        let mut weights = [[0; BOARD_SIZE]; BOARD_SIZE];
        for pos in Position::all() {
            weights[pos.row][pos.col] = if pos.is_corner() {
                config.corner_weight
            } else if pos.is_edge() {
                config.edge_weight
            } else {
                config.interior_weight
            };
        }
        WeightTable {
            weights,
            terminal_bonus: config.terminal_bonus,
        }
    }

    pub fn weight(&self, pos: Position) -> i32 {
        self.weights[pos.row][pos.col]
    }

    /// 石の配置だけによる重み付き和
    pub fn positional<B: GameBoard>(&self, board: &B) -> i32 {
        Position::all()
            .map(|pos| board.cell_value_at(pos) as i32 * self.weight(pos))
            .sum()
    }

    pub fn evaluate<B: GameBoard>(&self, board: &B) -> i32 {
        let mut score = self.positional(board);
        if board.is_terminal_state() {
            match board.score().signum() {
                1 => score += self.terminal_bonus,
                -1 => score -= self.terminal_bonus,
                _ => {}
            }
        }
        score
    }
}

impl Default for WeightTable {
    fn default() -> Self {
        DEFAULT_TABLE.clone()
    }
}

/// 既定の重みで評価する
pub fn evaluate<B: GameBoard>(board: &B) -> i32 {
    DEFAULT_TABLE.evaluate(board)
}
