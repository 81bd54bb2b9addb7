use super::eval::evaluate;
use crate::core::{Board, Color, Position};
use crate::logic::apply_move;
use crate::player::PlayerController;
use rand::prelude::*;
use std::f64;

/// 1 手先の評価値に対するソフトマックスで手を選ぶ
pub struct WeightedRandomAI {
    pub name: String,
    pub temperature: f64,
}

impl WeightedRandomAI {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            temperature: 10.0,
        }
    }

    /// Softmax-like probability distribution from scores
    fn get_probabilities(&self, board: &Board, color: Color, moves: &[Position]) -> Vec<f64> {
        let scores: Vec<f64> = moves
            .iter()
            .map(|&pos| {
                let next_board = apply_move(board, color, pos);
                // 手番側から見た値にそろえる
                (evaluate(&next_board) * color.sign()) as f64
            })
            .collect();

        if scores.is_empty() {
            return vec![];
        }

        let max_score = scores.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b));
        let exps: Vec<f64> = scores
            .iter()
            .map(|&s| ((s - max_score) / self.temperature).exp())
            .collect();
        let sum_exp: f64 = exps.iter().sum();

        exps.iter().map(|&e| e / sum_exp).collect()
    }
}

impl PlayerController for WeightedRandomAI {
    fn choose_move(&self, board: &Board, color: Color, moves: &[Position]) -> Option<Position> {
        let last = *moves.last()?;

        let probs = self.get_probabilities(board, color, moves);
        let mut rng = thread_rng();

        // Weighted selection
        let mut r = rng.gen::<f64>();
        for (i, &p) in probs.iter().enumerate() {
            if r < p {
                return Some(moves[i]);
            }
            r -= p;
        }

        Some(last)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
