use super::search::{improves, legal_moves, Searcher, TieBreak};
use crate::core::{Color, GameBoard, Move};
use serde::{Deserialize, Serialize};

/// How alpha-beta tightens its window after each candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PruneRule {
    /// Black raises alpha, White lowers beta.
    #[default]
    Standard,
    /// Pass-dependent update kept for bit-exact replays of older games:
    /// beta follows the best rank while the opponent is to move next, alpha
    /// only moves when the opponent passes and the best rank is not above it.
    /// Starting from the full `i32` window this never prunes.
    Legacy,
}

impl<'a> Searcher<'a> {
    /// Depth-bounded minimax with alpha-beta pruning.
    ///
    /// Unlike [`Searcher::minimax`], the running best is only replaced by a
    /// strictly better rank, so on ties the move enumerated first wins.
    /// Returns `None` if `color` has no legal move.
    pub fn alpha_beta<B: GameBoard>(
        &mut self,
        color: Color,
        board: &B,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
    ) -> Option<Move> {
        self.stats.nodes += 1;
        let mut best: Option<Move> = None;

        for pos in legal_moves(board, color) {
            let (child, next) = self.expand(color, board, pos, depth);
            let rank = self.rank_child(&child, depth, |s| {
                s.alpha_beta(next, &child, depth - 1, alpha, beta)
            });

            let current = match best {
                Some(current) if !improves(color, rank, current.rank, TieBreak::First) => current,
                _ => Move { pos, rank },
            };
            best = Some(current);

            match self.prune_rule {
                PruneRule::Standard => match color {
                    Color::Black => alpha = alpha.max(current.rank),
                    Color::White => beta = beta.min(current.rank),
                },
                PruneRule::Legacy => {
                    if next != color || current.rank > alpha {
                        if next == -color && current.rank < beta {
                            beta = current.rank;
                        }
                    } else {
                        alpha = current.rank;
                    }
                }
            }

            if alpha >= beta {
                self.stats.cutoffs += 1;
                self.trace.on_cutoff(depth, alpha, beta);
                break;
            }
        }

        if let Some(mv) = best {
            self.trace.on_result(color, mv.pos, mv.rank);
        }
        best
    }
}
