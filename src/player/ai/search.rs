//! Shared pieces of the game-tree search and the dispatcher.
//!
//! Both strategies walk the tree the same way: enumerate legal cells in
//! row-major order, clone the board, apply the move, resolve who moves next,
//! then either evaluate (terminal board or depth 0) or recurse with
//! `depth - 1`. Only the selection rule and the bound handling differ.

use super::alpha_beta::PruneRule;
use super::config::AIConfig;
use super::eval::WeightTable;
use super::trace::{NoTrace, SearchTrace};
use crate::core::{Color, GameBoard, Move, Position};

/// 合法手の列挙 (行優先順、毎回生成し直す)
pub fn legal_moves<B: GameBoard>(board: &B, color: Color) -> Vec<Position> {
    Position::all()
        .filter(|&pos| board.is_valid_move(color, pos))
        .collect()
}

/// 直前に打った側から次の手番を決める
///
/// 相手に合法手がなければ相手はパスし、同じ側がもう一度打つ。両者とも打てない
/// 場合は終局なので、呼び出し側が先に `is_terminal_state` を確認すること。
pub fn next_mover<B: GameBoard>(board: &B, just_moved: Color) -> Color {
    if board.has_any_valid_move(-just_moved) {
        -just_moved
    } else {
        just_moved
    }
}

/// 同点時にどちらの手を残すか
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum TieBreak {
    /// 後に列挙された手 (非厳密比較)
    Last,
    /// 先に列挙された手 (厳密比較)
    First,
}

/// Whether `candidate` replaces `best` for the side `color`.
pub(super) fn improves(color: Color, candidate: i32, best: i32, tie: TieBreak) -> bool {
    let candidate = color.sign() * candidate;
    let best = color.sign() * best;
    match tie {
        TieBreak::Last => candidate >= best,
        TieBreak::First => candidate > best,
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// search frames entered
    pub nodes: u64,
    /// evaluator calls
    pub evaluations: u64,
    pub cutoffs: u64,
}

/// One search invocation's settings and counters.
pub struct Searcher<'a> {
    table: WeightTable,
    pub(super) prune_rule: PruneRule,
    pub(super) trace: &'a dyn SearchTrace,
    pub(super) stats: SearchStats,
}

impl Default for Searcher<'static> {
    fn default() -> Self {
        Searcher::new(&AIConfig::default(), &NoTrace)
    }
}

impl<'a> Searcher<'a> {
    pub fn new(config: &AIConfig, trace: &'a dyn SearchTrace) -> Self {
        Searcher {
            table: WeightTable::from_config(&config.evaluation),
            prune_rule: config.search.prune_rule,
            trace,
            stats: SearchStats::default(),
        }
    }

    pub fn with_prune_rule(mut self, rule: PruneRule) -> Self {
        self.prune_rule = rule;
        self
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Search entry point: plain minimax at depth 0, alpha-beta otherwise.
    ///
    /// Returns `None` when `color` has no legal move on `board`.
    pub fn run<B: GameBoard>(&mut self, color: Color, board: &B, depth: u32) -> Option<Move> {
        if depth == 0 {
            self.minimax(color, board, depth)
        } else {
            self.alpha_beta(color, board, depth, i32::MIN, i32::MAX)
        }
    }

    pub(super) fn evaluate<B: GameBoard>(&mut self, board: &B) -> i32 {
        self.stats.evaluations += 1;
        let utility = self.table.evaluate(board);
        self.trace.on_evaluate(utility);
        utility
    }

    /// Clone `board`, play `pos` for `color`, and resolve the side to move.
    pub(super) fn expand<B: GameBoard>(
        &mut self,
        color: Color,
        board: &B,
        pos: Position,
        depth: u32,
    ) -> (B, Color) {
        self.trace.on_node(color, pos, depth);
        let mut child = board.clone();
        child.make_move(color, pos);
        let next = next_mover(&child, color);
        (child, next)
    }

    /// Rank of a child board: evaluated at the horizon or when terminal,
    /// otherwise the rank of the best reply found by `recurse`.
    pub(super) fn rank_child<B, F>(&mut self, child: &B, depth: u32, recurse: F) -> i32
    where
        B: GameBoard,
        F: FnOnce(&mut Self) -> Option<Move>,
    {
        if child.is_terminal_state() || depth == 0 {
            return self.evaluate(child);
        }
        match recurse(self) {
            Some(reply) => reply.rank,
            None => self.evaluate(child),
        }
    }
}

/// 既定設定で探索する
pub fn run<B: GameBoard>(color: Color, board: &B, depth: u32) -> Option<Move> {
    Searcher::default().run(color, board, depth)
}
