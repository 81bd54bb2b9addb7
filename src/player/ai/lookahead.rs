use super::config::AIConfig;
use super::search::{SearchStats, Searcher};
use super::trace::{NoTrace, SearchTrace, StderrTrace, TraceRecorder};
use crate::core::{Board, Color, Move, Position};
use crate::player::PlayerController;
use std::cell::Cell;

/// 固定深さの先読み AI
pub struct LookaheadAI {
    pub name: String,
    config: AIConfig,
    last_stats: Cell<SearchStats>,
}

impl LookaheadAI {
    pub fn new(name: &str) -> Self {
        Self::with_config(name, AIConfig::default())
    }

    pub fn with_config(name: &str, config: AIConfig) -> Self {
        Self {
            name: name.to_string(),
            config,
            last_stats: Cell::new(SearchStats::default()),
        }
    }

    pub fn with_depth(mut self, depth: u32) -> Self {
        self.config.search.depth = depth;
        self
    }

    /// `color` の最善手を探索する。打てる手がなければ None
    ///
    /// `search.trace_file` が設定されていれば探索木をそのファイルに書き出す。
    pub fn search(&self, board: &Board, color: Color) -> Option<Move> {
        let Some(path) = &self.config.search.trace_file else {
            let trace: &dyn SearchTrace = if self.config.search.trace {
                &StderrTrace
            } else {
                &NoTrace
            };
            return self.search_with(board, color, trace);
        };

        let recorder = TraceRecorder::new();
        let best = self.search_with(board, color, &recorder);
        // 書き出しに失敗しても着手は返す
        if let Err(e) = recorder.save(path) {
            eprintln!("failed to write search trace: {:#}", e);
        }
        best
    }

    fn search_with(&self, board: &Board, color: Color, trace: &dyn SearchTrace) -> Option<Move> {
        let mut searcher = Searcher::new(&self.config, trace);
        let best = searcher.run(color, board, self.config.search.depth);
        self.last_stats.set(searcher.stats());
        best
    }

    /// 直前の探索の統計
    pub fn last_stats(&self) -> SearchStats {
        self.last_stats.get()
    }
}

impl PlayerController for LookaheadAI {
    fn choose_move(&self, board: &Board, color: Color, legal_moves: &[Position]) -> Option<Position> {
        if legal_moves.is_empty() {
            return None;
        }
        self.search(board, color).map(|mv| mv.pos)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
