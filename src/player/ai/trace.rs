//! Search diagnostics hooks.
//!
//! The search reports evaluations, expanded nodes and cutoffs here. The
//! default implementation ignores everything.

use crate::core::{Color, Position};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::path::Path;

pub trait SearchTrace {
    /// A candidate move was chosen for expansion at `depth`.
    fn on_node(&self, _color: Color, _pos: Position, _depth: u32) {}

    /// The evaluator was consulted at the horizon or on a terminal board.
    fn on_evaluate(&self, _utility: i32) {}

    /// A node finished with `rank` as its best value.
    fn on_result(&self, _color: Color, _pos: Position, _rank: i32) {}

    /// Remaining siblings were skipped after the bounds crossed.
    fn on_cutoff(&self, _depth: u32, _alpha: i32, _beta: i32) {}
}

pub struct NoTrace;

impl SearchTrace for NoTrace {}

/// Prints every evaluation and cutoff to stderr.
pub struct StderrTrace;

impl SearchTrace for StderrTrace {
    fn on_evaluate(&self, utility: i32) {
        eprintln!("Tile Score: {}", utility);
    }

    fn on_cutoff(&self, depth: u32, alpha: i32, beta: i32) {
        eprintln!("cutoff at depth {} (alpha {}, beta {})", depth, alpha, beta);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TraceEvent {
    Node {
        color: Color,
        pos: Position,
        depth: u32,
    },
    Evaluate {
        utility: i32,
    },
    Result {
        color: Color,
        pos: Position,
        rank: i32,
    },
    Cutoff {
        depth: u32,
        alpha: i32,
        beta: i32,
    },
}

/// 探索木を後から可視化するためにイベントを記録する
#[derive(Default)]
pub struct TraceRecorder {
    events: RefCell<Vec<TraceEvent>>,
}

impl TraceRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<TraceEvent> {
        self.events.borrow().clone()
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let path = path.as_ref();
        let file = std::fs::File::create(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        serde_json::to_writer(file, &*self.events.borrow())?;
        Ok(())
    }
}

impl SearchTrace for TraceRecorder {
    fn on_node(&self, color: Color, pos: Position, depth: u32) {
        self.events
            .borrow_mut()
            .push(TraceEvent::Node { color, pos, depth });
    }

    fn on_evaluate(&self, utility: i32) {
        self.events
            .borrow_mut()
            .push(TraceEvent::Evaluate { utility });
    }

    fn on_result(&self, color: Color, pos: Position, rank: i32) {
        self.events
            .borrow_mut()
            .push(TraceEvent::Result { color, pos, rank });
    }

    fn on_cutoff(&self, depth: u32, alpha: i32, beta: i32) {
        self.events
            .borrow_mut()
            .push(TraceEvent::Cutoff { depth, alpha, beta });
    }
}
