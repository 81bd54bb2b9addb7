//! Hand-built game trees for search tests.
//!
//! Every node carries a utility value and an explicit list of moves per color.
//! The value is exposed through the interior cells (one disc per point, up to
//! 36), so the default evaluator returns exactly that value on a non-terminal
//! node.

use crate::core::{Color, GameBoard, Position, BOARD_SIZE};
use std::rc::Rc;

#[derive(Debug)]
struct Node {
    value: i32,
    terminal: bool,
    edges: Vec<(Color, Position, usize)>,
}

#[derive(Debug, Default)]
pub struct TreeBuilder {
    nodes: Vec<Node>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node(&mut self, value: i32) -> usize {
        self.push(value, false)
    }

    pub fn terminal(&mut self, value: i32) -> usize {
        self.push(value, true)
    }

    fn push(&mut self, value: i32, terminal: bool) -> usize {
        assert!(value.abs() <= 36, "value does not fit the interior cells");
        self.nodes.push(Node {
            value,
            terminal,
            edges: Vec::new(),
        });
        self.nodes.len() - 1
    }

    pub fn edge(&mut self, from: usize, color: Color, pos: Position, to: usize) {
        self.nodes[from].edges.push((color, pos, to));
    }

    pub fn build(self, root: usize) -> TreeBoard {
        TreeBoard {
            nodes: Rc::new(self.nodes),
            current: root,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TreeBoard {
    nodes: Rc<Vec<Node>>,
    current: usize,
}

impl TreeBoard {
    fn node(&self) -> &Node {
        &self.nodes[self.current]
    }
}

impl GameBoard for TreeBoard {
    fn is_valid_move(&self, color: Color, pos: Position) -> bool {
        self.node()
            .edges
            .iter()
            .any(|&(c, p, _)| c == color && p == pos)
    }

    fn make_move(&mut self, color: Color, pos: Position) {
        let next = self
            .node()
            .edges
            .iter()
            .find(|&&(c, p, _)| c == color && p == pos)
            .map(|&(_, _, to)| to)
            .expect("move is not in the tree");
        self.current = next;
    }

    fn has_any_valid_move(&self, color: Color) -> bool {
        self.node().edges.iter().any(|&(c, _, _)| c == color)
    }

    fn is_terminal_state(&self) -> bool {
        self.node().terminal
    }

    fn score(&self) -> i32 {
        self.node().value
    }

    fn cell_value_at(&self, pos: Position) -> i8 {
        let last = BOARD_SIZE - 1;
        if pos.row == 0 || pos.row == last || pos.col == 0 || pos.col == last {
            return 0;
        }
        let index = ((pos.row - 1) * (BOARD_SIZE - 2) + (pos.col - 1)) as i32;
        let value = self.node().value;
        if index < value.abs() {
            value.signum() as i8
        } else {
            0
        }
    }
}
