use super::types::{Color, Position, BOARD_SIZE};
use serde::{Deserialize, Serialize};

/// 盤面
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// 各マスの値 (+1: Black, -1: White, 0: 空き)
    pub cells: [[i8; BOARD_SIZE]; BOARD_SIZE],
    /// 直前に石が置かれたマス (表示用)
    pub last_move: Option<Position>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// 空の盤面
    pub fn new() -> Self {
        Board {
            cells: [[0; BOARD_SIZE]; BOARD_SIZE],
            last_move: None,
        }
    }

    /// 標準の初期配置 (d4, e5 が White / d5, e4 が Black)
    pub fn initial() -> Self {
        let mut board = Board::new();
        board.place(Position::new(3, 3), Color::White);
        board.place(Position::new(4, 4), Color::White);
        board.place(Position::new(3, 4), Color::Black);
        board.place(Position::new(4, 3), Color::Black);
        board
    }

    pub fn place(&mut self, pos: Position, color: Color) {
        self.cells[pos.row][pos.col] = color.cell();
    }

    pub fn get(&self, pos: Position) -> Option<Color> {
        Color::from_cell(self.cells[pos.row][pos.col])
    }

    pub fn value_at(&self, pos: Position) -> i8 {
        self.cells[pos.row][pos.col]
    }

    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.cells[pos.row][pos.col] == 0
    }

    pub fn count(&self, color: Color) -> usize {
        let target = color.cell();
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == target)
            .count()
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&cell| cell == 0).count()
    }
}
