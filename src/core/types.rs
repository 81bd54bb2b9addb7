use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Neg;

/// 盤の一辺のマス数
pub const BOARD_SIZE: usize = 8;

/// 手番の色 (Black = +1, White = -1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Black, // 先手
    White, // 後手
}

impl Default for Color {
    fn default() -> Self {
        Color::Black
    }
}

impl Color {
    pub fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// 符号付き単位値。評価値に掛けると手番側から見た値になる
    pub fn sign(self) -> i32 {
        match self {
            Color::Black => 1,
            Color::White => -1,
        }
    }

    /// マスに置かれる値
    pub fn cell(self) -> i8 {
        self.sign() as i8
    }

    /// マスの値から色を得る。空きマスは None
    pub fn from_cell(value: i8) -> Option<Color> {
        match value {
            1 => Some(Color::Black),
            -1 => Some(Color::White),
            _ => None,
        }
    }
}

impl Neg for Color {
    type Output = Color;

    fn neg(self) -> Color {
        self.opponent()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Color::Black => write!(f, "Black"),
            Color::White => write!(f, "White"),
        }
    }
}

/// 盤面座標 (0-indexed)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }

    /// 行優先順に全 64 マスを返す
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Position::new(row, col)))
    }

    /// (drow, dcol) だけずらした座標。盤外なら None
    pub fn offset(self, drow: i32, dcol: i32) -> Option<Position> {
        let row = self.row as i32 + drow;
        let col = self.col as i32 + dcol;
        if (0..BOARD_SIZE as i32).contains(&row) && (0..BOARD_SIZE as i32).contains(&col) {
            Some(Position::new(row as usize, col as usize))
        } else {
            None
        }
    }

    pub fn is_corner(self) -> bool {
        let last = BOARD_SIZE - 1;
        (self.row == 0 || self.row == last) && (self.col == 0 || self.col == last)
    }

    /// 角を含む外周マス
    pub fn is_edge(self) -> bool {
        let last = BOARD_SIZE - 1;
        self.row == 0 || self.row == last || self.col == 0 || self.col == last
    }
}

impl fmt::Display for Position {
    /// "d3" 形式 (列 a-h, 行 1-8)
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.col as u8) as char, self.row + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_negation_is_opponent() {
        assert_eq!(-Color::Black, Color::White);
        assert_eq!(-Color::White, Color::Black);
        assert_eq!(Color::Black.sign(), -Color::White.sign());
        assert_eq!(Color::from_cell(0), None);
    }

    #[test]
    fn test_position_all_is_row_major() {
        let all: Vec<Position> = Position::all().collect();
        assert_eq!(all.len(), 64);
        assert_eq!(all[0], Position::new(0, 0));
        assert_eq!(all[1], Position::new(0, 1));
        assert_eq!(all[8], Position::new(1, 0));
        assert_eq!(all[63], Position::new(7, 7));
    }

    #[test]
    fn test_position_classes() {
        assert!(Position::new(7, 0).is_corner());
        assert!(Position::new(7, 0).is_edge());
        assert!(!Position::new(0, 3).is_corner());
        assert!(Position::new(0, 3).is_edge());
        assert!(!Position::new(3, 3).is_edge());
        assert_eq!(Position::new(0, 0).offset(-1, 0), None);
        assert_eq!(Position::new(2, 3).to_string(), "d3");
    }
}
