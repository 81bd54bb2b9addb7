use crate::core::{Board, Color, GameBoard, Position};

/// 8 方向 (drow, dcol)
const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// 合法手生成 (行優先順)
pub fn legal_moves(board: &Board, color: Color) -> Vec<Position> {
    Position::all()
        .filter(|&pos| is_valid_move(board, color, pos))
        .collect()
}

/// 空きマスで、少なくとも 1 方向に相手の石を挟めるなら合法
pub fn is_valid_move(board: &Board, color: Color, pos: Position) -> bool {
    if !board.is_empty_at(pos) {
        return false;
    }
    DIRECTIONS
        .iter()
        .any(|&(dr, dc)| !ray_flips(board, color, pos, dr, dc).is_empty())
}

pub fn has_any_valid_move(board: &Board, color: Color) -> bool {
    Position::all().any(|pos| is_valid_move(board, color, pos))
}

/// 両者とも置けるマスがなければ終局 (盤が埋まった場合も含む)
pub fn is_terminal_state(board: &Board) -> bool {
    !has_any_valid_move(board, Color::Black) && !has_any_valid_move(board, Color::White)
}

/// 石数の差 (Black - White)
pub fn score(board: &Board) -> i32 {
    board.cells.iter().flatten().map(|&cell| cell as i32).sum()
}

/// 石数の多い側。同数なら None
pub fn winner(board: &Board) -> Option<Color> {
    match score(board).signum() {
        1 => Some(Color::Black),
        -1 => Some(Color::White),
        _ => None,
    }
}

/// pos に置いたときに返る石の一覧
pub fn flips(board: &Board, color: Color, pos: Position) -> Vec<Position> {
    if !board.is_empty_at(pos) {
        return Vec::new();
    }
    DIRECTIONS
        .iter()
        .flat_map(|&(dr, dc)| ray_flips(board, color, pos, dr, dc))
        .collect()
}

/// 1 方向分: 相手の石が 1 個以上続き、自分の石で終われば挟める
fn ray_flips(board: &Board, color: Color, from: Position, dr: i32, dc: i32) -> Vec<Position> {
    let mut run = Vec::new();
    let mut curr = from;
    while let Some(next) = curr.offset(dr, dc) {
        match board.get(next) {
            Some(c) if c == color.opponent() => {
                run.push(next);
                curr = next;
            }
            Some(_) => return run,
            None => break,
        }
    }
    Vec::new()
}

/// 盤面をその場で更新する。合法性は呼び出し側で確認済みとする
pub fn make_move(board: &mut Board, color: Color, pos: Position) {
    let flipped = flips(board, color, pos);
    board.place(pos, color);
    for p in flipped {
        board.place(p, color);
    }
    board.last_move = Some(pos);
}

/// 移動適用 (複製してから更新するので元の盤面は変わらない)
pub fn apply_move(board: &Board, color: Color, pos: Position) -> Board {
    let mut next = board.clone();
    make_move(&mut next, color, pos);
    next
}

impl GameBoard for Board {
    fn is_valid_move(&self, color: Color, pos: Position) -> bool {
        is_valid_move(self, color, pos)
    }

    fn make_move(&mut self, color: Color, pos: Position) {
        make_move(self, color, pos)
    }

    fn has_any_valid_move(&self, color: Color) -> bool {
        has_any_valid_move(self, color)
    }

    fn is_terminal_state(&self) -> bool {
        is_terminal_state(self)
    }

    fn score(&self) -> i32 {
        score(self)
    }

    fn cell_value_at(&self, pos: Position) -> i8 {
        self.value_at(pos)
    }
}
