use crate::core::{Board, Color, Position, BOARD_SIZE};
use anyhow::{bail, Context};

/// 文字列配列から盤面を初期化する
///
/// 各行は空白区切りの `B` (Black) / `W` (White) / `.` (空き) を 8 個並べる。
pub fn setup_from_strings(setup: &[&str]) -> anyhow::Result<Board> {
    if setup.len() != BOARD_SIZE {
        bail!("expected {} rows, got {}", BOARD_SIZE, setup.len());
    }

    let mut board = Board::new();
    for (row, line) in setup.iter().enumerate() {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != BOARD_SIZE {
            bail!(
                "row {}: expected {} cells, got {}",
                row + 1,
                BOARD_SIZE,
                tokens.len()
            );
        }

        for (col, s) in tokens.into_iter().enumerate() {
            let cell = parse_cell(s).with_context(|| format!("row {}, column {}", row + 1, col + 1))?;
            if let Some(color) = cell {
                board.place(Position::new(row, col), color);
            }
        }
    }
    Ok(board)
}

fn parse_cell(s: &str) -> anyhow::Result<Option<Color>> {
    match s {
        "." => Ok(None),
        "B" | "b" | "X" | "x" => Ok(Some(Color::Black)),
        "W" | "w" | "O" | "o" => Ok(Some(Color::White)),
        _ => bail!("unknown cell token {:?}", s),
    }
}

/// 盤面を setup_from_strings と同じ書式の行に戻す
pub fn board_to_strings(board: &Board) -> Vec<String> {
    board
        .cells
        .iter()
        .map(|row| {
            row.iter()
                .map(|&cell| match Color::from_cell(cell) {
                    Some(Color::Black) => "B",
                    Some(Color::White) => "W",
                    None => ".",
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

pub fn get_standard_setup() -> Vec<&'static str> {
    vec![
        ". . . . . . . .",
        ". . . . . . . .",
        ". . . . . . . .",
        ". . . W B . . .",
        ". . . B W . . .",
        ". . . . . . . .",
        ". . . . . . . .",
        ". . . . . . . .",
    ]
}

/// 対角線上に配置した開始局面 (クロス配置)
pub fn get_cross_setup() -> Vec<&'static str> {
    vec![
        ". . . . . . . .",
        ". . . . . . . .",
        ". . . . . . . .",
        ". . . W W . . .",
        ". . . B B . . .",
        ". . . . . . . .",
        ". . . . . . . .",
        ". . . . . . . .",
    ]
}
