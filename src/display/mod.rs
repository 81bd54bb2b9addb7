use crate::core::{Board, Color, Position, BOARD_SIZE};
use crossterm::{cursor, execute, style::Stylize, terminal};
use std::io::{self, stdout, Write};

pub struct DisplayState {
    pub cursor: Position,
    pub highlights: Vec<Position>,
    pub status_msg: Option<String>,
    pub last_move: Option<Position>,
    pub show_cursor: bool,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self {
            cursor: Position::default(),
            highlights: Vec::new(),
            status_msg: None,
            last_move: None,
            show_cursor: true, // Default to showing cursor
        }
    }
}

pub fn disc_char(color: Option<Color>) -> char {
    match color {
        Some(Color::Black) => '●',
        Some(Color::White) => '○',
        None => '.',
    }
}

pub fn render_board(board: &Board, state: &DisplayState) -> io::Result<()> {
    let mut out = stdout();

    // 画面クリア（スクロール防止）
    execute!(
        out,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    )?;

    print!("=== Reversi Look-ahead Engine ===\r\n");
    if let Some(msg) = &state.status_msg {
        print!("{}\r\n", msg.clone().bold().yellow());
    } else {
        print!("\r\n");
    }
    print!("\r\n");

    // 列ラベル
    print!("    ");
    for col in 0..BOARD_SIZE {
        print!(" {}  ", (b'a' + col as u8) as char);
    }
    print!("\r\n");
    print!("   +{}+\r\n", "----".repeat(BOARD_SIZE));

    for row in 0..BOARD_SIZE {
        print!("{:2} |", row + 1);
        for col in 0..BOARD_SIZE {
            let pos = Position::new(row, col);
            let disc = board.get(pos);

            let is_cursor = state.show_cursor && state.cursor == pos;
            let is_highlight = state.highlights.contains(&pos);
            let is_last_move = state.last_move == Some(pos);

            let (prefix, suffix) = if is_cursor {
                ("[", "]")
            } else if is_highlight {
                ("(", ")")
            } else if is_last_move {
                ("{", "}")
            } else {
                (" ", " ")
            };
            let cell_text = format!("{}{}{} ", prefix, disc_char(disc), suffix);

            if is_cursor {
                print!("{}", cell_text.yellow());
            } else if is_highlight {
                print!("{}", cell_text.green());
            } else if is_last_move {
                print!("{}", cell_text.red());
            } else {
                match disc {
                    Some(Color::Black) => print!("{}", cell_text.cyan()),
                    Some(Color::White) => print!("{}", cell_text.magenta()),
                    None => print!("{}", cell_text),
                }
            }
        }
        print!("|\r\n");
    }
    print!("   +{}+\r\n", "----".repeat(BOARD_SIZE));

    render_counts(board);
    out.flush()
}

fn render_counts(board: &Board) {
    print!(
        "{} Black: {:2}   {} White: {:2}\r\n",
        disc_char(Some(Color::Black)),
        board.count(Color::Black),
        disc_char(Some(Color::White)),
        board.count(Color::White)
    );
}
