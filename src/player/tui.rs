use crate::core::{Board, Color, Position, BOARD_SIZE};
use crate::display::{render_board, DisplayState};
use crate::player::PlayerController;
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use std::time::Duration;

pub struct TuiController {
    name: String,
}

impl TuiController {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

impl PlayerController for TuiController {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_human(&self) -> bool {
        true
    }

    fn choose_move(
        &self,
        board: &Board,
        color: Color,
        legal_moves_list: &[Position],
    ) -> Option<Position> {
        let mut state = DisplayState::default();
        state.last_move = board.last_move;
        state.highlights = legal_moves_list.to_vec();
        state.status_msg = Some(format!("{}'s turn ({})", self.name, color));

        // 初期カーソル位置を最初の合法手に合わせる
        if let Some(&first) = legal_moves_list.first() {
            state.cursor = first;
        }

        loop {
            // 描画。端末に書けなければ投了扱い
            render_board(board, &state).ok()?;
            print!("[Arrows]: Move | [Enter]: Place | [q]: Resign\r\n");

            if !event::poll(Duration::from_millis(100)).ok()? {
                continue;
            }
            if let Event::Key(KeyEvent { code, .. }) = event::read().ok()? {
                match code {
                    KeyCode::Char('q') => return None,
                    KeyCode::Up => {
                        if state.cursor.row > 0 {
                            state.cursor.row -= 1;
                        }
                    }
                    KeyCode::Down => {
                        if state.cursor.row < BOARD_SIZE - 1 {
                            state.cursor.row += 1;
                        }
                    }
                    KeyCode::Left => {
                        if state.cursor.col > 0 {
                            state.cursor.col -= 1;
                        }
                    }
                    KeyCode::Right => {
                        if state.cursor.col < BOARD_SIZE - 1 {
                            state.cursor.col += 1;
                        }
                    }
                    KeyCode::Enter | KeyCode::Char(' ') => {
                        if legal_moves_list.contains(&state.cursor) {
                            return Some(state.cursor);
                        }
                        state.status_msg = Some(format!(
                            "{} is not a legal move for {}",
                            state.cursor, color
                        ));
                    }
                    _ => {}
                }
            }
        }
    }
}
