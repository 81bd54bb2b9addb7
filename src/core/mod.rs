pub mod board;
pub mod game_board;
pub mod r#move;
pub mod setup;
pub mod types;

pub use board::Board;
pub use game_board::GameBoard;
pub use r#move::Move;
pub use setup::setup_from_strings;
pub use types::{Color, Position, BOARD_SIZE};
