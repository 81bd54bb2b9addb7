#[cfg(test)]
mod tests {
    use crate::core::setup::get_standard_setup;
    use crate::core::{setup_from_strings, Board, Color, GameBoard, Position};
    use crate::logic::{
        apply_move, flips, has_any_valid_move, is_terminal_state, legal_moves, score, winner,
    };

    #[test]
    fn test_opening_moves_for_black() {
        let board = Board::initial();
        let moves = legal_moves(&board, Color::Black);
        assert_eq!(
            moves,
            vec![
                Position::new(2, 3),
                Position::new(3, 2),
                Position::new(4, 5),
                Position::new(5, 4),
            ]
        );

        let white = legal_moves(&board, Color::White);
        assert_eq!(white.len(), 4);
    }

    #[test]
    fn test_apply_move_flips_captured_disc() {
        let board = Board::initial();
        let next = apply_move(&board, Color::Black, Position::new(2, 3));

        assert_eq!(next.get(Position::new(2, 3)), Some(Color::Black));
        assert_eq!(next.get(Position::new(3, 3)), Some(Color::Black));
        assert_eq!(next.count(Color::Black), 4);
        assert_eq!(next.count(Color::White), 1);
        assert_eq!(score(&next), 3);
        assert_eq!(next.last_move, Some(Position::new(2, 3)));
    }

    #[test]
    fn test_flips_in_every_direction() {
        // 中央 (3,3) の周囲 8 方向すべてで挟める配置
        let board = setup_from_strings(&[
            "B . . B . . B .",
            ". W . W . W . .",
            ". . W W W . . .",
            "B W W . W W B .",
            ". . W W W . . .",
            ". W . W . W . .",
            "B . . B . . B .",
            ". . . . . . . .",
        ])
        .unwrap();

        let flipped = flips(&board, Color::Black, Position::new(3, 3));
        assert_eq!(flipped.len(), 16);

        let next = apply_move(&board, Color::Black, Position::new(3, 3));
        assert_eq!(next.count(Color::White), 0);
    }

    #[test]
    fn test_ray_must_end_on_own_disc() {
        // W が盤端まで続くので挟めない
        let board = setup_from_strings(&[
            ". W W . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . B",
        ])
        .unwrap();

        assert!(!board.is_valid_move(Color::Black, Position::new(0, 0)));
        assert!(flips(&board, Color::Black, Position::new(0, 3)).is_empty());
        assert!(!has_any_valid_move(&board, Color::Black));
    }

    #[test]
    fn test_occupied_cell_is_never_valid() {
        let board = Board::initial();
        assert!(!board.is_valid_move(Color::Black, Position::new(3, 3)));
        assert!(flips(&board, Color::Black, Position::new(3, 3)).is_empty());
    }

    #[test]
    fn test_full_board_is_terminal() {
        let mut board = Board::new();
        for (i, pos) in Position::all().enumerate() {
            let color = if i < 40 { Color::Black } else { Color::White };
            board.place(pos, color);
        }

        assert!(is_terminal_state(&board));
        assert_eq!(score(&board), 40 - 24);
        assert_eq!(winner(&board), Some(Color::Black));
    }

    #[test]
    fn test_blocked_board_is_terminal() {
        // 片側の石しかない盤面はどちらも打てない
        let board = setup_from_strings(&[
            "W W . . . . . .",
            "W . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
        ])
        .unwrap();

        assert!(board.is_terminal_state());
        assert_eq!(board.score(), -3);
        assert_eq!(winner(&board), Some(Color::White));
    }

    #[test]
    fn test_clone_isolation() {
        let board = setup_from_strings(&get_standard_setup()).unwrap();
        let mut copy = board.clone();
        copy.make_move(Color::Black, Position::new(2, 3));

        for pos in Position::all() {
            if pos == Position::new(2, 3) || pos == Position::new(3, 3) {
                assert_ne!(board.cell_value_at(pos), copy.cell_value_at(pos));
            }
        }
        assert_eq!(board, Board::initial());
    }
}
