use super::search::{improves, legal_moves, Searcher, TieBreak};
use crate::core::{Color, GameBoard, Move};

impl<'a> Searcher<'a> {
    /// Exhaustive depth-bounded minimax.
    ///
    /// Black maximizes and White minimizes; both are expressed by multiplying
    /// ranks by the mover's sign. On equal ranks the move enumerated last
    /// wins. Returns `None` if `color` has no legal move.
    pub fn minimax<B: GameBoard>(&mut self, color: Color, board: &B, depth: u32) -> Option<Move> {
        self.stats.nodes += 1;
        let mut best: Option<Move> = None;

        for pos in legal_moves(board, color) {
            let (child, next) = self.expand(color, board, pos, depth);
            let rank = self.rank_child(&child, depth, |s| s.minimax(next, &child, depth - 1));

            best = match best {
                Some(current) if !improves(color, rank, current.rank, TieBreak::Last) => {
                    Some(current)
                }
                _ => Some(Move { pos, rank }),
            };
        }

        if let Some(mv) = best {
            self.trace.on_result(color, mv.pos, mv.rank);
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use crate::core::{Board, Color, Position};
    use crate::player::ai::search::Searcher;
    use crate::player::ai::tree_board::TreeBuilder;

    #[test]
    fn test_minimax_picks_max_for_black_and_min_for_white() {
        let mut tree = TreeBuilder::new();
        let root = tree.node(0);
        let leaves: Vec<usize> = [4, -7, 12, 3].iter().map(|&v| tree.node(v)).collect();
        for (i, &leaf) in leaves.iter().enumerate() {
            tree.edge(root, Color::Black, Position::new(0, i), leaf);
            tree.edge(root, Color::White, Position::new(1, i), leaf);
        }
        let board = tree.build(root);

        let mut searcher = Searcher::default();
        let black = searcher.minimax(Color::Black, &board, 0).unwrap();
        assert_eq!(black.pos, Position::new(0, 2));
        assert_eq!(black.rank, 12);

        let white = searcher.minimax(Color::White, &board, 0).unwrap();
        assert_eq!(white.pos, Position::new(1, 1));
        assert_eq!(white.rank, -7);
    }

    #[test]
    fn test_minimax_tie_keeps_last_move() {
        let mut tree = TreeBuilder::new();
        let root = tree.node(0);
        for i in 0..3 {
            let leaf = tree.node(6);
            tree.edge(root, Color::White, Position::new(0, i), leaf);
        }
        let board = tree.build(root);

        let best = Searcher::default()
            .minimax(Color::White, &board, 0)
            .unwrap();
        assert_eq!(best.pos, Position::new(0, 2));
        assert_eq!(best.rank, 6);
    }

    #[test]
    fn test_minimax_two_ply_backs_up_opponent_reply() {
        // Black: A なら White は 3 か 5 を選べる → 3、B なら 2 か 9 → 2
        let mut tree = TreeBuilder::new();
        let root = tree.node(0);
        let a = tree.node(0);
        let b = tree.node(0);
        tree.edge(root, Color::Black, Position::new(0, 0), a);
        tree.edge(root, Color::Black, Position::new(0, 1), b);
        for (parent, values) in [(a, [3, 5]), (b, [2, 9])] {
            for (i, v) in values.into_iter().enumerate() {
                let leaf = tree.node(v);
                tree.edge(parent, Color::White, Position::new(parent, i), leaf);
            }
        }
        let board = tree.build(root);

        let mut searcher = Searcher::default();
        let best = searcher.minimax(Color::Black, &board, 1).unwrap();
        assert_eq!(best.pos, Position::new(0, 0));
        assert_eq!(best.rank, 3);
        assert_eq!(searcher.stats().evaluations, 4);
        assert_eq!(searcher.stats().nodes, 3);
    }

    #[test]
    fn test_minimax_follows_pass() {
        // P では White が打てないので Black が続けて打つ
        let mut tree = TreeBuilder::new();
        let root = tree.node(0);
        let p = tree.node(0);
        let p1 = tree.node(7);
        let p2 = tree.node(4);
        tree.edge(root, Color::Black, Position::new(0, 0), p);
        tree.edge(p, Color::Black, Position::new(1, 0), p1);
        tree.edge(p, Color::Black, Position::new(1, 1), p2);
        let board = tree.build(root);

        let best = Searcher::default()
            .minimax(Color::Black, &board, 1)
            .unwrap();
        assert_eq!(best.rank, 7);
    }

    #[test]
    fn test_terminal_child_is_evaluated_before_depth_runs_out() {
        let mut tree = TreeBuilder::new();
        let root = tree.node(0);
        let end = tree.terminal(2);
        tree.edge(root, Color::Black, Position::new(0, 0), end);
        let board = tree.build(root);

        let mut searcher = Searcher::default();
        let best = searcher.minimax(Color::Black, &board, 4).unwrap();
        assert_eq!(best.rank, 2 + 10000);
        assert_eq!(searcher.stats().nodes, 1);
    }

    #[test]
    fn test_minimax_opening_depth_zero() {
        // 初手 4 つはどれも内側 1 枚を返すだけで評価は同じ → 最後の手
        let board = Board::initial();
        let best = Searcher::default()
            .minimax(Color::Black, &board, 0)
            .unwrap();
        assert_eq!(best.pos, Position::new(5, 4));
        assert_eq!(best.rank, 3);
    }
}
