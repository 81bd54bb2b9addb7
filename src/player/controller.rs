use crate::core::{Board, Color, Position};

/// プレイヤー操作のtrait
pub trait PlayerController {
    /// 手番 `color` の合法手の中から 1 つ選ぶ。None は投了
    fn choose_move(&self, board: &Board, color: Color, legal_moves: &[Position])
        -> Option<Position>;
    fn name(&self) -> &str;

    /// 人間が操作するか。対局画面で思考中の表示を出すかどうかに使う
    fn is_human(&self) -> bool {
        false
    }
}
