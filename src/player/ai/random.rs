use crate::core::{Board, Color, Position};
use crate::player::PlayerController;
use rand::seq::SliceRandom;

pub struct RandomAI {
    pub name: String,
}

impl RandomAI {
    pub fn new(name: &str) -> Self {
        RandomAI {
            name: name.to_string(),
        }
    }
}

impl PlayerController for RandomAI {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(
        &self,
        _board: &Board,
        _color: Color,
        legal_moves: &[Position],
    ) -> Option<Position> {
        let mut rng = rand::thread_rng();
        legal_moves.choose(&mut rng).copied()
    }
}
