use crate::core::{Board, Color, Position};
use crate::logic::{apply_move, is_terminal_state, is_valid_move, legal_moves, winner};
use crate::player::PlayerController;
use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEnd {
    /// 両者とも打てなくなった
    Completed,
    /// この色が投了した
    Resigned(Color),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Moved(Color, Position),
    Finished(GameEnd),
}

pub struct Game {
    pub board: Board,
    pub current_player: Color,
    /// 着手履歴。None はパス
    pub history: Vec<Option<Position>>,
    pub setup: String,
    pub end: Option<GameEnd>,
}

impl Game {
    pub fn new(board: Board) -> Self {
        Self::with_setup(board, "standard")
    }

    pub fn with_setup(board: Board, setup: &str) -> Self {
        Game {
            board,
            current_player: Color::Black,
            history: Vec::new(),
            setup: setup.to_string(),
            end: None,
        }
    }

    pub fn is_over(&self) -> bool {
        self.end.is_some()
    }

    /// 手番側に合法手がなければパスを記録して手番を渡す。
    /// 返り値は手番側の合法手で、空なら終局。
    pub fn settle_turn(&mut self) -> Vec<Position> {
        if self.end.is_some() {
            return Vec::new();
        }
        loop {
            let moves = legal_moves(&self.board, self.current_player);
            if !moves.is_empty() {
                return moves;
            }
            if is_terminal_state(&self.board) {
                self.end = Some(GameEnd::Completed);
                return moves;
            }
            self.history.push(None);
            self.current_player = self.current_player.opponent();
        }
    }

    /// 手番側の着手を適用する
    pub fn play_move(&mut self, pos: Position) -> anyhow::Result<()> {
        if let Some(end) = self.end {
            bail!("game is already over ({:?})", end);
        }
        if !is_valid_move(&self.board, self.current_player, pos) {
            bail!("{} is not a legal move for {}", pos, self.current_player);
        }
        self.board = apply_move(&self.board, self.current_player, pos);
        self.history.push(Some(pos));
        self.current_player = self.current_player.opponent();
        Ok(())
    }

    /// 1 手進める
    pub fn step(
        &mut self,
        black: &dyn PlayerController,
        white: &dyn PlayerController,
    ) -> anyhow::Result<StepOutcome> {
        let moves = self.settle_turn();
        if let Some(end) = self.end {
            return Ok(StepOutcome::Finished(end));
        }

        let color = self.current_player;
        let controller = match color {
            Color::Black => black,
            Color::White => white,
        };

        match controller.choose_move(&self.board, color, &moves) {
            Some(pos) => {
                self.play_move(pos)
                    .with_context(|| format!("{} chose an illegal move", controller.name()))?;
                Ok(StepOutcome::Moved(color, pos))
            }
            None => {
                let end = GameEnd::Resigned(color);
                self.end = Some(end);
                Ok(StepOutcome::Finished(end))
            }
        }
    }

    /// 描画なしで終局まで進める
    pub fn play_silent(
        &mut self,
        black: &dyn PlayerController,
        white: &dyn PlayerController,
    ) -> anyhow::Result<GameEnd> {
        loop {
            if let StepOutcome::Finished(end) = self.step(black, white)? {
                return Ok(end);
            }
        }
    }

    /// 端末に描画しながら対局する
    pub fn play(
        &mut self,
        black: &dyn PlayerController,
        white: &dyn PlayerController,
    ) -> anyhow::Result<GameEnd> {
        use crate::display::{render_board, DisplayState};
        use crossterm::event::{self, Event, KeyCode};
        use std::time::Duration;

        loop {
            let moves = self.settle_turn();
            let controller = match self.current_player {
                Color::Black => black,
                Color::White => white,
            };

            if !self.is_over() && !controller.is_human() {
                let mut state = DisplayState::default();
                state.show_cursor = false;
                state.last_move = self.board.last_move;
                state.status_msg = Some(format!(
                    "{} ({}) is thinking... {} legal moves",
                    controller.name(),
                    self.current_player,
                    moves.len()
                ));
                render_board(&self.board, &state)?;

                // 思考ウェイト中に終了判定
                if event::poll(Duration::from_millis(400))? {
                    if let Event::Key(key) = event::read()? {
                        if key.code == KeyCode::Char('q') {
                            let end = GameEnd::Resigned(self.current_player);
                            self.end = Some(end);
                        }
                    }
                }
            }

            let end = match self.end {
                Some(end) => end,
                None => match self.step(black, white)? {
                    StepOutcome::Finished(end) => end,
                    StepOutcome::Moved(..) => continue,
                },
            };

            let mut state = DisplayState::default();
            state.show_cursor = false;
            state.last_move = self.board.last_move;
            state.status_msg = Some(self.result_message());
            render_board(&self.board, &state)?;
            print!("Press any key to continue.\r\n");
            loop {
                if let Event::Key(_) = event::read()? {
                    break;
                }
            }
            return Ok(end);
        }
    }

    /// 勝者。投了なら相手の勝ち、それ以外は石数で決まる
    pub fn winner(&self) -> Option<Color> {
        match self.end {
            Some(GameEnd::Resigned(color)) => Some(color.opponent()),
            _ => winner(&self.board),
        }
    }

    pub fn result_message(&self) -> String {
        let black = self.board.count(Color::Black);
        let white = self.board.count(Color::White);
        match (self.end, self.winner()) {
            (Some(GameEnd::Resigned(color)), _) => format!("{} resigned. {} wins!", color, -color),
            (_, Some(color)) => format!("{} wins {}-{}!", color, black.max(white), black.min(white)),
            (_, None) => format!("Draw {}-{}.", black, white),
        }
    }

    pub fn record(&self) -> GameRecord {
        GameRecord {
            setup: self.setup.clone(),
            moves: self.history.clone(),
            black_discs: self.board.count(Color::Black),
            white_discs: self.board.count(Color::White),
            winner: self.winner(),
            end: self.end,
            played_at: chrono::Local::now().to_rfc3339(),
        }
    }
}

/// 棋譜
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub setup: String,
    pub moves: Vec<Option<Position>>,
    pub black_discs: usize,
    pub white_discs: usize,
    pub winner: Option<Color>,
    pub end: Option<GameEnd>,
    pub played_at: String,
}

impl GameRecord {
    /// `dir` に JSON で保存し、書き込んだパスを返す
    pub fn save(&self, dir: &Path, label: &str) -> anyhow::Result<PathBuf> {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;

        let filename = dir.join(format!(
            "{}_{}.json",
            label,
            chrono::Local::now().format("%Y%m%d_%H%M%S%3f")
        ));

        let file = std::fs::File::create(&filename)
            .with_context(|| format!("failed to create {}", filename.display()))?;
        serde_json::to_writer(file, self)?;
        Ok(filename)
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let file = std::fs::File::open(path)
            .with_context(|| format!("failed to open {}", path.display()))?;
        let reader = std::io::BufReader::new(file);
        let record: GameRecord = serde_json::from_reader(reader)?;
        Ok(record)
    }

    /// 初期盤面から着手を再生し、最終盤面を返す
    pub fn replay(&self, initial: Board) -> anyhow::Result<Board> {
        let mut game = Game::with_setup(initial, &self.setup);
        for (ply, mv) in self.moves.iter().enumerate() {
            match mv {
                Some(pos) => game
                    .play_move(*pos)
                    .with_context(|| format!("ply {}", ply + 1))?,
                None => {
                    if !legal_moves(&game.board, game.current_player).is_empty() {
                        bail!("ply {}: {} passed with legal moves", ply + 1, game.current_player);
                    }
                    game.current_player = game.current_player.opponent();
                }
            }
        }
        Ok(game.board)
    }
}
