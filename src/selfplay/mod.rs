use crate::core::{Board, Color};
use crate::game::{Game, GameEnd, GameRecord};
use crate::player::ai::AIConfig;
use crate::player::LookaheadAI;
use anyhow::Context;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Instant;

pub struct SelfPlayConfig {
    pub num_games: usize,
    pub black_depth: u32,
    pub white_depth: u32,
    /// 両 AI に共通の評価・探索設定 (depth は上書きされる)
    pub ai_config: AIConfig,
    /// 序盤にランダムに打つ手数。0 なら毎局同じ棋譜になる
    pub random_opening_plies: usize,
    pub seed: u64,
    pub save_records: bool,
    pub output_dir: PathBuf,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            black_depth: 3,
            white_depth: 3,
            ai_config: AIConfig::default(),
            random_opening_plies: 4,
            seed: 0,
            save_records: false,
            output_dir: PathBuf::from("selfplay"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameResult {
    pub winner: Option<Color>,
    pub moves: usize,
    pub black_discs: usize,
    pub white_discs: usize,
    pub time_ms: u128,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SelfPlayStats {
    pub total_games: usize,
    pub black_wins: usize,
    pub white_wins: usize,
    pub draws: usize,
    pub avg_moves: f64,
    pub avg_time_ms: f64,
    pub black_depth: u32,
    pub white_depth: u32,
    pub games: Vec<GameResult>,
}

impl SelfPlayStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_result(&mut self, result: GameResult) {
        self.total_games += 1;
        match result.winner {
            Some(Color::Black) => self.black_wins += 1,
            Some(Color::White) => self.white_wins += 1,
            None => self.draws += 1,
        }
        self.games.push(result);
        self.recalculate_averages();
    }

    fn recalculate_averages(&mut self) {
        if self.games.is_empty() {
            return;
        }
        let total_moves: usize = self.games.iter().map(|g| g.moves).sum();
        let total_time: u128 = self.games.iter().map(|g| g.time_ms).sum();
        self.avg_moves = total_moves as f64 / self.games.len() as f64;
        self.avg_time_ms = total_time as f64 / self.games.len() as f64;
    }

    pub fn win_rate(&self, color: Color) -> f64 {
        if self.total_games == 0 {
            return 0.0;
        }
        let wins = match color {
            Color::Black => self.black_wins,
            Color::White => self.white_wins,
        };
        wins as f64 / self.total_games as f64
    }

    pub fn save(&self, config: &SelfPlayConfig) -> anyhow::Result<PathBuf> {
        std::fs::create_dir_all(&config.output_dir)?;
        let filename = config.output_dir.join(format!(
            "stats_{}.json",
            chrono::Local::now().format("%Y%m%d_%H%M%S")
        ));
        let file = std::fs::File::create(&filename)
            .with_context(|| format!("failed to create {}", filename.display()))?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(filename)
    }
}

/// 複数局を並列に実行する。各局の探索自体はシングルスレッド
pub fn run_selfplay(config: &SelfPlayConfig) -> anyhow::Result<SelfPlayStats> {
    let finished: Vec<(GameResult, GameRecord)> = (0..config.num_games)
        .into_par_iter()
        .map(|game_num| -> anyhow::Result<(GameResult, GameRecord)> {
            let outcome = play_one(config, game_num)?;
            print!(
                "Game {}/{}: {} ({} moves, {:.1}s)\r\n",
                game_num + 1,
                config.num_games,
                match outcome.0.winner {
                    Some(Color::Black) => "Black wins",
                    Some(Color::White) => "White wins",
                    None => "Draw",
                },
                outcome.0.moves,
                outcome.0.time_ms as f64 / 1000.0
            );
            Ok(outcome)
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    let mut stats = SelfPlayStats::new();
    stats.black_depth = config.black_depth;
    stats.white_depth = config.white_depth;

    for (game_num, (result, record)) in finished.into_iter().enumerate() {
        stats.add_result(result);
        if config.save_records {
            record.save(&config.output_dir, &format!("game_{:04}", game_num + 1))?;
        }
    }

    Ok(stats)
}

fn play_one(config: &SelfPlayConfig, game_num: usize) -> anyhow::Result<(GameResult, GameRecord)> {
    let start_time = Instant::now();
    let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(game_num as u64));
    let mut game = Game::with_setup(Board::initial(), "standard");

    // ランダムな序盤で局面をばらけさせる
    for _ in 0..config.random_opening_plies {
        let moves = game.settle_turn();
        let Some(&pos) = moves.choose(&mut rng) else {
            break;
        };
        game.play_move(pos)?;
    }

    let black = LookaheadAI::with_config("Black AI", config.ai_config.clone())
        .with_depth(config.black_depth);
    let white = LookaheadAI::with_config("White AI", config.ai_config.clone())
        .with_depth(config.white_depth);

    let end = game.play_silent(&black, &white)?;
    debug_assert_eq!(end, GameEnd::Completed);

    let result = GameResult {
        winner: game.winner(),
        moves: game.history.iter().filter(|mv| mv.is_some()).count(),
        black_discs: game.board.count(Color::Black),
        white_discs: game.board.count(Color::White),
        time_ms: start_time.elapsed().as_millis(),
    };
    Ok((result, game.record()))
}
