use crossterm::event::{self, Event, KeyCode};
use crossterm::{execute, terminal};
use reversi_aho_ai::core::setup::{get_cross_setup, get_standard_setup};
use reversi_aho_ai::core::{setup_from_strings, Color};
use reversi_aho_ai::game::Game;
use reversi_aho_ai::player::ai::AIConfig;
use reversi_aho_ai::player::{
    LookaheadAI, PlayerController, RandomAI, TuiController, WeightedRandomAI,
};
use reversi_aho_ai::selfplay::{run_selfplay, SelfPlayConfig};
use std::io;
use std::path::Path;
use std::time::Duration;

fn main() -> anyhow::Result<()> {
    // ターミナル初期化
    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen)?;

    let res = run();

    // ターミナル復帰
    execute!(io::stdout(), terminal::LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;

    res
}

/// 選択肢のキーが押されるまで待つ。'q' なら None
fn select(choices: &[char]) -> anyhow::Result<Option<char>> {
    loop {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('q') => return Ok(None),
                    KeyCode::Char(c) if choices.contains(&c) => return Ok(Some(c)),
                    _ => {}
                }
            }
        }
    }
}

fn run() -> anyhow::Result<()> {
    let config = AIConfig::load_or_default();

    print!("=== Reversi Look-ahead Engine ===\r\n");
    print!(
        "search depth {} ({:?} pruning)\r\n",
        config.search.depth, config.search.prune_rule
    );

    print!("\r\nSelect mode:\r\n");
    print!("1. Local Play\r\n");
    print!("2. Self-Play ({} games)\r\n", SelfPlayConfig::default().num_games);

    match select(&['1', '2'])? {
        Some('1') => run_local(config),
        Some(_) => run_selfplay_mode(config),
        None => Ok(()),
    }
}

fn run_local(config: AIConfig) -> anyhow::Result<()> {
    print!("\r\nSelect players:\r\n");
    print!("1. Human vs Human\r\n");
    print!("2. Human (Black) vs Lookahead AI\r\n");
    print!("3. Lookahead AI vs Human (White)\r\n");
    print!("4. Lookahead AI vs Weighted AI\r\n");
    print!("5. Lookahead AI vs Random AI\r\n");

    let Some(p_choice) = select(&['1', '2', '3', '4', '5'])? else {
        return Ok(());
    };

    let lookahead = || LookaheadAI::with_config("Lookahead AI", config.clone());
    let (black, white): (Box<dyn PlayerController>, Box<dyn PlayerController>) = match p_choice {
        '1' => (
            Box::new(TuiController::new("Player 1")),
            Box::new(TuiController::new("Player 2")),
        ),
        '2' => (
            Box::new(TuiController::new("You")),
            Box::new(lookahead()),
        ),
        '3' => (
            Box::new(lookahead()),
            Box::new(TuiController::new("You")),
        ),
        '4' => (
            Box::new(lookahead()),
            Box::new(WeightedRandomAI::new("Weighted AI")),
        ),
        _ => (
            Box::new(lookahead()),
            Box::new(RandomAI::new("Random AI")),
        ),
    };

    print!("\r\nSelect board setup:\r\n");
    print!("1. Standard\r\n");
    print!("2. Cross\r\n");

    let Some(b_choice) = select(&['1', '2'])? else {
        return Ok(());
    };
    let (setup_name, rows) = match b_choice {
        '1' => ("standard", get_standard_setup()),
        _ => ("cross", get_cross_setup()),
    };

    let board = setup_from_strings(&rows)?;
    let mut game = Game::with_setup(board, setup_name);
    game.play(black.as_ref(), white.as_ref())?;

    game.record().save(Path::new("games"), "game")?;
    Ok(())
}

fn run_selfplay_mode(config: AIConfig) -> anyhow::Result<()> {
    let selfplay_config = SelfPlayConfig {
        black_depth: config.search.depth,
        white_depth: config.search.depth,
        ai_config: config,
        save_records: true,
        ..SelfPlayConfig::default()
    };

    print!("\r\n=== Self-Play ===\r\n");
    let stats = run_selfplay(&selfplay_config)?;

    print!("\r\n--- Statistics ---\r\n");
    print!(
        "Black Wins: {} ({:.1}%)\r\n",
        stats.black_wins,
        stats.win_rate(Color::Black) * 100.0
    );
    print!(
        "White Wins: {} ({:.1}%)\r\n",
        stats.white_wins,
        stats.win_rate(Color::White) * 100.0
    );
    print!("Draws: {}\r\n", stats.draws);
    print!("Avg Moves: {:.1}\r\n", stats.avg_moves);
    print!("Avg Time: {:.1}s\r\n", stats.avg_time_ms / 1000.0);

    let path = stats.save(&selfplay_config)?;
    print!("\r\nSaved to {}\r\n", path.display());
    print!("Press any key to exit.\r\n");
    loop {
        if let Event::Key(_) = event::read()? {
            break;
        }
    }
    Ok(())
}
