use std::{path::PathBuf, time::Duration};

use mosaic_engine::GameSession;

use crate::{command::play::app::PlayApp, highscore, tui::Runtime};

mod app;

const FRAME_RATE: f64 = 30.0;

#[derive(Debug, Clone, clap::Args)]
pub struct PlayArg {
    /// Board width in cells
    #[clap(long, default_value_t = 10)]
    width: usize,
    /// Board height in cells
    #[clap(long, default_value_t = 20)]
    height: usize,
    /// Seed for a reproducible piece sequence
    #[clap(long)]
    seed: Option<u64>,
    /// Seconds between countdown ticks
    #[clap(long, default_value_t = 1.0)]
    tick_secs: f64,
    /// Path of the high score file
    #[clap(long, default_value = ".mosaic-tetris-highscore.json")]
    highscore_path: PathBuf,
}

impl Default for PlayArg {
    fn default() -> Self {
        Self {
            width: 10,
            height: 20,
            seed: None,
            tick_secs: 1.0,
            highscore_path: PathBuf::from(".mosaic-tetris-highscore.json"),
        }
    }
}

pub fn run(arg: &PlayArg) -> anyhow::Result<()> {
    anyhow::ensure!(
        arg.width >= 4 && arg.height >= 4,
        "the board must be at least 4x4 to fit every tetromino"
    );

    let session = match arg.seed {
        Some(seed) => GameSession::with_seed(arg.width, arg.height, seed),
        None => GameSession::new(arg.width, arg.height),
    };

    let mut app = PlayApp::new(session);
    Runtime::new(Duration::from_secs_f64(arg.tick_secs), FRAME_RATE).run(&mut app)?;

    let session = app.into_session();
    let stats = session.stats();
    if session.state().is_game_over() {
        println!(
            "Game over! Score: {} ({} lines, {} pieces)",
            stats.score(),
            stats.lines_cleared(),
            stats.pieces_placed()
        );
        if let Some(entry) = highscore::record(&arg.highscore_path, stats.score(), stats.lines_cleared())? {
            println!("New high score for {}: {} points!", entry.name, entry.score);
        }
    }

    Ok(())
}
