use std::time::Duration;

use snake_engine::{Board, FoodSeed};
use snake_runtime::Runtime;

use self::app::PlayApp;

mod app;
mod input;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    /// Delay between two game ticks, in milliseconds
    #[clap(long, default_value_t = 75, value_parser = clap::value_parser!(u64).range(1..))]
    tick_ms: u64,
    /// Seed for food placement (32 hex digits), for a reproducible game.
    /// Each reset draws the next seed from it; the seed printed on exit
    /// replays the last game
    #[clap(long)]
    seed: Option<FoodSeed>,
    /// Start with sound effects enabled (toggle in game with `m`)
    #[clap(long)]
    sound: bool,
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let PlayArg {
        tick_ms,
        seed,
        sound,
    } = arg;

    let mut app = PlayApp::new(
        Board::DEFAULT,
        *seed,
        Duration::from_millis(*tick_ms),
        *sound,
    );
    Runtime::new().run(&mut app)?;

    let state = app.game().state();
    log::info!("session finished with score {}", state.score());
    println!("Score: {} (food seed {})", state.score(), state.food_seed());
    Ok(())
}
