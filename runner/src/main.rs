mod config;
mod console_observer;
mod input;

use brick_snake_common::config::Validate;
use brick_snake_common::games::snake::{BrickSnakeSession, SessionConfig};
use brick_snake_common::{AutopilotKind, Direction, Game, SessionRng, log, logger};
use clap::{Parser, ValueEnum};
use tokio::sync::mpsc;

use config::{RunnerConfig, default_config_path, get_config_manager};
use console_observer::ConsoleObserver;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum AutopilotArg {
    Greedy,
    Random,
    Off,
}

#[derive(Parser)]
#[command(name = "brick_snake_runner", about = "Runs a headless brick snake game")]
struct Args {
    /// YAML config file; defaults are used when it does not exist.
    #[arg(long)]
    config: Option<String>,

    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    max_moves: Option<u64>,

    /// Overrides the autopilot from the config. `off` reads headings from stdin.
    #[arg(long, value_enum)]
    autopilot: Option<AutopilotArg>,

    #[arg(long)]
    use_log_prefix: bool,

    #[arg(long)]
    verbose: bool,

    /// Write the default config to the config path and exit.
    #[arg(long)]
    write_default_config: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = args.use_log_prefix.then(|| "Runner".to_string());
    logger::init_logger(prefix, args.verbose);

    let config_path = args.config.clone().unwrap_or_else(default_config_path);
    let config_manager = get_config_manager(&config_path);

    if args.write_default_config {
        config_manager.set_config(&RunnerConfig::default())?;
        log!("Default config written to {}", config_path);
        return Ok(());
    }

    let config = config_manager.get_config()?;
    config.validate()?;
    log!("Loaded config from {}", config_path);

    let autopilot = match args.autopilot {
        Some(AutopilotArg::Greedy) => Some(AutopilotKind::Greedy),
        Some(AutopilotArg::Random) => Some(AutopilotKind::Random),
        Some(AutopilotArg::Off) => None,
        None => Some(config.autopilot),
    };

    let rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };

    let game = Game::from_settings(&config.game)?;
    let session_config = SessionConfig {
        autopilot,
        max_moves: args.max_moves,
        ..SessionConfig::from(&config.game)
    };

    let (heading_tx, heading_rx) = mpsc::unbounded_channel::<Direction>();
    if autopilot.is_none() {
        log!("Reading headings from stdin (w/a/s/d or up/left/down/right)");
        input::spawn_stdin_forwarder(heading_tx)?;
    } else {
        drop(heading_tx);
    }

    let mut observer = ConsoleObserver::new(config.log_board_every);
    let outcome = BrickSnakeSession::run(game, session_config, rng, heading_rx, &mut observer).await?;

    log!(
        "Seed {} finished with {:?} after {} moves",
        outcome.seed,
        outcome.status,
        outcome.moves
    );
    Ok(())
}
