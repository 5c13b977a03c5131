#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use pirates_revenge::{
    drive, init_logging, parse_command, Command, GameConfig, GameSession, TerminalView, HELP,
    BOARD_SIZE, PLACEMENT_SECONDS, SHOT_ANIMATION_MS, TICK_INTERVAL_MS,
};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use tokio::io::{AsyncBufReadExt, BufReader};
#[cfg(feature = "std")]
use tokio::sync::mpsc;
#[cfg(feature = "std")]
use tokio::time::Duration;

/// Place your fleet before the fuse burns down, then take turns firing.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, default_value_t = BOARD_SIZE, help = "Board edge length (6-8)")]
    board_size: usize,
    #[arg(long, default_value_t = PLACEMENT_SECONDS, help = "Seconds to place the fleet before it is placed for you")]
    placement_seconds: u32,
    #[arg(long, default_value_t = TICK_INTERVAL_MS, help = "Countdown tick interval in milliseconds")]
    tick_ms: u64,
    #[arg(long, default_value_t = SHOT_ANIMATION_MS, help = "Input lockout after each shot in milliseconds")]
    shot_ms: u64,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
}

#[cfg(feature = "std")]
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let level = init_logging();
    let cli = Cli::parse();
    log::debug!("Logging at {}", level);

    let config = GameConfig {
        board_size: cli.board_size,
        placement_seconds: cli.placement_seconds,
        tick_interval: Duration::from_millis(cli.tick_ms),
        shot_animation: Duration::from_millis(cli.shot_ms),
    };
    let rng = if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };
    let mut session = GameSession::new(config, rng)?;
    let mut view = TerminalView::new(config.board_size);

    println!("{}", HELP);
    let (tx, rx) = mpsc::channel(16);
    let board_size = config.board_size;
    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            match parse_command(&line, board_size) {
                Ok(Command::Input(event)) => {
                    if tx.send(event).await.is_err() {
                        break;
                    }
                }
                Ok(Command::Help) => println!("{}", HELP),
                Ok(Command::Quit) => break,
                Err(e) => println!("{}", e),
            }
        }
    });

    session.start_game(&mut view);
    drive(&mut session, &mut view, rx).await;
    println!("Thanks for playing.");
    Ok(())
}
