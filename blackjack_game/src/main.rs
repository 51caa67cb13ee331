use blackjack_game::{Session, SessionConfig, DEFAULT_LOG_FILTER};
use clap::Parser;
use std::io::{self, IsTerminal};
use tracing_subscriber::EnvFilter;

/// Play blackjack against the dealer in the terminal.
#[derive(Parser, Debug)]
#[command(name = "blackjack", version, about)]
struct Args {
    /// Seed for shuffling, makes every deal repeatable
    #[arg(long)]
    seed: Option<u64>,

    /// Number of games to play instead of asking at startup
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    games: Option<u32>,
}

fn main() {
    let args = Args::parse();

    // Logs go to stderr so stdout only carries the game itself.
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();

    let mut builder = SessionConfig::new();
    if let Some(seed) = args.seed {
        builder.seed(seed);
    }
    if let Some(games) = args.games {
        builder.games(games);
    }
    let config = builder.build();

    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout(), config);
    if let Err(e) = session.run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
