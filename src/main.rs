use std::time::Duration;

use broadside::{
    fleet, init_logging, ui, AiPlayer, CliPlayer, Game, GameConfig, GameStatus, Side,
    DEFAULT_BOARD_SIZE, DEFAULT_FLEET,
};
use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Board side length.
    #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
    size: usize,

    /// Comma-separated ship lengths, e.g. 3,2,2,1,1,1,1.
    #[arg(long, value_delimiter = ',')]
    fleet: Option<Vec<usize>>,

    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,

    /// Milliseconds the computer pauses before each of its shots.
    #[arg(long, default_value_t = 0)]
    think_ms: u64,
}

fn print_boards(game: &Game) {
    println!();
    println!(
        "{}",
        ui::render_boards(
            game.board(Side::A),
            "Your board",
            game.board(Side::B),
            "Opponent board",
        )
    );
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
    }
    let mut rng = if let Some(s) = cli.seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let lengths = cli.fleet.unwrap_or_else(|| DEFAULT_FLEET.to_vec());
    let config = GameConfig::new(cli.size, lengths)?;

    println!("{}", ui::GREETING);

    let own = fleet::generate(&config, false, &mut rng);
    let enemy = fleet::generate(&config, true, &mut rng);
    let mut game = Game::new(
        own,
        enemy,
        Box::new(CliPlayer::new()),
        Box::new(AiPlayer::with_delay(Duration::from_millis(cli.think_ms))),
    );

    loop {
        match game.status() {
            GameStatus::Turn(_) => {
                print_boards(&game);
                if let Some(report) = game.advance(&mut rng) {
                    match report.side {
                        Side::A => println!("{}", ui::outcome_phrase(report.outcome)),
                        Side::B => println!(
                            "Computer fires at {}: {}",
                            report.target,
                            ui::outcome_phrase(report.outcome)
                        ),
                    }
                }
            }
            GameStatus::Over { winner } => {
                print_boards(&game);
                match winner {
                    Side::A => println!("You win! The enemy fleet is destroyed."),
                    Side::B => println!("Computer wins. Your fleet is destroyed."),
                }
                break;
            }
        }
    }
    Ok(())
}
