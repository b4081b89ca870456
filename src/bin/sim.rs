use broadside::{fleet, init_logging, AiPlayer, Game, GameConfig, GameStatus, ShotOutcome, Side};
use rand::{rngs::SmallRng, SeedableRng};

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let mut rng = SmallRng::seed_from_u64(seed);

    let config = GameConfig::default();
    let board_a = fleet::generate(&config, false, &mut rng);
    let board_b = fleet::generate(&config, false, &mut rng);
    let mut game = Game::new(
        board_a,
        board_b,
        Box::new(AiPlayer::new()),
        Box::new(AiPlayer::new()),
    );

    let mut shots = [0usize; 2];
    let mut hits = [0usize; 2];
    while let Some(report) = game.advance(&mut rng) {
        let index = match report.side {
            Side::A => 0,
            Side::B => 1,
        };
        shots[index] += 1;
        if report.outcome != ShotOutcome::Miss {
            hits[index] += 1;
        }
    }

    if let GameStatus::Over { winner } = game.status() {
        println!("winner: side {:?}", winner);
    }
    println!("side A: {} shots, {} hits", shots[0], hits[0]);
    println!("side B: {} shots, {} hits", shots[1], hits[1]);
    Ok(())
}
