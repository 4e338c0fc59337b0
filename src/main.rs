use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use solo_battleship::{cli, init_logging, GameConfig, Session, BOARD_SIZE, FLEET, PLACEMENT_ATTEMPTS};

#[derive(Parser)]
#[command(author, version, about = "Sink a hidden fleet from the terminal.", long_about = None)]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible fleets (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value_t = BOARD_SIZE, help = "Side length of the square board")]
    size: usize,
    #[arg(long, value_delimiter = ',', default_values_t = FLEET, help = "Ship lengths, e.g. 5,4,4")]
    fleet: Vec<usize>,
    #[arg(long, default_value_t = PLACEMENT_ATTEMPTS, help = "Random placement tries per ship")]
    attempts: usize,
    #[arg(long, help = "Start with the enemy ships revealed")]
    show_ships: bool,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Cli::parse();

    let config = GameConfig {
        size: args.size,
        fleet: args.fleet,
        attempts: args.attempts,
    };
    config.validate()?;

    let rng = if let Some(s) = args.seed {
        println!("Using fixed seed: {} (fleet will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };
    let mut session = Session::new(config, rng);
    if args.show_ships {
        session.toggle_ships();
    }

    println!("Type a coordinate such as A5 to fire, or 'help' for commands.");
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    cli::run(&mut session, stdin.lock(), stdout.lock())?;
    Ok(())
}
