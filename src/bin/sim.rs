use rand::{rngs::SmallRng, seq::SliceRandom, SeedableRng};
use serde_json::json;
use solo_battleship::{init_logging, Coordinate, GameConfig, GameSituation, Session};

/// Play one seeded game by firing at every cell in random order, then print a
/// JSON summary.
fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;

    let config = GameConfig::default();
    let size = config.size;
    let mut session = Session::seeded(config, seed);

    let mut targets: Vec<Coordinate> = (0..size)
        .flat_map(|r| (0..size).map(move |c| Coordinate::new(r, c)))
        .collect();
    let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(1));
    targets.shuffle(&mut rng);

    for coord in targets {
        session.fire(coord)?;
        if session.state().situation() == GameSituation::GameOver {
            break;
        }
    }

    let state = session.state();
    let result = json!({
        "seed": seed,
        "shots": state.total_shots(),
        "hits": state.total_hits(),
        "misses": state.total_misses(),
        "accuracy": state.accuracy(),
        "ships": state.ships().len(),
        "situation": state.situation(),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
