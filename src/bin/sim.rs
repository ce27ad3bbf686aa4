use flotilla::{create_player, init_logging, GameConfig, Match, PlayerKind, Side};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde_json::json;

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 4 || args.len() > 5 {
        eprintln!("Usage: {} <kind1> <kind2> <seed> [trials]", args[0]);
        std::process::exit(1);
    }
    let kind1: PlayerKind = args[1].parse().map_err(|e| anyhow::anyhow!("{}", e))?;
    let kind2: PlayerKind = args[2].parse().map_err(|e| anyhow::anyhow!("{}", e))?;
    let seed: u64 = args[3].parse()?;
    let trials: usize = if args.len() == 5 { args[4].parse()? } else { 1 };
    if kind1 == PlayerKind::Human || kind2 == PlayerKind::Human {
        anyhow::bail!("sim only runs computer players");
    }

    let mut game = GameConfig::new(10, 10).map_err(|e| anyhow::anyhow!("{}", e))?;
    game.add_standard_ships()
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    let mut wins = [0usize; 2];
    let mut total_turns = 0usize;
    for k in 0..trials {
        let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(k as u64));
        let mut p1 = create_player(kind1, &format!("{} 1", kind1), &game);
        let mut p2 = create_player(kind2, &format!("{} 2", kind2), &game);

        let swapped = k % 2 == 1;
        let mut m = Match::new(&game);
        let report = if swapped {
            m.play(&mut rng, p2.as_mut(), p1.as_mut(), false)
        } else {
            m.play(&mut rng, p1.as_mut(), p2.as_mut(), false)
        }
        .map_err(|e| anyhow::anyhow!("{}", e))?;

        let first_slot_won = report.winner == Side::One;
        if first_slot_won != swapped {
            wins[0] += 1;
        } else {
            wins[1] += 1;
        }
        total_turns += report.turns;
    }

    let result = json!({
        "player1": {"kind": kind1.tag(), "wins": wins[0]},
        "player2": {"kind": kind2.tag(), "wins": wins[1]},
        "trials": trials,
        "avg_turns": total_turns as f64 / trials as f64,
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
