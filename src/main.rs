use anyhow::{anyhow, bail};
use clap::Parser;
use flotilla::{create_player, init_logging, GameConfig, Match, PlayerKind, Side};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about = "Grid battleship between scripted, adaptive and human players", long_about = None)]
struct Cli {
    /// Strategy for player 1: human, cluster, backtrack or hunt.
    #[arg(long, default_value = "hunt")]
    p1: PlayerKind,

    /// Strategy for player 2.
    #[arg(long, default_value = "backtrack")]
    p2: PlayerKind,

    #[arg(long, default_value_t = 10)]
    rows: usize,

    #[arg(long, default_value_t = 10)]
    cols: usize,

    /// Fix RNG seed for reproducible games (e.g., --seed 12345).
    #[arg(long)]
    seed: Option<u64>,

    /// Wait for enter between turns.
    #[arg(long)]
    pause: bool,

    /// Number of unattended games to play, alternating who moves first.
    #[arg(long, default_value_t = 1)]
    trials: usize,

    /// Override the standard roster; repeatable.
    #[arg(long = "ship", value_name = "LEN:SYMBOL:NAME")]
    ships: Vec<String>,
}

fn parse_ship_spec(spec: &str) -> anyhow::Result<(usize, char, String)> {
    let mut parts = spec.splitn(3, ':');
    let length = parts
        .next()
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| anyhow!("bad ship length in {:?}", spec))?;
    let symbol_part = parts
        .next()
        .ok_or_else(|| anyhow!("missing ship symbol in {:?}", spec))?;
    let mut symbol_chars = symbol_part.chars();
    let symbol = symbol_chars
        .next()
        .ok_or_else(|| anyhow!("missing ship symbol in {:?}", spec))?;
    if symbol_chars.next().is_some() {
        bail!("ship symbol must be a single character in {:?}", spec);
    }
    let name = parts
        .next()
        .ok_or_else(|| anyhow!("missing ship name in {:?}", spec))?;
    Ok((length, symbol, name.to_string()))
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut game = GameConfig::new(cli.rows, cli.cols).map_err(|e| anyhow!("{}", e))?;
    if cli.ships.is_empty() {
        game.add_standard_ships().map_err(|e| anyhow!("{}", e))?;
    } else {
        for spec in &cli.ships {
            let (length, symbol, name) = parse_ship_spec(spec)?;
            game.add_ship(length, symbol, &name)
                .map_err(|e| anyhow!("{}", e))?;
        }
    }

    let interactive = cli.p1 == PlayerKind::Human || cli.p2 == PlayerKind::Human;
    if cli.trials > 1 && interactive {
        bail!("multi-game trials are only supported between computer players");
    }
    if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (games will be reproducible)", s);
    }

    let mut wins = [0usize; 2];
    let mut total_turns = 0usize;
    for k in 0..cli.trials {
        let mut rng = match cli.seed {
            Some(s) => SmallRng::seed_from_u64(s.wrapping_add(k as u64)),
            None => {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            }
        };
        let mut a = create_player(cli.p1, &format!("{} 1", cli.p1), &game);
        let mut b = create_player(cli.p2, &format!("{} 2", cli.p2), &game);

        if cli.trials > 1 {
            println!("============================= Game {} =============================", k + 1);
        }
        // Alternate who moves first so neither strategy keeps the tempo edge.
        let swapped = k % 2 == 1;
        let mut m = Match::new(&game);
        let report = if swapped {
            m.play(&mut rng, b.as_mut(), a.as_mut(), cli.pause)
        } else {
            m.play(&mut rng, a.as_mut(), b.as_mut(), cli.pause)
        }
        .map_err(|e| anyhow!("{}", e))?;

        let first_slot_won = report.winner == Side::One;
        if first_slot_won != swapped {
            wins[0] += 1;
        } else {
            wins[1] += 1;
        }
        total_turns += report.turns;
    }

    if cli.trials > 1 {
        println!(
            "{} won {} and {} won {} of {} games ({} turns on average).",
            cli.p1,
            wins[0],
            cli.p2,
            wins[1],
            cli.trials,
            total_turns / cli.trials
        );
    }
    Ok(())
}
