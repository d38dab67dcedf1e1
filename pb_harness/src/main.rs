//! A scripted session driver for the poker bot engine.
//!
//! Generates a multi-hand scenario against caricature opponents (or
//! replays a saved one), runs the engine through it, and prints a
//! session report with the action tally and the engine's opponent reads.

use anyhow::{Context, Result};
use log::info;
use pico_args::Arguments;
use std::path::PathBuf;

use poker_bot::Action;
use poker_bot::bot::Engine;
use poker_bot::runtime::{Harness, Scenario, ScriptConfig, generate};

const HELP: &str = "\
Run the poker bot through a scripted table session

USAGE:
  pb_harness [OPTIONS]

OPTIONS:
  --hands N          Hands to generate  [default: 20]
  --opponents N      Scripted opponents at the table (1-9)  [default: 3]
  --seed N           Seed for dealing and bet sizing  [default: random]
  --scenario FILE    Replay a saved scenario instead of generating one
  --export FILE      Write the scenario that was run to FILE

FLAGS:
  -h, --help         Print help information
";

struct Args {
    hands: usize,
    opponents: usize,
    seed: Option<u64>,
    scenario: Option<PathBuf>,
    export: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::builder().format_target(false).init();

    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let args = Args {
        hands: pargs.value_from_str("--hands").unwrap_or(20),
        opponents: pargs.value_from_str("--opponents").unwrap_or(3),
        seed: pargs.opt_value_from_str("--seed").ok().flatten(),
        scenario: pargs.opt_value_from_str("--scenario").ok().flatten(),
        export: pargs.opt_value_from_str("--export").ok().flatten(),
    };

    run(args)
}

fn run(args: Args) -> Result<()> {
    let seed = args.seed.unwrap_or_else(rand::random);

    let scenario = match &args.scenario {
        Some(path) => {
            info!("Replaying scenario from {}", path.display());
            Scenario::load(path)
                .with_context(|| format!("Failed to load scenario from {}", path.display()))?
        }
        None => {
            let config = ScriptConfig {
                hands: args.hands,
                opponents: args.opponents,
                seed,
                ..ScriptConfig::default()
            };
            config
                .validate()
                .map_err(|message| anyhow::anyhow!(message))?;
            info!(
                "Generating {} hands against {} opponents with seed {seed}",
                config.hands, config.opponents
            );
            generate(&config)
        }
    };

    if let Some(path) = &args.export {
        scenario
            .save(path)
            .with_context(|| format!("Failed to export scenario to {}", path.display()))?;
        info!("Exported scenario to {}", path.display());
    }

    let mut harness = Harness::new(Engine::seeded(seed));
    harness.run_scenario(&scenario);
    let (engine, actions) = harness.into_parts();

    let folds = actions.iter().filter(|a| matches!(a, Action::Fold)).count();
    let calls = actions.iter().filter(|a| matches!(a, Action::Call)).count();
    let raises = actions
        .iter()
        .filter(|a| matches!(a, Action::Raise(_)))
        .count();

    println!(
        "Session complete: {} hands, {} decisions",
        engine.hands_played(),
        actions.len()
    );
    println!("  Folds:  {folds}");
    println!("  Calls:  {calls}");
    println!("  Raises: {raises}");

    let mut reads: Vec<_> = engine.profiler().iter().collect();
    reads.sort_by(|a, b| a.0.cmp(b.0));

    if !reads.is_empty() {
        println!("\nOpponent reads:");
        for (id, stats) in reads {
            println!(
                "  {id}: {} folds, {} calls, {} raises over {} hands (ratios {:.2}/{:.2}/{:.2})",
                stats.folds,
                stats.calls,
                stats.raises,
                stats.hands,
                stats.fold_ratio(),
                stats.call_ratio(),
                stats.raise_ratio()
            );
        }
    }

    Ok(())
}
