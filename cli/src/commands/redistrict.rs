use std::path::PathBuf;

use anyhow::{Context, Result};
use openmander_backtrack::{
    best_of_trials, EarlyExit, Electorate, Party, PlanReport, SearchConfig, VoterMap,
};
use tracing::info;

use crate::{cli::{Cli, RedistrictArgs}, commands::check_output_path};

/// Layer command-line overrides on top of the (optional) config file.
fn search_config(args: &RedistrictArgs) -> Result<SearchConfig> {
    let mut config = match &args.config {
        Some(path) => SearchConfig::read_from_json_file(path)?,
        None => SearchConfig::default(),
    };

    if let Some(target_size) = args.target_size { config.target_size = target_size }
    if let Some(trials) = args.trials { config.trials = trials }
    if args.seed.is_some() { config.seed = args.seed }
    if args.max_steps.is_some() { config.max_steps = args.max_steps }
    if let Some(wins) = args.exit_above { config.early_exit = EarlyExit::Wins(wins) }
    if args.all_trials { config.early_exit = EarlyExit::Never }
    if args.no_prune { config.prune_stranded = false }

    config.check()?;
    Ok(config)
}

pub fn run(_cli: &Cli, args: &RedistrictArgs) -> Result<()> {
    let out_path = args.output.clone().unwrap_or_else(|| PathBuf::from("./plan.json"));
    check_output_path(&out_path, args.force)?;

    let config = search_config(args)?;
    let party = Party::from(args.party.as_str());

    println!("[redistrict] loading electorate from {}", args.electorate.display());
    let map = VoterMap::read_from_json_file(&args.electorate)?;
    info!(voters = map.number_of_voters(), parties = ?map.parties(), "loaded electorate");

    println!(
        "[redistrict] searching {} trials for districts of {} voters favouring {party}",
        config.trials, config.target_size,
    );
    let mut rng = config.rng();
    let outcome = best_of_trials(&map, &party, &config, &mut rng)
        .with_context(|| format!("no districting plan found for {}", args.electorate.display()))?;

    println!(
        "[redistrict] {party} wins {} of {} districts ({} trials run)",
        outcome.wins, outcome.partition.len(), outcome.trials_run(),
    );

    println!("[redistrict] writing plan to {}", out_path.display());
    PlanReport::new(&map, &party, &config, &outcome).write_to_json_file(&out_path)?;

    Ok(())
}
