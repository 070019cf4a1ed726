use anyhow::{ensure, Result};
use openmander_backtrack::{Party, SearchConfig, VoterMap};
use tracing::info;

use crate::{cli::{Cli, GenerateArgs}, commands::check_output_path};

pub fn run(_cli: &Cli, args: &GenerateArgs) -> Result<()> {
    check_output_path(&args.output, args.force)?;
    ensure!(args.rows > 0 && args.cols > 0, "grid must have at least one row and one column");

    let parties = args.parties.iter().map(|name| Party::from(name.as_str())).collect::<Vec<_>>();
    let mut rng = SearchConfig::default().with_seed(args.seed).rng();

    info!(rows = args.rows, cols = args.cols, parties = parties.len(), "generating grid electorate");
    let map = VoterMap::random_grid(args.rows, args.cols, &parties, &mut rng)?;

    map.write_to_json_file(&args.output)?;
    println!("[generate] wrote {} voters to {}", args.rows * args.cols, args.output.display());

    Ok(())
}
