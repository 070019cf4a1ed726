use std::path::PathBuf;

/// Backtracking districting CLI (argument schema only)
#[derive(clap::Parser, Debug)]
#[command(name = "openmander-backtrack", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Generate a random grid electorate (forbids stdout)
    Generate(GenerateArgs),

    /// Search for a districting plan favouring one party (forbids stdout)
    Redistrict(RedistrictArgs),
}

#[derive(clap::Args, Debug)]
pub struct GenerateArgs {
    /// Number of grid rows
    pub rows: usize,

    /// Number of grid columns
    pub cols: usize,

    /// Output electorate file (JSON)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub output: PathBuf,

    /// Parties to draw votes from
    #[arg(short, long, value_delimiter = ',', default_values_t = ["R".to_string(), "D".to_string()])]
    pub parties: Vec<String>,

    /// Seed for the vote assignment
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Overwrite if the file exists
    #[arg(long)]
    pub force: bool,
}

#[derive(clap::Args, Debug)]
pub struct RedistrictArgs {
    /// Input electorate file (JSON adjacency + votes)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub electorate: PathBuf,

    /// Party whose district wins are maximized
    #[arg(short, long)]
    pub party: String,

    /// Output plan file (JSON), defaults to "./plan.json"
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Search configuration file (JSON); flags below override it
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Voters per district
    #[arg(short, long)]
    pub target_size: Option<usize>,

    /// Number of independent trials
    #[arg(long)]
    pub trials: Option<usize>,

    /// Seed for the search
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Maximum growth steps per trial
    #[arg(long)]
    pub max_steps: Option<u64>,

    /// Stop once the party wins more than this many districts
    #[arg(long, conflicts_with = "all_trials")]
    pub exit_above: Option<usize>,

    /// Always run every trial
    #[arg(long)]
    pub all_trials: bool,

    /// Disable pruning of districts that strand unused voters
    #[arg(long)]
    pub no_prune: bool,

    /// Overwrite if the file exists
    #[arg(long)]
    pub force: bool,
}
