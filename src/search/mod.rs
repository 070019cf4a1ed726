mod build;
mod config;
mod contiguity;
mod error;
mod grow;
mod report;
mod search;
mod trials;
mod voter_set;

pub use build::build_partition;
pub use config::{EarlyExit, SearchConfig};
pub use contiguity::is_connected;
pub use error::SearchError;
pub use report::{DistrictReport, PlanReport};
pub use trials::{best_of_trials, TrialsOutcome};

use search::Search;
use voter_set::{Group, UsedSet};
