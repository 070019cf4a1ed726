mod electorate;
mod io;
mod party;
mod voter_map;

pub use electorate::Electorate;
pub use party::Party;
pub use voter_map::VoterMap;
