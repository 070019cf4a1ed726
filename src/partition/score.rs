use serde::{Deserialize, Serialize};

use crate::{electorate::{Electorate, Party}, partition::District};

/// Informational bucket for a district from one party's point of view.
/// Never consulted by the search itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistrictClass {
    /// Won by the narrowest possible majority (5–4 for nine voters).
    Ideal,
    /// Conceded to the opposition by a wide margin: at most one voter supports the party.
    Cracked,
    /// Any other majority for the party.
    Win,
    /// Lost or tied.
    Fallback,
}

impl District {
    /// Count supporters of `party` and everyone else: `(votes, opposition)`.
    pub fn score(&self, electorate: &impl Electorate, party: &Party) -> (usize, usize) {
        let votes = electorate.count_votes(self.voters(), party);
        (votes, self.len() - votes)
    }

    /// Bucket this district by its vote split for `party`.
    pub fn classify(&self, electorate: &impl Electorate, party: &Party) -> DistrictClass {
        let (votes, opposition) = self.score(electorate, party);
        let size = self.len();

        if size > 0 && votes == size / 2 + 1 { return DistrictClass::Ideal }
        if size > 0 && opposition + 1 >= size { return DistrictClass::Cracked }
        if votes > size / 2 { return DistrictClass::Win }
        DistrictClass::Fallback
    }
}
