use serde::{Deserialize, Serialize};

/// A set of voters assigned to one representative, stored in ascending order.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct District {
    voters: Vec<usize>,
}

impl District {
    /// Construct a district from voter ids (sorted and deduplicated).
    pub fn new(mut voters: Vec<usize>) -> Self {
        voters.sort_unstable();
        voters.dedup();
        Self { voters }
    }

    /// Voter ids in ascending order.
    #[inline] pub fn voters(&self) -> &[usize] { &self.voters }

    /// Number of voters in the district.
    #[inline] pub fn len(&self) -> usize { self.voters.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.voters.is_empty() }

    /// Check whether `voter` belongs to this district.
    #[inline] pub fn contains(&self, voter: usize) -> bool { self.voters.binary_search(&voter).is_ok() }

    #[inline] pub fn iter(&self) -> impl Iterator<Item = usize> + '_ { self.voters.iter().copied() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_sorts_and_dedups() {
        let district = District::new(vec![5, 1, 3, 1]);
        assert_eq!(district.voters(), &[1, 3, 5]);
        assert_eq!(district.len(), 3);
        assert!(district.contains(3));
        assert!(!district.contains(2));
    }

    #[test]
    fn serializes_as_plain_list() {
        let district = District::new(vec![2, 0, 1]);
        assert_eq!(serde_json::to_string(&district).unwrap(), "[0,1,2]");
    }
}
