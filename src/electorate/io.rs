use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::{common::{read_from_json_file, write_to_json_file}, electorate::{Party, VoterMap}};

/// On-disk representation of a `VoterMap`.
#[derive(Serialize, Deserialize)]
struct ElectorateFile {
    adjacency: Vec<Vec<u32>>,
    votes: Vec<Party>,
}

impl VoterMap {
    /// Parse an electorate from a JSON string of the form `{"adjacency": [[..], ..], "votes": [..]}`.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let file: ElectorateFile = serde_json::from_str(json)?;
        Self::from_adjacency(&file.adjacency, file.votes)
    }

    /// Serialize the electorate to a JSON string.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.to_file())?)
    }

    /// Read an electorate from a JSON file.
    pub fn read_from_json_file(path: &Path) -> Result<Self> {
        let file: ElectorateFile = read_from_json_file(path)?;
        Self::from_adjacency(&file.adjacency, file.votes)
    }

    /// Write the electorate to a JSON file.
    pub fn write_to_json_file(&self, path: &Path) -> Result<()> {
        write_to_json_file(path, &self.to_file())
    }

    fn to_file(&self) -> ElectorateFile {
        ElectorateFile { adjacency: self.graph().adjacency(), votes: self.votes().to_vec() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Electorate;

    #[test]
    fn parses_adjacency_and_votes() {
        let map = VoterMap::from_json_str(r#"{"adjacency": [[1], [2], []], "votes": ["R", "D", "R"]}"#).unwrap();
        assert_eq!(map.number_of_voters(), 3);
        // One-sided edges are stored in both directions.
        assert_eq!(map.neighbors(1).collect::<Vec<_>>(), vec![0, 2]);
        assert_eq!(map.vote(1).name(), "D");
    }

    #[test]
    fn rejects_mismatched_votes() {
        assert!(VoterMap::from_json_str(r#"{"adjacency": [[1], [0]], "votes": ["R"]}"#).is_err());
    }

    #[test]
    fn file_round_trip_preserves_electorate() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("electorate.json");
        let votes = ["A", "B", "B", "A"].into_iter().map(Party::from).collect();
        let map = VoterMap::grid(2, 2, votes).unwrap();

        map.write_to_json_file(&path).unwrap();
        assert_eq!(VoterMap::read_from_json_file(&path).unwrap(), map);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = VoterMap::read_from_json_file(Path::new("/nonexistent/electorate.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/electorate.json"));
    }
}
