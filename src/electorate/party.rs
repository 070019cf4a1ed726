use std::fmt;

use serde::{Deserialize, Serialize};

/// The party a voter supports, compared by name.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Party(String);

impl Party {
    pub fn new(name: impl Into<String>) -> Self { Self(name.into()) }

    #[inline] pub fn name(&self) -> &str { &self.0 }
}

impl From<&str> for Party {
    fn from(name: &str) -> Self { Self::new(name) }
}

impl From<String> for Party {
    fn from(name: String) -> Self { Self(name) }
}

impl fmt::Display for Party {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.0) }
}
