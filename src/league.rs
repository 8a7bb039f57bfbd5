//! League table types

use serde::{Deserialize, Serialize};

/// One player's tally as exposed by `/league`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
  #[serde(rename = "Name")]
  pub name: String,
  #[serde(rename = "Wins")]
  pub wins: u64,
}

impl PlayerRecord {
  pub fn new(name: impl Into<String>, wins: u64) -> Self {
    Self {
      name: name.into(),
      wins,
    }
  }
}

/// Build a league table from `(name, wins)` pairs.
///
/// Sorted by wins descending; players on equal wins are ordered by name so
/// the output is stable across calls.
pub fn rank<I, S>(entries: I) -> Vec<PlayerRecord>
where
  I: IntoIterator<Item = (S, u64)>,
  S: Into<String>,
{
  let mut league: Vec<PlayerRecord> = entries
    .into_iter()
    .map(|(name, wins)| PlayerRecord::new(name, wins))
    .collect();
  league.sort_by(|a, b| b.wins.cmp(&a.wins).then_with(|| a.name.cmp(&b.name)));
  league
}
