// Player entity
// Flattened `player` resource; platform-shard specific

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    pub name: String,
    pub version: String,
    pub shard: String,
    pub title: String,
    pub match_ids: Vec<String>,
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Player: {}", self.name)?;
        writeln!(f, "Id: {}", self.id)?;
        writeln!(f, "Region: {}", self.shard)?;
        writeln!(f, "Recent Matches:")?;
        for id in &self.match_ids {
            writeln!(f, "    Id: {}", id)?;
        }
        Ok(())
    }
}
