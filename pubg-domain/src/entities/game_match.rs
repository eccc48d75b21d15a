// Match entity with its resolved rosters, participants and telemetry asset

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::Link;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: String,
    pub match_completion: Option<DateTime<Utc>>,
    pub duration: i64,
    pub game_mode: String,
    pub map: String,
    pub is_custom_match: bool,
    pub patch_version: String,
    pub season_state: String,
    pub shard: String,
    pub title: String,
    pub roster_ids: Vec<String>,
    pub rosters: Vec<Link<Roster>>,
    pub assets: Vec<Link<MatchAsset>>,
}

impl Match {
    pub fn telemetry(&self) -> Option<&MatchAsset> {
        self.assets.iter().find_map(Link::resolved)
    }

    pub fn participants(&self) -> impl Iterator<Item = &Participant> {
        self.rosters
            .iter()
            .filter_map(Link::resolved)
            .flat_map(|roster| roster.participants.iter().filter_map(Link::resolved))
    }

    pub fn unresolved_count(&self) -> usize {
        let rosters = self.rosters.iter().filter(|link| !link.is_resolved()).count();
        let participants: usize = self
            .rosters
            .iter()
            .filter_map(Link::resolved)
            .map(|roster| roster.participants.iter().filter(|link| !link.is_resolved()).count())
            .sum();
        let assets = self.assets.iter().filter(|link| !link.is_resolved()).count();
        rosters + participants + assets
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Id: {}", self.id)?;
        writeln!(f, "Region: {}", self.shard)?;
        writeln!(f, "Duration: {}", self.duration)?;
        match &self.match_completion {
            Some(at) => writeln!(f, "Match completion: {}", at.to_rfc3339())?,
            None => writeln!(f, "Match completion: unknown")?,
        }
        writeln!(f, "Map: {}", self.map)?;
        writeln!(f, "Mode: {}", self.game_mode)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    pub id: String,
    pub rank: i64,
    pub team_id: i64,
    pub won: bool,
    pub shard: String,
    pub participants: Vec<Link<Participant>>,
}

impl Roster {
    pub fn participant_ids(&self) -> Vec<&str> {
        self.participants
            .iter()
            .map(|link| match link {
                Link::Resolved(participant) => participant.id.as_str(),
                Link::Unresolved { id, .. } => id.as_str(),
            })
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub id: String,
    pub actor: String,
    pub shard: String,
    pub stats: ParticipantStats,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParticipantStats {
    #[serde(rename = "DBNOs")]
    pub dbnos: i64,
    pub assists: i64,
    pub boosts: i64,
    pub damage_dealt: f64,
    pub death_type: String,
    pub headshot_kills: i64,
    pub heals: i64,
    pub kill_place: i64,
    pub kill_streaks: i64,
    pub kills: i64,
    pub longest_kill: f64,
    pub name: String,
    pub player_id: String,
    pub revives: i64,
    pub ride_distance: f64,
    pub road_kills: i64,
    pub swim_distance: f64,
    pub team_kills: i64,
    pub time_survived: f64,
    pub vehicle_destroys: i64,
    pub walk_distance: f64,
    pub weapons_acquired: i64,
    pub win_place: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchAsset {
    pub id: String,
    pub url: String,
    pub created: Option<DateTime<Utc>>,
    pub description: String,
    pub name: String,
}
