// Objects embedded in telemetry events
// Every field defaults when absent; numbers keep wire precision

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Location {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Character {
    pub name: String,
    pub team_id: i64,
    pub health: f64,
    pub location: Location,
    pub ranking: i64,
    pub account_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Item {
    pub item_id: String,
    pub stack_count: i64,
    pub category: String,
    pub sub_category: String,
    pub attached_items: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemPackage {
    pub item_package_id: String,
    pub location: Location,
    pub items: Vec<Item>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Vehicle {
    pub vehicle_type: String,
    pub vehicle_id: String,
    pub health_percent: f64,
    // the feed spells it "feulPercent"
    #[serde(alias = "feulPercent")]
    pub fuel_percent: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameState {
    pub elapsed_time: f64,
    pub num_alive_teams: i64,
    pub num_join_players: i64,
    pub num_start_players: i64,
    pub num_alive_players: i64,
    pub safety_zone_position: Location,
    pub safety_zone_radius: f64,
    pub poison_gas_warning_position: Location,
    pub poison_gas_warning_radius: f64,
    pub red_zone_position: Location,
    pub red_zone_radius: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Common {
    pub is_game: f64,
}

impl std::fmt::Display for Character {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (team {}, hp {:.1}) at ({:.0}, {:.0}, {:.0})",
            self.name, self.team_id, self.health, self.location.x, self.location.y, self.location.z
        )
    }
}
