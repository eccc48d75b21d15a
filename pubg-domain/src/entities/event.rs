// Telemetry event entities
// One variant per known `_T` discriminator, plus the decoder's error markers

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::entities::raw_record::RawRecord;
use crate::entities::telemetry_objects::{
    Character, Common, GameState, Item, ItemPackage, Vehicle,
};
use crate::error::EventDecodeError;
use crate::value_objects::{AttackType, DamageReason};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventEnvelope {
    pub schema_version: i64,
    pub timestamp: DateTime<Utc>,
    pub discriminator: String,
    pub common: Option<Common>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetryEvent {
    pub envelope: EventEnvelope,
    pub body: EventBody,
}

impl TelemetryEvent {
    pub fn discriminator(&self) -> &str {
        &self.envelope.discriminator
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.envelope.timestamp
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum DecodedEvent {
    Event(TelemetryEvent),
    Unknown(UnknownEvent),
    Invalid(InvalidEvent),
}

impl DecodedEvent {
    pub fn as_event(&self) -> Option<&TelemetryEvent> {
        match self {
            DecodedEvent::Event(event) => Some(event),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnknownEvent {
    pub discriminator: String,
    pub record: RawRecord,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvalidEvent {
    pub raw: Value,
    #[serde(serialize_with = "reason_text")]
    pub reason: EventDecodeError,
}

fn reason_text<S: serde::Serializer>(
    reason: &EventDecodeError,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(reason)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EventBody {
    ArmorDestroy(ArmorDestroy),
    CarePackageLand(CarePackage),
    CarePackageSpawn(CarePackage),
    GameStatePeriodic(GameStatePeriodic),
    ItemAttach(ItemAttachment),
    ItemDetach(ItemAttachment),
    ItemDrop(ItemInteraction),
    ItemEquip(ItemInteraction),
    ItemPickup(ItemInteraction),
    ItemUnequip(ItemInteraction),
    ItemUse(ItemInteraction),
    MatchDefinition(MatchDefinition),
    MatchEnd(MatchCharacters),
    MatchStart(MatchCharacters),
    PlayerAttack(PlayerAttack),
    PlayerCreate(CharacterEvent),
    PlayerKill(PlayerKill),
    PlayerLogin(PlayerLogin),
    PlayerLogout(PlayerLogout),
    PlayerPosition(PlayerPosition),
    PlayerTakeDamage(PlayerTakeDamage),
    SwimEnd(CharacterEvent),
    SwimStart(CharacterEvent),
    VehicleDestroy(VehicleDestroy),
    VehicleLeave(VehicleLeave),
    VehicleRide(VehicleRide),
}

impl EventBody {
    pub fn discriminator(&self) -> &'static str {
        match self {
            EventBody::ArmorDestroy(_) => "LogArmorDestroy",
            EventBody::CarePackageLand(_) => "LogCarePackageLand",
            EventBody::CarePackageSpawn(_) => "LogCarePackageSpawn",
            EventBody::GameStatePeriodic(_) => "LogGameStatePeriodic",
            EventBody::ItemAttach(_) => "LogItemAttach",
            EventBody::ItemDetach(_) => "LogItemDetach",
            EventBody::ItemDrop(_) => "LogItemDrop",
            EventBody::ItemEquip(_) => "LogItemEquip",
            EventBody::ItemPickup(_) => "LogItemPickup",
            EventBody::ItemUnequip(_) => "LogItemUnequip",
            EventBody::ItemUse(_) => "LogItemUse",
            EventBody::MatchDefinition(_) => "LogMatchDefinition",
            EventBody::MatchEnd(_) => "LogMatchEnd",
            EventBody::MatchStart(_) => "LogMatchStart",
            EventBody::PlayerAttack(_) => "LogPlayerAttack",
            EventBody::PlayerCreate(_) => "LogPlayerCreate",
            EventBody::PlayerKill(_) => "LogPlayerKill",
            EventBody::PlayerLogin(_) => "LogPlayerLogin",
            EventBody::PlayerLogout(_) => "LogPlayerLogout",
            EventBody::PlayerPosition(_) => "LogPlayerPosition",
            EventBody::PlayerTakeDamage(_) => "LogPlayerTakeDamage",
            EventBody::SwimEnd(_) => "LogSwimEnd",
            EventBody::SwimStart(_) => "LogSwimStart",
            EventBody::VehicleDestroy(_) => "LogVehicleDestroy",
            EventBody::VehicleLeave(_) => "LogVehicleLeave",
            EventBody::VehicleRide(_) => "LogVehicleRide",
        }
    }

    pub fn attack_id(&self) -> Option<i64> {
        match self {
            EventBody::ArmorDestroy(e) => Some(e.attack_id),
            EventBody::PlayerAttack(e) => Some(e.attack_id),
            EventBody::PlayerKill(e) => Some(e.attack_id),
            EventBody::PlayerTakeDamage(e) => Some(e.attack_id),
            EventBody::VehicleDestroy(e) => Some(e.attack_id),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ArmorDestroy {
    pub attack_id: i64,
    pub attacker: Option<Character>,
    pub victim: Option<Character>,
    pub damage_type_category: String,
    pub damage_reason: Option<DamageReason>,
    pub damage_causer_name: String,
    pub item: Option<Item>,
    pub distance: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CarePackage {
    pub item_package: Option<ItemPackage>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameStatePeriodic {
    pub game_state: Option<GameState>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemAttachment {
    pub character: Option<Character>,
    pub parent_item: Option<Item>,
    pub child_item: Option<Item>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemInteraction {
    pub character: Option<Character>,
    pub item: Option<Item>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchDefinition {
    #[serde(rename = "MatchId", alias = "matchId")]
    pub match_id: String,
    #[serde(rename = "PingQuality", alias = "pingQuality")]
    pub ping_quality: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MatchCharacters {
    pub characters: Vec<Character>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerAttack {
    pub attack_id: i64,
    pub attacker: Option<Character>,
    pub attack_type: Option<AttackType>,
    pub weapon: Option<Item>,
    pub vehicle: Option<Vehicle>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CharacterEvent {
    pub character: Option<Character>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerKill {
    pub attack_id: i64,
    pub killer: Option<Character>,
    pub victim: Option<Character>,
    pub damage_type_category: String,
    pub damage_reason: Option<DamageReason>,
    pub damage_causer_name: String,
    pub distance: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerLogin {
    pub result: bool,
    #[serde(alias = "errorMessge")]
    pub error_message: String,
    pub account_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerLogout {
    pub account_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerPosition {
    pub character: Option<Character>,
    pub elapsed_time: f64,
    pub num_alive_players: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerTakeDamage {
    pub attack_id: i64,
    pub attacker: Option<Character>,
    pub victim: Option<Character>,
    pub damage_type_category: String,
    pub damage_reason: Option<DamageReason>,
    pub damage: f64,
    pub damage_causer_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VehicleDestroy {
    pub attack_id: i64,
    pub attacker: Option<Character>,
    pub vehicle: Option<Vehicle>,
    pub damage_type_category: String,
    pub damage_causer_name: String,
    pub distance: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VehicleLeave {
    pub character: Option<Character>,
    pub vehicle: Option<Vehicle>,
    pub ride_distance: f64,
    pub seat_index: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VehicleRide {
    pub character: Option<Character>,
    pub vehicle: Option<Vehicle>,
    pub seat_index: i64,
}
