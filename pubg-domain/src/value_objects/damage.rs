// Damage classification value objects

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DamageReason {
    ArmShot,
    HeadShot,
    LegShot,
    PelvisShot,
    TorsoShot,
    NonSpecific,
    None,
    #[serde(other)]
    Other,
}

impl DamageReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            DamageReason::ArmShot => "ArmShot",
            DamageReason::HeadShot => "HeadShot",
            DamageReason::LegShot => "LegShot",
            DamageReason::PelvisShot => "PelvisShot",
            DamageReason::TorsoShot => "TorsoShot",
            DamageReason::NonSpecific => "NonSpecific",
            DamageReason::None => "None",
            DamageReason::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttackType {
    Weapon,
    RedZone,
    #[serde(other)]
    Other,
}
