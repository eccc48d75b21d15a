// Discriminator registry
// Closed table from `_T` to the decoder for that event's fields

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::entities::{EventBody, RawRecord};

pub type DecodeFn = fn(&RawRecord) -> serde_json::Result<EventBody>;

pub struct EventShape {
    pub discriminator: &'static str,
    decode: DecodeFn,
}

impl EventShape {
    pub fn decode(&self, record: &RawRecord) -> serde_json::Result<EventBody> {
        (self.decode)(record)
    }
}

impl std::fmt::Debug for EventShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventShape")
            .field("discriminator", &self.discriminator)
            .finish()
    }
}

static SHAPES: &[EventShape] = &[
    EventShape {
        discriminator: "LogArmorDestroy",
        decode: |r| r.decode().map(EventBody::ArmorDestroy),
    },
    EventShape {
        discriminator: "LogCarePackageLand",
        decode: |r| r.decode().map(EventBody::CarePackageLand),
    },
    EventShape {
        discriminator: "LogCarePackageSpawn",
        decode: |r| r.decode().map(EventBody::CarePackageSpawn),
    },
    EventShape {
        discriminator: "LogGameStatePeriodic",
        decode: |r| r.decode().map(EventBody::GameStatePeriodic),
    },
    EventShape {
        discriminator: "LogItemAttach",
        decode: |r| r.decode().map(EventBody::ItemAttach),
    },
    EventShape {
        discriminator: "LogItemDetach",
        decode: |r| r.decode().map(EventBody::ItemDetach),
    },
    EventShape {
        discriminator: "LogItemDrop",
        decode: |r| r.decode().map(EventBody::ItemDrop),
    },
    EventShape {
        discriminator: "LogItemEquip",
        decode: |r| r.decode().map(EventBody::ItemEquip),
    },
    EventShape {
        discriminator: "LogItemPickup",
        decode: |r| r.decode().map(EventBody::ItemPickup),
    },
    EventShape {
        discriminator: "LogItemUnequip",
        decode: |r| r.decode().map(EventBody::ItemUnequip),
    },
    EventShape {
        discriminator: "LogItemUse",
        decode: |r| r.decode().map(EventBody::ItemUse),
    },
    EventShape {
        discriminator: "LogMatchDefinition",
        decode: |r| r.decode().map(EventBody::MatchDefinition),
    },
    EventShape {
        discriminator: "LogMatchEnd",
        decode: |r| r.decode().map(EventBody::MatchEnd),
    },
    EventShape {
        discriminator: "LogMatchStart",
        decode: |r| r.decode().map(EventBody::MatchStart),
    },
    EventShape {
        discriminator: "LogPlayerAttack",
        decode: |r| r.decode().map(EventBody::PlayerAttack),
    },
    EventShape {
        discriminator: "LogPlayerCreate",
        decode: |r| r.decode().map(EventBody::PlayerCreate),
    },
    EventShape {
        discriminator: "LogPlayerKill",
        decode: |r| r.decode().map(EventBody::PlayerKill),
    },
    EventShape {
        discriminator: "LogPlayerLogin",
        decode: |r| r.decode().map(EventBody::PlayerLogin),
    },
    EventShape {
        discriminator: "LogPlayerLogout",
        decode: |r| r.decode().map(EventBody::PlayerLogout),
    },
    EventShape {
        discriminator: "LogPlayerPosition",
        decode: |r| r.decode().map(EventBody::PlayerPosition),
    },
    EventShape {
        discriminator: "LogPlayerTakeDamage",
        decode: |r| r.decode().map(EventBody::PlayerTakeDamage),
    },
    EventShape {
        discriminator: "LogSwimEnd",
        decode: |r| r.decode().map(EventBody::SwimEnd),
    },
    EventShape {
        discriminator: "LogSwimStart",
        decode: |r| r.decode().map(EventBody::SwimStart),
    },
    EventShape {
        discriminator: "LogVehicleDestroy",
        decode: |r| r.decode().map(EventBody::VehicleDestroy),
    },
    EventShape {
        discriminator: "LogVehicleLeave",
        decode: |r| r.decode().map(EventBody::VehicleLeave),
    },
    EventShape {
        discriminator: "LogVehicleRide",
        decode: |r| r.decode().map(EventBody::VehicleRide),
    },
];

#[derive(Debug)]
pub struct EventRegistry {
    shapes: HashMap<&'static str, &'static EventShape>,
}

impl EventRegistry {
    pub fn global() -> &'static EventRegistry {
        static REGISTRY: OnceLock<EventRegistry> = OnceLock::new();
        REGISTRY.get_or_init(EventRegistry::build)
    }

    fn build() -> Self {
        let shapes = SHAPES.iter().map(|shape| (shape.discriminator, shape)).collect();
        Self { shapes }
    }

    pub fn shape_for(&self, discriminator: &str) -> Option<&'static EventShape> {
        self.shapes.get(discriminator).copied()
    }

    pub fn discriminators(&self) -> impl Iterator<Item = &'static str> {
        SHAPES.iter().map(|shape| shape.discriminator)
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}
