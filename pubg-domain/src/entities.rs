// Domain entities
pub mod document;
pub mod event;
pub mod game_match;
pub mod player;
pub mod raw_record;
pub mod sample;
pub mod season;
pub mod status;
pub mod telemetry_objects;

pub use document::*;
pub use event::*;
pub use game_match::*;
pub use player::*;
pub use raw_record::*;
pub use sample::*;
pub use season::*;
pub use status::*;
pub use telemetry_objects::*;
