// Read-side use cases over the stats API

pub mod decode_queries;
pub mod match_queries;
pub mod player_queries;
pub mod sample_queries;
pub mod season_queries;
pub mod status_queries;
pub mod telemetry_queries;

pub use decode_queries::*;
pub use match_queries::*;
pub use player_queries::*;
pub use sample_queries::*;
pub use season_queries::*;
pub use status_queries::*;
pub use telemetry_queries::*;
