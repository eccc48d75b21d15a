// Domain value objects
pub mod damage;
pub mod identifiers;
pub mod link;
pub mod shard;

pub use damage::*;
pub use identifiers::*;
pub use link::*;
pub use shard::*;
