// Domain services
// Pure decoding: no I/O, no logging, no shared mutable state

pub mod event_decoder;
pub mod event_registry;
pub mod flattener;
pub mod resolver;
pub mod resource_index;

pub use event_decoder::*;
pub use event_registry::*;
pub use flattener::*;
pub use resolver::*;
pub use resource_index::*;
