// Port traits
// What the decoding core's callers need from infrastructure

pub mod repositories;
pub mod services;

pub use repositories::*;
pub use services::*;
