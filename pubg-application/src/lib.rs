// PUBG Application Layer

pub mod error;
pub mod fetch;
pub mod metrics;
pub mod queries;
pub mod state;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::AppError;
pub use metrics::DecodeMetrics;
pub use state::AppState;
