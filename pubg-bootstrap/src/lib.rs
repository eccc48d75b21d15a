pub mod cli;
pub mod context;
pub mod lifecycle;
pub mod render;

pub use cli::{Cli, Command, GlobalOptions};
pub use lifecycle::run;
