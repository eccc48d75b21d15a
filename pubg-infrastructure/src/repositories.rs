pub mod response_files;

pub use response_files::*;
