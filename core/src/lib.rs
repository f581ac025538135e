// Kroki - Core Library
//
// Diagram model, payload encoding and service configuration shared by
// the client and the command-line tool.

pub mod config;
pub mod encoding;
pub mod models;
pub mod validation;

pub use config::*;
pub use encoding::*;
pub use models::*;
pub use validation::*;
