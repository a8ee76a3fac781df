//! datashelf-core: domain model and configuration
//!
//! Holds the `Record` entity, validated field newtypes, and the server
//! configuration shared by the server and CLI crates.

pub mod config;
pub mod record;
pub mod validation;

pub use config::ServerConfig;
pub use record::{Record, RecordCategory, RecordValue};
pub use validation::ValidationError;
