//! Database layer - connection pool, schema, and the record repository
//!
//! # Design Principles
//!
//! - Connection pool - no Arc<Mutex<Connection>>
//! - Lookups return a structured NotFound, never a null-style access
//! - Every mutating statement commits before the handler responds

pub mod migrations;
pub mod pool;
pub mod records;

pub use pool::{create_pool, create_pool_in_memory};
pub use records::{DbError, RecordRepo};
