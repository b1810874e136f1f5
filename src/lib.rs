//! Fixed-layout credit record storage.
//!
//! This crate provides the types and logic used by the `credit_records`
//! writer binary and the `reader` tool:
//!
//! - `record`: the `Credit` record, its fixed-capacity `LastName`, and the
//!   one shared 32-byte on-disk layout
//! - `store`: write/read of a single record to/from a file or any stream
//! - `error`: typed store and name errors
//! - `logging`: tracing setup for the binaries
//!
//! Names longer than the field capacity are rejected when the record is
//! built, so a record that exists can always be written in full.
pub mod error;
pub mod logging;
pub mod record;
pub mod store;

pub use error::{NameError, StoreError, StoreResult};
pub use record::{Credit, LastName, NAME_CAPACITY, RECORD_SIZE};
