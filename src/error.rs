//! Error types for the fixed-record store.

use std::io;
use thiserror::Error;

/// Reasons a last name cannot live in the fixed-capacity name field.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NameError {
    #[error("name is {len} bytes, field capacity is {capacity}")]
    TooLong { len: usize, capacity: usize },

    #[error("name contains a NUL byte")]
    ContainsNul,

    #[error("name field is not valid UTF-8")]
    NotUtf8,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not open record file: {0}")]
    OpenFailed(#[source] io::Error),

    #[error("could not write record: {0}")]
    WriteFailed(#[source] io::Error),

    #[error("could not read record: {0}")]
    ReadFailed(#[source] io::Error),

    #[error("short read: expected {expected} bytes, got {actual}")]
    ShortRead { expected: usize, actual: usize },

    #[error("invalid last name: {0}")]
    Name(#[from] NameError),

    #[error("record codec error: {0}")]
    Codec(#[from] bincode::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;
