//! Error types.
//!
//! Application-level failures (404, 500) are expressed as HTTP
//! [`Response`](crate::Response) values, not as errors. The types here cover
//! the two remaining layers: the store contract and process infrastructure.

use thiserror::Error;

/// Errors produced by the [`MemStore`](crate::store::MemStore) contract.
///
/// `NotFound` is deliberately the only variant: it is the one store condition
/// handlers inspect (mapping it to 404). Everything else a request can get
/// wrong — bad JSON, a malformed key — fails before the store is reached and
/// collapses into the uniform 500 response.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("not found")]
    NotFound,
}

/// Infrastructure errors: startup configuration, binding a port, accepting
/// connections.
#[derive(Debug, Error)]
pub enum Error {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("config: {0}")]
    Config(String),
}
