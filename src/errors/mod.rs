//! # Error Handling
//!
//! Error types shared by the fetcher, its backends and the driver.

pub mod types;

pub use types::{RemoteFailureKind, Result, SecretAccessError};
