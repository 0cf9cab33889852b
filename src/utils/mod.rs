//! Shared utilities

pub mod error;
pub mod logging;

pub use error::{ErrorResponse, ShieldError, ShieldResult};
