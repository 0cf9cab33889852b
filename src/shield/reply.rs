//! Channel replies
//!
//! Every call on the command channel is answered with exactly one
//! [`MethodReply`].

use crate::utils::{ErrorResponse, ShieldError, ShieldResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Reply sent back for a channel call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum MethodReply {
    /// The call succeeded, carrying its value
    Success { value: Value },
    /// The call was recognized but failed
    Error(ErrorResponse),
    /// The method is not handled by this plugin
    NotImplemented,
}

impl MethodReply {
    /// Success carrying no value
    pub fn success() -> Self {
        MethodReply::Success { value: Value::Null }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, MethodReply::Success { .. })
    }
}

impl From<ShieldResult<()>> for MethodReply {
    fn from(result: ShieldResult<()>) -> Self {
        match result {
            Ok(()) => MethodReply::success(),
            Err(ShieldError::UnrecognizedCommand(_)) => MethodReply::NotImplemented,
            Err(error) => MethodReply::Error(error.into()),
        }
    }
}
