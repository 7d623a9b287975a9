//! Dispatch Outcomes
//!
//! The result shapes the dispatcher hands back to the channel transport.

use serde::{Deserialize, Serialize};

/// Wire error code reported alongside every failure message.
pub const FAILURE_CODE: &str = "ERROR";

/// The result of handling one operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum Outcome {
    /// A boolean result.
    ///
    /// Note that for navigation operations `true` means "the settings
    /// navigation was launched", while for query operations it means "the
    /// permission/exemption is granted". Callers cannot distinguish "the
    /// user will now be shown a settings screen" from "already satisfied";
    /// this ambiguity is part of the established channel contract.
    Bool(bool),
    /// An unexpected condition while querying or launching. Surfaced
    /// verbatim to the caller; never retried here.
    Error { code: String, message: String },
    /// The operation name is outside the fixed vocabulary. Not an error;
    /// signals a caller-side contract violation.
    NotImplemented,
}

impl Outcome {
    /// Build a failure outcome carrying the fixed wire code.
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Error {
            code: FAILURE_CODE.to_string(),
            message: message.into(),
        }
    }
}
