//! JSON bodies exchanged between the browser client and the server.

use serde::{Deserialize, Serialize};

/// Body returned by `POST /api/flights` when the record was appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitAck {
    pub success: bool,
}

impl SubmitAck {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// Body returned with every non-2xx status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
