//! Response envelope
//!
//! The content API wraps every payload as `{ success, data }`. Neither field
//! is enforced by a schema, so both are optional here.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub success: bool,
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
        }
    }

    /// The payload, only when the server also reported success
    pub fn into_successful(self) -> Option<T> {
        if self.success {
            self.data
        } else {
            None
        }
    }
}
