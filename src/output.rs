//! The `{ ok, error?, ..payload }` result shape every operation returns.

use std::fmt::Display;

use serde::Serialize;

/// Operation result handed to the transport layer.
///
/// Payload fields are flattened next to `ok`/`error`, so `T` must serialize
/// as a map (a struct, or `()` for operations without a payload).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoreOutput<T> {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(flatten)]
    pub data: Option<T>,
}

impl<T> CoreOutput<T> {
    pub fn success(data: T) -> Self {
        Self { ok: true, error: None, data: Some(data) }
    }

    pub fn failure(error: impl Display) -> Self {
        Self { ok: false, error: Some(error.to_string()), data: None }
    }
}

impl<T, E: Display> From<Result<T, E>> for CoreOutput<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => Self::success(data),
            Err(error) => Self::failure(error),
        }
    }
}
