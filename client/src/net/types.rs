//! Wire DTOs for the block REST API.
//!
//! DESIGN
//! ======
//! Every response carries a `success` flag and, on failure, an `error`
//! message. [`Envelope::into_result`] folds that pair into an [`ApiError`]
//! so call sites only deal with `Result`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use canvas::doc::OrderEntry;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::ApiError;

/// The common `{success, error?}` response shape, plus an optional payload.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(flatten)]
    pub payload: T,
}

impl<T> Envelope<T> {
    /// The payload on success, or the server's message as [`ApiError::Rejected`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] when `success` is false.
    pub fn into_result(self) -> Result<T, ApiError> {
        if self.success {
            Ok(self.payload)
        } else {
            Err(ApiError::Rejected(self.error.unwrap_or_else(|| "request rejected".to_owned())))
        }
    }
}

/// No payload beyond the envelope.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Empty {}

/// Payload of `GET /api/blocks/{id}/`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct BlockPayload {
    #[serde(default)]
    pub block: FetchedBlock,
}

/// The fetched block's current data.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct FetchedBlock {
    #[serde(default)]
    pub data: Value,
    /// URL of an uploaded image, when the block has one.
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Payload of the create endpoint.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct CreatedPayload {
    #[serde(default)]
    pub block: Option<Value>,
}

/// Payload of the upload endpoint.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct UploadPayload {
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Body of `PATCH /api/blocks/{id}/update/`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct UpdateRequest<'a> {
    pub data: &'a Value,
}

/// Body of `POST /api/websites/{id}/blocks/reorder/`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReorderRequest<'a> {
    pub blocks: &'a [OrderEntry],
}
