//! REST API helpers for block persistence.
//!
//! Browser builds (`csr`) make real HTTP calls via `gloo-net`; other builds
//! return [`ApiError::Unavailable`] so pure modules and tests compile without
//! a browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. Callers at the gesture boundary
//! log the error and alert; nothing here retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use canvas::doc::{BlockId, OrderEntry, merge_data};
use canvas::engine::CreateBlock;
use serde_json::{Map, Value};

use super::error::ApiError;
#[cfg(feature = "csr")]
use super::types::{BlockPayload, CreatedPayload, Empty, Envelope, ReorderRequest, UpdateRequest, UploadPayload};
use super::types::FetchedBlock;

#[cfg(any(test, feature = "csr"))]
fn blocks_endpoint(website_id: i64) -> String {
    format!("/api/websites/{website_id}/blocks/")
}

#[cfg(any(test, feature = "csr"))]
fn reorder_endpoint(website_id: i64) -> String {
    format!("/api/websites/{website_id}/blocks/reorder/")
}

#[cfg(any(test, feature = "csr"))]
fn block_endpoint(id: BlockId) -> String {
    format!("/api/blocks/{id}/")
}

#[cfg(any(test, feature = "csr"))]
fn update_endpoint(id: BlockId) -> String {
    format!("/api/blocks/{id}/update/")
}

#[cfg(any(test, feature = "csr"))]
fn delete_endpoint(id: BlockId) -> String {
    format!("/api/blocks/{id}/delete/")
}

#[cfg(any(test, feature = "csr"))]
fn upload_endpoint(id: BlockId) -> String {
    format!("/api/blocks/{id}/upload-image/")
}

/// Header carrying the CSRF token on every request.
#[cfg(feature = "csr")]
const CSRF_HEADER: &str = "X-CSRFToken";

#[cfg(feature = "csr")]
async fn read_envelope<T>(resp: gloo_net::http::Response) -> Result<T, ApiError>
where
    T: serde::de::DeserializeOwned + Default,
{
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    let body: Envelope<T> = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
    body.into_result()
}

#[cfg(feature = "csr")]
async fn send_json<T>(builder: gloo_net::http::RequestBuilder, body: &impl serde::Serialize) -> Result<T, ApiError>
where
    T: serde::de::DeserializeOwned + Default,
{
    let request = builder
        .header(CSRF_HEADER, &crate::util::cookie::csrf_token())
        .json(body)
        .map_err(|e| ApiError::Request(e.to_string()))?;
    let resp = request.send().await.map_err(|e| ApiError::Transport(e.to_string()))?;
    read_envelope(resp).await
}

/// Create a block via `POST /api/websites/{id}/blocks/`.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails or is rejected.
pub async fn create_block(website_id: i64, body: &CreateBlock) -> Result<Option<Value>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let created: CreatedPayload =
            send_json(gloo_net::http::Request::post(&blocks_endpoint(website_id)), body).await?;
        Ok(created.block)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (website_id, body);
        Err(ApiError::Unavailable)
    }
}

/// Persist the full render order via `POST /api/websites/{id}/blocks/reorder/`.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails or is rejected.
pub async fn reorder_blocks(website_id: i64, entries: &[OrderEntry]) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let body = ReorderRequest { blocks: entries };
        let _: Empty = send_json(gloo_net::http::Request::post(&reorder_endpoint(website_id)), &body).await?;
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (website_id, entries);
        Err(ApiError::Unavailable)
    }
}

/// Fetch a block's current data via `GET /api/blocks/{id}/`.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails or is rejected.
pub async fn fetch_block(id: BlockId) -> Result<FetchedBlock, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(&block_endpoint(id))
            .header(CSRF_HEADER, &crate::util::cookie::csrf_token())
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let payload: BlockPayload = read_envelope(resp).await?;
        Ok(payload.block)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
        Err(ApiError::Unavailable)
    }
}

/// Replace a block's data via `PATCH /api/blocks/{id}/update/`. Callers send
/// the full merged record.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails or is rejected.
pub async fn update_block(id: BlockId, data: &Value) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let body = UpdateRequest { data };
        let _: Empty = send_json(gloo_net::http::Request::patch(&update_endpoint(id)), &body).await?;
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (id, data);
        Err(ApiError::Unavailable)
    }
}

/// Delete a block via `DELETE /api/blocks/{id}/delete/`.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails or is rejected.
pub async fn delete_block(id: BlockId) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::delete(&delete_endpoint(id))
            .header(CSRF_HEADER, &crate::util::cookie::csrf_token())
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let _: Empty = read_envelope(resp).await?;
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
        Err(ApiError::Unavailable)
    }
}

/// Upload an image as multipart field `image` and return its URL.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails, is rejected, or the
/// response has no URL.
#[cfg(feature = "csr")]
pub async fn upload_image(id: BlockId, file: &web_sys::File) -> Result<String, ApiError> {
    let form = web_sys::FormData::new().map_err(|e| ApiError::Request(format!("{e:?}")))?;
    form.append_with_blob("image", file)
        .map_err(|e| ApiError::Request(format!("{e:?}")))?;
    let request = gloo_net::http::Request::post(&upload_endpoint(id))
        .header(CSRF_HEADER, &crate::util::cookie::csrf_token())
        .body(form)
        .map_err(|e| ApiError::Request(e.to_string()))?;
    let resp = request.send().await.map_err(|e| ApiError::Transport(e.to_string()))?;
    let payload: UploadPayload = read_envelope(resp).await?;
    payload
        .image_url
        .filter(|url| !url.is_empty())
        .ok_or_else(|| ApiError::Decode("upload response has no image_url".to_owned()))
}

/// Fetch the block, merge `patch` over its data, and write the result back.
/// Last write wins.
///
/// # Errors
///
/// Returns the first [`ApiError`] from the fetch or the update.
pub async fn merge_and_update(id: BlockId, patch: &Map<String, Value>) -> Result<(), ApiError> {
    let current = fetch_block(id).await?;
    update_block(id, &merge_data(&current.data, patch)).await
}
