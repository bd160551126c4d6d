//! Initial page data embedded by the host page.
//!
//! The server renders the block snapshot into
//! `<script id="site-blocks" type="application/json">` and optional site
//! settings into `<script id="site-config" type="application/json">`.

#[cfg(test)]
#[path = "bootstrap_test.rs"]
mod bootstrap_test;

use canvas::doc::Block;

pub const BLOCKS_SCRIPT_ID: &str = "site-blocks";
pub const CONFIG_SCRIPT_ID: &str = "site-config";

/// Parse the block snapshot. Entries that fail to parse are logged and
/// skipped so one bad block does not blank the page.
///
/// # Errors
///
/// Returns the parse error when the text is not a JSON array.
pub fn parse_blocks(json: &str) -> Result<Vec<Block>, serde_json::Error> {
    let raw: Vec<serde_json::Value> = serde_json::from_str(json)?;
    Ok(raw
        .into_iter()
        .filter_map(|value| match decode_entry(value) {
            Ok(block) => Some(block),
            Err(reason) => {
                #[cfg(feature = "csr")]
                log::warn!("skipping snapshot entry: {reason}");
                #[cfg(not(feature = "csr"))]
                let _ = reason;
                None
            }
        })
        .collect())
}

/// Decode one snapshot entry, or say which block was rejected and why.
fn decode_entry(value: serde_json::Value) -> Result<Block, String> {
    let id = value.get("id").cloned().unwrap_or(serde_json::Value::Null);
    serde_json::from_value::<Block>(value).map_err(|e| format!("block {id}: {e}"))
}

/// Text content of the embedded script with `id`, if present.
#[cfg(feature = "csr")]
pub fn script_text(id: &str) -> Option<String> {
    web_sys::window()?
        .document()?
        .get_element_by_id(id)?
        .text_content()
        .filter(|s| !s.trim().is_empty())
}

/// The embedded block snapshot; empty when missing or malformed.
pub fn load_blocks() -> Vec<Block> {
    #[cfg(feature = "csr")]
    {
        let Some(text) = script_text(BLOCKS_SCRIPT_ID) else {
            log::debug!("no #{BLOCKS_SCRIPT_ID} script; starting empty");
            return Vec::new();
        };
        match parse_blocks(&text) {
            Ok(blocks) => blocks,
            Err(e) => {
                log::warn!("block snapshot is not valid JSON: {e}");
                Vec::new()
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        Vec::new()
    }
}
