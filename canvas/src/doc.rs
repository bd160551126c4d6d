//! Block model: block kinds, the wire record, typed data access, and the
//! in-memory store keyed by block id.
//!
//! Blocks arrive from the host page snapshot and from `GET /api/blocks/{id}/`
//! as loosely typed JSON. This module canonicalizes what the editor needs
//! (geometry, proportional flag, fit mode) into [`BlockState`] and keeps the
//! raw `data` record alongside it, so geometry and form edits can be merged
//! back without dropping fields the client does not understand.
//!
//! Stored widths and heights come in several shapes (bare numbers, `"300px"`,
//! `"100%"`, `"auto"`). [`Dimension`] parses all of them; everything written
//! back is a whole number of pixels.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::consts::{
    DEFAULT_BLOCK_HEIGHT, DEFAULT_BLOCK_WIDTH, DEFAULT_SLIDE_INTERVAL_MS, MIN_BLOCK_HEIGHT, MIN_BLOCK_WIDTH, STAGGER_STEP,
};
use crate::form;
use crate::geom::Rect;

/// Server-assigned block identifier, unique per website.
pub type BlockId = i64;

/// The content type of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    /// Paragraph text.
    Text,
    /// `h1`..`h6` heading.
    Heading,
    /// Single image, uploaded or linked.
    Image,
    /// Link styled as a button.
    Button,
    /// Embedded video element.
    Video,
    /// Autoplaying image carousel.
    Slider,
}

impl BlockKind {
    /// Every kind, in palette order.
    pub const ALL: [BlockKind; 6] = [Self::Text, Self::Heading, Self::Image, Self::Button, Self::Video, Self::Slider];

    /// Wire tag (`"text"`, `"heading"`, ...).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Heading => "heading",
            Self::Image => "image",
            Self::Button => "button",
            Self::Video => "video",
            Self::Slider => "slider",
        }
    }

    /// Parse a wire tag. Case-insensitive, surrounding whitespace ignored.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL.into_iter().find(|kind| kind.as_str().eq_ignore_ascii_case(raw))
    }

    /// Human-readable name for palette buttons and modal titles.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::Heading => "Heading",
            Self::Image => "Image",
            Self::Button => "Button",
            Self::Video => "Video",
            Self::Slider => "Slider",
        }
    }

    /// Media kinds keep their aspect ratio by default.
    #[must_use]
    pub fn default_proportional(self) -> bool {
        matches!(self, Self::Image | Self::Video)
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How embedded media scales inside its block (CSS `object-fit`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FitMode {
    #[default]
    Contain,
    Cover,
    Fill,
    None,
    ScaleDown,
}

impl FitMode {
    pub const ALL: [FitMode; 5] = [Self::Contain, Self::Cover, Self::Fill, Self::None, Self::ScaleDown];

    /// CSS keyword.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Contain => "contain",
            Self::Cover => "cover",
            Self::Fill => "fill",
            Self::None => "none",
            Self::ScaleDown => "scale-down",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL.into_iter().find(|fit| fit.as_str().eq_ignore_ascii_case(raw))
    }
}

/// A stored width or height, as found in legacy block data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Dimension {
    /// Absolute pixels (`300`, `"300"`, `"300px"`).
    Px(f64),
    /// Percentage of a reference length (`"50%"`).
    Percent(f64),
    /// `"auto"`: no usable size.
    Auto,
}

impl Dimension {
    /// Parse a JSON number or string. Returns `None` for anything else.
    #[must_use]
    pub fn parse(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n.as_f64().filter(|v| v.is_finite()).map(Self::Px),
            Value::String(s) => Self::parse_str(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn parse_str(raw: &str) -> Option<Self> {
        let s = raw.trim();
        if s.eq_ignore_ascii_case("auto") {
            return Some(Self::Auto);
        }
        if let Some(num) = s.strip_suffix('%') {
            return parse_number(num).map(Self::Percent);
        }
        let num = s.strip_suffix("px").unwrap_or(s);
        parse_number(num).map(Self::Px)
    }

    /// Resolve to pixels. Percentages need a positive `reference` length.
    #[must_use]
    pub fn to_px(self, reference: f64) -> Option<f64> {
        match self {
            Self::Px(v) => Some(v),
            Self::Percent(p) if reference > 0.0 => Some(reference * p / 100.0),
            Self::Percent(_) | Self::Auto => None,
        }
    }
}

/// Parse a finite decimal number, ignoring surrounding whitespace.
pub(crate) fn parse_number(raw: &str) -> Option<f64> {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Some(v),
        _ => None,
    }
}

/// Read a JSON number or numeric string as `f64`.
fn number_field(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_number(s.strip_suffix("px").unwrap_or(s)),
        _ => None,
    }
}

/// A block as stored on the server and embedded in the host page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub id: BlockId,
    #[serde(rename = "type", alias = "block_type")]
    pub kind: BlockKind,
    /// Type-specific record. The server owns merge semantics.
    #[serde(default)]
    pub data: Value,
    /// Render and stacking sequence.
    #[serde(default)]
    pub order: i64,
}

/// Typed read access to a block's `data` record.
///
/// Content fields fall back to the defaults in the edit-form schema, so the
/// renderer and the modal agree on what an unset field means.
pub struct BlockProps<'a> {
    kind: BlockKind,
    value: &'a Value,
}

impl<'a> BlockProps<'a> {
    #[must_use]
    pub fn new(kind: BlockKind, value: &'a Value) -> Self {
        Self { kind, value }
    }

    /// String field, or the schema default for this kind (empty when none).
    #[must_use]
    pub fn text(&self, name: &str) -> &'a str {
        self.value
            .get(name)
            .and_then(Value::as_str)
            .unwrap_or_else(|| form::default_value(self.kind, name).unwrap_or(""))
    }

    /// Non-empty string field, without any default.
    #[must_use]
    pub fn optional_text(&self, name: &str) -> Option<&'a str> {
        self.value
            .get(name)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// CSS length field; invalid values read as the schema default.
    #[must_use]
    pub fn css_length(&self, name: &str) -> &'a str {
        let raw = self.text(name).trim();
        if form::is_css_length(raw) { raw } else { form::default_value(self.kind, name).unwrap_or("") }
    }

    /// Non-empty CSS color field; invalid values read as unset.
    #[must_use]
    pub fn css_color(&self, name: &str) -> Option<&'a str> {
        self.optional_text(name).filter(|c| form::is_css_color(c))
    }

    /// `left`, `center` or `right`; anything else reads as `left`.
    #[must_use]
    pub fn align(&self) -> &'static str {
        match self.text("align").trim() {
            "center" => "center",
            "right" => "right",
            _ => "left",
        }
    }

    /// Heading level 1..=6 from `"h1"`..`"h6"`; invalid values read as 1.
    #[must_use]
    pub fn heading_level(&self) -> u8 {
        let raw = self.text("level").trim();
        raw.strip_prefix('h')
            .or_else(|| raw.strip_prefix('H'))
            .and_then(parse_number)
            .filter(|n| (1.0..=6.0).contains(n) && n.fract() == 0.0)
            .map(|n| n as u8)
            .unwrap_or(1)
    }

    /// Boolean field with a kind-specific default (sliders autoplay, videos do not).
    #[must_use]
    pub fn autoplay(&self) -> bool {
        match self.value.get("autoplay") {
            Some(Value::Bool(b)) => *b,
            Some(Value::String(s)) => s == "true",
            _ => self.kind == BlockKind::Slider,
        }
    }

    /// Slider period in milliseconds; missing or non-positive values use the default.
    #[must_use]
    pub fn interval_ms(&self) -> u32 {
        self.interval_ms_or(DEFAULT_SLIDE_INTERVAL_MS)
    }

    /// Slider period, with a caller-chosen fallback.
    #[must_use]
    pub fn interval_ms_or(&self, fallback: u32) -> u32 {
        number_field(self.value.get("interval"))
            .filter(|v| *v >= 1.0 && *v <= f64::from(u32::MAX))
            .map_or(fallback, |v| v as u32)
    }

    /// Slider image URLs in display order. Non-string entries are skipped.
    #[must_use]
    pub fn images(&self) -> Vec<&'a str> {
        self.value
            .get("images")
            .and_then(Value::as_array)
            .map(|list| list.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn position_x(&self) -> Option<f64> {
        number_field(self.value.get("position_x"))
    }

    #[must_use]
    pub fn position_y(&self) -> Option<f64> {
        number_field(self.value.get("position_y"))
    }

    #[must_use]
    pub fn width(&self) -> Option<Dimension> {
        self.value.get("width").and_then(Dimension::parse)
    }

    #[must_use]
    pub fn height(&self) -> Option<Dimension> {
        self.value.get("height").and_then(Dimension::parse)
    }

    #[must_use]
    pub fn proportional(&self) -> Option<bool> {
        self.value.get("proportional").and_then(Value::as_bool)
    }

    #[must_use]
    pub fn fit(&self) -> Option<FitMode> {
        self.value.get("fit").and_then(Value::as_str).and_then(FitMode::parse)
    }
}

/// Typed client-side state of one block.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockState {
    pub id: BlockId,
    pub kind: BlockKind,
    pub order: i64,
    /// Canvas-relative geometry in pixels.
    pub rect: Rect,
    /// Keep the aspect ratio while resizing.
    pub proportional: bool,
    pub fit: FitMode,
    /// Raw data record as last loaded.
    pub data: Value,
}

impl BlockState {
    /// Canonicalize a wire block. `index` is its position in render order and
    /// drives the stagger used when no position is stored; `reference` is the
    /// canvas size used to resolve percentage sizes. Sizes never load below the
    /// block minimums.
    #[must_use]
    pub fn from_block(block: Block, index: usize, reference: (f64, f64)) -> Self {
        let data = if block.data.is_object() { block.data } else { Value::Object(Map::new()) };
        let props = BlockProps::new(block.kind, &data);
        let stagger = index as f64 * STAGGER_STEP;
        let rect = Rect::new(
            props.position_x().unwrap_or(stagger),
            props.position_y().unwrap_or(stagger),
            props
                .width()
                .and_then(|d| d.to_px(reference.0))
                .unwrap_or(DEFAULT_BLOCK_WIDTH)
                .max(MIN_BLOCK_WIDTH),
            props
                .height()
                .and_then(|d| d.to_px(reference.1))
                .unwrap_or(DEFAULT_BLOCK_HEIGHT)
                .max(MIN_BLOCK_HEIGHT),
        );
        let proportional = props.proportional().unwrap_or_else(|| block.kind.default_proportional());
        let fit = props.fit().unwrap_or_default();
        Self { id: block.id, kind: block.kind, order: block.order, rect, proportional, fit, data }
    }

    /// Typed accessor over this block's data record.
    #[must_use]
    pub fn props(&self) -> BlockProps<'_> {
        BlockProps::new(self.kind, &self.data)
    }

    /// Geometry fields written back after a move or resize, as whole pixels.
    #[must_use]
    pub fn geometry_patch(&self) -> Map<String, Value> {
        let r = self.rect.rounded();
        let mut patch = Map::new();
        patch.insert("position_x".into(), Value::from(r.x as i64));
        patch.insert("position_y".into(), Value::from(r.y as i64));
        patch.insert("width".into(), Value::from(r.width as i64));
        patch.insert("height".into(), Value::from(r.height as i64));
        patch.insert("proportional".into(), Value::Bool(self.proportional));
        patch.insert("fit".into(), Value::from(self.fit.as_str()));
        patch
    }
}

/// Shallow-merge `patch` over `current`: keys in `patch` win, everything else
/// is kept. A non-object `current` is treated as empty.
#[must_use]
pub fn merge_data(current: &Value, patch: &Map<String, Value>) -> Value {
    let mut merged = current.as_object().cloned().unwrap_or_default();
    for (k, v) in patch {
        merged.insert(k.clone(), v.clone());
    }
    Value::Object(merged)
}

/// One row of the reorder request body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderEntry {
    pub id: BlockId,
    pub order: i64,
}

/// In-memory store of block state keyed by id.
#[derive(Debug, Clone, Default)]
pub struct BlockStore {
    blocks: HashMap<BlockId, BlockState>,
}

impl BlockStore {
    #[must_use]
    pub fn new() -> Self {
        Self { blocks: HashMap::new() }
    }

    /// Insert or replace a block.
    pub fn insert(&mut self, block: BlockState) {
        self.blocks.insert(block.id, block);
    }

    pub fn remove(&mut self, id: BlockId) -> Option<BlockState> {
        self.blocks.remove(&id)
    }

    #[must_use]
    pub fn get(&self, id: BlockId) -> Option<&BlockState> {
        self.blocks.get(&id)
    }

    pub fn get_mut(&mut self, id: BlockId) -> Option<&mut BlockState> {
        self.blocks.get_mut(&id)
    }

    /// Replace everything with a snapshot. Blocks are staggered in
    /// `(order, id)` sequence when they carry no stored position.
    pub fn load_snapshot(&mut self, mut blocks: Vec<Block>, reference: (f64, f64)) {
        blocks.sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.id.cmp(&b.id)));
        self.blocks.clear();
        for (index, block) in blocks.into_iter().enumerate() {
            self.insert(BlockState::from_block(block, index, reference));
        }
    }

    /// All blocks in `(order, id)` sequence.
    #[must_use]
    pub fn ordered(&self) -> Vec<&BlockState> {
        let mut list: Vec<&BlockState> = self.blocks.values().collect();
        list.sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.id.cmp(&b.id)));
        list
    }

    #[must_use]
    pub fn ordered_ids(&self) -> Vec<BlockId> {
        self.ordered().into_iter().map(|b| b.id).collect()
    }

    /// Move a block `delta` places in render order and renumber every block
    /// `0..n`. Returns the full order list to persist, or `None` when the block
    /// is unknown or already at that end.
    pub fn shift_order(&mut self, id: BlockId, delta: isize) -> Option<Vec<OrderEntry>> {
        let mut ids = self.ordered_ids();
        let from = ids.iter().position(|b| *b == id)?;
        let to = from.checked_add_signed(delta)?;
        if to >= ids.len() || to == from {
            return None;
        }
        let moved = ids.remove(from);
        ids.insert(to, moved);

        let mut entries = Vec::with_capacity(ids.len());
        for (order, block_id) in ids.into_iter().enumerate() {
            let order = order as i64;
            if let Some(block) = self.blocks.get_mut(&block_id) {
                block.order = order;
            }
            entries.push(OrderEntry { id: block_id, order });
        }
        Some(entries)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
