#![allow(clippy::float_cmp)]

use serde_json::json;

use super::*;

fn block(id: BlockId, kind: BlockKind, order: i64, data: Value) -> Block {
    Block { id, kind, data, order }
}

fn state(id: BlockId, order: i64) -> BlockState {
    BlockState::from_block(block(id, BlockKind::Text, order, json!({})), 0, (0.0, 0.0))
}

// =============================================================
// BlockKind
// =============================================================

#[test]
fn kind_serde_uses_lowercase_tags() {
    let cases = [
        (BlockKind::Text, "\"text\""),
        (BlockKind::Heading, "\"heading\""),
        (BlockKind::Image, "\"image\""),
        (BlockKind::Button, "\"button\""),
        (BlockKind::Video, "\"video\""),
        (BlockKind::Slider, "\"slider\""),
    ];
    for (kind, expected) in cases {
        assert_eq!(serde_json::to_string(&kind).unwrap(), expected);
    }
}

#[test]
fn kind_parse_is_case_insensitive() {
    assert_eq!(BlockKind::parse(" Image "), Some(BlockKind::Image));
    assert_eq!(BlockKind::parse("SLIDER"), Some(BlockKind::Slider));
    assert_eq!(BlockKind::parse("carousel"), None);
}

#[test]
fn kind_default_proportional_only_for_media() {
    let proportional: Vec<_> = BlockKind::ALL.into_iter().filter(|k| k.default_proportional()).collect();
    assert_eq!(proportional, vec![BlockKind::Image, BlockKind::Video]);
}

// =============================================================
// FitMode
// =============================================================

#[test]
fn fit_serde_is_kebab_case() {
    assert_eq!(serde_json::to_string(&FitMode::ScaleDown).unwrap(), "\"scale-down\"");
    let back: FitMode = serde_json::from_str("\"cover\"").unwrap();
    assert_eq!(back, FitMode::Cover);
}

#[test]
fn fit_parse_rejects_unknown() {
    assert_eq!(FitMode::parse("scale-down"), Some(FitMode::ScaleDown));
    assert_eq!(FitMode::parse("stretch"), None);
}

// =============================================================
// Dimension
// =============================================================

#[test]
fn dimension_accepts_numbers_and_px_strings() {
    assert_eq!(Dimension::parse(&json!(320)), Some(Dimension::Px(320.0)));
    assert_eq!(Dimension::parse(&json!("320")), Some(Dimension::Px(320.0)));
    assert_eq!(Dimension::parse(&json!("320px")), Some(Dimension::Px(320.0)));
    assert_eq!(Dimension::parse(&json!(" 12.5px ")), Some(Dimension::Px(12.5)));
}

#[test]
fn dimension_percent_resolves_against_reference() {
    let d = Dimension::parse(&json!("50%")).unwrap();
    assert_eq!(d, Dimension::Percent(50.0));
    assert_eq!(d.to_px(800.0), Some(400.0));
    assert_eq!(d.to_px(0.0), None);
}

#[test]
fn dimension_auto_and_garbage() {
    assert_eq!(Dimension::parse(&json!("auto")), Some(Dimension::Auto));
    assert_eq!(Dimension::Auto.to_px(100.0), None);
    assert_eq!(Dimension::parse(&json!("wide")), None);
    assert_eq!(Dimension::parse(&json!(null)), None);
    assert_eq!(Dimension::parse(&json!(true)), None);
}

// =============================================================
// Block wire record
// =============================================================

#[test]
fn block_deserializes_type_tag() {
    let b: Block = serde_json::from_value(json!({
        "id": 7, "type": "button", "data": {"text": "Go"}, "order": 2
    }))
    .unwrap();
    assert_eq!(b.id, 7);
    assert_eq!(b.kind, BlockKind::Button);
    assert_eq!(b.order, 2);
}

#[test]
fn block_accepts_block_type_alias_and_missing_fields() {
    let b: Block = serde_json::from_value(json!({"id": 3, "block_type": "video"})).unwrap();
    assert_eq!(b.kind, BlockKind::Video);
    assert_eq!(b.data, Value::Null);
    assert_eq!(b.order, 0);
}

// =============================================================
// BlockProps
// =============================================================

#[test]
fn props_fall_back_to_schema_defaults() {
    let data = json!({});
    let text = BlockProps::new(BlockKind::Text, &data);
    assert_eq!(text.text("content"), "Text");
    assert_eq!(text.text("size"), "16px");
    let heading = BlockProps::new(BlockKind::Heading, &data);
    assert_eq!(heading.text("content"), "Heading");
    assert_eq!(heading.heading_level(), 1);
}

#[test]
fn props_read_stored_values() {
    let data = json!({"content": "Hello", "align": "center", "level": "h3"});
    let props = BlockProps::new(BlockKind::Heading, &data);
    assert_eq!(props.text("content"), "Hello");
    assert_eq!(props.align(), "center");
    assert_eq!(props.heading_level(), 3);
}

#[test]
fn props_invalid_level_and_align_fall_back() {
    let data = json!({"align": "justify", "level": "h9"});
    let props = BlockProps::new(BlockKind::Heading, &data);
    assert_eq!(props.align(), "left");
    assert_eq!(props.heading_level(), 1);
}

#[test]
fn props_autoplay_defaults_per_kind() {
    let data = json!({});
    assert!(BlockProps::new(BlockKind::Slider, &data).autoplay());
    assert!(!BlockProps::new(BlockKind::Video, &data).autoplay());
    let off = json!({"autoplay": false});
    assert!(!BlockProps::new(BlockKind::Slider, &off).autoplay());
}

#[test]
fn props_interval_tolerates_strings_and_rejects_zero() {
    let data = json!({"interval": "5000"});
    assert_eq!(BlockProps::new(BlockKind::Slider, &data).interval_ms(), 5000);
    let zero = json!({"interval": 0});
    assert_eq!(BlockProps::new(BlockKind::Slider, &zero).interval_ms(), 3000);
}

#[test]
fn props_images_skip_non_strings() {
    let data = json!({"images": ["/a.png", 5, "/b.png"]});
    assert_eq!(BlockProps::new(BlockKind::Slider, &data).images(), vec!["/a.png", "/b.png"]);
}

#[test]
fn props_optional_text_ignores_blank() {
    let data = json!({"bg_color": "  ", "text_color": "#fff"});
    let props = BlockProps::new(BlockKind::Button, &data);
    assert_eq!(props.optional_text("bg_color"), None);
    assert_eq!(props.optional_text("text_color"), Some("#fff"));
}

// =============================================================
// BlockState
// =============================================================

#[test]
fn state_uses_stored_geometry() {
    let b = block(
        1,
        BlockKind::Image,
        0,
        json!({"position_x": 10, "position_y": "20px", "width": "400px", "height": 300, "fit": "cover"}),
    );
    let s = BlockState::from_block(b, 4, (1000.0, 800.0));
    assert_eq!(s.rect, Rect::new(10.0, 20.0, 400.0, 300.0));
    assert_eq!(s.fit, FitMode::Cover);
    assert!(s.proportional);
}

#[test]
fn state_defaults_stagger_by_index() {
    let s = BlockState::from_block(block(2, BlockKind::Text, 0, json!({})), 3, (1000.0, 800.0));
    assert_eq!(s.rect, Rect::new(90.0, 90.0, 300.0, 200.0));
    assert!(!s.proportional);
    assert_eq!(s.fit, FitMode::Contain);
}

#[test]
fn state_resolves_percent_and_auto() {
    let b = block(3, BlockKind::Text, 0, json!({"width": "50%", "height": "auto"}));
    let s = BlockState::from_block(b, 0, (1000.0, 800.0));
    assert_eq!(s.rect.width, 500.0);
    assert_eq!(s.rect.height, 200.0);
}

#[test]
fn state_floors_legacy_sizes_to_minimums() {
    let b = block(6, BlockKind::Text, 0, json!({"width": 40, "height": "20px"}));
    let s = BlockState::from_block(b, 0, (1000.0, 800.0));
    assert_eq!((s.rect.width, s.rect.height), (100.0, 50.0));
    let b = block(7, BlockKind::Text, 0, json!({"width": "5%", "height": "5%"}));
    let s = BlockState::from_block(b, 0, (1000.0, 800.0));
    assert_eq!((s.rect.width, s.rect.height), (100.0, 50.0));
}

#[test]
fn state_non_object_data_becomes_empty_object() {
    let s = BlockState::from_block(block(4, BlockKind::Text, 0, json!("junk")), 0, (0.0, 0.0));
    assert_eq!(s.data, json!({}));
}

#[test]
fn state_explicit_proportional_overrides_kind_default() {
    let b = block(5, BlockKind::Video, 0, json!({"proportional": false}));
    assert!(!BlockState::from_block(b, 0, (0.0, 0.0)).proportional);
}

#[test]
fn geometry_patch_rounds_to_whole_pixels() {
    let mut s = state(1, 0);
    s.rect = Rect::new(10.4, 20.6, 300.5, 199.4);
    s.fit = FitMode::ScaleDown;
    let patch = s.geometry_patch();
    assert_eq!(patch["position_x"], json!(10));
    assert_eq!(patch["position_y"], json!(21));
    assert_eq!(patch["width"], json!(301));
    assert_eq!(patch["height"], json!(199));
    assert_eq!(patch["proportional"], json!(false));
    assert_eq!(patch["fit"], json!("scale-down"));
}

// =============================================================
// merge_data
// =============================================================

#[test]
fn merge_keeps_unknown_fields() {
    let current = json!({"content": "a", "position_x": 5, "custom": 1});
    let patch = json!({"content": "b"});
    let merged = merge_data(&current, patch.as_object().unwrap());
    assert_eq!(merged, json!({"content": "b", "position_x": 5, "custom": 1}));
}

#[test]
fn merge_over_non_object_starts_empty() {
    let patch = json!({"k": 1});
    assert_eq!(merge_data(&Value::Null, patch.as_object().unwrap()), json!({"k": 1}));
}

// =============================================================
// BlockStore
// =============================================================

#[test]
fn store_insert_get_remove() {
    let mut store = BlockStore::new();
    assert!(store.is_empty());
    store.insert(state(1, 0));
    assert_eq!(store.len(), 1);
    assert!(store.get(1).is_some());
    assert!(store.remove(1).is_some());
    assert!(store.get(1).is_none());
}

#[test]
fn store_snapshot_staggers_in_order() {
    let mut store = BlockStore::new();
    store.insert(state(99, 0));
    store.load_snapshot(
        vec![
            block(2, BlockKind::Text, 1, json!({})),
            block(1, BlockKind::Text, 0, json!({})),
        ],
        (0.0, 0.0),
    );
    assert_eq!(store.len(), 2);
    assert!(store.get(99).is_none());
    assert_eq!(store.get(1).unwrap().rect.x, 0.0);
    assert_eq!(store.get(2).unwrap().rect.x, 30.0);
}

#[test]
fn store_ordered_breaks_ties_by_id() {
    let mut store = BlockStore::new();
    store.insert(state(3, 1));
    store.insert(state(2, 1));
    store.insert(state(1, 5));
    assert_eq!(store.ordered_ids(), vec![2, 3, 1]);
}

#[test]
fn shift_order_forward_renumbers_all() {
    let mut store = BlockStore::new();
    store.insert(state(10, 0));
    store.insert(state(11, 1));
    store.insert(state(12, 2));
    let entries = store.shift_order(10, 1).unwrap();
    assert_eq!(
        entries,
        vec![
            OrderEntry { id: 11, order: 0 },
            OrderEntry { id: 10, order: 1 },
            OrderEntry { id: 12, order: 2 },
        ]
    );
    assert_eq!(store.get(10).unwrap().order, 1);
}

#[test]
fn shift_order_past_either_end_is_none() {
    let mut store = BlockStore::new();
    store.insert(state(10, 0));
    store.insert(state(11, 1));
    assert!(store.shift_order(10, -1).is_none());
    assert!(store.shift_order(11, 1).is_none());
    assert!(store.shift_order(42, 1).is_none());
}
