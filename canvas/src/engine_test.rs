#![allow(clippy::float_cmp)]

use serde_json::json;

use super::*;

const CANVAS: Rect = Rect { x: 50.0, y: 100.0, width: 800.0, height: 600.0 };

fn engine_with(blocks: Vec<(BlockId, BlockKind, Value)>) -> EngineCore {
    let mut core = EngineCore::new();
    core.set_canvas_size(CANVAS.width, CANVAS.height);
    core.load_snapshot(
        blocks
            .into_iter()
            .enumerate()
            .map(|(i, (id, kind, data))| Block { id, kind, data, order: i as i64 })
            .collect(),
    );
    core
}

fn one_block(x: f64, y: f64, w: f64, h: f64, proportional: bool) -> EngineCore {
    engine_with(vec![(
        1,
        BlockKind::Text,
        json!({"position_x": x, "position_y": y, "width": w, "height": h, "proportional": proportional}),
    )])
}

fn session(handle: Handle, start: Rect, proportional: bool) -> ResizeSession {
    ResizeSession { id: 1, handle, start_pointer: Point::new(0.0, 0.0), start, proportional }
}

fn persisted(actions: &[Action]) -> Map<String, Value> {
    actions
        .iter()
        .find_map(|a| match a {
            Action::Persist { patch, .. } => Some(patch.clone()),
            _ => None,
        })
        .unwrap()
}

// =============================================================
// Drag-create
// =============================================================

#[test]
fn drop_subtracts_centering_offset() {
    let mut core = EngineCore::new();
    core.begin_palette_drag(BlockKind::Text);
    let create = core.drop_block(Point::new(CANVAS.x + 200.0, CANVAS.y + 150.0), CANVAS).unwrap();
    assert_eq!(create.block_type, BlockKind::Text);
    assert_eq!(
        create.data,
        json!({"position_x": 125, "position_y": 100, "width": 300, "height": 200, "proportional": false, "fit": "contain"})
    );
}

#[test]
fn drop_near_origin_clamps_to_zero() {
    assert_eq!(drop_origin(Point::new(60.0, 110.0), CANVAS), Point::new(0.0, 0.0));
}

#[test]
fn drop_media_defaults_to_proportional() {
    let mut core = EngineCore::new();
    core.begin_palette_drag(BlockKind::Video);
    let create = core.drop_block(Point::new(500.0, 500.0), CANVAS).unwrap();
    assert_eq!(create.data["proportional"], json!(true));
}

#[test]
fn drop_without_palette_drag_is_ignored() {
    let mut core = EngineCore::new();
    assert!(core.drop_block(Point::new(300.0, 300.0), CANVAS).is_none());
    core.begin_palette_drag(BlockKind::Image);
    core.end_palette_drag();
    assert!(core.drop_block(Point::new(300.0, 300.0), CANVAS).is_none());
}

#[test]
fn drop_consumes_palette_drag() {
    let mut core = EngineCore::new();
    core.begin_palette_drag(BlockKind::Button);
    assert!(core.drop_block(Point::new(300.0, 300.0), CANVAS).is_some());
    assert!(core.drop_block(Point::new(300.0, 300.0), CANVAS).is_none());
}

#[test]
fn create_body_serializes_block_type_tag() {
    let body = serde_json::to_value(CreateBlock::at(BlockKind::Slider, Point::new(1.0, 2.0))).unwrap();
    assert_eq!(body["block_type"], json!("slider"));
    assert_eq!(body["data"]["position_y"], json!(2));
}

// =============================================================
// Moving
// =============================================================

#[test]
fn move_follows_pointer_minus_grab_offset() {
    let mut core = one_block(100.0, 100.0, 200.0, 100.0, false);
    // Grab 10px inside the block's top-left corner.
    core.begin_move(1, Point::new(CANVAS.x + 110.0, CANVAS.y + 110.0), Button::Primary, CANVAS);
    let actions = core.pointer_move(Point::new(CANVAS.x + 210.0, CANVAS.y + 160.0));
    assert_eq!(actions, vec![Action::GeometryChanged { id: 1, rect: Rect::new(200.0, 150.0, 200.0, 100.0) }]);
}

#[test]
fn move_clamps_inside_canvas_every_frame() {
    let mut core = one_block(100.0, 100.0, 200.0, 100.0, false);
    core.begin_move(1, Point::new(CANVAS.x + 100.0, CANVAS.y + 100.0), Button::Primary, CANVAS);
    for (px, py) in [(-500.0, -500.0), (5000.0, 5000.0), (300.0, -20.0), (900.0, 400.0)] {
        core.pointer_move(Point::new(px, py));
        let r = core.block(1).unwrap().rect;
        assert!(r.x >= 0.0 && r.x <= CANVAS.width - r.width, "x {r:?}");
        assert!(r.y >= 0.0 && r.y <= CANVAS.height - r.height, "y {r:?}");
    }
}

#[test]
fn move_in_canvas_smaller_than_block_pins_to_origin() {
    let mut core = one_block(0.0, 0.0, 300.0, 200.0, false);
    let tiny = Rect::new(0.0, 0.0, 100.0, 100.0);
    core.begin_move(1, Point::new(10.0, 10.0), Button::Primary, tiny);
    core.pointer_move(Point::new(80.0, 80.0));
    assert_eq!(core.block(1).unwrap().rect.origin(), Point::new(0.0, 0.0));
}

#[test]
fn move_release_persists_rounded_geometry() {
    let mut core = one_block(0.0, 0.0, 300.0, 200.0, false);
    core.begin_move(1, Point::new(CANVAS.x, CANVAS.y), Button::Primary, CANVAS);
    core.pointer_move(Point::new(CANVAS.x + 10.4, CANVAS.y + 20.6));
    let patch = persisted(&core.pointer_up());
    assert_eq!(patch["position_x"], json!(10));
    assert_eq!(patch["position_y"], json!(21));
    assert_eq!(patch["width"], json!(300));
    assert!(core.input.is_idle());
}

#[test]
fn undersized_block_is_floored_before_it_is_moved_and_saved() {
    let mut core = one_block(10.0, 10.0, 40.0, 20.0, false);
    core.begin_move(1, Point::new(CANVAS.x + 15.0, CANVAS.y + 15.0), Button::Primary, CANVAS);
    core.pointer_move(Point::new(CANVAS.x + 65.0, CANVAS.y + 45.0));
    let rect = core.block(1).unwrap().rect;
    assert!(rect.width >= MIN_BLOCK_WIDTH && rect.height >= MIN_BLOCK_HEIGHT);
    let patch = persisted(&core.pointer_up());
    assert_eq!(patch["width"], json!(100));
    assert_eq!(patch["height"], json!(50));
}

#[test]
fn cancelled_move_restores_start_and_persists_nothing() {
    let mut core = one_block(10.0, 20.0, 300.0, 200.0, false);
    core.begin_move(1, Point::new(CANVAS.x + 20.0, CANVAS.y + 30.0), Button::Primary, CANVAS);
    core.pointer_move(Point::new(CANVAS.x + 220.0, CANVAS.y + 130.0));
    let actions = core.pointer_cancel();
    assert!(actions.iter().all(|a| !matches!(a, Action::Persist { .. })));
    assert_eq!(core.block(1).unwrap().rect, Rect::new(10.0, 20.0, 300.0, 200.0));
    assert!(core.input.is_idle());
    core.begin_move(1, Point::new(CANVAS.x, CANVAS.y), Button::Primary, CANVAS);
    assert_eq!(core.input.block_id(), Some(1));
}

#[test]
fn cancelled_resize_restores_start_size() {
    let mut core = one_block(10.0, 20.0, 300.0, 200.0, false);
    core.begin_resize(1, Handle::Se, Point::new(0.0, 0.0), Button::Primary);
    core.pointer_move(Point::new(80.0, 40.0));
    assert_eq!(core.size_badge(), Some((1, 380, 240)));
    core.pointer_cancel();
    assert_eq!(core.block(1).unwrap().rect, Rect::new(10.0, 20.0, 300.0, 200.0));
    assert_eq!(core.size_badge(), None);
    assert!(core.pointer_cancel().is_empty());
}

#[test]
fn non_primary_button_does_not_start_session() {
    let mut core = one_block(0.0, 0.0, 300.0, 200.0, false);
    assert!(core.begin_move(1, Point::new(60.0, 110.0), Button::Secondary, CANVAS).is_empty());
    assert!(core.begin_resize(1, Handle::Se, Point::new(60.0, 110.0), Button::Middle).is_empty());
    assert!(core.input.is_idle());
}

#[test]
fn press_during_live_session_is_ignored() {
    let mut core = engine_with(vec![(1, BlockKind::Text, json!({})), (2, BlockKind::Text, json!({}))]);
    core.begin_move(1, Point::new(60.0, 110.0), Button::Primary, CANVAS);
    assert!(core.begin_resize(2, Handle::E, Point::new(60.0, 110.0), Button::Primary).is_empty());
    assert!(core.begin_move(2, Point::new(60.0, 110.0), Button::Primary, CANVAS).is_empty());
    assert_eq!(core.input.block_id(), Some(1));
}

#[test]
fn begin_move_selects_block() {
    let mut core = one_block(0.0, 0.0, 300.0, 200.0, false);
    let actions = core.begin_move(1, Point::new(60.0, 110.0), Button::Primary, CANVAS);
    assert_eq!(actions, vec![Action::SelectionChanged(Some(1))]);
    assert_eq!(core.selection(), Some(1));
}

#[test]
fn pointer_up_when_idle_does_nothing() {
    let mut core = one_block(0.0, 0.0, 300.0, 200.0, false);
    assert!(core.pointer_up().is_empty());
    assert!(core.pointer_move(Point::new(10.0, 10.0)).is_empty());
}

// =============================================================
// Resizing
// =============================================================

#[test]
fn free_se_resize_grows_both_axes() {
    let r = resize_rect(&session(Handle::Se, Rect::new(10.0, 20.0, 300.0, 200.0), false), Point::new(40.0, 20.0));
    assert_eq!(r, Rect::new(10.0, 20.0, 340.0, 220.0));
}

#[test]
fn proportional_east_resize_keeps_ratio() {
    let r = resize_rect(&session(Handle::E, Rect::new(0.0, 0.0, 400.0, 200.0), true), Point::new(100.0, 0.0));
    assert_eq!((r.width, r.height), (500.0, 250.0));
}

#[test]
fn proportional_corner_takes_dominant_axis() {
    let start = Rect::new(0.0, 0.0, 400.0, 200.0);
    let wide = resize_rect(&session(Handle::Se, start, true), Point::new(80.0, 10.0));
    assert_eq!((wide.width, wide.height), (480.0, 240.0));
    let tall = resize_rect(&session(Handle::Se, start, true), Point::new(10.0, 50.0));
    assert_eq!((tall.width, tall.height), (500.0, 250.0));
}

#[test]
fn west_and_north_keep_opposite_edges_anchored() {
    let start = Rect::new(100.0, 100.0, 300.0, 200.0);
    let r = resize_rect(&session(Handle::Nw, start, false), Point::new(50.0, 30.0));
    assert_eq!(r, Rect::new(150.0, 130.0, 250.0, 170.0));
    assert_eq!(r.right(), start.right());
    assert_eq!(r.bottom(), start.bottom());
}

#[test]
fn anchored_edge_holds_when_floor_is_hit() {
    let start = Rect::new(100.0, 100.0, 300.0, 200.0);
    let r = resize_rect(&session(Handle::W, start, false), Point::new(1000.0, 0.0));
    assert_eq!(r.width, MIN_BLOCK_WIDTH);
    assert_eq!(r.right(), start.right());
}

#[test]
fn free_resize_respects_floors() {
    let r = resize_rect(&session(Handle::Se, Rect::new(0.0, 0.0, 300.0, 200.0), false), Point::new(-900.0, -900.0));
    assert_eq!((r.width, r.height), (MIN_BLOCK_WIDTH, MIN_BLOCK_HEIGHT));
}

#[test]
fn proportional_floors_preserve_ratio() {
    // Wide block: the height floor binds first.
    let wide = resize_rect(&session(Handle::E, Rect::new(0.0, 0.0, 400.0, 100.0), true), Point::new(-900.0, 0.0));
    assert_eq!((wide.width, wide.height), (200.0, 50.0));
    // Tall block: the width floor binds first.
    let tall = resize_rect(&session(Handle::S, Rect::new(0.0, 0.0, 100.0, 400.0), true), Point::new(0.0, -900.0));
    assert_eq!((tall.width, tall.height), (100.0, 400.0));
}

#[test]
fn proportional_ratio_holds_across_many_frames() {
    let start = Rect::new(0.0, 0.0, 320.0, 180.0);
    for step in -30..30 {
        let d = f64::from(step) * 13.0;
        for handle in Handle::ALL {
            let r = resize_rect(&session(handle, start, true), Point::new(d, d * 0.7));
            assert!(r.width >= MIN_BLOCK_WIDTH && r.height >= MIN_BLOCK_HEIGHT, "{handle:?} {r:?}");
            let aspect = 320.0 / 180.0;
            let held = (r.width / aspect - r.height).abs() <= 0.5 || (r.height * aspect - r.width).abs() <= 0.5;
            assert!(held, "{handle:?} {r:?}");
        }
    }
}

#[test]
fn resize_session_uses_flag_from_press_time() {
    let mut core = one_block(0.0, 0.0, 400.0, 200.0, true);
    core.begin_resize(1, Handle::E, Point::new(0.0, 0.0), Button::Primary);
    core.pointer_move(Point::new(100.0, 0.0));
    assert_eq!(core.size_badge(), Some((1, 500, 250)));
    let patch = persisted(&core.pointer_up());
    assert_eq!(patch["width"], json!(500));
    assert_eq!(patch["height"], json!(250));
    assert_eq!(patch["proportional"], json!(true));
    assert_eq!(core.size_badge(), None);
}

#[test]
fn size_badge_only_while_resizing() {
    let mut core = one_block(0.0, 0.0, 300.0, 200.0, false);
    assert_eq!(core.size_badge(), None);
    core.begin_move(1, Point::new(60.0, 110.0), Button::Primary, CANVAS);
    assert_eq!(core.size_badge(), None);
}

// =============================================================
// Selection and controls
// =============================================================

#[test]
fn select_unknown_block_clears_selection() {
    let mut core = one_block(0.0, 0.0, 300.0, 200.0, false);
    core.select(Some(1));
    assert_eq!(core.select(Some(42)), vec![Action::SelectionChanged(None)]);
    assert!(core.select(None).is_empty());
}

#[test]
fn set_proportional_updates_state_and_persists_flag() {
    let mut core = one_block(0.0, 0.0, 300.0, 200.0, false);
    let actions = core.set_proportional(1, true);
    assert!(core.block(1).unwrap().proportional);
    assert_eq!(persisted(&actions), json!({"proportional": true}).as_object().unwrap().clone());
    assert!(core.set_proportional(99, true).is_empty());
}

#[test]
fn delete_clears_selection_and_session() {
    let mut core = one_block(0.0, 0.0, 300.0, 200.0, false);
    core.begin_move(1, Point::new(60.0, 110.0), Button::Primary, CANVAS);
    core.apply_delete(1);
    assert_eq!(core.selection(), None);
    assert!(core.input.is_idle());
    assert!(core.block(1).is_none());
}

#[test]
fn shift_order_swaps_with_neighbor() {
    let mut core = engine_with(vec![(1, BlockKind::Text, json!({})), (2, BlockKind::Heading, json!({}))]);
    let entries = core.shift_order(2, -1).unwrap();
    assert_eq!(entries, vec![OrderEntry { id: 2, order: 0 }, OrderEntry { id: 1, order: 1 }]);
    assert_eq!(core.store.ordered_ids(), vec![2, 1]);
}

#[test]
fn snapshot_reload_drops_stale_selection() {
    let mut core = one_block(0.0, 0.0, 300.0, 200.0, false);
    core.select(Some(1));
    core.load_snapshot(Vec::new());
    assert_eq!(core.selection(), None);
}
