#![allow(clippy::float_cmp)]

use super::*;

fn rects() -> Vec<Rect> {
    vec![Rect::new(100.0, 50.0, 300.0, 200.0), Rect::new(500.0, 400.0, 700.0, 100.0)]
}

#[test]
fn mode_parse_falls_back_to_stack() {
    assert_eq!(ResponsiveMode::parse("scale"), ResponsiveMode::Scale);
    assert_eq!(ResponsiveMode::parse(" SCALE "), ResponsiveMode::Scale);
    assert_eq!(ResponsiveMode::parse("grid"), ResponsiveMode::Stack);
    assert_eq!(ResponsiveMode::parse(""), ResponsiveMode::Stack);
}

#[test]
fn wide_viewport_keeps_desktop_layout() {
    assert_eq!(plan_layout(1024.0, 768.0, ResponsiveMode::Scale, &rects(), 1000.0), LayoutPlan::Desktop);
}

#[test]
fn breakpoint_is_inclusive() {
    assert_eq!(plan_layout(768.0, 768.0, ResponsiveMode::Stack, &rects(), 700.0), LayoutPlan::Stacked);
}

#[test]
fn scale_uses_bounding_width() {
    let LayoutPlan::Scaled(Some(fit)) = plan_layout(400.0, 768.0, ResponsiveMode::Scale, &rects(), 550.0) else {
        panic!("expected scaled layout");
    };
    assert_eq!(fit.bounds, Rect::new(100.0, 50.0, 1100.0, 450.0));
    assert_eq!(fit.scale, 0.5);
}

#[test]
fn scale_never_enlarges() {
    let small = [Rect::new(0.0, 0.0, 200.0, 100.0)];
    let LayoutPlan::Scaled(Some(fit)) = plan_layout(400.0, 768.0, ResponsiveMode::Scale, &small, 380.0) else {
        panic!("expected scaled layout");
    };
    assert_eq!(fit.scale, 1.0);
}

#[test]
fn scale_with_no_blocks_has_no_fit() {
    assert_eq!(plan_layout(400.0, 768.0, ResponsiveMode::Scale, &[], 380.0), LayoutPlan::Scaled(None));
}
