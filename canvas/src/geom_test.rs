#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn rect_edges() {
    let r = Rect::new(10.0, 20.0, 300.0, 200.0);
    assert_eq!(r.right(), 310.0);
    assert_eq!(r.bottom(), 220.0);
    assert_eq!(r.origin(), Point::new(10.0, 20.0));
}

#[test]
fn rect_rounded_rounds_every_component() {
    let r = Rect::new(10.4, 20.6, 299.5, 200.2).rounded();
    assert_eq!(r, Rect::new(10.0, 21.0, 300.0, 200.0));
}

#[test]
fn bounding_of_empty_is_none() {
    let rects: Vec<Rect> = Vec::new();
    assert!(Rect::bounding(&rects).is_none());
}

#[test]
fn bounding_covers_all_rects() {
    let rects = [Rect::new(50.0, 10.0, 100.0, 100.0), Rect::new(0.0, 200.0, 40.0, 40.0), Rect::new(400.0, 0.0, 200.0, 50.0)];
    let b = Rect::bounding(&rects).unwrap();
    assert_eq!(b, Rect::new(0.0, 0.0, 600.0, 240.0));
}
