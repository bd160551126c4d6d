use canvas::doc::BlockKind;
use serde_json::json;

use super::*;

#[test]
fn parses_snapshot_array() {
    let blocks = parse_blocks(r#"[{"id":1,"type":"text","data":{},"order":0},{"id":2,"block_type":"image","order":1}]"#).unwrap();
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[1].kind, BlockKind::Image);
}

#[test]
fn skips_unparseable_entries() {
    let blocks = parse_blocks(r#"[{"id":1,"type":"text"},{"id":2,"type":"hologram"},{"type":"text"}]"#).unwrap();
    assert_eq!(blocks.iter().map(|b| b.id).collect::<Vec<_>>(), vec![1]);
}

#[test]
fn rejects_non_array() {
    assert!(parse_blocks(r#"{"id":1}"#).is_err());
    assert!(parse_blocks("not json").is_err());
}

#[test]
fn rejected_entry_names_the_block() {
    let reason = decode_entry(json!({"id": 2, "type": "hologram"})).unwrap_err();
    assert!(reason.starts_with("block 2:"), "{reason}");
    let reason = decode_entry(json!({"type": "text"})).unwrap_err();
    assert!(reason.starts_with("block null:"), "{reason}");
    assert_eq!(decode_entry(json!({"id": 4, "type": "text"})).unwrap().id, 4);
}
