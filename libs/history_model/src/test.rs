use std::str::FromStr;

use history_fixtures::*;
use log::info;

use crate::{ElementKind, History, Member, ModelError};

#[test_log::test]
fn element_kind_string_forms() {
    assert_eq!(ElementKind::Relation.to_string(), "relation");
    assert_eq!(ElementKind::from_str("way").ok(), Some(ElementKind::Way));
    assert!(ElementKind::from_str("changeset").is_err());
    assert_eq!(ElementKind::Node.title(), "Node");
}

#[test_log::test]
fn decodes_node_history() {
    let history = History::from_json(ElementKind::Node, NODE_ID, NODE_HISTORY.as_bytes())
        .expect("fixture must decode");

    assert_eq!(history.len(), 3);
    assert_eq!(history.kind(), ElementKind::Node);

    let first = &history.versions()[0];
    assert_eq!(first.user.as_deref(), Some("alice"));
    assert_eq!(first.lat, Some(51.5007292));
    assert!(first.visible);
    assert!(first.nodes.is_empty());

    info!("Tags: {:?}", history.tag_keys());
}

#[test_log::test]
fn tag_keys_keep_first_seen_order() {
    let history = History::from_json(ElementKind::Node, NODE_ID, NODE_HISTORY.as_bytes())
        .expect("fixture must decode");

    assert_eq!(
        history.tag_keys(),
        vec!["amenity", "name", "opening_hours", "note"]
    );
}

#[test_log::test]
fn deleted_versions_default_to_empty() {
    let history = History::from_json(
        ElementKind::Node,
        DELETED_NODE_ID,
        DELETED_NODE_HISTORY.as_bytes(),
    )
    .expect("fixture must decode");

    let deleted = &history.versions()[1];
    assert!(deleted.is_deleted());
    assert_eq!(deleted.lat, None);
    assert!(deleted.tags.is_empty());
}

#[test_log::test]
fn node_refs_are_a_union_without_duplicates() {
    let history = History::from_json(ElementKind::Way, WAY_ID, WAY_HISTORY.as_bytes())
        .expect("fixture must decode");

    assert_eq!(history.node_refs(), vec![1, 2, 3, 4]);
    assert!(history.versions()[2].nodes.is_empty());
}

#[test_log::test]
fn members_are_distinguished_by_role() {
    let history = History::from_json(ElementKind::Relation, RELATION_ID, RELATION_HISTORY.as_bytes())
        .expect("fixture must decode");

    let members = history.members();
    assert_eq!(members.len(), 3);
    assert_eq!(*members[0], Member::new(ElementKind::Way, 10, "outer"));
    assert_eq!(*members[1], Member::new(ElementKind::Node, 1, ""));
    assert_eq!(*members[2], Member::new(ElementKind::Way, 11, "inner"));

    assert_ne!(
        Member::new(ElementKind::Way, 10, "outer"),
        Member::new(ElementKind::Way, 10, "inner")
    );
    assert_eq!(members[0].to_string(), "way/10 (outer)");
    assert_eq!(members[1].to_string(), "node/1");
}

#[test_log::test]
fn versions_are_sorted() {
    let body = br#"{"elements": [
        {"type": "node", "id": 3, "version": 2, "timestamp": "2020-01-01T00:00:00Z", "changeset": 2},
        {"type": "node", "id": 3, "version": 1, "timestamp": "2019-01-01T00:00:00Z", "changeset": 1}
    ]}"#;

    let history = History::from_json(ElementKind::Node, 3, body).expect("must decode");
    let order: Vec<u64> = history.versions().iter().map(|v| v.version).collect();
    assert_eq!(order, vec![1, 2]);
}

#[test_log::test]
fn rejects_empty_history() {
    let result = History::from_json(ElementKind::Way, 4, br#"{"elements": []}"#);
    assert!(matches!(
        result,
        Err(ModelError::Empty {
            kind: ElementKind::Way,
            id: 4
        })
    ));
}

#[test_log::test]
fn rejects_foreign_versions() {
    let result = History::from_json(ElementKind::Way, WAY_ID + 1, WAY_HISTORY.as_bytes());
    assert!(matches!(result, Err(ModelError::Mismatch { .. })));
}

#[test_log::test]
fn rejects_malformed_documents() {
    let result = History::from_json(ElementKind::Node, 1, b"<osm></osm>");
    assert!(matches!(result, Err(ModelError::Decode(_))));
}
