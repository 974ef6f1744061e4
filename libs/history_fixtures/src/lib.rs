//! Recorded `history.json` responses of the OpenStreetMap API, shared by the
//! test suites of the workspace.

/// Node 1: three versions, a moved position, an added and a removed tag.
pub const NODE_HISTORY: &str = include_str!("../data/node_history.json");

/// Node 7: created, then deleted.
pub const DELETED_NODE_HISTORY: &str = include_str!("../data/deleted_node_history.json");

/// Way 10: node list edited once, then deleted.
pub const WAY_HISTORY: &str = include_str!("../data/way_history.json");

/// Relation 20: one member swapped, one tag changed.
pub const RELATION_HISTORY: &str = include_str!("../data/relation_history.json");

pub const NODE_ID: i64 = 1;
pub const DELETED_NODE_ID: i64 = 7;
pub const WAY_ID: i64 = 10;
pub const RELATION_ID: i64 = 20;
