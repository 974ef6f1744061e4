use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// The three primitives of the OpenStreetMap data model.
///
/// The string form (`node`, `way`, `relation`) is the one used both
/// by the API paths and by the `type` field of the history document.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    AsRefStr,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    Node,
    Way,
    Relation,
}

impl ElementKind {
    /// Capitalised name, for headings.
    pub const fn title(&self) -> &'static str {
        match self {
            ElementKind::Node => "Node",
            ElementKind::Way => "Way",
            ElementKind::Relation => "Relation",
        }
    }
}
