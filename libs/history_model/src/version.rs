use std::fmt::{Display, Formatter};

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::ElementKind;

/// Tags of a version, in the order the API listed them.
pub type Tags = IndexMap<String, String>;

/// A relation member. Two members are the same member only if their
/// type, reference and role all agree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Member {
    #[serde(rename = "type")]
    pub kind: ElementKind,
    #[serde(rename = "ref")]
    pub reference: i64,
    #[serde(default)]
    pub role: String,
}

impl Member {
    pub fn new(kind: ElementKind, reference: i64, role: impl Into<String>) -> Self {
        Member {
            kind,
            reference,
            role: role.into(),
        }
    }
}

impl Display for Member {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.kind, self.reference)?;
        if !self.role.is_empty() {
            write!(f, " ({})", self.role)?;
        }
        Ok(())
    }
}

const fn visible_by_default() -> bool {
    true
}

/// One snapshot of an element.
///
/// Deleted versions (`visible: false`) carry neither position, tags nor
/// membership, so every one of those fields defaults to empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Version {
    #[serde(rename = "type")]
    pub kind: ElementKind,
    pub id: i64,
    pub version: u64,
    pub timestamp: DateTime<Utc>,
    pub changeset: u64,

    /// Absent for anonymous edits predating account requirements.
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub uid: Option<u64>,
    #[serde(default = "visible_by_default")]
    pub visible: bool,

    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,

    #[serde(default)]
    pub tags: Tags,
    #[serde(default)]
    pub nodes: Vec<i64>,
    #[serde(default)]
    pub members: Vec<Member>,
}

impl Version {
    #[inline]
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }

    #[inline]
    pub fn contains_node(&self, node: i64) -> bool {
        self.nodes.contains(&node)
    }

    #[inline]
    pub fn contains_member(&self, member: &Member) -> bool {
        self.members.contains(member)
    }

    #[inline]
    pub fn is_deleted(&self) -> bool {
        !self.visible
    }
}
