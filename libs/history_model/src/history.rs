use indexmap::IndexSet;
use log::debug;
use serde::Deserialize;

use crate::{ElementKind, Member, ModelError, Version};

/// Envelope of the API response. Only `elements` is of interest, the
/// remaining fields are attribution and generator metadata.
#[derive(Deserialize)]
struct Document {
    #[serde(default)]
    elements: Vec<Version>,
}

/// Every version of a single element, oldest first.
#[derive(Debug, Clone, PartialEq)]
pub struct History {
    kind: ElementKind,
    id: i64,
    versions: Vec<Version>,
}

impl History {
    /// Validates that `versions` is non-empty and belongs to `kind`/`id`,
    /// then orders it by version number.
    pub fn new(kind: ElementKind, id: i64, mut versions: Vec<Version>) -> Result<Self, ModelError> {
        if versions.is_empty() {
            return Err(ModelError::Empty { kind, id });
        }

        if let Some(stray) = versions.iter().find(|v| v.kind != kind || v.id != id) {
            return Err(ModelError::Mismatch {
                expected: (kind, id),
                found: (stray.kind, stray.id),
            });
        }

        versions.sort_by_key(|v| v.version);
        Ok(History { kind, id, versions })
    }

    pub fn from_json(kind: ElementKind, id: i64, body: &[u8]) -> Result<Self, ModelError> {
        let document: Document = serde_json::from_slice(body)?;
        debug!("decoded {} versions of {kind}/{id}", document.elements.len());

        History::new(kind, id, document.elements)
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn versions(&self) -> &[Version] {
        &self.versions
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    /// Always `false`, a `History` cannot be constructed without versions.
    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    /// Every tag key used by any version, in the order they were first seen.
    pub fn tag_keys(&self) -> Vec<&str> {
        self.versions
            .iter()
            .flat_map(|v| v.tags.keys().map(String::as_str))
            .collect::<IndexSet<_>>()
            .into_iter()
            .collect()
    }

    /// Every node any version of a way referenced, in the order they were first seen.
    pub fn node_refs(&self) -> Vec<i64> {
        self.versions
            .iter()
            .flat_map(|v| v.nodes.iter().copied())
            .collect::<IndexSet<_>>()
            .into_iter()
            .collect()
    }

    /// Every member any version of a relation listed, in the order they were first seen.
    pub fn members(&self) -> Vec<&Member> {
        self.versions
            .iter()
            .flat_map(|v| v.members.iter())
            .collect::<IndexSet<_>>()
            .into_iter()
            .collect()
    }
}
