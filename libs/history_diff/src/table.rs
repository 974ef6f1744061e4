use chrono::{DateTime, Utc};
use history_model::{ElementKind, History, Version};
use log::debug;
use serde::Serialize;

use crate::{ChangeRow, Links, change_row};

/// Column heading: the facts identifying one version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionHeader {
    pub version: u64,
    pub timestamp: DateTime<Utc>,
    pub visible: bool,
    pub changeset: u64,
    pub user: Option<String>,
}

impl From<&Version> for VersionHeader {
    fn from(version: &Version) -> Self {
        VersionHeader {
            version: version.version,
            timestamp: version.timestamp,
            visible: !version.is_deleted(),
            changeset: version.changeset,
            user: version.user.clone(),
        }
    }
}

/// The complete diff of an element's history, ready to be rendered.
///
/// `nodes` is only populated for ways and `members` only for relations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryTable {
    pub kind: ElementKind,
    pub id: i64,
    pub versions: Vec<VersionHeader>,
    pub properties: Vec<ChangeRow>,
    pub tags: Vec<ChangeRow>,
    pub nodes: Vec<ChangeRow>,
    pub members: Vec<ChangeRow>,
}

impl HistoryTable {
    pub fn build(history: &History, links: &Links) -> Self {
        let versions = history.versions();

        let mut properties = vec![
            change_row("User", versions, |v| v.user.as_deref(), Some(&links.user)),
            change_row(
                "Changeset",
                versions,
                |v| Some(v.changeset),
                Some(&links.changeset),
            ),
        ];

        if history.kind() == ElementKind::Node {
            properties.push(change_row("Lat", versions, |v| v.lat, None));
            properties.push(change_row("Lon", versions, |v| v.lon, None));
        }

        let tags = history
            .tag_keys()
            .into_iter()
            .map(|key| change_row(key, versions, |v| v.tag(key), None))
            .collect();

        let nodes = match history.kind() {
            ElementKind::Way => history
                .node_refs()
                .into_iter()
                .map(|node| {
                    change_row(
                        node.to_string(),
                        versions,
                        |v| v.contains_node(node).then_some(node),
                        None,
                    )
                })
                .collect(),
            _ => vec![],
        };

        let members = match history.kind() {
            ElementKind::Relation => history
                .members()
                .into_iter()
                .map(|member| {
                    change_row(
                        member.to_string(),
                        versions,
                        |v| v.contains_member(member).then_some(member.reference),
                        None,
                    )
                })
                .collect(),
            _ => vec![],
        };

        let table = HistoryTable {
            kind: history.kind(),
            id: history.id(),
            versions: versions.iter().map(VersionHeader::from).collect(),
            properties,
            tags,
            nodes,
            members,
        };

        debug!(
            "built table for {}/{}: {} columns, {} tag rows, {} node rows, {} member rows",
            table.kind,
            table.id,
            table.versions.len(),
            table.tags.len(),
            table.nodes.len(),
            table.members.len()
        );

        table
    }

    /// Rows holding at least one change after the first version.
    pub fn changed_rows(&self) -> usize {
        self.properties
            .iter()
            .chain(&self.tags)
            .chain(&self.nodes)
            .chain(&self.members)
            .filter(|row| row.has_changes())
            .count()
    }
}
