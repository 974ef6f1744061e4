use std::fmt::Display;
use std::iter;

use history_model::Version;
use serde::Serialize;

use crate::{ChangeClass, Link};

/// A single version's entry in a [`ChangeRow`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cell {
    pub class: ChangeClass,
    /// Empty when the version holds no value.
    pub value: String,
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangeRow {
    pub label: String,
    pub cells: Vec<Cell>,
}

impl ChangeRow {
    /// Whether any version after the first differs from its predecessor.
    pub fn has_changes(&self) -> bool {
        self.cells
            .iter()
            .skip(1)
            .any(|cell| !matches!(cell.class, ChangeClass::Unchanged | ChangeClass::NotPresent))
    }
}

/// Builds the row for the attribute `getter` extracts, comparing each
/// version with its predecessor. A link, if given, is only attached to
/// cells holding a value.
///
/// ```rust,ignore
/// let row = change_row("name", history.versions(), |v| v.tag("name"), None);
/// assert_eq!(row.cells.len(), history.len());
/// ```
pub fn change_row<'a, V, F>(
    label: impl Into<String>,
    versions: &'a [Version],
    getter: F,
    link: Option<&Link>,
) -> ChangeRow
where
    V: PartialEq + Display,
    F: Fn(&'a Version) -> Option<V>,
{
    let values: Vec<Option<V>> = versions.iter().map(getter).collect();

    let cells = iter::once(None)
        .chain(values.iter().map(Option::as_ref))
        .zip(values.iter().map(Option::as_ref))
        .map(|(previous, current)| {
            let value = current.map(ToString::to_string).unwrap_or_default();
            let url = current.and(link).map(|link| link.resolve(&value));

            Cell {
                class: ChangeClass::classify(previous, current),
                value,
                url,
            }
        })
        .collect();

    ChangeRow {
        label: label.into(),
        cells,
    }
}
