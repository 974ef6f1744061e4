use serde::Serialize;
use strum::{AsRefStr, Display};

/// How a value in one version relates to the value in the version before it.
///
/// The string forms double as the CSS classes of the rendered cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ChangeClass {
    New,
    Removed,
    Changed,
    Unchanged,
    NotPresent,
}

impl ChangeClass {
    pub fn classify<V: PartialEq + ?Sized>(previous: Option<&V>, current: Option<&V>) -> Self {
        match (previous, current) {
            (None, None) => ChangeClass::NotPresent,
            (None, Some(_)) => ChangeClass::New,
            (Some(_), None) => ChangeClass::Removed,
            (Some(a), Some(b)) if a == b => ChangeClass::Unchanged,
            (Some(_), Some(_)) => ChangeClass::Changed,
        }
    }
}
