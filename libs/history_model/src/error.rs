use std::fmt::{Display, Formatter};

use crate::ElementKind;

#[derive(Debug)]
pub enum ModelError {
    Decode(serde_json::Error),
    /// The document listed no versions at all.
    Empty { kind: ElementKind, id: i64 },
    /// A version belongs to another element than the one requested.
    Mismatch {
        expected: (ElementKind, i64),
        found: (ElementKind, i64),
    },
}

impl From<serde_json::Error> for ModelError {
    fn from(value: serde_json::Error) -> Self {
        ModelError::Decode(value)
    }
}

impl Display for ModelError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelError::Decode(err) => write!(f, "malformed history document: {err}"),
            ModelError::Empty { kind, id } => write!(f, "history of {kind}/{id} has no versions"),
            ModelError::Mismatch { expected, found } => write!(
                f,
                "history of {}/{} contains a version of {}/{}",
                expected.0, expected.1, found.0, found.1
            ),
        }
    }
}

impl std::error::Error for ModelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ModelError::Decode(err) => Some(err),
            _ => None,
        }
    }
}
