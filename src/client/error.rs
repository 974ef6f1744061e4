use std::fmt::{Display, Formatter};

use history_model::{ElementKind, ModelError};
use reqwest::StatusCode;

#[derive(Debug)]
pub enum ClientError {
    /// The API does not know the element, or it has been redacted.
    ElementMissing { kind: ElementKind, id: i64 },
    /// The API answered with an unexpected status.
    Upstream(StatusCode),
    Transport(reqwest::Error),
    Decode(ModelError),
    /// The configured API url cannot have paths appended to it.
    InvalidBase(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(value: reqwest::Error) -> Self {
        ClientError::Transport(value)
    }
}

impl From<ModelError> for ClientError {
    fn from(value: ModelError) -> Self {
        ClientError::Decode(value)
    }
}

impl Display for ClientError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ClientError::ElementMissing { kind, id } => write!(f, "{kind}/{id} does not exist"),
            ClientError::Upstream(status) => write!(f, "the OpenStreetMap API answered {status}"),
            ClientError::Transport(err) => write!(f, "could not reach the OpenStreetMap API: {err}"),
            ClientError::Decode(err) => write!(f, "{err}"),
            ClientError::InvalidBase(url) => write!(f, "{url} cannot be used as an API base"),
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClientError::Transport(err) => Some(err),
            ClientError::Decode(err) => Some(err),
            _ => None,
        }
    }
}
