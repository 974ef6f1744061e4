use std::fmt::{Display, Formatter};

use axum::body::Body;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::{event, Level};

use crate::client::ClientError;
use crate::config::ConfigError;
use crate::impl_err;

#[derive(Debug)]
pub enum Error {
    Client(ClientError),
    Config(ConfigError),
    Render(tera::Error),
    Io(std::io::Error),
    /// The request addressed no element, e.g. `/node/abc`.
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl_err!(
    ClientError => Client,
    ConfigError => Config,
    tera::Error => Render,
    std::io::Error => Io,
);

impl Error {
    pub fn status(&self) -> StatusCode {
        match self {
            Error::Client(ClientError::ElementMissing { .. }) | Error::NotFound(_) => {
                StatusCode::NOT_FOUND
            }
            Error::Client(_) => StatusCode::BAD_GATEWAY,
            Error::Config(_) | Error::Render(_) | Error::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Client(err) => write!(f, "{err}"),
            Error::Config(err) => write!(f, "{err}"),
            Error::Render(err) => write!(f, "could not render page: {err}"),
            Error::Io(err) => write!(f, "{err}"),
            Error::NotFound(path) => write!(f, "nothing to show at {path}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Client(err) => Some(err),
            Error::Config(err) => Some(err),
            Error::Render(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::NotFound(_) => None,
        }
    }
}

/// Plain fallback for when no page could be rendered for the error.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        event!(Level::ERROR, error = %self);

        let code = self.status();
        (code, Body::from(self.to_string())).into_response()
    }
}
