//! Access to element histories.
//!
//! The server only talks to a [`HistorySource`]; [`OsmApi`] is the
//! implementation backed by the OpenStreetMap API.

pub mod osm;

#[doc(hidden)]
pub mod error;

use axum::async_trait;
use history_model::{ElementKind, History};

#[doc(inline)]
pub use error::ClientError;
#[doc(inline)]
pub use osm::OsmApi;

#[async_trait]
pub trait HistorySource: Send + Sync {
    /// Every version of `kind`/`id`, oldest first.
    async fn history(&self, kind: ElementKind, id: i64) -> Result<History, ClientError>;
}
