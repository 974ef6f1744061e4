//! Typed model of the element history document served by the
//! OpenStreetMap API (`/api/0.6/{kind}/{id}/history.json`).
//!
//! ```rust
//! use history_model::{ElementKind, History};
//!
//! let body = br#"{"elements": [{"type": "node", "id": 5, "version": 1,
//!     "timestamp": "2012-01-01T00:00:00Z", "changeset": 1, "lat": 1.0, "lon": 2.0}]}"#;
//! let history = History::from_json(ElementKind::Node, 5, body).unwrap();
//! assert_eq!(history.len(), 1);
//! ```

pub mod element;
pub mod history;
pub mod version;

#[doc(hidden)]
pub mod error;
#[doc(hidden)]
#[cfg(test)]
mod test;

#[doc(inline)]
pub use element::ElementKind;
#[doc(inline)]
pub use error::ModelError;
#[doc(inline)]
pub use history::History;
#[doc(inline)]
pub use version::{Member, Tags, Version};
