//! Redirects keeping old addresses working: the `/history/{kind}.php?id=N`
//! pages of the tool's previous home, and the start page's lookup form.

use std::str::FromStr;

use axum::extract::Query;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use history_model::ElementKind;
use serde::Deserialize;

use crate::server::history::parse_id;

#[derive(Debug, Deserialize)]
pub struct LegacyParams {
    id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LookupParams {
    kind: Option<String>,
    id: Option<String>,
}

/// `302 Found` to `location`.
pub fn found(location: String) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}

/// The history page of `kind`/`id`, or the start page if `id` is unusable.
fn target(kind: ElementKind, id: Option<&str>) -> String {
    match id.and_then(parse_id) {
        Some(id) => format!("/{kind}/{id}"),
        None => "/".to_string(),
    }
}

pub async fn node(Query(params): Query<LegacyParams>) -> Response {
    found(target(ElementKind::Node, params.id.as_deref()))
}

pub async fn way(Query(params): Query<LegacyParams>) -> Response {
    found(target(ElementKind::Way, params.id.as_deref()))
}

pub async fn relation(Query(params): Query<LegacyParams>) -> Response {
    found(target(ElementKind::Relation, params.id.as_deref()))
}

pub async fn lookup(Query(params): Query<LookupParams>) -> Response {
    let kind = params
        .kind
        .as_deref()
        .and_then(|kind| ElementKind::from_str(&kind.trim().to_ascii_lowercase()).ok());

    match kind {
        Some(kind) => found(target(kind, params.id.as_deref())),
        None => found("/".to_string()),
    }
}
