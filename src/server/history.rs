use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};
use history_diff::HistoryTable;
use history_model::ElementKind;
use tracing::{event, Level};

use crate::server::AppState;
use crate::Error;

/// Element ids are positive integers; anything else addresses nothing.
pub fn parse_id(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok().filter(|id| *id > 0)
}

pub async fn index(State(state): State<Arc<AppState>>) -> Response {
    match state.renderer.index() {
        Ok(html) => Html(html).into_response(),
        Err(err) => state.error_page(err.into()),
    }
}

pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

pub async fn node(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> Response {
    show(&state, ElementKind::Node, &id).await
}

pub async fn way(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> Response {
    show(&state, ElementKind::Way, &id).await
}

pub async fn relation(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> Response {
    show(&state, ElementKind::Relation, &id).await
}

pub async fn not_found(State(state): State<Arc<AppState>>, uri: Uri) -> Response {
    state.error_page(Error::NotFound(uri.path().to_string()))
}

async fn show(state: &AppState, kind: ElementKind, raw_id: &str) -> Response {
    match render_history(state, kind, raw_id).await {
        Ok(html) => Html(html).into_response(),
        Err(err) => state.error_page(err),
    }
}

#[tracing::instrument(skip(state))]
async fn render_history(state: &AppState, kind: ElementKind, raw_id: &str) -> crate::Result<String> {
    let id = parse_id(raw_id).ok_or_else(|| Error::NotFound(format!("/{kind}/{raw_id}")))?;

    let history = state.source.history(kind, id).await?;
    let table = HistoryTable::build(&history, &state.links);
    event!(
        Level::DEBUG,
        versions = table.versions.len(),
        changed_rows = table.changed_rows(),
        "built table"
    );

    Ok(state.renderer.history(&table)?)
}
