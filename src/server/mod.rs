//! The HTTP surface.
//!
//! | route                              | response                         |
//! |------------------------------------|----------------------------------|
//! | `/`                                | lookup form                      |
//! | `/{node,way,relation}/:id`         | history table                    |
//! | `/history/{node,way,relation}.php` | `302` to the page above (`?id=`) |
//! | `/lookup?kind=&id=`                | `302` to the page above          |
//! | `/healthz`                         | `200`                            |

pub mod history;
pub mod legacy;


use std::sync::Arc;
use std::time::Duration;

use axum::http::{header, HeaderValue, Method};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{serve, Router};
use history_diff::Links;
use tower_http::cors::{AllowOrigin, CorsLayer, MaxAge};
use tower_http::trace::TraceLayer;
use tracing::{event, Level};

use crate::client::{ClientError, HistorySource, OsmApi};
use crate::config::ConfigError;
use crate::render::Renderer;
use crate::{Config, Error};

/// Shared by every handler.
pub struct AppState {
    pub source: Arc<dyn HistorySource>,
    pub renderer: Renderer,
    pub links: Links,
}

impl AppState {
    pub fn new(source: Arc<dyn HistorySource>, config: &Config) -> crate::Result<Self> {
        let renderer = Renderer::new(config)?;
        let links = Links::for_site(&config.web_url).ok_or_else(|| ConfigError::Invalid {
            key: "OSM_WEB_URL",
            value: config.web_url.to_string(),
            reason: "cannot have paths appended".to_string(),
        })?;

        Ok(AppState {
            source,
            renderer,
            links,
        })
    }

    /// Renders the page describing `err`, falling back to a plain body
    /// when the page itself cannot be rendered.
    pub fn error_page(&self, err: Error) -> Response {
        if let Error::Render(_) = err {
            return err.into_response();
        }

        let status = err.status();
        let page = match &err {
            Error::Client(ClientError::ElementMissing { kind, id }) => {
                event!(Level::INFO, %kind, id = *id, "element does not exist");
                self.renderer.missing(*kind, *id)
            }
            _ => {
                if status.is_server_error() {
                    event!(Level::ERROR, error = %err);
                } else {
                    event!(Level::DEBUG, error = %err);
                }
                self.renderer.failure(status, &err.to_string())
            }
        };

        match page {
            Ok(html) => (status, Html(html)).into_response(),
            Err(render) => Error::from(render).into_response(),
        }
    }
}

pub fn cors(origins: &[String]) -> CorsLayer {
    CorsLayer::new()
        .allow_methods(vec![Method::GET])
        .allow_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .allow_origin(AllowOrigin::list(
            origins.iter().filter_map(|o| o.parse::<HeaderValue>().ok()),
        ))
        .max_age(MaxAge::exact(Duration::new(3600, 0)))
}

pub fn router(state: Arc<AppState>, config: &Config) -> Router {
    Router::new()
        .route("/", get(history::index))
        .route("/healthz", get(history::health_check))
        .route("/lookup", get(legacy::lookup))
        .route("/node/:id", get(history::node))
        .route("/way/:id", get(history::way))
        .route("/relation/:id", get(history::relation))
        .route("/history/node.php", get(legacy::node))
        .route("/history/way.php", get(legacy::way))
        .route("/history/relation.php", get(legacy::relation))
        .fallback(history::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors(&config.allowed_origins))
        .with_state(state)
}

/// Serves against the OpenStreetMap API until interrupted.
pub async fn run(config: Config) -> crate::Result<()> {
    let source = Arc::new(OsmApi::new(&config)?);
    let state = Arc::new(AppState::new(source, &config)?);
    let app = router(state, &config);

    let listener = tokio::net::TcpListener::bind(config.address()).await?;
    let addr = listener.local_addr()?;
    tracing::info!(message = "Starting server.", ?addr, api = %config.api_url);

    serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!(message = "Terminating server.");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        event!(Level::ERROR, error = %err, "cannot listen for ctrl-c");
    }
}
