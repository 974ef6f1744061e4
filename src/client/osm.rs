use axum::async_trait;
use history_model::{ElementKind, History};
use reqwest::{Client, StatusCode};
use tracing::{event, Level};
use url::Url;

use crate::client::{ClientError, HistorySource};
use crate::Config;

/// Client of the OpenStreetMap API 0.6 history endpoints.
#[derive(Debug, Clone)]
pub struct OsmApi {
    client: Client,
    base: Url,
}

impl OsmApi {
    pub fn new(config: &Config) -> Result<Self, ClientError> {
        if config.api_url.cannot_be_a_base() {
            return Err(ClientError::InvalidBase(config.api_url.to_string()));
        }

        let client = Client::builder()
            .timeout(config.upstream_timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(OsmApi {
            client,
            base: config.api_url.clone(),
        })
    }

    /// `{base}/{kind}/{id}/history.json`
    pub fn endpoint(&self, kind: ElementKind, id: i64) -> Result<Url, ClientError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidBase(self.base.to_string()))?
            .pop_if_empty()
            .push(kind.as_ref())
            .push(&id.to_string())
            .push("history.json");

        Ok(url)
    }
}

#[async_trait]
impl HistorySource for OsmApi {
    #[tracing::instrument(skip(self), err(level = Level::WARN))]
    async fn history(&self, kind: ElementKind, id: i64) -> Result<History, ClientError> {
        let url = self.endpoint(kind, id)?;
        let response = self.client.get(url).send().await?;

        let status = response.status();
        event!(Level::DEBUG, %status, "history response");

        match status {
            StatusCode::NOT_FOUND | StatusCode::GONE => {
                return Err(ClientError::ElementMissing { kind, id });
            }
            status if !status.is_success() => return Err(ClientError::Upstream(status)),
            _ => {}
        }

        let body = response.bytes().await?;
        let history = History::from_json(kind, id, &body)?;

        event!(Level::INFO, versions = history.len(), "fetched history");
        Ok(history)
    }
}
