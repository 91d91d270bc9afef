//! HTTP implementation of the session seam.

use std::time::Duration;

use log::debug;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::config::REQUEST_TIMEOUT_SECS;
use crate::coord::Coord;
use crate::session::{SessionApi, SessionError};
use crate::state::{FireOutcome, GameState, Orientation, PlaceOutcome};

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Session client speaking the server's HTTP/JSON interface.
pub struct HttpSession {
    base: String,
    http: reqwest::Client,
}

impl HttpSession {
    /// Build a client for the server at `base_url` (no trailing slash needed).
    pub fn new(base_url: impl Into<String>) -> anyhow::Result<Self> {
        let http = reqwest::ClientBuilder::new()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            base: base_url.into().trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// Map a response to its parsed body, or to `Rejected` carrying the
    /// server's `error` field verbatim on a non-2xx status.
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, SessionError> {
        let status = response.status();
        if !status.is_success() {
            let reason = match response.json::<ErrorBody>().await {
                Ok(body) => body.error,
                Err(_) => status.to_string(),
            };
            return Err(SessionError::Rejected(reason));
        }
        response
            .json::<T>()
            .await
            .map_err(|err| SessionError::Transport(err.into()))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, SessionError> {
        debug!("GET {path}");
        let response = self.http.get(self.url(path)).send().await?;
        Self::decode(response).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, SessionError> {
        debug!("POST {path}");
        let response = self.http.post(self.url(path)).json(body).send().await?;
        Self::decode(response).await
    }
}

#[async_trait::async_trait]
impl SessionApi for HttpSession {
    async fn fetch_state(&mut self) -> Result<GameState, SessionError> {
        self.get_json("/api/state").await
    }

    async fn start_new_game(&mut self, auto_place: bool) -> Result<(), SessionError> {
        // The success body is opaque; only the status matters.
        let _: serde_json::Value = self
            .post_json("/api/new-game", &json!({ "auto_place": auto_place }))
            .await?;
        Ok(())
    }

    async fn place_ship(
        &mut self,
        start: Coord,
        orientation: Orientation,
    ) -> Result<PlaceOutcome, SessionError> {
        self.post_json(
            "/api/place",
            &json!({ "start": start.label(), "orient": orientation }),
        )
        .await
    }

    async fn fire(&mut self, target: Coord) -> Result<FireOutcome, SessionError> {
        self.post_json("/api/fire", &json!({ "cell": target.label() }))
            .await
    }
}
