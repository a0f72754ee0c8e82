//! REST client for the restaurant API.

use gloo_net::http::Request;
use ruokala_core::{DailyMenu, DataSource, Endpoints, RequestError, Restaurant, WeeklyMenu};
use serde::de::DeserializeOwned;

/// `GET`-only JSON client.
#[derive(Debug, Clone)]
pub struct HttpClient {
    endpoints: Endpoints,
}

impl HttpClient {
    /// Create a client for the given endpoints.
    #[must_use]
    pub fn new(endpoints: Endpoints) -> Self {
        Self { endpoints }
    }

    /// `GET` a URL and decode its JSON body.
    ///
    /// # Errors
    ///
    /// Fails on transport errors, non-2xx statuses and undecodable bodies.
    pub async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, RequestError> {
        tracing::debug!(%url, "GET");
        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| RequestError::Transport {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        if !response.ok() {
            return Err(RequestError::Status {
                url: url.to_string(),
                status: response.status(),
                status_text: response.status_text(),
            });
        }

        response.json::<T>().await.map_err(|e| RequestError::Decode {
            url: url.to_string(),
            message: e.to_string(),
        })
    }
}

impl DataSource for HttpClient {
    async fn restaurants(&self) -> Result<Vec<Restaurant>, RequestError> {
        self.fetch_json(&self.endpoints.restaurants()).await
    }

    async fn daily_menu(&self, id: &str) -> Result<DailyMenu, RequestError> {
        self.fetch_json(&self.endpoints.daily_menu(id)).await
    }

    async fn weekly_menu(&self, id: &str) -> Result<WeeklyMenu, RequestError> {
        self.fetch_json(&self.endpoints.weekly_menu(id)).await
    }
}
