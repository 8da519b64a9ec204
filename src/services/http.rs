use std::time::Duration;

use async_trait::async_trait;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ClientError, Result};
use crate::services::api::TourismApi;
use crate::types::{
    ChatRequest, ChatResponse, Destination, Event, Guide, ItineraryPlan, ItineraryRequest,
    SearchRequest, SearchResults,
};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the tourism backend.
///
/// All endpoints live under `<base_url>/api`; the base URL comes from
/// configuration (env or CLI flag) and its absence is a configuration
/// error, not a handled code path.
#[derive(Clone, Debug)]
pub struct HttpTourismApi {
    base_url: String,
    timeout: Duration,
}

impl HttpTourismApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var("ECOTOUR_BACKEND_URL").map_err(|_| {
            ClientError::Config(
                "ECOTOUR_BACKEND_URL environment variable must be set before creating a client"
                    .to_string(),
            )
        })?;
        Ok(Self::new(base_url))
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn request<T: DeserializeOwned>(&self, method: Method, path: &str, body: Option<Value>) -> Result<T> {
        let client = reqwest::Client::builder().timeout(self.timeout).build()?;
        let url = build_api_url(&self.base_url, path);

        let mut request = client.request(method, &url);
        if let Some(body) = &body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let response_text = response.text().await?;

        if !status.is_success() {
            return Err(ClientError::Api {
                status: status.as_u16(),
                message: extract_error_message(&response_text),
            });
        }

        // seed-data replies have no meaningful body; tolerate any empty 2xx.
        if response_text.trim().is_empty() {
            return serde_json::from_str("null").map_err(ClientError::from);
        }

        serde_json::from_str(&response_text).map_err(ClientError::from)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request(Method::GET, path, None).await
    }

    async fn post<T: DeserializeOwned>(&self, path: &str, body: Value) -> Result<T> {
        self.request(Method::POST, path, Some(body)).await
    }
}

#[async_trait]
impl TourismApi for HttpTourismApi {
    async fn destinations(&self) -> Result<Vec<Destination>> {
        self.get("/destinations").await
    }

    async fn guides(&self) -> Result<Vec<Guide>> {
        self.get("/guides").await
    }

    async fn events(&self) -> Result<Vec<Event>> {
        self.get("/events").await
    }

    async fn generate_itinerary(&self, request: &ItineraryRequest) -> Result<ItineraryPlan> {
        self.post("/itinerary/generate", serde_json::to_value(request)?)
            .await
    }

    async fn search(&self, query: &str) -> Result<SearchResults> {
        let body = SearchRequest {
            query: query.to_string(),
        };
        self.post("/search", serde_json::to_value(&body)?).await
    }

    async fn chat(&self, session_id: &str, message: &str) -> Result<String> {
        let body = ChatRequest {
            session_id: session_id.to_string(),
            message: message.to_string(),
        };
        let reply: ChatResponse = self.post("/chat", serde_json::to_value(&body)?).await?;
        Ok(reply.response)
    }

    async fn seed_data(&self) -> Result<()> {
        // Bodyless POST, matching the backend's signature.
        let _: Value = self.request(Method::POST, "/seed-data", None).await?;
        Ok(())
    }
}

fn build_api_url(base_url: &str, path: &str) -> String {
    let trimmed = base_url.trim_end_matches('/');
    if trimmed.ends_with("/api") {
        format!("{trimmed}{path}")
    } else {
        format!("{trimmed}/api{path}")
    }
}

fn extract_error_message(response_text: &str) -> String {
    serde_json::from_str::<Value>(response_text)
        .ok()
        .and_then(|value| {
            value
                .get("detail")
                .or_else(|| value.get("error"))
                .and_then(|field| field.as_str().map(|s| s.to_string()))
        })
        .unwrap_or_else(|| response_text.to_string())
}
