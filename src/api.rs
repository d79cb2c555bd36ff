use crate::errors::ClientError;
use crate::models::{CoachResponse, LogEntry, LogSummary, Profile};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct CoachApi {
    http: Client,
    base_url: String,
    logs_limit: Option<u32>,
}

impl CoachApi {
    pub fn new(base_url: impl Into<String>, logs_limit: Option<u32>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            logs_limit,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn submit_log(&self, entry: &LogEntry) -> Result<CoachResponse, ClientError> {
        debug!(log_date = ?entry.log_date, "posting daily log");
        let response = self
            .http
            .post(format!("{}/coach", self.base_url))
            .json(entry)
            .send()
            .await?;
        read_json(response).await
    }

    pub async fn fetch_profile(&self) -> Result<Profile, ClientError> {
        let response = self
            .http
            .get(format!("{}/profile", self.base_url))
            .send()
            .await?;
        read_json(response).await
    }

    pub async fn fetch_logs(&self) -> Result<Vec<LogSummary>, ClientError> {
        let mut request = self.http.get(format!("{}/logs", self.base_url));
        if let Some(limit) = self.logs_limit {
            request = request.query(&[("limit", limit)]);
        }
        read_json(request.send().await?).await
    }

    pub async fn health(&self) -> Result<(), ClientError> {
        let response = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;
        ensure_success(response).await?;
        Ok(())
    }
}

async fn ensure_success(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await?;
    Err(ClientError::http(status, body))
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let bytes = ensure_success(response).await?.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}
