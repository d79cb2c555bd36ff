use crate::api::CoachApi;
use crate::errors::ClientError;
use crate::view::{Page, Tone};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

const FALLBACK_MESSAGE: &str = "Something went wrong";

/// Owns the page state. Locks are only held for synchronous view updates,
/// never across a backend call.
#[derive(Clone)]
pub struct CoachClient {
    api: CoachApi,
    page: Arc<Mutex<Page>>,
}

impl CoachClient {
    pub fn new(api: CoachApi, page: Page) -> Self {
        Self {
            api,
            page: Arc::new(Mutex::new(page)),
        }
    }

    pub async fn view(&self) -> Page {
        self.page.lock().await.clone()
    }

    pub async fn bootstrap(&self) {
        match self.api.health().await {
            Ok(()) => info!(url = self.api.base_url(), "coaching backend reachable"),
            Err(err) => warn!(url = self.api.base_url(), "coaching backend health check failed: {err}"),
        }

        if self.has_history().await {
            tokio::join!(self.refresh_profile(), self.refresh_logs());
        }
    }

    /// Submits the form. Returns the dependent history refresh, if one was
    /// started.
    pub async fn submit_coach(&self, input: &HashMap<String, String>) -> Option<JoinHandle<()>> {
        let (ticket, payload) = {
            let mut page = self.page.lock().await;
            page.apply_input(input);
            page.set_loading(true);
            (page.begin_submission(), page.collect_payload())
        };

        let outcome = self.api.submit_log(&payload).await;

        let mut page = self.page.lock().await;
        if !page.is_latest_submission(ticket) {
            debug!(ticket, "dropping response of a superseded submission");
            return None;
        }
        page.set_loading(false);

        match outcome {
            Ok(data) => {
                page.render_response(&data);
                page.set_status("Updated", Tone::Info);
                info!(log_id = ?data.log_id, "coaching response rendered");
                if !page.has_history() {
                    return None;
                }
                drop(page);
                let client = self.clone();
                Some(tokio::spawn(async move {
                    if let Err(message) = client.load_logs().await {
                        warn!("history refresh after submission failed: {message}");
                    }
                }))
            }
            Err(err) => {
                warn!("coach submission failed: {err}");
                page.set_status(status_message(&err, None), Tone::Error);
                None
            }
        }
    }

    pub async fn reset(&self) {
        self.page.lock().await.reset_form();
    }

    pub async fn refresh_profile(&self) {
        if !self.has_history().await {
            return;
        }
        let result = self.api.fetch_profile().await;
        let mut page = self.page.lock().await;
        match result {
            Ok(profile) => page.render_profile(&profile),
            Err(err) => {
                warn!("profile fetch failed: {err}");
                page.render_profile_unavailable();
                page.set_status(status_message(&err, Some("Profile not available yet")), Tone::Error);
            }
        }
    }

    pub async fn refresh_logs(&self) {
        if !self.has_history().await {
            return;
        }
        if let Err(message) = self.load_logs().await {
            warn!("logs fetch failed: {message}");
            self.page.lock().await.set_status(message, Tone::Error);
        }
    }

    async fn load_logs(&self) -> Result<(), String> {
        let result = self.api.fetch_logs().await;
        let mut page = self.page.lock().await;
        match result {
            Ok(logs) => {
                debug!(count = logs.len(), "history loaded");
                page.render_logs(&logs);
                Ok(())
            }
            Err(err) => {
                page.render_logs_unavailable();
                Err(status_message(&err, Some("Logs not available yet")))
            }
        }
    }

    async fn has_history(&self) -> bool {
        self.page.lock().await.has_history()
    }
}

fn status_message(err: &ClientError, http_message: Option<&str>) -> String {
    let message = match http_message {
        Some(message) if err.is_http() => message.to_string(),
        _ => err.to_string(),
    };
    if message.trim().is_empty() {
        FALLBACK_MESSAGE.to_string()
    } else {
        message
    }
}
