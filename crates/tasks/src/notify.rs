//! Forwarding accepted submissions to the notify service.

use serde::Serialize;
use serde_json::Value;

use kiosk_core::TaskId;

/// Wire shape of the notify call.
#[derive(Debug, Serialize)]
struct NotifyRequest<'a> {
    task_id: TaskId,
    data: &'a Value,
}

/// Client for the notify acknowledgement service.
#[derive(Debug, Clone)]
pub struct NotifyClient {
    http: reqwest::Client,
    base_url: String,
}

impl NotifyClient {
    /// Create a client against a notify base URL without a trailing slash
    /// (e.g. `http://localhost:8002`).
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// POST an accepted submission to the notify service.
    ///
    /// # Errors
    ///
    /// Returns the transport or status error; the caller decides whether
    /// delivery is best-effort.
    pub async fn task_submitted(&self, task_id: TaskId, data: &Value) -> Result<(), reqwest::Error> {
        self.http
            .post(format!("{}/notify", self.base_url))
            .json(&NotifyRequest { task_id, data })
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
