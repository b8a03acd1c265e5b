//! HTTP client for the booking service.

use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: i32,
    pub guest_name: String,
    pub room_type: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("service returned {status}: {message}")]
    Api { status: StatusCode, message: String },
}

impl ClientError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Transport(e) => e.status(),
        }
    }
}

/// A created booking and where the service filed it.
#[derive(Debug, Clone)]
pub struct Created {
    pub booking: Booking,
    pub location: Option<String>,
}

pub struct BookingClient {
    client: Client,
    base_url: String,
    credentials: Option<(String, String)>,
}

impl BookingClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials: None,
        }
    }

    /// Use Basic credentials on requests that need them (deletes).
    pub fn with_credentials(mut self, username: &str, password: &str) -> Self {
        self.credentials = Some((username.to_string(), password.to_string()));
        self
    }

    pub async fn list(&self) -> Result<Vec<Booking>, ClientError> {
        let resp = self
            .client
            .get(format!("{}/bookings", self.base_url))
            .send()
            .await?;
        Ok(check(resp).await?.json().await?)
    }

    pub async fn get(&self, id: i32) -> Result<Booking, ClientError> {
        let resp = self
            .client
            .get(format!("{}/bookings/{}", self.base_url, id))
            .send()
            .await?;
        Ok(check(resp).await?.json().await?)
    }

    pub async fn create(&self, booking: &Booking) -> Result<Created, ClientError> {
        let resp = self
            .client
            .post(format!("{}/bookings", self.base_url))
            .json(booking)
            .send()
            .await?;
        let resp = check(resp).await?;
        let location = resp
            .headers()
            .get(reqwest::header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        Ok(Created {
            booking: resp.json().await?,
            location,
        })
    }

    pub async fn delete(&self, id: i32) -> Result<(), ClientError> {
        let mut req = self
            .client
            .delete(format!("{}/bookings/{}", self.base_url, id));
        if let Some((user, pass)) = &self.credentials {
            req = req.basic_auth(user, Some(pass));
        }
        check(req.send().await?).await?;
        Ok(())
    }
}

/// Turn `{"error": ...}` responses into `ClientError::Api`.
async fn check(resp: Response) -> Result<Response, ClientError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let text = resp.text().await?;
    let message = serde_json::from_str::<ErrorBody>(&text)
        .map(|b| b.error)
        .unwrap_or(text);
    Err(ClientError::Api { status, message })
}
