use crate::domain::model::{ContactAck, ContactFormDraft};
use crate::domain::ports::{ConfigProvider, ContactGateway};
use crate::utils::error::{Result, SubmissionError};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

pub const CONTACT_PATH: &str = "/api/contact";

/// 後端錯誤回應的格式 `{"detail": "..."}`；detail 不是字串時視為沒有
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<serde_json::Value>,
}

fn extract_detail(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.detail)
        .and_then(|detail| match detail {
            serde_json::Value::String(text) => Some(text),
            _ => None,
        })
}

/// 以 reqwest 呼叫聯絡表單後端
#[derive(Debug, Clone)]
pub struct HttpContactGateway {
    client: Client,
    endpoint: String,
}

impl HttpContactGateway {
    pub fn new<C: ConfigProvider>(config: &C) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()?;
        Ok(Self::with_client(client, config.backend_url()))
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            endpoint: contact_endpoint(base_url),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

pub fn contact_endpoint(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), CONTACT_PATH)
}

#[async_trait]
impl ContactGateway for HttpContactGateway {
    async fn submit_contact(
        &self,
        draft: &ContactFormDraft,
    ) -> std::result::Result<ContactAck, SubmissionError> {
        tracing::debug!("📡 POST {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .json(draft)
            .send()
            .await
            .map_err(|e| {
                let reason = if e.is_timeout() {
                    "request timed out".to_string()
                } else {
                    e.to_string()
                };
                tracing::error!("📡 Contact request failed: {}", reason);
                SubmissionError::SubmissionFailed {
                    status: None,
                    reason,
                }
            })?;

        let status = response.status();
        tracing::debug!("📡 Contact response status: {}", status);

        // 讀取失敗時當作空 body
        let body = response.text().await.unwrap_or_default();

        if status.is_success() {
            let ack = serde_json::from_str::<ContactAck>(&body).unwrap_or_else(|_| {
                tracing::debug!("📡 Contact response body is not an acknowledgement, ignoring");
                ContactAck::default()
            });
            return Ok(ack);
        }

        let error = match status {
            StatusCode::TOO_MANY_REQUESTS => SubmissionError::RateLimited {
                detail: extract_detail(&body),
            },
            StatusCode::BAD_REQUEST => SubmissionError::InvalidInput {
                detail: extract_detail(&body),
            },
            other => SubmissionError::SubmissionFailed {
                status: Some(other.as_u16()),
                reason: format!("unexpected status {}", other),
            },
        };
        tracing::warn!("📡 Contact endpoint answered {}: {}", status, error);
        Err(error)
    }
}
