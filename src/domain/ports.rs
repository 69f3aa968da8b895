use crate::domain::model::{ContactAck, ContactFormDraft};
use crate::utils::error::SubmissionError;
use async_trait::async_trait;
use std::time::Duration;

/// 聯絡表單的外部後端（POST {base_url}/api/contact）
#[async_trait]
pub trait ContactGateway: Send + Sync {
    async fn submit_contact(&self, draft: &ContactFormDraft)
        -> Result<ContactAck, SubmissionError>;
}

pub trait ConfigProvider: Send + Sync {
    fn backend_url(&self) -> &str;
    fn request_timeout(&self) -> Duration;
    fn rotation_interval(&self) -> Duration;
}
