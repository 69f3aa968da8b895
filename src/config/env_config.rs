use crate::core::rotation::{DEFAULT_ROTATION_INTERVAL, MAX_ROTATION_INTERVAL};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, SiteError};
use crate::utils::validation::{validate_url, Validate};
use std::env;
use std::time::Duration;

pub const BACKEND_URL_ENV: &str = "BACKEND_URL";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// 網站設定：對外只有後端網址一個設定值
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub backend_url: String,
    pub request_timeout: Duration,
    pub rotation_interval: Duration,
}

impl SiteConfig {
    pub fn new(backend_url: impl Into<String>) -> Self {
        Self {
            backend_url: backend_url.into(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            rotation_interval: DEFAULT_ROTATION_INTERVAL,
        }
    }

    /// 從環境變數 BACKEND_URL 讀取
    pub fn from_env() -> Result<Self> {
        Self::resolve(None)
    }

    /// 命令列參數優先，其次是環境變數
    pub fn resolve(override_url: Option<&str>) -> Result<Self> {
        let backend_url = match override_url {
            Some(url) => url.to_string(),
            None => env::var(BACKEND_URL_ENV).map_err(|_| SiteError::MissingConfigError {
                field: BACKEND_URL_ENV.to_string(),
            })?,
        };
        let config = Self::new(backend_url);
        config.validate()?;
        Ok(config)
    }

    pub fn with_rotation_interval(mut self, interval: Duration) -> Self {
        self.rotation_interval = interval;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

impl ConfigProvider for SiteConfig {
    fn backend_url(&self) -> &str {
        &self.backend_url
    }

    fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    fn rotation_interval(&self) -> Duration {
        self.rotation_interval
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        validate_url("backend_url", &self.backend_url)?;
        if self.rotation_interval.is_zero() {
            return Err(SiteError::InvalidConfigValueError {
                field: "rotation_interval".to_string(),
                value: format!("{:?}", self.rotation_interval),
                reason: "Rotation interval must be positive".to_string(),
            });
        }
        if self.rotation_interval > MAX_ROTATION_INTERVAL {
            return Err(SiteError::InvalidConfigValueError {
                field: "rotation_interval".to_string(),
                value: format!("{:?}", self.rotation_interval),
                reason: format!("Rotation interval must be at most {:?}", MAX_ROTATION_INTERVAL),
            });
        }
        Ok(())
    }
}
