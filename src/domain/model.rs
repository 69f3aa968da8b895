use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioProject {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub image_url: String,
    /// 自由文字分類，不是列舉
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub icon_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: u32,
    pub author_name: String,
    pub author_position: String,
    pub content: String,
    pub avatar_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhyChooseMeItem {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub icon_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessStep {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub icon_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingPlan {
    pub id: u32,
    pub name: String,
    /// 顯示用字串（例如 "₹50,000"），不做數值運算
    pub price: String,
    pub features: Vec<String>,
    #[serde(default)]
    pub recommended: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub id: u32,
    pub question: String,
    pub answer: String,
}

/// Hero / About / Contact 區塊的文案與社群連結
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteProfile {
    pub brand: String,
    pub tagline: String,
    pub pitch: String,
    pub owner_name: String,
    pub about: Vec<String>,
    #[serde(default)]
    pub badges: Vec<String>,
    pub portrait_url: String,
    pub instagram_url: String,
    pub whatsapp_url: String,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub copyright: String,
}

/// 聯絡表單草稿，只存在於頁面狀態中
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFormDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFormDraft {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// 第一個空白的必填欄位
    pub fn first_missing_field(&self) -> Option<&'static str> {
        [
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ]
        .into_iter()
        .find(|(_, value)| value.is_empty())
        .map(|(field, _)| field)
    }

    pub fn is_blank(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }
}

/// 後端在 2xx 時回傳的訊息回執；內容可有可無
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactAck {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub timestamp: Option<NaiveDateTime>,
}
