pub mod builtin;
pub mod toml_catalog;

use crate::domain::model::{
    FaqEntry, PortfolioProject, PricingPlan, ProcessStep, Service, SiteProfile, Testimonial,
    WhyChooseMeItem,
};
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_unique_ids, Validate};
use serde::{Deserialize, Serialize};

/// 靜態內容目錄：啟動時載入一次，之後唯讀
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub profile: SiteProfile,
    #[serde(default)]
    pub projects: Vec<PortfolioProject>,
    #[serde(default)]
    pub services: Vec<Service>,
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
    #[serde(default)]
    pub why_choose_me: Vec<WhyChooseMeItem>,
    #[serde(default)]
    pub process_steps: Vec<ProcessStep>,
    #[serde(default)]
    pub pricing_plans: Vec<PricingPlan>,
    #[serde(default)]
    pub faqs: Vec<FaqEntry>,
}

impl Catalog {
    /// DiamondAli 網站內建的內容
    pub fn builtin() -> Self {
        builtin::diamondali()
    }

    /// 被標示為推薦的方案；多個時取第一個
    pub fn recommended_plan(&self) -> Option<&PricingPlan> {
        self.pricing_plans.iter().find(|plan| plan.recommended)
    }

    pub fn is_highlighted(&self, plan: &PricingPlan) -> bool {
        self.recommended_plan().map(|p| p.id) == Some(plan.id)
    }

    /// 服務細節區塊以索引對應作品圖片（沒有外鍵）
    pub fn project_for_service_slot(&self, index: usize) -> Option<&PortfolioProject> {
        self.projects.get(index)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Validate for Catalog {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("profile.brand", &self.profile.brand)?;

        validate_unique_ids("projects", self.projects.iter().map(|p| p.id))?;
        validate_unique_ids("services", self.services.iter().map(|s| s.id))?;
        validate_unique_ids("testimonials", self.testimonials.iter().map(|t| t.id))?;
        validate_unique_ids("why_choose_me", self.why_choose_me.iter().map(|w| w.id))?;
        validate_unique_ids("process_steps", self.process_steps.iter().map(|s| s.id))?;
        validate_unique_ids("pricing_plans", self.pricing_plans.iter().map(|p| p.id))?;
        validate_unique_ids("faqs", self.faqs.iter().map(|f| f.id))?;

        let recommended = self.pricing_plans.iter().filter(|p| p.recommended).count();
        if recommended > 1 {
            tracing::warn!(
                "🔶 {} pricing plans are marked recommended; only '{}' will be highlighted",
                recommended,
                self.recommended_plan().map(|p| p.name.as_str()).unwrap_or_default()
            );
        }

        if self.testimonials.is_empty() {
            tracing::warn!("🔶 Catalog has no testimonials; the carousel will show a placeholder");
        }

        Ok(())
    }
}
