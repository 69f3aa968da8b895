use crate::app::render::PageRenderer;
use crate::catalog::Catalog;
use crate::core::contact_form::{ContactForm, Notice};
use crate::core::rotation::{lock_rotation, RotationTimer, SharedRotation, TestimonialRotation};
use crate::domain::model::{ContactFormDraft, Testimonial};
use crate::domain::ports::ContactGateway;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// 頁面上的錨點區塊
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    About,
    Services,
    ServiceDetails,
    Portfolio,
    WhyChooseMe,
    Testimonials,
    Process,
    Pricing,
    Faq,
    Contact,
}

impl Section {
    /// 導覽列上的項目
    pub const NAVIGATION: [Section; 5] = [
        Section::Hero,
        Section::About,
        Section::Services,
        Section::Portfolio,
        Section::Contact,
    ];

    /// 頁尾的快速連結
    pub const FOOTER_LINKS: [Section; 4] = [
        Section::Hero,
        Section::About,
        Section::Portfolio,
        Section::Contact,
    ];

    pub fn anchor(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::About => "about",
            Section::Services => "services",
            Section::ServiceDetails => "service-details",
            Section::Portfolio => "portfolio",
            Section::WhyChooseMe => "why-choose-me",
            Section::Testimonials => "testimonials",
            Section::Process => "process",
            Section::Pricing => "pricing",
            Section::Faq => "faq",
            Section::Contact => "contact",
        }
    }

    pub fn nav_label(self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::About => "About",
            Section::Services | Section::ServiceDetails => "Services",
            Section::Portfolio => "Portfolio",
            Section::WhyChooseMe => "Why Me",
            Section::Testimonials => "Testimonials",
            Section::Process => "Process",
            Section::Pricing => "Pricing",
            Section::Faq => "FAQ",
            Section::Contact => "Contact",
        }
    }
}

/// 某一刻的頁面狀態，交給 renderer 使用
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    pub testimonial_index: Option<usize>,
    pub menu_open: bool,
    pub draft: ContactFormDraft,
    pub submitting: bool,
    pub notice: Option<Notice>,
    /// 表單 action；沒有設定後端時為 None
    pub contact_action: Option<String>,
}

impl PageState {
    pub fn initial(catalog: &Catalog) -> Self {
        Self {
            testimonial_index: (!catalog.testimonials.is_empty()).then_some(0),
            menu_open: false,
            draft: ContactFormDraft::default(),
            submitting: false,
            notice: None,
            contact_action: None,
        }
    }
}

/// 單一頁面實例：擁有輪播、表單與選單狀態
///
/// `activate` 啟動輪播計時器，`deactivate` 或 drop 時取消。
pub struct PageSession<G: ContactGateway> {
    catalog: Arc<Catalog>,
    rotation: SharedRotation,
    timer: Option<RotationTimer>,
    form: Arc<ContactForm<G>>,
    menu_open: bool,
    contact_action: Option<String>,
}

impl<G: ContactGateway> PageSession<G> {
    pub fn new(catalog: Arc<Catalog>, gateway: G) -> Self {
        let rotation = Arc::new(Mutex::new(TestimonialRotation::new(
            catalog.testimonials.len(),
        )));
        Self {
            catalog,
            rotation,
            timer: None,
            form: Arc::new(ContactForm::new(gateway)),
            menu_open: false,
            contact_action: None,
        }
    }

    pub fn with_contact_action(mut self, action: impl Into<String>) -> Self {
        self.contact_action = Some(action.into());
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn form(&self) -> &Arc<ContactForm<G>> {
        &self.form
    }

    /// 啟動輪播。沒有推薦語時不啟動，回傳 false。必須在 tokio runtime 內呼叫。
    pub fn activate(&mut self, period: Duration) -> bool {
        if self.catalog.testimonials.is_empty() {
            tracing::info!("⏸️ No testimonials, rotation suspended");
            return false;
        }
        if self.timer.is_none() {
            self.timer = Some(RotationTimer::start(self.rotation.clone(), period));
        }
        true
    }

    pub fn deactivate(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.stop();
        }
    }

    pub fn is_active(&self) -> bool {
        self.timer.as_ref().is_some_and(RotationTimer::is_running)
    }

    pub fn testimonial_index(&self) -> Option<usize> {
        lock_rotation(&self.rotation).current()
    }

    pub fn current_testimonial(&self) -> Option<&Testimonial> {
        self.testimonial_index()
            .and_then(|index| self.catalog.testimonials.get(index))
    }

    /// 點選指示點；不會重設計時器週期
    pub fn select_testimonial(&self, index: usize) -> bool {
        lock_rotation(&self.rotation).select(index)
    }

    /// 與計時器相同的推進，供手動前進使用
    pub fn advance_testimonial(&self) -> Option<usize> {
        lock_rotation(&self.rotation).tick()
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    /// 捲動到區塊並關閉行動版選單，回傳錨點 id
    pub fn navigate(&mut self, section: Section) -> &'static str {
        self.menu_open = false;
        section.anchor()
    }

    pub fn snapshot(&self) -> PageState {
        PageState {
            testimonial_index: self.testimonial_index(),
            menu_open: self.menu_open,
            draft: self.form.draft(),
            submitting: self.form.is_submitting(),
            notice: self.form.last_notice(),
            contact_action: self.contact_action.clone(),
        }
    }

    pub fn render(&self) -> String {
        PageRenderer::new(&self.catalog).render(&self.snapshot())
    }
}
