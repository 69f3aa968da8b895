use crate::domain::model::{ContactAck, ContactFormDraft};
use crate::domain::ports::ContactGateway;
use crate::utils::error::SubmissionError;
use std::sync::{Mutex, MutexGuard};

pub const SUCCESS_TITLE: &str = "Message Sent!";
pub const SUCCESS_MESSAGE: &str = "Thank you for your message. I'll get back to you soon!";
pub const FAILURE_TITLE: &str = "Message Not Sent";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Idle,
    Submitting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// 送出後顯示給使用者的通知
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn sent() -> Self {
        Self {
            kind: NoticeKind::Success,
            title: SUCCESS_TITLE.to_string(),
            description: SUCCESS_MESSAGE.to_string(),
        }
    }

    pub fn failed(error: &SubmissionError) -> Self {
        Self {
            kind: NoticeKind::Error,
            title: FAILURE_TITLE.to_string(),
            description: error.user_message(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind == NoticeKind::Success
    }
}

/// 一次送出動作的結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Sent(ContactAck),
    Rejected(SubmissionError),
    /// 已有請求在進行中，這次送出不做任何事
    Ignored,
}

#[derive(Debug)]
struct FormState {
    draft: ContactFormDraft,
    phase: FormPhase,
    notice: Option<Notice>,
}

/// 聯絡表單：Idle → Submitting → Idle
///
/// 進行中的檢查與切換到 Submitting 在同一個鎖內完成，
/// 因此同一個表單同時只會有一個請求。鎖不會跨越 await。
pub struct ContactForm<G: ContactGateway> {
    gateway: G,
    state: Mutex<FormState>,
}

impl<G: ContactGateway> ContactForm<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            state: Mutex::new(FormState {
                draft: ContactFormDraft::default(),
                phase: FormPhase::Idle,
                notice: None,
            }),
        }
    }

    fn state(&self) -> MutexGuard<'_, FormState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn draft(&self) -> ContactFormDraft {
        self.state().draft.clone()
    }

    pub fn phase(&self) -> FormPhase {
        self.state().phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase() == FormPhase::Submitting
    }

    pub fn last_notice(&self) -> Option<Notice> {
        self.state().notice.clone()
    }

    pub fn set_name(&self, name: impl Into<String>) {
        self.state().draft.name = name.into();
    }

    pub fn set_email(&self, email: impl Into<String>) {
        self.state().draft.email = email.into();
    }

    pub fn set_message(&self, message: impl Into<String>) {
        self.state().draft.message = message.into();
    }

    pub fn fill(&self, draft: ContactFormDraft) {
        self.state().draft = draft;
    }

    /// 送出目前的草稿。成功時清空草稿，失敗時保留。
    pub async fn submit(&self) -> SubmitOutcome {
        let draft = {
            let mut state = self.state();
            if state.phase == FormPhase::Submitting {
                tracing::debug!("⏳ Submission already in flight, ignoring submit");
                return SubmitOutcome::Ignored;
            }

            if let Some(field) = state.draft.first_missing_field() {
                let error = SubmissionError::MissingField { field };
                tracing::info!("📝 Contact form incomplete: {} is empty", field);
                state.notice = Some(Notice::failed(&error));
                return SubmitOutcome::Rejected(error);
            }

            state.phase = FormPhase::Submitting;
            state.draft.clone()
        };

        let result = self.gateway.submit_contact(&draft).await;

        let mut state = self.state();
        state.phase = FormPhase::Idle;
        match result {
            Ok(ack) => {
                tracing::info!("✅ Contact message from {} sent", draft.name);
                state.draft = ContactFormDraft::default();
                state.notice = Some(Notice::sent());
                SubmitOutcome::Sent(ack)
            }
            Err(error) => {
                tracing::warn!("❌ Contact submission failed: {}", error);
                state.notice = Some(Notice::failed(&error));
                SubmitOutcome::Rejected(error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tokio::sync::Notify;

    /// 回傳固定結果的假後端；可選擇在 gate 放行前卡住請求
    struct MockGateway {
        calls: AtomicUsize,
        received: Mutex<Vec<ContactFormDraft>>,
        response: Result<ContactAck, SubmissionError>,
        gate: Option<Arc<Notify>>,
    }

    impl MockGateway {
        fn responding(response: Result<ContactAck, SubmissionError>) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                received: Mutex::new(Vec::new()),
                response,
                gate: None,
            }
        }

        fn gated(mut self, gate: Arc<Notify>) -> Self {
            self.gate = Some(gate);
            self
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ContactGateway for MockGateway {
        async fn submit_contact(
            &self,
            draft: &ContactFormDraft,
        ) -> Result<ContactAck, SubmissionError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.received.lock().unwrap().push(draft.clone());
            if let Some(gate) = &self.gate {
                gate.notified().await;
            }
            self.response.clone()
        }
    }

    fn filled_form(gateway: MockGateway) -> ContactForm<MockGateway> {
        let form = ContactForm::new(gateway);
        form.set_name("Sarah Johnson");
        form.set_email("sarah@example.com");
        form.set_message("I'd like a booking system for my restaurant.");
        form
    }

    #[tokio::test]
    async fn test_success_resets_draft() {
        let form = filled_form(MockGateway::responding(Ok(ContactAck::default())));

        let outcome = form.submit().await;

        assert!(matches!(outcome, SubmitOutcome::Sent(_)));
        assert_eq!(form.gateway().calls(), 1);
        assert_eq!(form.draft(), ContactFormDraft::new("", "", ""));
        assert_eq!(form.phase(), FormPhase::Idle);
        let notice = form.last_notice().unwrap();
        assert!(notice.is_success());
        assert_eq!(notice.title, SUCCESS_TITLE);
    }

    #[tokio::test]
    async fn test_gateway_receives_the_draft() {
        let form = filled_form(MockGateway::responding(Ok(ContactAck::default())));
        let expected = form.draft();

        form.submit().await;

        let received = form.gateway().received.lock().unwrap().clone();
        assert_eq!(received, vec![expected]);
    }

    #[tokio::test]
    async fn test_rate_limited_keeps_draft() {
        let form = filled_form(MockGateway::responding(Err(SubmissionError::RateLimited {
            detail: None,
        })));
        let before = form.draft();

        let outcome = form.submit().await;

        assert!(matches!(
            outcome,
            SubmitOutcome::Rejected(SubmissionError::RateLimited { .. })
        ));
        assert_eq!(form.phase(), FormPhase::Idle);
        assert_eq!(form.draft(), before);
        let notice = form.last_notice().unwrap();
        assert_eq!(notice.kind, NoticeKind::Error);
        assert!(notice.description.contains("Too many messages"));
    }

    #[tokio::test]
    async fn test_invalid_input_surfaces_detail() {
        let form = filled_form(MockGateway::responding(Err(SubmissionError::InvalidInput {
            detail: Some("Email invalid".to_string()),
        })));

        form.submit().await;

        assert!(form.last_notice().unwrap().description.contains("Email invalid"));
        assert!(!form.draft().is_blank());
    }

    #[tokio::test]
    async fn test_missing_field_sends_nothing() {
        let form = ContactForm::new(MockGateway::responding(Ok(ContactAck::default())));
        form.set_name("Sarah Johnson");
        form.set_message("Hello");

        let outcome = form.submit().await;

        assert_eq!(
            outcome,
            SubmitOutcome::Rejected(SubmissionError::MissingField { field: "email" })
        );
        assert_eq!(form.gateway().calls(), 0);
        assert_eq!(form.phase(), FormPhase::Idle);
        assert_eq!(form.draft().name, "Sarah Johnson");
    }

    #[tokio::test]
    async fn test_double_submit_makes_one_call() {
        let gate = Arc::new(Notify::new());
        let form = Arc::new(filled_form(
            MockGateway::responding(Ok(ContactAck::default())).gated(gate.clone()),
        ));

        let first = tokio::spawn({
            let form = form.clone();
            async move { form.submit().await }
        });

        while form.gateway().calls() == 0 {
            tokio::task::yield_now().await;
        }
        assert!(form.is_submitting());

        let second = form.submit().await;
        assert_eq!(second, SubmitOutcome::Ignored);

        gate.notify_one();
        let first = first.await.unwrap();

        assert!(matches!(first, SubmitOutcome::Sent(_)));
        assert_eq!(form.gateway().calls(), 1);
        assert_eq!(form.phase(), FormPhase::Idle);
    }

    #[tokio::test]
    async fn test_retry_after_failure_resends_same_draft() {
        let form = filled_form(MockGateway::responding(Err(
            SubmissionError::SubmissionFailed {
                status: Some(500),
                reason: "server error".to_string(),
            },
        )));

        form.submit().await;
        form.submit().await;

        let received = form.gateway().received.lock().unwrap().clone();
        assert_eq!(received.len(), 2);
        assert_eq!(received[0], received[1]);
    }
}
