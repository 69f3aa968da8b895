use async_trait::async_trait;
use diamondali_site::core::rotation::{RotationTimer, TestimonialRotation};
use diamondali_site::domain::model::{ContactAck, ContactFormDraft};
use diamondali_site::domain::ports::ContactGateway;
use diamondali_site::{Catalog, PageSession, SubmissionError};
use std::sync::{Arc, Mutex};
use std::time::Duration;

const PERIOD: Duration = Duration::from_secs(5);

struct OfflineGateway;

#[async_trait]
impl ContactGateway for OfflineGateway {
    async fn submit_contact(
        &self,
        _draft: &ContactFormDraft,
    ) -> Result<ContactAck, SubmissionError> {
        Err(SubmissionError::SubmissionFailed {
            status: None,
            reason: "offline".to_string(),
        })
    }
}

/// 讓時間前進並讓背景工作有機會執行
async fn advance(duration: Duration) {
    tokio::time::sleep(duration).await;
    tokio::task::yield_now().await;
}

fn session() -> PageSession<OfflineGateway> {
    PageSession::new(Arc::new(Catalog::builtin()), OfflineGateway)
}

#[tokio::test(start_paused = true)]
async fn test_index_after_k_ticks_is_k_mod_n() {
    let mut session = session();
    let n = session.catalog().testimonials.len();
    assert!(session.activate(PERIOD));

    assert_eq!(session.testimonial_index(), Some(0));
    advance(PERIOD / 2).await;

    for k in 1..=7usize {
        advance(PERIOD).await;
        assert_eq!(session.testimonial_index(), Some(k % n), "after {} ticks", k);
    }
}

#[tokio::test(start_paused = true)]
async fn test_first_tick_waits_one_period() {
    let mut session = session();
    session.activate(PERIOD);

    advance(Duration::from_millis(4_900)).await;
    assert_eq!(session.testimonial_index(), Some(0));

    advance(Duration::from_millis(200)).await;
    assert_eq!(session.testimonial_index(), Some(1));
}

#[tokio::test(start_paused = true)]
async fn test_selection_overrides_pending_tick_without_resetting_period() {
    let mut session = session();
    session.activate(PERIOD);

    // 3 秒時點選第 3 則；下一次推進仍在 5 秒
    advance(Duration::from_secs(3)).await;
    assert!(session.select_testimonial(2));
    assert_eq!(session.testimonial_index(), Some(2));

    advance(Duration::from_millis(2_500)).await;
    assert_eq!(session.testimonial_index(), Some(0));

    advance(PERIOD).await;
    assert_eq!(session.testimonial_index(), Some(1));
}

#[tokio::test(start_paused = true)]
async fn test_deactivate_cancels_timer() {
    let mut session = session();
    session.activate(PERIOD);

    advance(Duration::from_millis(5_500)).await;
    assert_eq!(session.testimonial_index(), Some(1));

    session.deactivate();
    advance(PERIOD * 4).await;
    assert_eq!(session.testimonial_index(), Some(1));
    assert!(!session.is_active());
}

#[tokio::test(start_paused = true)]
async fn test_dropping_timer_stops_rotation() {
    let rotation = Arc::new(Mutex::new(TestimonialRotation::new(3)));
    let timer = RotationTimer::start(rotation.clone(), PERIOD);
    assert_eq!(timer.period(), PERIOD);

    advance(Duration::from_millis(5_500)).await;
    drop(timer);
    advance(PERIOD * 3).await;

    assert_eq!(rotation.lock().unwrap().current(), Some(1));
    assert_eq!(Arc::strong_count(&rotation), 1);
}

#[tokio::test(start_paused = true)]
async fn test_empty_catalog_renders_placeholder_and_never_rotates() {
    let mut catalog = Catalog::builtin();
    catalog.testimonials.clear();
    let mut session = PageSession::new(Arc::new(catalog), OfflineGateway);

    assert!(!session.activate(PERIOD));
    advance(PERIOD * 3).await;

    assert_eq!(session.testimonial_index(), None);
    assert!(session.render().contains("carousel-empty"));
}
