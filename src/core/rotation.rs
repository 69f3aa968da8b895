use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

pub const DEFAULT_ROTATION_INTERVAL: Duration = Duration::from_secs(5);
pub const MIN_ROTATION_INTERVAL: Duration = Duration::from_millis(1);
pub const MAX_ROTATION_INTERVAL: Duration = Duration::from_secs(24 * 60 * 60);

/// 推薦語輪播的目前位置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestimonialRotation {
    index: usize,
    len: usize,
}

impl TestimonialRotation {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// 清單為空時回傳 None
    pub fn current(&self) -> Option<usize> {
        (!self.is_empty()).then_some(self.index)
    }

    /// 前進一格並回傳新位置；空清單不動作
    pub fn tick(&mut self) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        self.index = (self.index + 1) % self.len;
        Some(self.index)
    }

    /// 使用者直接點選指示點；超出範圍時忽略
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.index = index;
        true
    }
}

pub type SharedRotation = Arc<Mutex<TestimonialRotation>>;

pub(crate) fn lock_rotation(rotation: &SharedRotation) -> MutexGuard<'_, TestimonialRotation> {
    rotation.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// 定時推進輪播的背景工作；drop 時取消
#[derive(Debug)]
pub struct RotationTimer {
    handle: JoinHandle<()>,
    period: Duration,
}

impl RotationTimer {
    /// 第一次推進發生在啟動後一個週期。必須在 tokio runtime 內呼叫。
    pub fn start(rotation: SharedRotation, period: Duration) -> Self {
        let requested = period;
        let period = period.clamp(MIN_ROTATION_INTERVAL, MAX_ROTATION_INTERVAL);
        if period != requested {
            tracing::warn!("🔶 Rotation period {:?} out of range, using {:?}", requested, period);
        }

        let handle = tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                let next = lock_rotation(&rotation).tick();
                match next {
                    Some(index) => tracing::trace!("🔄 Testimonial rotated to {}", index),
                    None => break,
                }
            }
        });

        tracing::debug!("⏱️ Testimonial rotation started ({:?} period)", period);
        Self { handle, period }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }

    pub fn stop(self) {
        drop(self);
    }
}

impl Drop for RotationTimer {
    fn drop(&mut self) {
        self.handle.abort();
        tracing::debug!("⏹️ Testimonial rotation stopped");
    }
}
