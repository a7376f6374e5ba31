//! Debounced Jobs
//!
//! Coalesces bursts of events (window drags, resizes) into a single job that
//! runs once the burst has been quiet for a fixed delay.

use std::time::Duration;

use gpui::{App, Context, Task};

/// Holds at most one pending job; scheduling a new one drops the old task.
pub struct Debouncer {
    delay: Duration,
    pending: Option<Task<()>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Run `job` after the delay unless another job is scheduled first
    pub fn schedule<T: 'static>(&mut self, cx: &Context<T>, job: impl FnOnce(&mut App) + 'static) {
        let delay = self.delay;
        self.pending = Some(cx.spawn(async move |_this, cx| {
            cx.background_executor().timer(delay).await;
            cx.update(job).ok();
        }));
    }
}
