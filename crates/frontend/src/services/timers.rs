use async_trait::async_trait;
use gloo::timers::future::TimeoutFuture;
use showcase_core::delay::{Delay, millis_u32};
use std::time::Duration;

/// [`Delay`] backed by `setTimeout`
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooDelay;

#[async_trait(?Send)]
impl Delay for GlooDelay {
    async fn sleep(&self, duration: Duration) {
        TimeoutFuture::new(millis_u32(duration)).await;
    }
}
