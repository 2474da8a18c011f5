//! Timer abstraction for the simulated and bounded waits

use async_trait::async_trait;
use futures::future::{Either, select};
use std::future::Future;
use std::pin::pin;
use std::time::Duration;

/// Something that can suspend the current task for a while.
///
/// The browser build sleeps on a JS timer; tests inject [`ImmediateDelay`] or a
/// tokio clock so nothing waits on real time.
#[async_trait(?Send)]
pub trait Delay {
    async fn sleep(&self, duration: Duration);
}

/// A delay that completes on first poll
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ImmediateDelay;

#[async_trait(?Send)]
impl Delay for ImmediateDelay {
    async fn sleep(&self, _duration: Duration) {}
}

/// Race `future` against `delay`.
///
/// Returns `None` if the delay fires first. When both are ready on the same
/// poll the future wins.
pub async fn with_timeout<F, D>(delay: &D, limit: Duration, future: F) -> Option<F::Output>
where
    F: Future,
    D: Delay + ?Sized,
{
    let work = pin!(future);
    let timer = delay.sleep(limit);
    match select(work, timer).await {
        Either::Left((output, _)) => Some(output),
        Either::Right(((), _)) => None,
    }
}

/// Clamp a duration to the millisecond range accepted by JS timers
#[must_use]
pub fn millis_u32(duration: Duration) -> u32 {
    u32::try_from(duration.as_millis()).unwrap_or(u32::MAX)
}

/// Sleeps on the tokio clock, so paused-time tests advance instantly
#[cfg(test)]
pub(crate) struct TokioDelay;

#[cfg(test)]
#[async_trait(?Send)]
impl Delay for TokioDelay {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
