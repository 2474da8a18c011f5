//! Load state of the home view's catalog

use super::product::ProductSummary;
use crate::error::CatalogError;
use tracing::debug;

/// What the home view shows
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CatalogLoadState {
    #[default]
    Loading,
    Failed(CatalogError),
    Ready(Vec<ProductSummary>),
}

impl CatalogLoadState {
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// User-facing reason of a failed load
    #[must_use]
    pub const fn failure_reason(&self) -> Option<&'static str> {
        match self {
            Self::Failed(err) => Some(err.user_message()),
            _ => None,
        }
    }

    #[must_use]
    pub fn items(&self) -> Option<&[ProductSummary]> {
        match self {
            Self::Ready(items) => Some(items),
            _ => None,
        }
    }
}

/// Identifies one outbound request so late results can be told apart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttemptTicket(u64);

/// Catalog state for one mount of the home view.
///
/// `Loading` moves to `Ready` or `Failed` exactly once per attempt. A new
/// attempt only starts from `Failed`, through [`CatalogSession::retry`].
/// Results for stale attempts, or arriving after [`CatalogSession::dispose`],
/// are dropped.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CatalogSession {
    state: CatalogLoadState,
    attempt: u64,
    disposed: bool,
}

impl CatalogSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn state(&self) -> &CatalogLoadState {
        &self.state
    }

    /// Number of requests issued so far
    #[must_use]
    pub const fn attempts(&self) -> u64 {
        self.attempt
    }

    /// Issue the initial request of this mount.
    ///
    /// Only the first call hands out a ticket.
    pub fn begin(&mut self) -> Option<AttemptTicket> {
        if self.disposed || self.attempt > 0 {
            return None;
        }
        Some(self.next_attempt())
    }

    /// Re-enter `Loading` after a failure
    pub fn retry(&mut self) -> Option<AttemptTicket> {
        if self.disposed || !matches!(self.state, CatalogLoadState::Failed(_)) {
            return None;
        }
        self.state = CatalogLoadState::Loading;
        Some(self.next_attempt())
    }

    /// Apply the outcome of an attempt. Returns whether the state changed.
    pub fn settle(
        &mut self,
        ticket: AttemptTicket,
        result: Result<Vec<ProductSummary>, CatalogError>,
    ) -> bool {
        if self.disposed || ticket.0 != self.attempt || !self.state.is_loading() {
            debug!(attempt = ticket.0, "discarding stale catalog result");
            return false;
        }

        self.state = match result {
            Ok(items) => CatalogLoadState::Ready(items),
            Err(err) => CatalogLoadState::Failed(err),
        };
        true
    }

    /// The view is gone; ignore everything from now on
    pub fn dispose(&mut self) {
        self.disposed = true;
    }

    fn next_attempt(&mut self) -> AttemptTicket {
        self.attempt += 1;
        AttemptTicket(self.attempt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::product::fixtures::product_json;

    fn products(count: u64) -> Vec<ProductSummary> {
        (1..=count)
            .map(|id| serde_json::from_value(product_json(id)).unwrap())
            .collect()
    }

    #[test]
    fn starts_loading_and_begins_once() {
        let mut session = CatalogSession::new();
        assert!(session.state().is_loading());

        assert!(session.begin().is_some());
        assert!(session.begin().is_none());
        assert_eq!(session.attempts(), 1);
    }

    #[test]
    fn success_moves_to_ready() {
        let mut session = CatalogSession::new();
        let ticket = session.begin().unwrap();

        assert!(session.settle(ticket, Ok(products(15))));
        assert_eq!(session.state().items().map(<[_]>::len), Some(15));
        assert_eq!(session.state().failure_reason(), None);
    }

    #[test]
    fn ready_is_terminal() {
        let mut session = CatalogSession::new();
        let ticket = session.begin().unwrap();
        session.settle(ticket, Ok(products(1)));

        assert!(session.retry().is_none());
        assert!(!session.settle(ticket, Err(CatalogError::transport("late"))));
        assert!(session.state().items().is_some());
    }

    #[test]
    fn failure_then_retry_passes_through_loading() {
        let mut session = CatalogSession::new();
        let first = session.begin().unwrap();
        session.settle(first, Err(CatalogError::Timeout { timeout_ms: 3000 }));
        assert_eq!(
            session.state().failure_reason(),
            Some(crate::error::CATALOG_TIMEOUT_MESSAGE)
        );

        let second = session.retry().unwrap();
        assert_ne!(first, second);
        assert!(session.state().is_loading());
        assert_eq!(session.attempts(), 2);

        assert!(session.retry().is_none());
        assert!(session.settle(second, Ok(products(2))));
    }

    #[test]
    fn stale_ticket_is_ignored() {
        let mut session = CatalogSession::new();
        let first = session.begin().unwrap();
        session.settle(first, Err(CatalogError::transport("offline")));
        let _second = session.retry().unwrap();

        assert!(!session.settle(first, Ok(products(3))));
        assert!(session.state().is_loading());
    }

    #[test]
    fn disposed_session_ignores_results() {
        let mut session = CatalogSession::new();
        let ticket = session.begin().unwrap();
        session.dispose();

        assert!(!session.settle(ticket, Ok(products(3))));
        assert!(session.state().is_loading());
        assert!(session.retry().is_none());
    }
}
