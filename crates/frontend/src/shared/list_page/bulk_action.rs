//! Bulk actions over the current selection.
//!
//! A dispatcher is either `Idle` or `Submitting`. Only one action runs at a
//! time; on success the selection is cleared and the list is fetched again,
//! on failure the selection is kept so the user can retry.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use contracts::shared::api::{BulkAction, BulkResult};
use contracts::shared::list_view::ListRecord;
use thiserror::Error;

use super::{load_list, ListHandle};
use crate::shared::api_client::{ApiError, ListApi};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum BulkError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("no records selected")]
    EmptySelection,

    #[error("another bulk action is still running")]
    AlreadySubmitting,

    #[error("{0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BulkPhase {
    #[default]
    Idle,
    Submitting,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BulkOutcome {
    pub result: BulkResult,
    /// Number of ids sent to the server
    pub submitted: usize,
    /// Outcome of the refetch that followed the action
    pub refreshed: Result<bool, ApiError>,
}

impl BulkOutcome {
    /// Text for the success toast
    pub fn summary(&self) -> String {
        match (&self.result.message, self.result.affected) {
            (Some(message), _) if !message.is_empty() => message.clone(),
            (_, Some(affected)) => format!("{} records updated", affected),
            _ => format!("{} records updated", self.submitted),
        }
    }
}

/// Reject parameters the server would refuse anyway
pub fn validate(action: &BulkAction) -> Result<(), BulkError> {
    match action {
        BulkAction::Delete => Ok(()),
        BulkAction::UpdateStatus { status } if status.trim().is_empty() => {
            Err(BulkError::Invalid("choose a status first".into()))
        }
        BulkAction::UpdateStatus { .. } => Ok(()),
        BulkAction::UpdateCommission { commission_rate }
            if !commission_rate.is_finite() || !(0.0..=100.0).contains(commission_rate) =>
        {
            Err(BulkError::Invalid(
                "commission rate must be between 0 and 100".into(),
            ))
        }
        BulkAction::UpdateCommission { .. } => Ok(()),
    }
}

#[derive(Clone, Default)]
pub struct BulkActionDispatcher {
    submitting: Arc<AtomicBool>,
}

/// Puts the dispatcher back to `Idle` however the submission ends
struct SubmittingGuard<'a>(&'a AtomicBool);

impl Drop for SubmittingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl BulkActionDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> BulkPhase {
        if self.submitting.load(Ordering::Acquire) {
            BulkPhase::Submitting
        } else {
            BulkPhase::Idle
        }
    }

    /// Send `action` for every selected id
    pub async fn dispatch<T, A, H>(
        &self,
        api: &A,
        store: &H,
        action: BulkAction,
    ) -> Result<BulkOutcome, BulkError>
    where
        T: ListRecord + Clone,
        A: ListApi<T> + ?Sized,
        H: ListHandle<T> + ?Sized,
    {
        if self
            .submitting
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            log::debug!("bulk {} ignored, a submission is running", action.path_segment());
            return Err(BulkError::AlreadySubmitting);
        }
        let _guard = SubmittingGuard(&self.submitting);

        validate(&action)?;

        let ids = store
            .read(|s| s.selection().selected_ids())
            .unwrap_or_default();
        if ids.is_empty() {
            return Err(BulkError::EmptySelection);
        }
        let submitted = ids.len();

        let result = api.bulk(&action, ids).await.map_err(|e| {
            log::warn!("bulk {} failed: {}", action.path_segment(), e);
            e
        })?;
        log::info!(
            "bulk {} applied to {} records",
            action.path_segment(),
            submitted
        );

        store.write(|s| s.clear_selection());
        let refreshed = load_list(api, store).await;

        Ok(BulkOutcome {
            result,
            submitted,
            refreshed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_page::testing::{rows, store, MemoryApi};

    fn shipped() -> BulkAction {
        BulkAction::UpdateStatus {
            status: "shipped".into(),
        }
    }

    #[tokio::test]
    async fn test_success_clears_selection_and_refetches() {
        let api = MemoryApi::new(rows(4));
        let store = store(rows(4));
        store.borrow_mut().toggle_selection("r1");
        store.borrow_mut().toggle_selection("r3");
        let dispatcher = BulkActionDispatcher::new();

        let outcome = dispatcher.dispatch(&api, &store, shipped()).await.unwrap();

        assert_eq!(outcome.submitted, 2);
        assert_eq!(outcome.refreshed, Ok(true));
        assert_eq!(outcome.summary(), "2 updated");
        assert_eq!(api.fetches.get(), 1);
        assert_eq!(
            api.bulk_calls.borrow()[0],
            ("update-status".to_string(), vec!["r1".to_string(), "r3".to_string()])
        );

        let s = store.borrow();
        assert_eq!(s.selection().count(), 0);
        assert_eq!(s.records()[0].status, "shipped");
        assert_eq!(s.records()[1].status, "pending");
        assert_eq!(dispatcher.phase(), BulkPhase::Idle);
    }

    #[tokio::test]
    async fn test_bulk_delete_removes_rows_after_refetch() {
        let api = MemoryApi::new(rows(3));
        let store = store(rows(3));
        store.borrow_mut().toggle_selection("r2");

        BulkActionDispatcher::new()
            .dispatch(&api, &store, BulkAction::Delete)
            .await
            .unwrap();

        let ids: Vec<_> = store.borrow().records().iter().map(|r| r.id.clone()).collect();
        assert_eq!(ids, vec!["r1", "r3"]);
    }

    #[tokio::test]
    async fn test_failure_keeps_selection() {
        let api = MemoryApi::new(rows(3));
        let store = store(rows(3));
        store.borrow_mut().toggle_selection("r1");
        *api.fail_with.borrow_mut() = Some(ApiError::Http {
            status: 500,
            message: "boom".into(),
        });
        let dispatcher = BulkActionDispatcher::new();

        let err = dispatcher.dispatch(&api, &store, shipped()).await.unwrap_err();

        assert!(matches!(err, BulkError::Api(ApiError::Http { status: 500, .. })));
        assert!(store.borrow().selection().is_selected("r1"));
        assert_eq!(api.fetches.get(), 0);
        assert_eq!(dispatcher.phase(), BulkPhase::Idle);

        // retry once the server recovers
        *api.fail_with.borrow_mut() = None;
        assert!(dispatcher.dispatch(&api, &store, shipped()).await.is_ok());
    }

    #[tokio::test]
    async fn test_empty_selection_sends_nothing() {
        let api = MemoryApi::new(rows(3));
        let store = store(rows(3));

        let err = BulkActionDispatcher::new()
            .dispatch(&api, &store, BulkAction::Delete)
            .await
            .unwrap_err();

        assert_eq!(err, BulkError::EmptySelection);
        assert!(api.bulk_calls.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_parameters_send_nothing() {
        let api = MemoryApi::new(rows(3));
        let store = store(rows(3));
        store.borrow_mut().toggle_selection("r1");
        let dispatcher = BulkActionDispatcher::new();

        for action in [
            BulkAction::UpdateCommission { commission_rate: 120.0 },
            BulkAction::UpdateCommission { commission_rate: f64::NAN },
            BulkAction::UpdateStatus { status: " ".into() },
        ] {
            let err = dispatcher.dispatch(&api, &store, action).await.unwrap_err();
            assert!(matches!(err, BulkError::Invalid(_)));
        }
        assert!(api.bulk_calls.borrow().is_empty());
        assert!(store.borrow().selection().is_selected("r1"));
    }

    #[tokio::test]
    async fn test_second_dispatch_while_submitting_is_rejected() {
        let api = MemoryApi::new(rows(3));
        let store = store(rows(3));
        store.borrow_mut().toggle_selection("r1");
        let dispatcher = BulkActionDispatcher::new();

        let (first, second) = tokio::join!(
            dispatcher.dispatch(&api, &store, shipped()),
            dispatcher.dispatch(&api, &store, BulkAction::Delete),
        );

        assert!(first.is_ok());
        assert_eq!(second.unwrap_err(), BulkError::AlreadySubmitting);
        assert_eq!(api.bulk_calls.borrow().len(), 1);
        assert_eq!(dispatcher.phase(), BulkPhase::Idle);
    }

    #[test]
    fn test_summary_falls_back_to_counts() {
        let outcome = BulkOutcome {
            result: BulkResult {
                success: true,
                message: None,
                affected: Some(7),
            },
            submitted: 9,
            refreshed: Ok(true),
        };
        assert_eq!(outcome.summary(), "7 records updated");
    }
}
