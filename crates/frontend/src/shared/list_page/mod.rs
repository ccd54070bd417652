//! Loading and mutating a list through its [`ListApi`].
//!
//! The functions here only touch the [`ListStore`] through a [`ListHandle`],
//! so the same code drives the reactive page and the unit tests.

pub mod bulk_action;
pub mod columns;
pub mod view;

use std::cell::RefCell;

use contracts::shared::api::MutationResponse;
use contracts::shared::list_view::{ListRecord, ListStore};
use leptos::prelude::*;

use crate::shared::api_client::{ApiError, ListApi};

pub use bulk_action::{BulkActionDispatcher, BulkError, BulkOutcome, BulkPhase};
pub use columns::{BulkActionDef, ColumnDef, RowActionDef, RowActionKind, StatDef};
pub use view::ListPage;

/// Shared access to a list store.
///
/// Both methods return `None` once the store is gone (the page was closed
/// while a request was in flight).
pub trait ListHandle<T> {
    fn read<R>(&self, f: impl FnOnce(&ListStore<T>) -> R) -> Option<R>;

    fn write<R>(&self, f: impl FnOnce(&mut ListStore<T>) -> R) -> Option<R>;
}

impl<T> ListHandle<T> for RefCell<ListStore<T>> {
    fn read<R>(&self, f: impl FnOnce(&ListStore<T>) -> R) -> Option<R> {
        Some(f(&self.borrow()))
    }

    fn write<R>(&self, f: impl FnOnce(&mut ListStore<T>) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

impl<T: Send + Sync + 'static> ListHandle<T> for RwSignal<ListStore<T>> {
    fn read<R>(&self, f: impl FnOnce(&ListStore<T>) -> R) -> Option<R> {
        self.try_with_untracked(f)
    }

    fn write<R>(&self, f: impl FnOnce(&mut ListStore<T>) -> R) -> Option<R> {
        self.try_update(f)
    }
}

/// Fetch the collection and install it if no newer fetch started meanwhile.
///
/// Returns whether the response was applied. On failure the previous
/// collection stays in place; errors of superseded fetches are swallowed.
pub async fn load_list<T, A, H>(api: &A, store: &H) -> Result<bool, ApiError>
where
    T: ListRecord + Clone,
    A: ListApi<T> + ?Sized,
    H: ListHandle<T> + ?Sized,
{
    let ticket = match store.write(|s| s.begin_fetch()) {
        Some(ticket) => ticket,
        None => return Ok(false),
    };

    match api.fetch_list().await {
        Ok(envelope) => {
            let count = envelope.records.len();
            let applied = store
                .write(|s| s.apply_fetch(ticket, envelope.records, envelope.stats))
                .unwrap_or(false);
            if applied {
                log::debug!("loaded {} records", count);
            }
            Ok(applied)
        }
        Err(e) => {
            if store.read(|s| s.is_current(ticket)).unwrap_or(false) {
                log::warn!("failed to load list: {}", e);
                Err(e)
            } else {
                log::debug!("ignoring failure of superseded fetch: {}", e);
                Ok(false)
            }
        }
    }
}

/// Delete one record; on success it leaves the collection and the selection
pub async fn delete_record<T, A, H>(api: &A, store: &H, id: &str) -> Result<MutationResponse, ApiError>
where
    T: ListRecord + Clone,
    A: ListApi<T> + ?Sized,
    H: ListHandle<T> + ?Sized,
{
    let response = api.delete(id).await.map_err(|e| {
        log::warn!("failed to delete {}: {}", id, e);
        e
    })?;
    store.write(|s| s.remove_record(id));
    log::info!("deleted {}", id);
    Ok(response)
}

/// Run a record-scoped action such as `retry-tracking`
pub async fn run_record_action<T, A>(api: &A, id: &str, action: &str) -> Result<MutationResponse, ApiError>
where
    A: ListApi<T> + ?Sized,
{
    let response = api.record_action(id, action).await.map_err(|e| {
        log::warn!("{} on {} failed: {}", action, id, e);
        e
    })?;
    log::info!("{} on {} done", action, id);
    Ok(response)
}

#[cfg(test)]
pub(crate) mod testing {
    //! In-memory `ListApi` shared by the list tests.

    use std::cell::{Cell, RefCell};

    use async_trait::async_trait;
    use contracts::shared::api::{BulkAction, BulkResult, ListEnvelope, MutationResponse};
    use contracts::shared::list_view::{ListConfig, ListRecord, ListStore};

    use crate::shared::api_client::{ApiError, ListApi};

    #[derive(Debug, Clone, PartialEq)]
    pub struct Row {
        pub id: String,
        pub name: String,
        pub status: String,
    }

    impl ListRecord for Row {
        fn record_id(&self) -> &str {
            &self.id
        }

        fn field_value(&self, field: &str) -> Option<String> {
            match field {
                "name" => Some(self.name.clone()),
                "status" => Some(self.status.clone()),
                _ => None,
            }
        }
    }

    pub fn rows(n: usize) -> Vec<Row> {
        (1..=n)
            .map(|i| Row {
                id: format!("r{}", i),
                name: format!("Row {}", i),
                status: "pending".into(),
            })
            .collect()
    }

    pub fn store(records: Vec<Row>) -> RefCell<ListStore<Row>> {
        let config = ListConfig::new("status")
            .tab("Pending", "pending")
            .tab("Shipped", "shipped")
            .searchable(&["name"]);
        let mut store = ListStore::new(config);
        store.replace_records(records);
        RefCell::new(store)
    }

    /// Server double that applies bulk actions to its own copy of the rows
    #[derive(Default)]
    pub struct MemoryApi {
        pub rows: RefCell<Vec<Row>>,
        pub fail_with: RefCell<Option<ApiError>>,
        pub fetches: Cell<usize>,
        pub bulk_calls: RefCell<Vec<(String, Vec<String>)>>,
    }

    impl MemoryApi {
        pub fn new(rows: Vec<Row>) -> Self {
            Self {
                rows: RefCell::new(rows),
                ..Default::default()
            }
        }

        fn check(&self) -> Result<(), ApiError> {
            match self.fail_with.borrow().clone() {
                Some(e) => Err(e),
                None => Ok(()),
            }
        }
    }

    #[async_trait(?Send)]
    impl ListApi<Row> for MemoryApi {
        async fn fetch_list(&self) -> Result<ListEnvelope<Row>, ApiError> {
            let call = self.fetches.get() + 1;
            self.fetches.set(call);
            tokio::task::yield_now().await;
            self.check()?;
            let mut records = self.rows.borrow().clone();
            // every response is tagged so tests can tell them apart
            for r in &mut records {
                r.name = format!("{} #{}", r.name.split(" #").next().unwrap_or_default(), call);
            }
            Ok(ListEnvelope { records, stats: None })
        }

        async fn delete(&self, id: &str) -> Result<MutationResponse, ApiError> {
            self.check()?;
            self.rows.borrow_mut().retain(|r| r.id != id);
            Ok(MutationResponse {
                success: true,
                message: Some("Deleted".into()),
                extra: Default::default(),
            })
        }

        async fn bulk(&self, action: &BulkAction, ids: Vec<String>) -> Result<BulkResult, ApiError> {
            tokio::task::yield_now().await;
            self.bulk_calls
                .borrow_mut()
                .push((action.path_segment().to_string(), ids.clone()));
            self.check()?;
            let mut rows = self.rows.borrow_mut();
            match action {
                BulkAction::Delete => rows.retain(|r| !ids.contains(&r.id)),
                BulkAction::UpdateStatus { status } => rows
                    .iter_mut()
                    .filter(|r| ids.contains(&r.id))
                    .for_each(|r| r.status = status.clone()),
                BulkAction::UpdateCommission { .. } => {}
            }
            Ok(BulkResult {
                success: true,
                message: Some(format!("{} updated", ids.len())),
                affected: Some(ids.len() as u64),
            })
        }

        async fn record_action(&self, id: &str, action: &str) -> Result<MutationResponse, ApiError> {
            self.check()?;
            Ok(MutationResponse {
                success: true,
                message: Some(format!("{} {}", action, id)),
                extra: Default::default(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{rows, store, MemoryApi, Row};
    use super::*;

    #[tokio::test]
    async fn test_load_list_installs_records() {
        let api = MemoryApi::new(rows(3));
        let store = store(Vec::new());

        assert_eq!(load_list(&api, &store).await, Ok(true));
        assert_eq!(store.borrow().records().len(), 3);
        assert_eq!(store.borrow().records()[0].name, "Row 1 #1");
    }

    #[tokio::test]
    async fn test_load_list_discards_stale_response() {
        let api = MemoryApi::new(rows(2));
        let store = store(Vec::new());

        let (first, second) = tokio::join!(load_list(&api, &store), load_list(&api, &store));

        assert_eq!(first, Ok(false));
        assert_eq!(second, Ok(true));
        assert_eq!(store.borrow().records()[0].name, "Row 1 #2");
    }

    #[tokio::test]
    async fn test_load_list_failure_keeps_previous_collection() {
        let api = MemoryApi::new(rows(2));
        let store = store(rows(5));
        *api.fail_with.borrow_mut() = Some(ApiError::Network("offline".into()));

        let result = load_list(&api, &store).await;

        assert_eq!(result, Err(ApiError::Network("offline".into())));
        assert_eq!(store.borrow().records().len(), 5);
    }

    #[tokio::test]
    async fn test_delete_record_evicts_selection() {
        let api = MemoryApi::new(rows(3));
        let store = store(rows(3));
        store.borrow_mut().toggle_selection("r1");
        store.borrow_mut().toggle_selection("r2");

        delete_record(&api, &store, "r1").await.unwrap();

        let s = store.borrow();
        assert_eq!(s.records().len(), 2);
        assert_eq!(s.selection().count(), 1);
        assert!(!s.selection().is_selected("r1"));
    }

    #[tokio::test]
    async fn test_delete_record_failure_leaves_state() {
        let api = MemoryApi::new(rows(3));
        let store = store(rows(3));
        store.borrow_mut().toggle_selection("r1");
        *api.fail_with.borrow_mut() = Some(ApiError::Rejected("Product in use".into()));

        let result = delete_record(&api, &store, "r1").await;

        assert_eq!(result.unwrap_err(), ApiError::Rejected("Product in use".into()));
        assert_eq!(store.borrow().records().len(), 3);
        assert!(store.borrow().selection().is_selected("r1"));
    }

    #[tokio::test]
    async fn test_run_record_action() {
        let api = MemoryApi::new(rows(1));
        let response = run_record_action::<Row, _>(&api, "r1", "retry-tracking").await.unwrap();
        assert_eq!(response.message.as_deref(), Some("retry-tracking r1"));
    }
}
