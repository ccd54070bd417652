//! List-view core shared by every list page of the dashboard.
//!
//! A page fetches a collection once, then derives what the user sees from
//! local state only:
//!
//! ```text
//! records ──filter(tab, search)──► filtered ──sort──► view ──paginate──► page
//!                                                       │
//!                                   selection ◄─────────┘ (select-all scope)
//! ```
//!
//! [`ListStore`] owns all of it and re-establishes the invariants after every
//! mutation: the view is a subset of the records, the page index is clamped,
//! selection never references a record that is gone.

pub mod config;
pub mod filter;
pub mod pagination;
pub mod record;
pub mod selection;
pub mod sort;
pub mod store;

pub use config::{ListConfig, Tab};
pub use filter::{filter_records, FilterState, ALL_TAB};
pub use pagination::{PaginationCursor, DEFAULT_PAGE_SIZE};
pub use record::ListRecord;
pub use selection::{Coverage, SelectAllScope, SelectionTracker};
pub use sort::{sort_records, SortState};
pub use store::{FetchTicket, ListStore};
