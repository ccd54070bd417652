pub mod pagination_controls;
pub mod stat_card;
pub mod status_badge;
pub mod table;

pub use pagination_controls::PaginationControls;
pub use stat_card::{StatCard, StatTone};
pub use status_badge::status_badge;
