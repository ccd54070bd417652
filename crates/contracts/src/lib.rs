//! Shared types between the admin frontend and the storefront API.
//!
//! Everything here is platform-independent: record DTOs, API envelopes and
//! the list-view core (filtering, sorting, pagination, selection) that every
//! list page of the dashboard is built on.

pub mod domain;
pub mod shared;
pub mod system;
