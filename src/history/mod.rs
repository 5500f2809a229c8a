//! Snippet history - append-only log in localStorage plus the browser page

pub mod page;
pub mod store;

pub use page::History;
pub use store::{HistoryEntry, HistoryStore};
