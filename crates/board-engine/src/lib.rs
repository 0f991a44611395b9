//! Board Engine
//!
//! Ticket data model plus the pure grouping/sorting used by the board UI.
//! Has no browser dependencies, so everything here runs under `cargo test`.

mod arrange;
mod models;
mod options;

pub use arrange::{arrange, arrange_raw, compare_titles, Group, UNASSIGNED};
pub use models::{find_user_name, BoardData, Ticket, User};
pub use options::{GroupBy, SortBy};
