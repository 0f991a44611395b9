//! Board State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use board_engine::{BoardData, GroupBy, SortBy, Ticket, User};

/// Board state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct BoardState {
    /// Tickets from the last successful load
    pub tickets: Vec<Ticket>,
    /// Users from the last successful load
    pub users: Vec<User>,
    /// Column grouping option
    pub group_by: GroupBy,
    /// In-column ordering option
    pub sort_by: SortBy,
    /// Set once the initial load has finished, successfully or not
    pub settled: bool,
}

/// Type alias for the store
pub type BoardStore = Store<BoardState>;

/// Get the board store from context
pub fn use_board_store() -> BoardStore {
    expect_context::<BoardStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace tickets and users with a freshly loaded snapshot
pub fn store_apply_board_data(store: &BoardStore, data: BoardData) {
    store.tickets().set(data.tickets);
    store.users().set(data.users);
    store.settled().set(true);
}

/// Mark the initial load as finished without data; the board stays empty
pub fn store_mark_load_failed(store: &BoardStore) {
    store.settled().set(true);
}

/// Change the grouping option from a raw `<select>` value
pub fn store_set_group_by(store: &BoardStore, value: &str) {
    store.group_by().set(GroupBy::from_str(value));
}

/// Change the ordering option from a raw `<select>` value
pub fn store_set_sort_by(store: &BoardStore, value: &str) {
    store.sort_by().set(SortBy::from_str(value));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_store() -> (Owner, BoardStore) {
        let owner = Owner::new();
        owner.set();
        (owner, Store::new(BoardState::default()))
    }

    fn make_data() -> BoardData {
        BoardData {
            tickets: vec![Ticket {
                id: "CAM-1".to_string(),
                title: "Fix login".to_string(),
                status: "Todo".to_string(),
                priority: 3,
                user_id: Some("usr-1".to_string()),
            }],
            users: vec![User { id: "usr-1".to_string(), name: "Ada".to_string(), available: true }],
        }
    }

    #[test]
    fn test_apply_board_data() {
        let (_owner, store) = make_store();
        assert!(!store.settled().get_untracked());

        store_apply_board_data(&store, make_data());

        assert_eq!(store.tickets().get_untracked().len(), 1);
        assert_eq!(store.users().get_untracked()[0].name, "Ada");
        assert!(store.settled().get_untracked());
    }

    #[test]
    fn test_failed_load_settles_empty() {
        let (_owner, store) = make_store();

        store_mark_load_failed(&store);

        assert!(store.settled().get_untracked());
        assert!(store.tickets().get_untracked().is_empty());
        assert!(store.users().get_untracked().is_empty());
    }

    #[test]
    fn test_set_options_from_select_values() {
        let (_owner, store) = make_store();

        store_set_group_by(&store, "user");
        store_set_sort_by(&store, "title");
        assert_eq!(store.group_by().get_untracked(), GroupBy::User);
        assert_eq!(store.sort_by().get_untracked(), SortBy::Title);

        store_set_group_by(&store, "");
        assert_eq!(store.group_by().get_untracked(), GroupBy::Priority);
    }
}
