//! Board Component
//!
//! Re-arranges the loaded tickets whenever data or options change and
//! renders one column per group.

use leptos::prelude::*;
use board_engine::arrange;

use crate::components::BoardColumn;
use crate::store::{use_board_store, BoardStateStoreFields};

#[component]
pub fn Board() -> impl IntoView {
    let store = use_board_store();

    let groups = Memo::new(move |_| {
        let group_by = store.group_by().get();
        let sort_by = store.sort_by().get();
        let tickets = store.tickets().read();
        let users = store.users().read();
        arrange(&tickets, &users, group_by, sort_by)
    });

    view! {
        <div class="board">
            {move || {
                let groups = groups.get();
                if groups.is_empty() {
                    let text = empty_board_text(store.settled().get());
                    view! { <p class="board-empty">{text}</p> }.into_any()
                } else {
                    groups
                        .into_iter()
                        .map(|group| view! { <BoardColumn group=group /> })
                        .collect_view()
                        .into_any()
                }
            }}
        </div>
    }
}

/// Placeholder shown while the board has no columns
fn empty_board_text(settled: bool) -> &'static str {
    if settled { "No tickets" } else { "Loading tickets..." }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_text() {
        assert_eq!(empty_board_text(false), "Loading tickets...");
        // A failed load settles to the same neutral text as an empty board
        assert_eq!(empty_board_text(true), "No tickets");
    }
}
