//! Board Column Component
//!
//! One group of tickets: header with count, then the cards in order.

use leptos::prelude::*;
use board_engine::{find_user_name, Group, UNASSIGNED};

use crate::components::TicketCard;
use crate::store::{use_board_store, BoardStateStoreFields};

#[component]
pub fn BoardColumn(group: Group) -> impl IntoView {
    let store = use_board_store();
    let count = group.len();
    let users = store.users().get_untracked();

    let cards = group
        .tickets
        .into_iter()
        .map(|ticket| {
            let assignee = find_user_name(&users, ticket.user_id.as_deref())
                .unwrap_or(UNASSIGNED)
                .to_string();
            view! { <TicketCard ticket=ticket assignee=assignee /> }
        })
        .collect_view();

    view! {
        <div class="column">
            <div class="column-header">
                <h3>{group.name}</h3>
                <span class="column-count">{count}</span>
            </div>
            <ul>{cards}</ul>
        </div>
    }
}
