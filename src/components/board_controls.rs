//! Board Controls Component
//!
//! Group-by and sort-by pickers above the board.

use leptos::prelude::*;
use board_engine::{GroupBy, SortBy};

use crate::components::OptionSelect;
use crate::store::{store_set_group_by, store_set_sort_by, use_board_store, BoardStateStoreFields};

#[component]
pub fn BoardControls() -> impl IntoView {
    let store = use_board_store();

    let group_options = GroupBy::ALL.iter().map(|g| (g.as_str(), g.label())).collect::<Vec<_>>();
    let sort_options = SortBy::ALL.iter().map(|s| (s.as_str(), s.label())).collect::<Vec<_>>();

    view! {
        <div class="dropdown-container">
            <OptionSelect
                id="grouping"
                label="Group By:"
                options=group_options
                value=Signal::derive(move || store.group_by().get().as_str())
                on_change=move |value: String| store_set_group_by(&store, &value)
            />
            <OptionSelect
                id="sorting"
                label="Sort By:"
                options=sort_options
                value=Signal::derive(move || store.sort_by().get().as_str())
                on_change=move |value: String| store_set_sort_by(&store, &value)
            />
        </div>
    }
}
