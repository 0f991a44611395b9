//! Ticket Board App
//!
//! Root component: provides board state and loads data once on mount.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::{Board, BoardControls};
use crate::config::use_board_config;
use crate::store::{store_apply_board_data, store_mark_load_failed, BoardState};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(BoardState::default());
    // Host pages may provide their own BoardConfig
    let config = use_board_config();

    // Provide context to all children
    provide_context(store);

    // Load board data on mount; a failed load leaves the board empty
    Effect::new(move |_| {
        web_sys::console::log_1(&format!("[Board] Loading from {}", config.endpoint).into());
        spawn_local(async move {
            match api::fetch_board_data(config.endpoint).await {
                Ok(data) => {
                    web_sys::console::log_1(
                        &format!("[Board] Loaded {} tickets, {} users", data.tickets.len(), data.users.len()).into(),
                    );
                    store_apply_board_data(&store, data);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[Board] Error fetching data: {}", e).into());
                    store_mark_load_failed(&store);
                }
            }
        });
    });

    view! {
        <div class="container">
            <BoardControls />
            <Board />
        </div>
    }
}
