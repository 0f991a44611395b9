//! Board Configuration
//!
//! Fixed endpoint settings shared via the Leptos Context API.

use leptos::prelude::*;

/// Endpoint serving `{ tickets, users }`
pub const API_ENDPOINT: &str = "https://api.quicksell.co/v1/internal/frontend-assignment";

/// Board-wide configuration provided via context
#[derive(Clone, Copy, Debug)]
pub struct BoardConfig {
    pub endpoint: &'static str,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self { endpoint: API_ENDPOINT }
    }
}

/// Get the board configuration from context
pub fn use_board_config() -> BoardConfig {
    use_context::<BoardConfig>().unwrap_or_default()
}
