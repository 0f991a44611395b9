//! Board API
//!
//! Loads the ticket/user snapshot from the remote endpoint with the
//! browser `fetch` API.

use board_engine::BoardData;
use js_sys::Promise;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// Errors from loading board data
#[derive(Debug, Clone)]
pub enum FetchError {
    /// Request could not be built or sent
    Network(String),
    /// Endpoint answered with a non-2xx status
    Status(u16),
    /// Body was not a valid board document
    Decode(String),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::Network(msg) => write!(f, "Network error: {}", msg),
            FetchError::Status(code) => write!(f, "Unexpected status: {}", code),
            FetchError::Decode(msg) => write!(f, "Decode error: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {}

fn network(e: JsValue) -> FetchError {
    FetchError::Network(format!("{:?}", e))
}

/// GET the board document from `endpoint`
pub async fn fetch_board_data(endpoint: &str) -> Result<BoardData, FetchError> {
    web_sys::console::log_1(&format!("[Api] GET {}", endpoint).into());

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(endpoint, &opts).map_err(network)?;
    request.headers().set("Accept", "application/json").map_err(network)?;

    let window = web_sys::window().ok_or_else(|| FetchError::Network("no window".to_string()))?;
    let pending: Promise = window.fetch_with_request(&request);
    let resp_value = JsFuture::from(pending).await.map_err(network)?;
    let resp: Response = resp_value.dyn_into().map_err(network)?;

    if !resp.ok() {
        web_sys::console::error_1(&format!("[Api] {} answered {}", endpoint, resp.status()).into());
        return Err(FetchError::Status(resp.status()));
    }

    let body = JsFuture::from(resp.json().map_err(network)?)
        .await
        .map_err(|e| FetchError::Decode(format!("{:?}", e)))?;
    serde_wasm_bindgen::from_value(body).map_err(|e| FetchError::Decode(e.to_string()))
}
