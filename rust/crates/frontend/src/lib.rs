//! Student Management Console - Yew WASM Frontend
//!
//! This crate provides the web UI: dashboard, student list, registration
//! wizard, student details and the help-desk chat.

mod api;
mod app;
mod components;
mod pages;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn main() {
    yew::Renderer::<App>::new().render();
}
