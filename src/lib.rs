//! # whatsapp-widget
//!
//! Self-contained embeddable WhatsApp contact widget: a floating action
//! button that expands into a mock chat panel and redirects the typed
//! message to a `wa.me` deep link. No backend, no persistence; the whole
//! crate is one UI component plus its lifecycle.
//!
//! Compiled to WASM with the `csr` feature, the widget mounts itself when
//! the module loads and exposes `open`/`close`/`toggle`/`updateConfig` to
//! the embedding page. Without the feature, the pure logic (configuration
//! merge, state machine, link construction) compiles and tests natively.

pub mod components;
pub mod config;
pub mod error;
pub mod link;
pub mod state;
pub mod styles;
pub mod util;
pub mod widget;

/// Auto-initialization: runs once when the wasm module loads. No explicit
/// bootstrap call is required by the embedder.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    widget::boot();
}
