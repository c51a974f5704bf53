//! Widget lifecycle and the embedder-facing control surface.
//!
//! DESIGN
//! ======
//! One widget per page load. `boot` runs from the wasm start hook,
//! defers mounting until the document is ready, and stores a
//! process-wide `WidgetHandle` whose signals the components read via
//! context. The embedding page never touches the widget's nodes; it
//! drives the state machine through the exported functions below.
//!
//! Control calls that arrive before the deferred mount completes
//! degrade to logged no-ops (`open`/`close`/`toggle`) or accumulate
//! (`updateConfig` overrides, applied when the widget mounts).

#[cfg(test)]
#[path = "widget_test.rs"]
mod widget_test;

use leptos::prelude::*;

use crate::config::{ConfigOverrides, WidgetConfig};
use crate::state::WidgetState;

/// Marker id of the widget's root container in the host document.
pub const ROOT_ID: &str = "wa-widget-root";

/// Live handle to the widget's reactive configuration and state.
#[derive(Clone, Copy)]
pub struct WidgetHandle {
    pub config: RwSignal<WidgetConfig>,
    pub state: RwSignal<WidgetState>,
}

impl WidgetHandle {
    pub fn new(config: WidgetConfig) -> Self {
        Self {
            config: RwSignal::new(config),
            state: RwSignal::new(WidgetState::default()),
        }
    }

    /// External `Closed -> Open` request.
    pub fn open(&self) {
        self.state.update(|s| {
            s.open();
        });
    }

    /// External `Open -> Closed` request.
    pub fn close(&self) {
        self.state.update(|s| {
            s.close();
        });
    }

    /// External toggle request.
    pub fn toggle(&self) {
        self.state.update(|s| {
            s.toggle();
        });
    }

    /// Re-resolve configuration over the current value.
    ///
    /// The changed fields propagate into the existing nodes reactively;
    /// panel and badge state are untouched.
    pub fn update_config(&self, overrides: ConfigOverrides) {
        self.config.update(|c| {
            *c = std::mem::take(c).merged(overrides);
        });
    }
}

impl Default for WidgetHandle {
    fn default() -> Self {
        Self::new(WidgetConfig::default())
    }
}

#[cfg(feature = "csr")]
mod runtime {
    use std::cell::RefCell;

    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::prelude::wasm_bindgen;

    use super::{ConfigOverrides, ROOT_ID, WidgetConfig, WidgetHandle};
    use crate::components::chat_widget::ChatWidget;
    use crate::error::WidgetError;

    thread_local! {
        static WIDGET: RefCell<Option<WidgetHandle>> = const { RefCell::new(None) };
        static PENDING: RefCell<ConfigOverrides> = RefCell::new(ConfigOverrides::default());
    }

    fn widget() -> Option<WidgetHandle> {
        WIDGET.with(|w| *w.borrow())
    }

    /// Mount now, or defer until `DOMContentLoaded` while the document
    /// is still loading.
    pub fn boot() {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::warn!("no document available; widget not mounted");
            return;
        };

        if document.ready_state() == "loading" {
            let deferred = Closure::once_into_js(mount);
            let _ = document
                .add_event_listener_with_callback("DOMContentLoaded", deferred.unchecked_ref());
        } else {
            mount();
        }
    }

    /// Attach styling and structure to the host document, idempotently.
    ///
    /// The stylesheet and structural guards are independent: restyling
    /// without remounting (or vice versa) stays possible.
    fn mount() {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        crate::styles::inject_once(&document);

        if document.get_element_by_id(ROOT_ID).is_some() {
            log::debug!("widget root already present; mount skipped");
            return;
        }
        let Some(body) = document.body() else {
            return;
        };
        let Ok(container) = document.create_element("div") else {
            return;
        };
        container.set_id(ROOT_ID);
        if body.append_child(&container).is_err() {
            return;
        }
        let Ok(host) = container.dyn_into::<web_sys::HtmlElement>() else {
            return;
        };

        let overrides = PENDING.with(|p| std::mem::take(&mut *p.borrow_mut()));

        leptos::mount::mount_to(host, move || {
            use leptos::prelude::*;

            let handle = WidgetHandle::new(WidgetConfig::resolve(overrides));
            WIDGET.with(|w| *w.borrow_mut() = Some(handle));
            provide_context(handle);
            view! { <ChatWidget/> }
        })
        .forget();

        if let Some(handle) = widget() {
            handle.state.update_untracked(|s| s.is_mounted = true);
        }
        log::info!("whatsapp widget mounted");
    }

    #[wasm_bindgen(js_name = open)]
    pub fn widget_open() {
        match widget() {
            Some(handle) => handle.open(),
            None => log::debug!("open() before mount; ignored"),
        }
    }

    #[wasm_bindgen(js_name = close)]
    pub fn widget_close() {
        match widget() {
            Some(handle) => handle.close(),
            None => log::debug!("close() before mount; ignored"),
        }
    }

    #[wasm_bindgen(js_name = toggle)]
    pub fn widget_toggle() {
        match widget() {
            Some(handle) => handle.toggle(),
            None => log::debug!("toggle() before mount; ignored"),
        }
    }

    /// Apply camelCase JSON overrides, e.g.
    /// `{"contactHandle":"+15551234567","displayName":"Support"}`.
    ///
    /// # Errors
    ///
    /// Returns a `JsError` when the JSON does not parse as overrides.
    #[wasm_bindgen(js_name = updateConfig)]
    pub fn widget_update_config(json: &str) -> Result<(), wasm_bindgen::JsError> {
        let overrides: ConfigOverrides =
            serde_json::from_str(json).map_err(WidgetError::InvalidOverrides)?;

        match widget() {
            Some(handle) => handle.update_config(overrides),
            // Not mounted yet: fold into the pending set applied at mount.
            None => PENDING.with(|p| {
                let mut pending = p.borrow_mut();
                *pending = std::mem::take(&mut *pending).merge(overrides);
            }),
        }
        Ok(())
    }
}

#[cfg(feature = "csr")]
pub use runtime::boot;
