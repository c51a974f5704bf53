//! Expandable chat panel: header, greeting body, and the input footer
//! that hands the typed message off to WhatsApp.

use leptos::prelude::*;

use crate::link;
use crate::widget::WidgetHandle;

/// Delay before the input receives focus after opening, in milliseconds.
/// Lets the visibility transition begin before focus lands.
#[cfg(feature = "csr")]
const FOCUS_DELAY_MS: u32 = 300;

fn panel_class(open: bool) -> &'static str {
    if open {
        "wa-widget__panel wa-widget__panel--open"
    } else {
        "wa-widget__panel"
    }
}

/// The chat-like surface shown above the trigger while the panel is open.
///
/// `greeting` and `footer_note` are rendered as raw markup on purpose;
/// every other config field is bound as plain text or an attribute.
#[component]
pub fn Panel() -> impl IntoView {
    let handle = expect_context::<WidgetHandle>();
    let config = handle.config;
    let state = handle.state;

    let input_value = RwSignal::new(String::new());
    let input_ref = NodeRef::<leptos::html::Input>::new();

    // Open: schedule the focus timeout (one-shot, not cancelled if the
    // panel closes first). Close: clear whatever was typed.
    Effect::new(move || {
        let open = state.with(|s| s.is_panel_open);
        if open {
            #[cfg(feature = "csr")]
            {
                gloo_timers::callback::Timeout::new(FOCUS_DELAY_MS, move || {
                    if let Some(input) = input_ref.get_untracked() {
                        let _ = input.focus();
                    }
                })
                .forget();
            }
        } else {
            input_value.set(String::new());
        }
    });

    // Fire-and-forget: build the deep link, hand off to a new browsing
    // context, then always clear and close, even for an empty message.
    let do_send = move || {
        let message = input_value.get_untracked();
        let url = link::outbound_link(&config.with_untracked(|c| c.contact_handle.clone()), &message);

        #[cfg(feature = "csr")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.open_with_url_and_target(&url, "_blank");
            }
        }
        #[cfg(not(feature = "csr"))]
        let _ = &url;

        input_value.set(String::new());
        state.update(|s| {
            s.close();
        });
    };

    let on_send = move |ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "csr")]
        {
            use wasm_bindgen::JsCast;
            if let Some(target) = ev
                .current_target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlElement>().ok())
            {
                crate::util::ripple::spawn(&target, &ev);
            }
        }
        #[cfg(not(feature = "csr"))]
        let _ = &ev;

        do_send();
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            do_send();
        }
    };

    let on_close = move |_| {
        state.update(|s| {
            s.close();
        });
    };

    view! {
        <div class=move || panel_class(state.with(|s| s.is_panel_open))>
            <div class="wa-widget__header">
                <img
                    class="wa-widget__avatar"
                    src=move || config.get().avatar_url
                    alt=move || config.get().display_name
                />
                <div class="wa-widget__profile">
                    <div class="wa-widget__name">{move || config.get().display_name}</div>
                    <div class="wa-widget__status">
                        <div class="wa-widget__status-dot"></div>
                        "Online"
                    </div>
                </div>
                <button class="wa-widget__close" on:click=on_close>
                    "\u{d7}"
                </button>
            </div>

            <div class="wa-widget__body">
                <div class="wa-widget__time">{move || config.get().timestamp_label}</div>
                <div class="wa-widget__message" inner_html=move || config.get().greeting></div>
            </div>

            <div class="wa-widget__input-row">
                <input
                    class="wa-widget__input"
                    type="text"
                    placeholder="Enter Your Message..."
                    prop:value=move || input_value.get()
                    on:input=move |ev| input_value.set(event_target_value(&ev))
                    on:keydown=on_keydown
                    node_ref=input_ref
                />
                <button class="wa-widget__send" on:click=on_send>
                    <svg viewBox="0 0 24 24">
                        <path d="M2,21L23,12L2,3V10L17,12L2,14V21Z"/>
                    </svg>
                </button>
            </div>

            <div class="wa-widget__footer-note" inner_html=move || config.get().footer_note></div>
        </div>
    }
}
