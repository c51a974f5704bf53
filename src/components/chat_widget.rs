//! Root widget component: floating trigger, unread badge, outside-click
//! close, and the badge auto-dismissal timers.

use leptos::prelude::*;

use crate::components::panel::Panel;
use crate::state::BadgeState;
use crate::widget::WidgetHandle;

/// Fixed placeholder count on the unread badge; purely cosmetic.
const BADGE_COUNT: &str = "1";

/// Delay before the unread badge starts fading, in milliseconds.
#[cfg(feature = "csr")]
const BADGE_DISMISS_MS: u32 = 10_000;

/// Opacity transition time before the faded badge leaves the layout.
/// Matches the badge transition duration in the stylesheet.
#[cfg(feature = "csr")]
const BADGE_FADE_MS: u32 = 300;

fn badge_class(badge: BadgeState) -> &'static str {
    match badge {
        BadgeState::Visible => "wa-widget__badge",
        BadgeState::Fading => "wa-widget__badge wa-widget__badge--fading",
        BadgeState::Hidden => "wa-widget__badge wa-widget__badge--hidden",
    }
}

/// Always-visible floating trigger plus the expandable panel.
///
/// Owns the two widget-wide concerns that outlive any single transition:
/// the global outside-click listener and the one-shot badge dismissal.
#[component]
pub fn ChatWidget() -> impl IntoView {
    let handle = expect_context::<WidgetHandle>();
    let state = handle.state;

    let root_ref = NodeRef::<leptos::html::Div>::new();

    // Badge auto-dismissal. One-shot and never cancelled; the guards in
    // the transition methods make a late fire a no-op.
    #[cfg(feature = "csr")]
    {
        gloo_timers::callback::Timeout::new(BADGE_DISMISS_MS, move || {
            let fade_started = state
                .try_update(|s| s.begin_badge_fade())
                .unwrap_or(false);
            if fade_started {
                gloo_timers::callback::Timeout::new(BADGE_FADE_MS, move || {
                    let _ = state.try_update(|s| s.finish_badge_fade());
                })
                .forget();
            }
        })
        .forget();
    }

    // Any activation outside the root region closes an open panel. The
    // listener is global but filters by containment, which is safe with
    // exactly one mounted widget per document.
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let listener = Closure::<dyn Fn(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
            if !state.try_with(|s| s.is_panel_open).unwrap_or(false) {
                return;
            }
            let Some(root) = root_ref.get_untracked() else {
                return;
            };
            let inside = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Node>().ok())
                .is_some_and(|n| root.contains(Some(&n)));
            if !inside {
                let _ = state.try_update(|s| s.close());
            }
        });
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            let _ = document
                .add_event_listener_with_callback("click", listener.as_ref().unchecked_ref());
        }
        listener.forget();
    }

    let on_trigger = move |ev: leptos::ev::MouseEvent| {
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

        state.update(|s| {
            s.toggle();
        });
    };

    view! {
        <div class="wa-widget" node_ref=root_ref>
            <div class="wa-widget__trigger" on:click=on_trigger>
                <svg viewBox="0 0 24 24">
                    <path d="M17.472 14.382c-.297-.149-1.758-.867-2.03-.967-.273-.099-.471-.148-.67.15-.197.297-.767.966-.94 1.164-.173.199-.347.223-.644.075-.297-.15-1.255-.463-2.39-1.475-.883-.788-1.48-1.761-1.653-2.059-.173-.297-.018-.458.13-.606.134-.133.298-.347.446-.52.149-.174.198-.298.298-.497.099-.198.05-.371-.025-.52-.075-.149-.669-1.612-.916-2.207-.242-.579-.487-.5-.669-.51-.173-.008-.371-.01-.57-.01-.198 0-.52.074-.792.372-.272.297-1.04 1.016-1.04 2.479 0 1.462 1.065 2.875 1.213 3.074.149.198 2.096 3.2 5.077 4.487.709.306 1.262.489 1.694.625.712.227 1.36.195 1.871.118.571-.085 1.758-.719 2.006-1.413.248-.694.248-1.289.173-1.413-.074-.124-.272-.198-.57-.347m-5.421 7.403h-.004a9.87 9.87 0 01-5.031-1.378l-.361-.214-3.741.982.998-3.648-.235-.374a9.86 9.86 0 01-1.51-5.26c.001-5.45 4.436-9.884 9.888-9.884 2.64 0 5.122 1.03 6.988 2.898a9.825 9.825 0 012.893 6.994c-.003 5.45-4.437 9.884-9.885 9.884m8.413-18.297A11.815 11.815 0 0012.05 0C5.495 0 .16 5.335.157 11.892c0 2.096.547 4.142 1.588 5.945L.057 24l6.305-1.654a11.882 11.882 0 005.683 1.448h.005c6.554 0 11.89-5.335 11.893-11.893A11.821 11.821 0 0020.885 3.488"/>
                </svg>
                <div class=move || badge_class(state.with(|s| s.badge))>{BADGE_COUNT}</div>
            </div>
            <Panel/>
        </div>
    }
}
