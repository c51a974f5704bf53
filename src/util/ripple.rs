//! Transient click ripple on the circular controls.
//!
//! Purely cosmetic: a scaled span animated by the injected stylesheet's
//! `wa-widget-ripple` keyframes and removed once the animation has run.

/// How long the ripple span stays in the document, in milliseconds.
/// Matches the animation duration in the stylesheet.
const LIFETIME_MS: u32 = 600;

/// Attach a one-shot ripple to `target`, centered on the click position.
pub fn spawn(target: &web_sys::HtmlElement, ev: &web_sys::MouseEvent) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Ok(ripple) = document.create_element("span") else {
        return;
    };

    let rect = target.get_bounding_client_rect();
    let size = rect.width().max(rect.height());
    let x = f64::from(ev.client_x()) - rect.left() - size / 2.0;
    let y = f64::from(ev.client_y()) - rect.top() - size / 2.0;

    let style = format!(
        "position:absolute;width:{size}px;height:{size}px;left:{x}px;top:{y}px;\
         background:rgba(255,255,255,0.3);border-radius:50%;transform:scale(0);\
         animation:wa-widget-ripple 0.6s linear;pointer-events:none;"
    );
    let _ = ripple.set_attribute("style", &style);
    let _ = target.append_child(&ripple);

    gloo_timers::callback::Timeout::new(LIFETIME_MS, move || {
        ripple.remove();
    })
    .forget();
}
