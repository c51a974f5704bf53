//! Injected widget stylesheet.
//!
//! The widget carries its own presentation rules so embedding a single
//! script tag is enough; nothing is required from the host page's CSS.
//! Injection is guarded by `STYLE_ID` independently of the structural
//! mount guard.

#[cfg(test)]
#[path = "styles_test.rs"]
mod styles_test;

/// Marker id of the injected `<style>` element.
pub const STYLE_ID: &str = "wa-widget-styles";

/// Append the widget stylesheet to `<head>`, exactly once per document.
#[cfg(feature = "csr")]
pub fn inject_once(document: &web_sys::Document) {
    if document.get_element_by_id(STYLE_ID).is_some() {
        return;
    }
    let Some(head) = document.head() else {
        return;
    };
    let Ok(style) = document.create_element("style") else {
        return;
    };
    style.set_id(STYLE_ID);
    style.set_text_content(Some(WIDGET_CSS));
    let _ = head.append_child(&style);
}

/// Complete widget presentation rules.
pub const WIDGET_CSS: &str = r"
.wa-widget {
    position: fixed;
    bottom: 20px;
    right: 20px;
    z-index: 1000;
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
}

.wa-widget__trigger {
    width: 60px;
    height: 60px;
    background: #25d366;
    border-radius: 50%;
    display: flex;
    align-items: center;
    justify-content: center;
    cursor: pointer;
    box-shadow: 0 4px 12px rgba(37, 211, 102, 0.4);
    transition: all 0.3s ease;
    position: relative;
    overflow: hidden;
    animation: wa-widget-float 3s ease-in-out infinite;
}

.wa-widget__trigger:hover {
    transform: scale(1.1);
    box-shadow: 0 6px 20px rgba(37, 211, 102, 0.6);
    animation: none;
}

.wa-widget__trigger svg {
    width: 32px;
    height: 32px;
    fill: white;
}

.wa-widget__badge {
    position: absolute;
    top: -2px;
    right: -2px;
    width: 20px;
    height: 20px;
    background: #ff3333;
    border-radius: 50%;
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 12px;
    color: white;
    font-weight: bold;
    transition: opacity 0.3s ease;
}

.wa-widget__badge--fading {
    opacity: 0;
}

.wa-widget__badge--hidden {
    display: none;
}

.wa-widget__panel {
    position: absolute;
    bottom: 80px;
    right: 0;
    width: 350px;
    max-width: calc(100vw - 40px);
    background: white;
    border-radius: 12px;
    box-shadow: 0 8px 32px rgba(0, 0, 0, 0.15);
    opacity: 0;
    visibility: hidden;
    transform: translateY(20px) scale(0.95);
    transition: all 0.3s ease;
    overflow: hidden;
}

.wa-widget__panel--open {
    opacity: 1;
    visibility: visible;
    transform: translateY(0) scale(1);
}

.wa-widget__header {
    background: #128c7e;
    color: white;
    padding: 16px;
    display: flex;
    align-items: center;
    position: relative;
}

.wa-widget__avatar {
    width: 40px;
    height: 40px;
    border-radius: 50%;
    margin-right: 12px;
    object-fit: cover;
}

.wa-widget__profile {
    flex: 1;
}

.wa-widget__name {
    font-weight: 600;
    font-size: 16px;
    margin-bottom: 2px;
}

.wa-widget__status {
    font-size: 13px;
    opacity: 0.9;
    display: flex;
    align-items: center;
}

.wa-widget__status-dot {
    width: 8px;
    height: 8px;
    background: #4fc3f7;
    border-radius: 50%;
    margin-right: 6px;
}

.wa-widget__close {
    background: none;
    border: none;
    color: white;
    font-size: 20px;
    cursor: pointer;
    padding: 4px;
    border-radius: 4px;
    transition: background 0.2s ease;
}

.wa-widget__close:hover {
    background: rgba(255, 255, 255, 0.1);
}

.wa-widget__body {
    height: 300px;
    background: #e5ddd5;
    background-image:
        radial-gradient(circle at 25px 25px, rgba(255,255,255,0.2) 2%, transparent 2%),
        radial-gradient(circle at 75px 75px, rgba(255,255,255,0.2) 2%, transparent 2%);
    background-size: 100px 100px;
    padding: 16px;
    overflow-y: auto;
    position: relative;
}

.wa-widget__body::before {
    content: '';
    position: absolute;
    top: 0;
    left: 0;
    right: 0;
    bottom: 0;
    background: linear-gradient(45deg, transparent 30%, rgba(255,255,255,0.1) 50%, transparent 70%);
    pointer-events: none;
}

.wa-widget__time {
    text-align: center;
    color: #999;
    font-size: 12px;
    margin-bottom: 16px;
}

.wa-widget__message {
    max-width: 80%;
    margin-bottom: 12px;
    position: relative;
    background: white;
    padding: 8px 12px;
    border-radius: 18px 18px 18px 4px;
    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.1);
    font-size: 14px;
    line-height: 1.4;
    color: #333;
}

.wa-widget__message::before {
    content: '';
    position: absolute;
    left: -6px;
    bottom: 0;
    width: 0;
    height: 0;
    border: 6px solid transparent;
    border-right-color: white;
    border-left: 0;
    border-bottom: 0;
}

.wa-widget__input-row {
    padding: 12px 16px;
    background: #f0f0f0;
    display: flex;
    align-items: center;
    gap: 8px;
}

.wa-widget__input {
    flex: 1;
    border: none;
    background: white;
    padding: 12px 16px;
    border-radius: 24px;
    font-size: 14px;
    outline: none;
    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.1);
}

.wa-widget__input::placeholder {
    color: #999;
}

.wa-widget__send {
    width: 40px;
    height: 40px;
    background: #25d366;
    border: none;
    border-radius: 50%;
    display: flex;
    align-items: center;
    justify-content: center;
    cursor: pointer;
    transition: all 0.2s ease;
    position: relative;
    overflow: hidden;
}

.wa-widget__send:hover {
    background: #128c7e;
    transform: scale(1.05);
}

.wa-widget__send svg {
    width: 20px;
    height: 20px;
    fill: white;
}

.wa-widget__footer-note {
    text-align: center;
    padding: 16px;
    color: #999;
    font-size: 13px;
    background: #f8f8f8;
    border-top: 1px solid #eee;
}

@media (max-width: 480px) {
    .wa-widget__panel {
        width: calc(100vw - 20px);
        right: 10px;
        bottom: 90px;
    }

    .wa-widget__trigger {
        width: 56px;
        height: 56px;
    }

    .wa-widget__trigger svg {
        width: 28px;
        height: 28px;
    }

    .wa-widget__body {
        height: 250px;
    }
}

@keyframes wa-widget-float {
    0%, 100% { transform: translateY(0px); }
    50% { transform: translateY(-10px); }
}

@keyframes wa-widget-ripple {
    to {
        transform: scale(4);
        opacity: 0;
    }
}
";
