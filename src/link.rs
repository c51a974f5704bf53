//! Outbound `wa.me` link construction.

#[cfg(test)]
#[path = "link_test.rs"]
mod link_test;

/// Host of the WhatsApp click-to-chat redirect service.
pub const REDIRECT_HOST: &str = "wa.me";

/// Build the outbound deep link for `contact_handle` and a typed message.
///
/// The handle is used verbatim, including any leading `+`. The message is
/// trimmed; when non-empty it is appended percent-encoded as the `text`
/// query parameter, otherwise the bare contact URL is returned.
pub fn outbound_link(contact_handle: &str, message: &str) -> String {
    let base = format!("https://{REDIRECT_HOST}/{contact_handle}");
    let trimmed = message.trim();
    if trimmed.is_empty() {
        base
    } else {
        format!("{base}?text={}", urlencoding::encode(trimmed))
    }
}
