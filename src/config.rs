//! Widget configuration and the override merge.
//!
//! DESIGN
//! ======
//! `WidgetConfig` is always fully populated: every field has a built-in
//! default, so a partial override set can never leave a field unset.
//! `resolve` is a pure shallow merge and is reused by the runtime update
//! operation. No validation is performed on `contact_handle`; a malformed
//! handle simply yields a dead outbound link.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::util::clock;

/// Fully resolved widget configuration, immutable per update cycle.
///
/// `greeting` and `footer_note` are rendered as raw markup by the panel;
/// embedders are responsible for supplying trusted values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WidgetConfig {
    /// Destination phone number in international format, used verbatim.
    pub contact_handle: String,
    /// Name shown in the panel header.
    pub display_name: String,
    /// Header avatar image URL; its `alt` text mirrors `display_name`.
    pub avatar_url: String,
    /// First inbound message, raw markup.
    pub greeting: String,
    /// Display time captured once at construction, not live-updating.
    pub timestamp_label: String,
    /// Secondary text under the input row, raw markup.
    pub footer_note: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            contact_handle: "+923124500050".to_owned(),
            display_name: "Speech Therapy Solutions".to_owned(),
            avatar_url: "avatar1.jpg".to_owned(),
            greeting: "How can I help you? :)".to_owned(),
            timestamp_label: clock::time_label(),
            footer_note: "Activate Windows<br>Go to Settings to activate Windows".to_owned(),
        }
    }
}

impl WidgetConfig {
    /// Merge `overrides` over the built-in defaults, field by field.
    pub fn resolve(overrides: ConfigOverrides) -> Self {
        Self::default().merged(overrides)
    }

    /// Merge `overrides` over this configuration, field by field.
    pub fn merged(self, overrides: ConfigOverrides) -> Self {
        Self {
            contact_handle: overrides.contact_handle.unwrap_or(self.contact_handle),
            display_name: overrides.display_name.unwrap_or(self.display_name),
            avatar_url: overrides.avatar_url.unwrap_or(self.avatar_url),
            greeting: overrides.greeting.unwrap_or(self.greeting),
            timestamp_label: overrides.timestamp_label.unwrap_or(self.timestamp_label),
            footer_note: overrides.footer_note.unwrap_or(self.footer_note),
        }
    }
}

/// Partial configuration supplied by the embedding page.
///
/// Deserialized from camelCase JSON so the embedder-facing keys read like
/// the rest of the page's scripting environment.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigOverrides {
    pub contact_handle: Option<String>,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
    pub greeting: Option<String>,
    pub timestamp_label: Option<String>,
    pub footer_note: Option<String>,
}

impl ConfigOverrides {
    /// Fold `later` over `self`; fields set in `later` win.
    ///
    /// Used to accumulate `updateConfig` calls that arrive before the
    /// deferred mount completes.
    #[must_use]
    pub fn merge(self, later: Self) -> Self {
        Self {
            contact_handle: later.contact_handle.or(self.contact_handle),
            display_name: later.display_name.or(self.display_name),
            avatar_url: later.avatar_url.or(self.avatar_url),
            greeting: later.greeting.or(self.greeting),
            timestamp_label: later.timestamp_label.or(self.timestamp_label),
            footer_note: later.footer_note.or(self.footer_note),
        }
    }

    /// True when no field is overridden.
    pub fn is_empty(&self) -> bool {
        self.contact_handle.is_none()
            && self.display_name.is_none()
            && self.avatar_url.is_none()
            && self.greeting.is_none()
            && self.timestamp_label.is_none()
            && self.footer_note.is_none()
    }
}
