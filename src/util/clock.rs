//! Current-time display label.
//!
//! The timestamp shown in the panel is captured once at configuration
//! time and never refreshed. Requires a browser environment for a real
//! reading; off-browser the label is a fixed placeholder.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

/// Label used when no browser clock is available.
pub const FALLBACK_LABEL: &str = "00:00";

/// Current local time as `HH:MM` (24-hour).
pub fn time_label() -> String {
    #[cfg(feature = "csr")]
    {
        // `Date` getters come back as f64; the values are small integers.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        {
            let now = js_sys::Date::new_0();
            format_label(now.get_hours() as u32, now.get_minutes() as u32)
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        FALLBACK_LABEL.to_owned()
    }
}

#[allow(dead_code)]
fn format_label(hours: u32, minutes: u32) -> String {
    format!("{hours:02}:{minutes:02}")
}
