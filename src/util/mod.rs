//! Small browser-facing helpers with native fallbacks.

pub mod clock;
#[cfg(feature = "csr")]
pub mod ripple;
