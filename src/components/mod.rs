//! Leptos components forming the widget's presentation tree.
//!
//! The tree is intentionally shallow: a root container with the floating
//! trigger, and the expandable panel. Components read the shared
//! `WidgetHandle` from context and keep owned `NodeRef`s to the nodes
//! they need, so no operation looks elements up by id at call time.

pub mod chat_widget;
pub mod panel;
