//! Open/closed state machine and badge lifecycle.
//!
//! DESIGN
//! ======
//! Transitions are plain methods on `WidgetState` so the machine tests
//! natively. Components hold the single instance in an `RwSignal` and turn
//! the reported transition into DOM effects (visibility class, focus
//! timeout, input clearing). Every method is a guarded no-op when the
//! requested transition does not apply, which is what makes the late-firing
//! badge timers safe without cancellation.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

/// Lifecycle of the unread indicator on the trigger.
///
/// Dismissal is two-stage so the disappearance is animated: `Fading` runs
/// the opacity transition, `Hidden` removes the element from display.
/// Opening the panel jumps straight to `Hidden`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BadgeState {
    #[default]
    Visible,
    Fading,
    Hidden,
}

impl BadgeState {
    /// True until the badge has been removed from display.
    pub fn is_visible(self) -> bool {
        self != Self::Hidden
    }
}

/// Outcome of a requested transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Opened,
    Closed,
    /// The machine was already in the requested state.
    Unchanged,
}

/// Mutable widget state, one instance per mounted widget.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WidgetState {
    /// True once the presentation has been attached to the document.
    pub is_mounted: bool,
    /// True while the panel is visible and accepting input.
    pub is_panel_open: bool,
    pub badge: BadgeState,
}

impl WidgetState {
    /// `Closed -> Open`. Also forces the badge hidden, skipping the fade.
    pub fn open(&mut self) -> Transition {
        if self.is_panel_open {
            return Transition::Unchanged;
        }
        self.is_panel_open = true;
        self.badge = BadgeState::Hidden;
        Transition::Opened
    }

    /// `Open -> Closed`.
    pub fn close(&mut self) -> Transition {
        if !self.is_panel_open {
            return Transition::Unchanged;
        }
        self.is_panel_open = false;
        Transition::Closed
    }

    /// `Open -> Closed` if open, else `Closed -> Open`.
    pub fn toggle(&mut self) -> Transition {
        if self.is_panel_open {
            self.close()
        } else {
            self.open()
        }
    }

    /// Primary badge timer action: begin the fade, unless the panel was
    /// opened first or the fade already ran.
    ///
    /// Returns `true` when the fade actually started, i.e. when the
    /// secondary removal timer should be scheduled.
    pub fn begin_badge_fade(&mut self) -> bool {
        if self.is_panel_open || self.badge != BadgeState::Visible {
            return false;
        }
        self.badge = BadgeState::Fading;
        true
    }

    /// Secondary badge timer action: remove a fading badge from display.
    pub fn finish_badge_fade(&mut self) {
        if self.badge == BadgeState::Fading {
            self.badge = BadgeState::Hidden;
        }
    }
}
