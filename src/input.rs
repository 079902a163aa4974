//! Keyboard contract for the spotlight.
//!
//! ← / → move, Enter or Space opens the detail view, `c`/`C` copies the
//! identifier. Input is only accepted while the host reports that the
//! spotlight holds focus; anything else is ignored.

use metrics::counter;
use serde::Serialize;

use crate::spotlight::{Spotlight, SpotlightEffect, Step};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Enter,
    Space,
    Copy,
    Other,
}

impl Key {
    /// Parse a DOM-style key name (`KeyboardEvent.key`).
    pub fn parse(name: &str) -> Self {
        match name {
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            "Enter" => Key::Enter,
            " " | "Space" | "Spacebar" => Key::Space,
            "c" | "C" => Key::Copy,
            _ => Key::Other,
        }
    }
}

/// Host capability: does the spotlight (or a descendant) currently hold focus?
pub trait FocusGate {
    fn holds_focus(&self) -> bool;
}

impl FocusGate for bool {
    fn holds_focus(&self) -> bool {
        *self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum KeyOutcome {
    /// Key has no binding, or the spotlight is empty.
    Ignored,
    /// Focus is elsewhere; state untouched.
    Unfocused,
    Moved { cursor: usize },
    Effect { effect: SpotlightEffect },
}

/// Route one key event to the navigator.
pub fn handle_key(spotlight: &mut Spotlight, key: Key, focus: &impl FocusGate) -> KeyOutcome {
    if !focus.holds_focus() {
        return KeyOutcome::Unfocused;
    }

    let outcome = match key {
        Key::ArrowLeft => spotlight.advance(Step::Back).map(|cursor| KeyOutcome::Moved { cursor }),
        Key::ArrowRight => spotlight
            .advance(Step::Forward)
            .map(|cursor| KeyOutcome::Moved { cursor }),
        Key::Enter | Key::Space => spotlight.activate().map(|effect| KeyOutcome::Effect { effect }),
        Key::Copy => spotlight
            .copy_identifier()
            .map(|effect| KeyOutcome::Effect { effect }),
        Key::Other => None,
    }
    .unwrap_or(KeyOutcome::Ignored);

    if outcome != KeyOutcome::Ignored {
        counter!("spotlight_key_events_total").increment(1);
    }
    outcome
}
