//! Expandable card activation.
//!
//! A card toggles on a primary click or Enter/Space anywhere on its surface,
//! except when the event target sits inside a nested link or button.

/// Where inside the card the event landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventTarget {
    /// The card surface or any non-interactive descendant.
    Surface,
    /// Inside an `<a>`.
    Link,
    /// Inside a `<button>`.
    Button,
}

impl EventTarget {
    pub fn is_interactive(&self) -> bool {
        matches!(self, EventTarget::Link | EventTarget::Button)
    }
}

/// A user event delivered to a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    /// Primary-button click.
    Click { target: EventTarget },
    /// `keydown` with the DOM `key` value.
    Key { key: String, target: EventTarget },
}

impl Activation {
    pub fn click() -> Self {
        Activation::Click {
            target: EventTarget::Surface,
        }
    }

    pub fn key(key: &str) -> Self {
        Activation::Key {
            key: key.to_string(),
            target: EventTarget::Surface,
        }
    }

    pub fn target(&self) -> EventTarget {
        match self {
            Activation::Click { target } | Activation::Key { target, .. } => *target,
        }
    }

    /// Whether this event flips the card. Nested links and buttons keep
    /// their native behavior.
    pub fn toggles(&self) -> bool {
        if self.target().is_interactive() {
            return false;
        }
        match self {
            Activation::Click { .. } => true,
            Activation::Key { key, .. } => key == "Enter" || key == " ",
        }
    }

    /// Key activations that toggle also suppress the browser default
    /// (page scroll on Space).
    pub fn prevents_default(&self) -> bool {
        matches!(self, Activation::Key { .. }) && self.toggles()
    }
}

/// Result of delivering an activation to a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardOutcome {
    Expanded,
    Collapsed,
    /// Event passed through untouched.
    Ignored,
    /// No visible card with that id.
    UnknownCard,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_click_and_keys_toggle() {
        assert!(Activation::click().toggles());
        assert!(Activation::key("Enter").toggles());
        assert!(Activation::key(" ").toggles());
        assert!(!Activation::key("Escape").toggles());
        assert!(!Activation::key("a").toggles());
    }

    #[test]
    fn test_nested_controls_pass_through() {
        for target in [EventTarget::Link, EventTarget::Button] {
            assert!(!Activation::Click { target }.toggles());
            assert!(!Activation::Key { key: "Enter".into(), target }.toggles());
        }
    }

    #[test]
    fn test_prevents_default_only_for_toggling_keys() {
        assert!(Activation::key(" ").prevents_default());
        assert!(!Activation::key("Tab").prevents_default());
        assert!(!Activation::click().prevents_default());
    }
}
