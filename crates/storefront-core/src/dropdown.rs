//! Exclusive dropdown selector shared by the desktop menu, the mobile
//! accordion and the account menu
//!
//! At most one dropdown is open at a time: opening one closes the other.

use std::fmt;

/// Something that can be opened in the header
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DropdownTarget {
    /// A navigation category, keyed by its display name
    Category(String),
    /// The fixed login / sign-up menu
    Account,
}

impl DropdownTarget {
    pub fn category(name: impl Into<String>) -> Self {
        DropdownTarget::Category(name.into())
    }
}

impl fmt::Display for DropdownTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DropdownTarget::Category(name) => write!(f, "{}", name),
            DropdownTarget::Account => write!(f, "account"),
        }
    }
}

/// Which dropdown, if any, is currently open
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DropdownState {
    #[default]
    Closed,
    Open(DropdownTarget),
}

impl DropdownState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Close `target` if it is the open one, otherwise open it in place of
    /// whatever was open before
    pub fn toggle(&mut self, target: DropdownTarget) {
        *self = match self {
            DropdownState::Open(current) if *current == target => DropdownState::Closed,
            _ => DropdownState::Open(target),
        };
    }

    pub fn is_open(&self, target: &DropdownTarget) -> bool {
        matches!(self, DropdownState::Open(current) if current == target)
    }

    pub fn is_closed(&self) -> bool {
        matches!(self, DropdownState::Closed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_closed() {
        let state = DropdownState::new();
        assert!(state.is_closed());
        assert!(!state.is_open(&DropdownTarget::Account));
    }

    #[test]
    fn test_toggle_twice_closes() {
        let mut state = DropdownState::new();
        let frames = DropdownTarget::category("Frames");

        state.toggle(frames.clone());
        assert!(state.is_open(&frames));

        state.toggle(frames.clone());
        assert!(state.is_closed());
    }

    #[test]
    fn test_opening_another_closes_previous() {
        let mut state = DropdownState::new();
        let frames = DropdownTarget::category("Frames");
        let lenses = DropdownTarget::category("Lenses");

        state.toggle(frames.clone());
        state.toggle(lenses.clone());

        assert!(state.is_open(&lenses));
        assert!(!state.is_open(&frames));
        assert_eq!(state, DropdownState::Open(lenses));
    }

    #[test]
    fn test_account_and_categories_are_exclusive() {
        let mut state = DropdownState::new();
        let frames = DropdownTarget::category("Frames");

        state.toggle(DropdownTarget::Account);
        state.toggle(frames.clone());
        assert!(!state.is_open(&DropdownTarget::Account));
        assert!(state.is_open(&frames));

        state.toggle(DropdownTarget::Account);
        assert!(state.is_open(&DropdownTarget::Account));
        assert!(!state.is_open(&frames));
    }

    #[test]
    fn test_category_named_account_is_not_the_account_menu() {
        let mut state = DropdownState::new();
        state.toggle(DropdownTarget::category("account"));

        assert!(!state.is_open(&DropdownTarget::Account));
        assert_eq!(DropdownTarget::Account.to_string(), "account");
    }
}
