//! Keys which send one action on a single tap and another on a double tap.
//!
//! Counting taps is up to the host firmware; this only maps a finished count to an action.

use crate::action::KeyAction;
use crate::keycode::{Keyboard, Modifier};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapDanceId {
    ShiftCaps,
    LeftHome,
    DownPageDown,
    UpPageUp,
    RightEnd,
    CurlyBrace,
}

impl TapDanceId {
    pub const COUNT: usize = 6;

    pub const ALL: [TapDanceId; TapDanceId::COUNT] = [
        TapDanceId::ShiftCaps,
        TapDanceId::LeftHome,
        TapDanceId::DownPageDown,
        TapDanceId::UpPageUp,
        TapDanceId::RightEnd,
        TapDanceId::CurlyBrace,
    ];

    pub fn binding(self) -> &'static TapDance {
        &TAP_DANCES[self as usize]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TapDance {
    pub single_tap: KeyAction,
    pub double_tap: KeyAction,
}

impl TapDance {
    pub const fn new(single_tap: KeyAction, double_tap: KeyAction) -> Self {
        TapDance {
            single_tap,
            double_tap,
        }
    }

    /// `None` if the gesture had no taps
    pub fn action_for(&self, tap_count: u8) -> Option<KeyAction> {
        match tap_count {
            0 => None,
            1 => Some(self.single_tap),
            _ => Some(self.double_tap),
        }
    }
}

/// Indexed by `TapDanceId`
pub static TAP_DANCES: [TapDance; TapDanceId::COUNT] = [
    TapDance::new(
        KeyAction::Key(Keyboard::LeftShift),
        KeyAction::Key(Keyboard::CapsLock),
    ),
    TapDance::new(
        KeyAction::Key(Keyboard::LeftArrow),
        KeyAction::Key(Keyboard::Home),
    ),
    TapDance::new(
        KeyAction::Key(Keyboard::DownArrow),
        KeyAction::Key(Keyboard::PageDown),
    ),
    TapDance::new(
        KeyAction::Key(Keyboard::UpArrow),
        KeyAction::Key(Keyboard::PageUp),
    ),
    TapDance::new(
        KeyAction::Key(Keyboard::RightArrow),
        KeyAction::Key(Keyboard::End),
    ),
    TapDance::new(
        KeyAction::WithModifier(Modifier::LeftShift, Keyboard::LeftBrace),
        KeyAction::WithModifier(Modifier::LeftShift, Keyboard::RightBrace),
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_caps() {
        let dance = TapDanceId::ShiftCaps.binding();
        assert_eq!(dance.action_for(0), None);
        assert_eq!(dance.action_for(1), Some(KeyAction::Key(Keyboard::LeftShift)));
        assert_eq!(dance.action_for(2), Some(KeyAction::Key(Keyboard::CapsLock)));
    }

    #[test]
    fn extra_taps_count_as_double() {
        let dance = TapDanceId::RightEnd.binding();
        assert_eq!(dance.action_for(5), Some(KeyAction::Key(Keyboard::End)));
    }

    #[test]
    fn curly_braces_are_shifted() {
        let dance = TapDanceId::CurlyBrace.binding();
        assert_eq!(
            dance.action_for(1),
            Some(KeyAction::WithModifier(Modifier::LeftShift, Keyboard::LeftBrace))
        );
        assert_eq!(
            dance.action_for(2),
            Some(KeyAction::WithModifier(Modifier::LeftShift, Keyboard::RightBrace))
        );
    }

    #[test]
    fn every_binding_is_concrete() {
        for id in TapDanceId::ALL {
            let dance = id.binding();
            assert_ne!(dance.single_tap, dance.double_tap);
            for action in [dance.single_tap, dance.double_tap] {
                assert!(!matches!(action, KeyAction::Transparent | KeyAction::No));
            }
        }
    }
}
