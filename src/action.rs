//! What a key position does once its layer is known

use crate::keycode::{Keyboard, Modifier};
use crate::layer::{BaseLayout, Overlay};
use crate::tap_dance::TapDanceId;

/// Device management requests, performed by the host firmware
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemCommand {
    /// Jump to the bootloader
    Reset,
    DebugToggle,
    MusicOn,
    MusicOff,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Key(Keyboard),
    /// A key sent together with a modifier, e.g. GUI+` or a shifted symbol
    WithModifier(Modifier, Keyboard),
    /// Modifier when held, key when tapped
    ModTap(Modifier, Keyboard),
    /// Modifier when held, modifier plus key when tapped
    SpaceCadet(Modifier, Keyboard),
    /// Overlay while held, key when tapped
    LayerTap(Overlay, Keyboard),
    /// Overlay active for as long as the key is held
    LayerToggle(Overlay),
    /// Make the layout the default, across power cycles
    PersistentLayout(BaseLayout),
    TapDance(TapDanceId),
    System(SystemCommand),
    /// Defer to the next active layer
    Transparent,
    /// Swallow the event
    No,
}

impl Default for KeyAction {
    fn default() -> Self {
        KeyAction::No
    }
}
