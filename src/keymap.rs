//! Associates presses to keymaps

use log::warn;

use crate::action::KeyAction;
use crate::controller::LayerController;
use crate::eeconfig::DefaultLayerStore;
use crate::layer::{Layer, LayerState, Overlay};

// Export as pub so that it can be used from macro
#[doc(hidden)]
pub use paste::paste;

/// One grid per layer, indexed `[layer][row][col]`
pub type LayerTable<const ROW: usize, const COL: usize> = [[[KeyAction; COL]; ROW]; Layer::COUNT];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub row: u8,
    pub col: u8,
    pub pressed: bool,
}

impl KeyEvent {
    pub fn press(row: u8, col: u8) -> Self {
        KeyEvent {
            row,
            col,
            pressed: true,
        }
    }

    pub fn release(row: u8, col: u8) -> Self {
        KeyEvent {
            row,
            col,
            pressed: false,
        }
    }
}

/// The layer stack over a static layer table.
///
/// Resolution walks the active layers from the highest priority down (see `Layer::PRIORITY`),
/// skipping `Transparent` entries. If every active layer is transparent at a position,
/// `Layer::FALLBACK` supplies the action.
pub struct Keymap<'a, S, const ROW: usize, const COL: usize> {
    layers: &'a LayerTable<ROW, COL>,
    state: LayerState,
    /// Layer each held key was resolved on, so its release goes to the same action
    layer_cache: [[Option<Layer>; COL]; ROW],
    controller: LayerController<S>,
}

impl<'a, S: DefaultLayerStore, const ROW: usize, const COL: usize> Keymap<'a, S, ROW, COL> {
    pub fn new(layers: &'a LayerTable<ROW, COL>, mut controller: LayerController<S>) -> Self {
        let state = controller.boot();
        Keymap {
            layers,
            state,
            layer_cache: [[None; COL]; ROW],
            controller,
        }
    }

    pub fn state(&self) -> &LayerState {
        &self.state
    }

    pub fn controller(&self) -> &LayerController<S> {
        &self.controller
    }

    /// Host side of a layer-tap key: once the host has decided the key is held rather than
    /// tapped, the overlay stays on until it reports `held == false`.
    pub fn layer_tap_hold(&mut self, overlay: Overlay, held: bool) {
        if held {
            self.state.layer_on(overlay);
        } else {
            self.state.layer_off(overlay);
        }
    }

    /// Power off: only what the controller's store persisted survives
    pub fn into_controller(self) -> LayerController<S> {
        self.controller
    }

    /// Raw table entry, `None` outside the matrix
    pub fn action_at(&self, layer: Layer, row: usize, col: usize) -> Option<KeyAction> {
        self.layers[layer.index()].get(row)?.get(col).copied()
    }

    /// What the key at `(row, col)` does with the current layer state, `None` outside the matrix
    pub fn resolve(&self, row: usize, col: usize) -> Option<KeyAction> {
        if row >= ROW || col >= COL {
            return None;
        }
        Some(self.action_on(self.source_layer(row, col), row, col))
    }

    /// Resolve the event and run it through the layer controller.
    ///
    /// Returns the action the host should perform, or `None` if the event was consumed.
    pub fn process_key_event(&mut self, event: KeyEvent) -> Option<KeyAction> {
        let (row, col) = (event.row as usize, event.col as usize);
        if row >= ROW || col >= COL {
            warn!("Key ({}, {}) outside of the {}x{} matrix", row, col, ROW, COL);
            return None;
        }

        let layer = if event.pressed {
            let layer = self.source_layer(row, col);
            self.layer_cache[row][col] = Some(layer);
            layer
        } else {
            self.layer_cache[row][col]
                .take()
                .unwrap_or_else(|| self.source_layer(row, col))
        };

        let action = self.action_on(layer, row, col);
        if self
            .controller
            .dispatch(&mut self.state, action, event.pressed)
            .is_handled()
        {
            None
        } else {
            Some(action)
        }
    }

    fn source_layer(&self, row: usize, col: usize) -> Layer {
        self.state
            .active_layers()
            .find(|layer| self.layers[layer.index()][row][col] != KeyAction::Transparent)
            .unwrap_or(Layer::FALLBACK)
    }

    fn action_on(&self, layer: Layer, row: usize, col: usize) -> KeyAction {
        match self.layers[layer.index()][row][col] {
            KeyAction::Transparent => KeyAction::No,
            action => action,
        }
    }
}

#[macro_export]
macro_rules! make_keymap {
    // To allow `make_keymap![...]` be the same as `make_keymap!([...])`
    ( $( $t:tt ),* $(,)? ) => {[ $( $crate::make_action!($t) ),* ]};
}

#[macro_export]
macro_rules! make_modifier {
    (LCtl) => { $crate::keycode::Modifier::LeftControl };
    (LSft) => { $crate::keycode::Modifier::LeftShift };
    (LAlt) => { $crate::keycode::Modifier::LeftAlt };
    (LGui) => { $crate::keycode::Modifier::LeftGui };
    (RCtl) => { $crate::keycode::Modifier::RightControl };
    (RSft) => { $crate::keycode::Modifier::RightShift };
    (RAlt) => { $crate::keycode::Modifier::RightAlt };
    (RGui) => { $crate::keycode::Modifier::RightGui };

    ($i:ident) => { $crate::keycode::Modifier::$i };
}

#[macro_export]
macro_rules! make_key {
    // Shorthands
    (Esc) => { $crate::keycode::Keyboard::Escape };
    (Eql) => { $crate::keycode::Keyboard::Equal };
    (Min) => { $crate::keycode::Keyboard::Minus };
    (Bsl) => { $crate::keycode::Keyboard::Backslash };
    (Bsp) => { $crate::keycode::Keyboard::DeleteBackspace };
    (Del) => { $crate::keycode::Keyboard::DeleteForward };
    (Ent) => { $crate::keycode::Keyboard::ReturnEnter };
    (Spc) => { $crate::keycode::Keyboard::Space };
    (LBrc) => { $crate::keycode::Keyboard::LeftBrace };
    (RBrc) => { $crate::keycode::Keyboard::RightBrace };
    (Scln) => { $crate::keycode::Keyboard::Semicolon };
    (Quot) => { $crate::keycode::Keyboard::Apostrophe };
    (Grv) => { $crate::keycode::Keyboard::Grave };
    (Comm) => { $crate::keycode::Keyboard::Comma };
    (Slsh) => { $crate::keycode::Keyboard::ForwardSlash };
    (Caps) => { $crate::keycode::Keyboard::CapsLock };

    (LSft) => { $crate::keycode::Keyboard::LeftShift };
    (LCtl) => { $crate::keycode::Keyboard::LeftControl };
    (LAlt) => { $crate::keycode::Keyboard::LeftAlt };
    (LGui) => { $crate::keycode::Keyboard::LeftGUI };
    (RSft) => { $crate::keycode::Keyboard::RightShift };
    (RCtl) => { $crate::keycode::Keyboard::RightControl };
    (RAlt) => { $crate::keycode::Keyboard::RightAlt };
    (RGui) => { $crate::keycode::Keyboard::RightGUI };

    (Left) => { $crate::keycode::Keyboard::LeftArrow };
    (Down) => { $crate::keycode::Keyboard::DownArrow };
    (Up) => { $crate::keycode::Keyboard::UpArrow };
    (Rght) => { $crate::keycode::Keyboard::RightArrow };
    (PgUp) => { $crate::keycode::Keyboard::PageUp };
    (PgDn) => { $crate::keycode::Keyboard::PageDown };
    (Ins) => { $crate::keycode::Keyboard::Insert };

    // Have numbers translate to number keys
    ($n:literal) => {
        $crate::keymap::paste! { $crate::keycode::Keyboard::[<Keyboard $n>] }
    };

    // Fallback
    ($i:ident) => { $crate::keycode::Keyboard::$i };
}

#[macro_export]
macro_rules! make_action {
    (___) => { $crate::action::KeyAction::Transparent };
    (XXX) => { $crate::action::KeyAction::No };
    ((MT $m:tt $k:tt)) => {
        $crate::action::KeyAction::ModTap($crate::make_modifier!($m), $crate::make_key!($k))
    };
    ((SC $m:tt $k:tt)) => {
        $crate::action::KeyAction::SpaceCadet($crate::make_modifier!($m), $crate::make_key!($k))
    };
    ((LT $l:ident $k:tt)) => {
        $crate::action::KeyAction::LayerTap($crate::layer::Overlay::$l, $crate::make_key!($k))
    };
    ((MO $l:ident)) => { $crate::action::KeyAction::LayerToggle($crate::layer::Overlay::$l) };
    ((DF $b:ident)) => { $crate::action::KeyAction::PersistentLayout($crate::layer::BaseLayout::$b) };
    ((TD $t:ident)) => { $crate::action::KeyAction::TapDance($crate::tap_dance::TapDanceId::$t) };
    ((SYS $c:ident)) => { $crate::action::KeyAction::System($crate::action::SystemCommand::$c) };
    // Chords, e.g. `(LSft 1)` for `!`
    (($m:tt $k:tt)) => {
        $crate::action::KeyAction::WithModifier($crate::make_modifier!($m), $crate::make_key!($k))
    };
    ([ $( $t:tt ),* $(,)? ]) => {[ $( $crate::make_action!($t) ),* ]};
    ($k:tt) => { $crate::action::KeyAction::Key($crate::make_key!($k)) };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::KeymapConfig;
    use crate::eeconfig::NoStore;
    use crate::keycode::{Keyboard, Modifier};
    use crate::layer::BaseLayout;

    // Layers in table order: Qwerty, Dvorak, Lower, Raise, Nav, Adjust
    #[rustfmt::skip]
    static TABLE: LayerTable<1, 4> = make_keymap![
        [[A,      B,        (MO Lower),  (MO Raise)]],
        [[C,      ___,      (MO Lower),  (MO Raise)]],
        [[1,      ___,      ___,         ___       ]],
        [[(LSft 1), XXX,    ___,         ___       ]],
        [[Left,   ___,      ___,         ___       ]],
        [[(SYS Reset), ___, ___,         ___       ]],
    ];

    fn keymap() -> Keymap<'static, NoStore, 1, 4> {
        crate::init_test_log();
        Keymap::new(&TABLE, LayerController::new(KeymapConfig::default(), NoStore))
    }

    #[test]
    fn macro_shorthands() {
        assert_eq!(make_action!(___), KeyAction::Transparent);
        assert_eq!(make_action!(XXX), KeyAction::No);
        assert_eq!(make_action!(Bsp), KeyAction::Key(Keyboard::DeleteBackspace));
        assert_eq!(make_action!(0), KeyAction::Key(Keyboard::Keyboard0));
        assert_eq!(make_action!(F11), KeyAction::Key(Keyboard::F11));
        assert_eq!(
            make_action!((MT LGui Esc)),
            KeyAction::ModTap(Modifier::LeftGui, Keyboard::Escape)
        );
        assert_eq!(
            make_action!((LT Nav Spc)),
            KeyAction::LayerTap(Overlay::Nav, Keyboard::Space)
        );
        assert_eq!(
            make_action!((DF Dvorak)),
            KeyAction::PersistentLayout(BaseLayout::Dvorak)
        );
        assert_eq!(
            make_action!((SC LSft 9)),
            KeyAction::SpaceCadet(Modifier::LeftShift, Keyboard::Keyboard9)
        );
        assert_eq!(
            make_action!((LGui Grv)),
            KeyAction::WithModifier(Modifier::LeftGui, Keyboard::Grave)
        );
        assert_eq!(
            make_action!([A, (MO Nav)]),
            [KeyAction::Key(Keyboard::A), KeyAction::LayerToggle(Overlay::Nav)]
        );
    }

    #[test]
    fn resolves_on_default_layout() {
        let keymap = keymap();
        assert_eq!(keymap.resolve(0, 0), Some(KeyAction::Key(Keyboard::A)));
        assert_eq!(keymap.resolve(0, 1), Some(KeyAction::Key(Keyboard::B)));
        assert_eq!(keymap.resolve(1, 0), None);
        assert_eq!(keymap.resolve(0, 4), None);
        assert_eq!(keymap.action_at(Layer::Lower, 0, 0), Some(KeyAction::Key(Keyboard::Keyboard1)));
        assert_eq!(keymap.action_at(Layer::Lower, 0, 9), None);
    }

    #[test]
    fn transparent_falls_through() {
        let mut keymap = keymap();
        assert_eq!(keymap.process_key_event(KeyEvent::press(0, 2)), None);
        assert_eq!(keymap.resolve(0, 0), Some(KeyAction::Key(Keyboard::Keyboard1)));
        assert_eq!(keymap.resolve(0, 1), Some(KeyAction::Key(Keyboard::B)));
    }

    #[test]
    fn raise_over_lower_and_adjust_over_both() {
        let mut keymap = keymap();
        assert_eq!(keymap.process_key_event(KeyEvent::press(0, 3)), None);
        assert_eq!(
            keymap.resolve(0, 0),
            Some(KeyAction::WithModifier(Modifier::LeftShift, Keyboard::Keyboard1))
        );
        assert_eq!(keymap.resolve(0, 1), Some(KeyAction::No));

        assert_eq!(keymap.process_key_event(KeyEvent::press(0, 2)), None);
        assert!(keymap.state().is_active(Layer::Adjust));
        assert_eq!(
            keymap.resolve(0, 0),
            Some(KeyAction::System(crate::action::SystemCommand::Reset))
        );
        // Adjust is transparent here, Raise is the next active layer
        assert_eq!(keymap.resolve(0, 1), Some(KeyAction::No));
    }

    #[test]
    fn transparent_default_layout_uses_fallback() {
        let mut keymap = keymap();
        let _ = keymap.controller.dispatch(
            &mut keymap.state,
            KeyAction::PersistentLayout(BaseLayout::Dvorak),
            true,
        );
        assert_eq!(keymap.resolve(0, 0), Some(KeyAction::Key(Keyboard::C)));
        assert_eq!(keymap.resolve(0, 1), Some(KeyAction::Key(Keyboard::B)));
    }

    #[test]
    fn release_uses_layer_of_press() {
        let mut keymap = keymap();
        assert_eq!(keymap.process_key_event(KeyEvent::press(0, 2)), None);
        assert_eq!(
            keymap.process_key_event(KeyEvent::press(0, 0)),
            Some(KeyAction::Key(Keyboard::Keyboard1))
        );
        assert_eq!(keymap.process_key_event(KeyEvent::release(0, 2)), None);
        assert!(!keymap.state().is_held(Overlay::Lower));
        assert_eq!(
            keymap.process_key_event(KeyEvent::release(0, 0)),
            Some(KeyAction::Key(Keyboard::Keyboard1))
        );
        assert_eq!(
            keymap.process_key_event(KeyEvent::press(0, 0)),
            Some(KeyAction::Key(Keyboard::A))
        );
    }

    #[test]
    fn layer_key_released_on_another_layer() {
        let mut keymap = keymap();
        let _ = keymap.process_key_event(KeyEvent::press(0, 2));
        let _ = keymap.process_key_event(KeyEvent::press(0, 3));
        assert!(keymap.state().is_active(Layer::Adjust));
        let _ = keymap.process_key_event(KeyEvent::release(0, 2));
        let _ = keymap.process_key_event(KeyEvent::release(0, 3));
        assert_eq!(keymap.state(), &LayerState::default());
    }

    #[test]
    fn outside_matrix_is_ignored() {
        let mut keymap = keymap();
        assert_eq!(keymap.process_key_event(KeyEvent::press(3, 0)), None);
        assert_eq!(keymap.state(), &LayerState::default());
    }
}
