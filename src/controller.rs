//! Handles the keys which change layers, and lets everything else through to the host

use log::debug;

use crate::action::KeyAction;
use crate::config::KeymapConfig;
use crate::eeconfig::DefaultLayerStore;
use crate::layer::LayerState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Dispatch {
    /// The event was consumed, the host must not act on it
    Handled,
    /// The host performs its default behaviour for the action
    NotHandled,
}

impl Dispatch {
    pub fn is_handled(self) -> bool {
        self == Dispatch::Handled
    }
}

#[derive(Debug)]
pub struct LayerController<S> {
    config: KeymapConfig,
    store: S,
}

impl<S: DefaultLayerStore> LayerController<S> {
    pub fn new(config: KeymapConfig, store: S) -> Self {
        LayerController { config, store }
    }

    /// Layer state at power-on: the persisted default layout, or the configured one
    pub fn boot(&mut self) -> LayerState {
        let layout = self
            .store
            .load_default_layout()
            .unwrap_or(self.config.default_layout);
        debug!("Booting on {:?}", layout);
        LayerState::new(layout, self.config.tri_layer)
    }

    pub fn dispatch(&mut self, state: &mut LayerState, action: KeyAction, pressed: bool) -> Dispatch {
        match (action, pressed) {
            (KeyAction::PersistentLayout(layout), true) => {
                state.set_default_layout(layout);
                self.store.save_default_layout(layout);
                Dispatch::Handled
            }
            (KeyAction::PersistentLayout(_), false) => Dispatch::Handled,
            (KeyAction::LayerToggle(overlay), true) => {
                state.layer_on(overlay);
                Dispatch::Handled
            }
            (KeyAction::LayerToggle(overlay), false) => {
                state.layer_off(overlay);
                Dispatch::Handled
            }
            _ => Dispatch::NotHandled,
        }
    }

    pub fn config(&self) -> &KeymapConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Give the store back, e.g. to simulate a power cycle
    pub fn release(self) -> S {
        self.store
    }
}
