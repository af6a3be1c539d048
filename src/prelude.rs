//! For ease and shorthand
pub use crate::action::{KeyAction, SystemCommand};
pub use crate::config::KeymapConfig;
pub use crate::controller::{Dispatch, LayerController};
pub use crate::eeconfig::{DefaultLayerStore, Eeconfig, NoStore};
pub use crate::keycode::{Keyboard, Modifier};
pub use crate::keymap::{KeyEvent, Keymap, LayerTable};
pub use crate::layer::{BaseLayout, Layer, LayerState, Overlay, TriLayer};
pub use crate::tap_dance::{TapDance, TapDanceId};
pub use crate::{make_action, make_key, make_keymap, make_modifier};
