use crate::layer::{BaseLayout, TriLayer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeymapConfig {
    /// Default layout used when nothing has been persisted yet
    pub default_layout: BaseLayout,
    /// Overlays which together activate the adjust layer
    pub tri_layer: TriLayer,
    /// Start of the default layer record in EEPROM
    pub eeconfig_offset: u32,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        KeymapConfig {
            default_layout: BaseLayout::Qwerty,
            tri_layer: TriLayer::default(),
            eeconfig_offset: 0,
        }
    }
}
