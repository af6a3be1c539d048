//! Layer identifiers and the active layer state

use heapless::Vec;
use log::debug;

/// A base layout, one of which is the default layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseLayout {
    Qwerty,
    Dvorak,
}

/// A layer which is held rather than made default
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    Lower,
    Raise,
    Nav,
}

impl Overlay {
    pub const COUNT: usize = 3;
}

/// Index into the layer table. The order matches the table, not resolution priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Qwerty,
    Dvorak,
    Lower,
    Raise,
    Nav,
    Adjust,
}

impl Layer {
    pub const COUNT: usize = 6;

    /// Resolution order, highest priority first
    pub const PRIORITY: [Layer; Layer::COUNT] = [
        Layer::Adjust,
        Layer::Raise,
        Layer::Lower,
        Layer::Nav,
        Layer::Dvorak,
        Layer::Qwerty,
    ];

    /// Used when every active layer is transparent at a position
    pub const FALLBACK: Layer = Layer::Qwerty;

    pub const fn index(self) -> usize {
        self as usize
    }
}

impl From<BaseLayout> for Layer {
    fn from(base: BaseLayout) -> Self {
        match base {
            BaseLayout::Qwerty => Layer::Qwerty,
            BaseLayout::Dvorak => Layer::Dvorak,
        }
    }
}

impl From<Overlay> for Layer {
    fn from(overlay: Overlay) -> Self {
        match overlay {
            Overlay::Lower => Layer::Lower,
            Overlay::Raise => Layer::Raise,
            Overlay::Nav => Layer::Nav,
        }
    }
}

/// Two overlays which, held together, activate `Layer::Adjust`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriLayer {
    pub lower: Overlay,
    pub upper: Overlay,
}

impl Default for TriLayer {
    fn default() -> Self {
        TriLayer {
            lower: Overlay::Lower,
            upper: Overlay::Raise,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerState {
    default_layout: BaseLayout,
    held: Vec<Overlay, { Overlay::COUNT }>,
    tri_layer: TriLayer,
    adjust: bool,
}

impl LayerState {
    pub fn new(default_layout: BaseLayout, tri_layer: TriLayer) -> Self {
        LayerState {
            default_layout,
            held: Vec::new(),
            tri_layer,
            adjust: false,
        }
    }

    pub fn default_layout(&self) -> BaseLayout {
        self.default_layout
    }

    pub fn set_default_layout(&mut self, layout: BaseLayout) {
        debug!("Default layout {:?} -> {:?}", self.default_layout, layout);
        self.default_layout = layout;
    }

    /// Overlays currently held, in press order
    pub fn held(&self) -> &[Overlay] {
        &self.held
    }

    pub fn is_held(&self, overlay: Overlay) -> bool {
        self.held.contains(&overlay)
    }

    pub fn layer_on(&mut self, overlay: Overlay) {
        self.held.retain(|held| held != &overlay);
        // Capacity equals the number of overlays, and duplicates were just removed
        self.held.push(overlay).ok();
        self.update_tri_layer();
        debug!("Layer {:?} on, held {:?}", overlay, self.held);
    }

    pub fn layer_off(&mut self, overlay: Overlay) {
        self.held.retain(|held| held != &overlay);
        self.update_tri_layer();
        debug!("Layer {:?} off, held {:?}", overlay, self.held);
    }

    fn update_tri_layer(&mut self) {
        self.adjust = self.is_held(self.tri_layer.lower) && self.is_held(self.tri_layer.upper);
    }

    pub fn is_active(&self, layer: Layer) -> bool {
        match layer {
            Layer::Qwerty => self.default_layout == BaseLayout::Qwerty,
            Layer::Dvorak => self.default_layout == BaseLayout::Dvorak,
            Layer::Lower => self.is_held(Overlay::Lower),
            Layer::Raise => self.is_held(Overlay::Raise),
            Layer::Nav => self.is_held(Overlay::Nav),
            Layer::Adjust => self.adjust,
        }
    }

    /// Active layers, highest priority first. Always ends with the default layout.
    pub fn active_layers(&self) -> impl Iterator<Item = Layer> + '_ {
        Layer::PRIORITY
            .into_iter()
            .filter(move |layer| self.is_active(*layer))
    }
}

impl Default for LayerState {
    fn default() -> Self {
        Self::new(BaseLayout::Qwerty, TriLayer::default())
    }
}
