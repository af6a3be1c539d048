//! HID usages and modifiers

pub use usbd_human_interface_device::page::Keyboard;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modifier {
    LeftControl,
    LeftShift,
    LeftAlt,
    LeftGui,
    RightControl,
    RightShift,
    RightAlt,
    RightGui,
}

impl Modifier {
    /// The HID usage the host reports while this modifier is held
    pub fn keycode(self) -> Keyboard {
        match self {
            Modifier::LeftControl => Keyboard::LeftControl,
            Modifier::LeftShift => Keyboard::LeftShift,
            Modifier::LeftAlt => Keyboard::LeftAlt,
            Modifier::LeftGui => Keyboard::LeftGUI,
            Modifier::RightControl => Keyboard::RightControl,
            Modifier::RightShift => Keyboard::RightShift,
            Modifier::RightAlt => Keyboard::RightAlt,
            Modifier::RightGui => Keyboard::RightGUI,
        }
    }
}
