#![no_std]
//! Keymap for the Planck rev4 ("jayem" layout).
//!
//! The host firmware scans the matrix, debounces, times taps and talks HID. This crate owns the
//! layer table, the layer state and the handful of keys that change it.

pub mod action;
pub mod config;
pub mod controller;
pub mod eeconfig;
pub mod keycode;
pub mod keymap;
pub mod layer;
pub mod layout;
/// Shorthand for building and inspecting keymaps
pub mod prelude;
pub mod tap_dance;

#[cfg(test)]
pub(crate) fn init_test_log() {
    let _ = env_logger::builder().is_test(true).try_init();
}
