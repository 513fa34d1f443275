//! Toolkit-free core of Sticker Studio: form state, validation, palettes,
//! page registry and the navigation state machine, plus startup config.

pub mod config;
pub mod model;
