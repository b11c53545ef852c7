//! Platform abstraction layer
//!
//! Translates raw frontend input into simulation commands. Window, texture
//! and font handling live in whichever frontend drives the simulation.

pub mod input;

pub use input::{FrameInput, Key, map_keys};
