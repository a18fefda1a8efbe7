//! Input adapters for the explorer.
//!
//! Receive input from the windowing system and turn it into viewport gestures.

#[cfg(feature = "gui")]
pub mod gui;
