//! GUI input adapter for interactive Mandelbrot exploration.
//!
//! A winit window with a pixels framebuffer and an egui status overlay.

pub mod app;
pub mod commands;
pub mod errors;
