use thiserror::Error;

use crate::adapters::pixel_format::PixelFormatError;
use crate::core::fractals::mandelbrot::mandelbrot_config::ConfigError;

#[derive(Debug, Error)]
pub enum GuiError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("pixels surface error: {0}")]
    Surface(#[from] pixels::Error),
    #[error("failed to resize surface: {0}")]
    Resize(#[from] pixels::TextureError),
    #[error("failed to upload frame: {0}")]
    Frame(#[from] PixelFormatError),
}
