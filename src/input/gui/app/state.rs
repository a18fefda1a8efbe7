use std::time::{Duration, Instant};

use log::{debug, warn};

use crate::core::actions::render_frame::render_frame::render_frame;
use crate::core::colour_mapping::palette::Palette;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::pixel_size::PixelSize;
use crate::core::data::point::Point;
use crate::core::fractals::mandelbrot::mandelbrot_config::{ConfigError, MandelbrotConfig};
use crate::core::input::gesture::Gesture;
use crate::core::input::translator::{GestureEffect, GestureTranslator};
use crate::core::viewport::viewport_state::ViewportState;

pub struct GuiAppState {
    viewport: ViewportState,
    initial: ViewportState,
    translator: GestureTranslator,
    palette: Palette,
    cursor: Point,
    frame_dirty: bool,
    last_frame_size: Option<PixelSize>,
    last_render_duration: Option<Duration>,
    last_error_message: Option<String>,
}

impl GuiAppState {
    pub fn new(config: &MandelbrotConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let initial = config.initial_viewport()?;

        Ok(Self {
            viewport: initial,
            initial,
            translator: config.translator()?,
            palette: config.palette(),
            cursor: Point::default(),
            frame_dirty: true,
            last_frame_size: None,
            last_render_duration: None,
            last_error_message: None,
        })
    }

    #[must_use]
    pub fn viewport(&self) -> &ViewportState {
        &self.viewport
    }

    #[must_use]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    #[must_use]
    pub fn cursor(&self) -> Point {
        self.cursor
    }

    pub fn set_cursor(&mut self, cursor: Point) {
        self.cursor = cursor;
    }

    /// Applies a gesture between frames. Returns whether a new frame is needed.
    pub fn handle_gesture(&mut self, gesture: Gesture, size: PixelSize) -> bool {
        match self.translator.apply(&mut self.viewport, gesture, size) {
            Ok(GestureEffect::Changed) => {
                self.frame_dirty = true;
                self.last_error_message = None;
                true
            }
            Ok(GestureEffect::Ignored) => false,
            Err(err) => {
                warn!("rejected {:?}: {}", gesture, err);
                self.last_error_message = Some(err.to_string());
                true
            }
        }
    }

    pub fn reset_view(&mut self) {
        self.viewport.reset_to(&self.initial);
        self.frame_dirty = true;
        self.last_error_message = None;
    }

    #[must_use]
    pub fn needs_frame(&self) -> bool {
        self.frame_dirty
    }

    /// Renders a new frame if the viewport or the grid size changed since the last one.
    pub fn render_if_needed(&mut self, size: PixelSize) -> Option<PixelBuffer> {
        if !self.frame_dirty && self.last_frame_size == Some(size) {
            return None;
        }

        let start = Instant::now();
        let buffer = render_frame(self.viewport.snapshot(), size, &self.palette);
        let duration = start.elapsed();

        debug!(
            "rendered {}x{} frame in {:?}",
            size.width(),
            size.height(),
            duration
        );

        self.frame_dirty = false;
        self.last_frame_size = Some(size);
        self.last_render_duration = Some(duration);

        Some(buffer)
    }

    #[must_use]
    pub fn last_render_duration(&self) -> Option<Duration> {
        self.last_render_duration
    }

    #[must_use]
    pub fn last_error_message(&self) -> Option<&str> {
        self.last_error_message.as_deref()
    }
}
