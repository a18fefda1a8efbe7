use std::{path::Path, time::Instant};

use log::{info, warn};

use crate::{
    controllers::{cli::gesture_script::GestureStep, ports::file_presenter::FilePresenterPort},
    core::{
        actions::render_frame::render_frame::render_frame,
        colour_mapping::palette::Palette,
        data::{pixel_buffer::PixelBuffer, pixel_size::PixelSize},
        fractals::mandelbrot::mandelbrot_config::{ConfigError, MandelbrotConfig},
        input::translator::{GestureEffect, GestureTranslator},
        viewport::{
            status::{region_text, status_text},
            viewport_state::{ViewportError, ViewportState},
        },
    },
};

/// Headless driver: scripted gestures, one frame, one file.
pub struct CliRenderController<P: FilePresenterPort> {
    presenter: P,
    viewport: ViewportState,
    translator: GestureTranslator,
    palette: Palette,
    size: PixelSize,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> CliRenderController<P> {
    pub fn new(presenter: P, config: &MandelbrotConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            presenter,
            viewport: config.initial_viewport()?,
            translator: config.translator()?,
            palette: config.palette(),
            size: config.render_size()?,
            buffer: None,
        })
    }

    #[must_use]
    pub fn viewport(&self) -> &ViewportState {
        &self.viewport
    }

    /// Applies each step in order, stopping at the first rejected one.
    pub fn apply_gestures(&mut self, steps: &[GestureStep]) -> Result<(), ViewportError> {
        let size = self.size;

        for step in steps {
            let gesture = step.gesture();

            match self.translator.apply(&mut self.viewport, gesture, size) {
                Ok(GestureEffect::Changed) => {}
                Ok(GestureEffect::Ignored) => info!("ignored {:?}", step),
                Err(err) => {
                    warn!("rejected {:?}: {}", step, err);
                    return Err(err);
                }
            }
        }

        Ok(())
    }

    pub fn generate(&mut self) {
        info!("Rendering Mandelbrot set...");
        info!("Image size: {}x{}", self.size.width(), self.size.height());
        info!("Palette: {}", self.palette.name());

        let start = Instant::now();
        let buffer = render_frame(self.viewport.snapshot(), self.size, &self.palette);

        info!("Duration: {:?}", start.elapsed());
        for line in status_text(&self.viewport)
            .lines()
            .chain(region_text(&self.viewport).lines())
        {
            info!("{}", line);
        }

        self.buffer = Some(buffer);
    }

    #[must_use]
    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        if let Some(buffer) = &self.buffer {
            self.presenter.present(buffer, &filepath)?;
            info!("Saved to {}", filepath.as_ref().display());
        }

        Ok(())
    }
}
