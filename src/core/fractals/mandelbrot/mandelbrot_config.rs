use crate::core::{
    colour_mapping::{factory::palette_factory, kinds::PaletteKind, palette::Palette},
    data::{
        complex_rect::{ComplexRect, ComplexRectError},
        pixel_size::{PixelSize, PixelSizeError},
    },
    input::translator::{ControlSettings, ControlSettingsError, GestureTranslator},
    viewport::viewport_state::{
        DEFAULT_MAX_ITERATIONS, DEFAULT_REGION, ViewportError, ViewportState,
    },
};
use thiserror::Error;

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    #[error("invalid initial region: {0}")]
    Region(#[from] ComplexRectError),
    #[error("invalid initial viewport: {0}")]
    Viewport(#[from] ViewportError),
    #[error("invalid controls: {0}")]
    Controls(#[from] ControlSettingsError),
    #[error("invalid render size: {0}")]
    Size(#[from] PixelSizeError),
    #[error("initial iteration bound {max_iterations} is above the iteration ceiling {ceiling}")]
    IterationsAboveCeiling { max_iterations: u32, ceiling: u32 },
}

/// Every constant fixed at startup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotConfig {
    pub region: ComplexRect,
    pub max_iterations: u32,
    pub palette_kind: PaletteKind,
    pub controls: ControlSettings,
    pub width: u32,
    pub height: u32,
}

impl Default for MandelbrotConfig {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            palette_kind: PaletteKind::default(),
            controls: ControlSettings::default(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl MandelbrotConfig {
    /// Builds a config from raw region bounds, checking them.
    pub fn with_region(
        self,
        min_re: f64,
        max_re: f64,
        min_im: f64,
        max_im: f64,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            region: ComplexRect::new(min_re, max_re, min_im, max_im)?,
            ..self
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.initial_viewport()?;
        self.render_size()?;
        self.controls.validate()?;

        let ceiling = self.controls.iteration_ceiling.unwrap_or(u32::MAX);

        if self.max_iterations > ceiling {
            return Err(ConfigError::IterationsAboveCeiling {
                max_iterations: self.max_iterations,
                ceiling,
            });
        }

        Ok(())
    }

    pub fn initial_viewport(&self) -> Result<ViewportState, ConfigError> {
        Ok(ViewportState::new(self.region, self.max_iterations)?)
    }

    pub fn render_size(&self) -> Result<PixelSize, ConfigError> {
        Ok(PixelSize::new(self.width, self.height)?)
    }

    pub fn translator(&self) -> Result<GestureTranslator, ConfigError> {
        Ok(GestureTranslator::new(self.controls)?)
    }

    #[must_use]
    pub fn palette(&self) -> Palette {
        palette_factory(self.palette_kind)
    }
}
