use crate::core::data::complex::Real;
use crate::core::data::pixel_size::PixelSize;
use crate::core::input::gesture::{Gesture, PanDirection, PointerButton};
use crate::core::viewport::region_math::ZoomAnchor;
use crate::core::viewport::viewport_state::{ViewportError, ViewportState};
use log::debug;
use thiserror::Error;

pub const DEFAULT_ZOOM_FACTOR: Real = 5.0;
pub const DEFAULT_ITERATION_SCALE_FACTOR: f64 = 2.0;
pub const DEFAULT_PAN_FRACTION: Real = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ControlSettingsError {
    #[error("zoom factor must be finite and greater than zero, got {0}")]
    ZoomFactor(Real),
    #[error("iteration scale factor must be finite and greater than zero, got {0}")]
    IterationScaleFactor(f64),
    #[error("pan fraction must be in (0, 1], got {0}")]
    PanFraction(Real),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlSettings {
    pub zoom_factor: Real,
    pub iteration_scale_factor: f64,
    /// Share of the current width or height moved by one pan step.
    pub pan_fraction: Real,
    pub zoom_anchor: ZoomAnchor,
    /// Upper limit applied after every wheel step, to bound frame cost.
    pub iteration_ceiling: Option<u32>,
}

impl Default for ControlSettings {
    fn default() -> Self {
        Self {
            zoom_factor: DEFAULT_ZOOM_FACTOR,
            iteration_scale_factor: DEFAULT_ITERATION_SCALE_FACTOR,
            pan_fraction: DEFAULT_PAN_FRACTION,
            zoom_anchor: ZoomAnchor::default(),
            iteration_ceiling: None,
        }
    }
}

impl ControlSettings {
    pub fn validate(&self) -> Result<(), ControlSettingsError> {
        if !(self.zoom_factor.is_finite() && self.zoom_factor > 0.0) {
            return Err(ControlSettingsError::ZoomFactor(self.zoom_factor));
        }

        if !(self.iteration_scale_factor.is_finite() && self.iteration_scale_factor > 0.0) {
            return Err(ControlSettingsError::IterationScaleFactor(
                self.iteration_scale_factor,
            ));
        }

        if !(self.pan_fraction > 0.0 && self.pan_fraction <= 1.0) {
            return Err(ControlSettingsError::PanFraction(self.pan_fraction));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureEffect {
    Changed,
    Ignored,
}

/// Stateless mapping from gestures to viewport mutations.
#[derive(Debug, Clone, Copy)]
pub struct GestureTranslator {
    settings: ControlSettings,
}

impl GestureTranslator {
    pub fn new(settings: ControlSettings) -> Result<Self, ControlSettingsError> {
        settings.validate()?;

        Ok(Self { settings })
    }

    #[must_use]
    pub fn settings(&self) -> &ControlSettings {
        &self.settings
    }

    /// Applies one gesture. On error the viewport is left as it was.
    pub fn apply(
        &self,
        viewport: &mut ViewportState,
        gesture: Gesture,
        size: PixelSize,
    ) -> Result<GestureEffect, ViewportError> {
        let effect = match gesture {
            Gesture::Press { button, point } => {
                let factor = self.settings.zoom_factor;
                let anchor = self.settings.zoom_anchor;

                match button {
                    PointerButton::Primary => viewport.zoom_at(point, size, factor, anchor)?,
                    PointerButton::Secondary => viewport.zoom_out_at(point, size, factor, anchor)?,
                    PointerButton::Other => return Ok(GestureEffect::Ignored),
                }

                GestureEffect::Changed
            }
            Gesture::Pan(direction) => {
                let region = viewport.region();
                let step_re = region.width() * self.settings.pan_fraction;
                let step_im = region.height() * self.settings.pan_fraction;

                let (d_re, d_im) = match direction {
                    PanDirection::Left => (-step_re, 0.0),
                    PanDirection::Right => (step_re, 0.0),
                    PanDirection::Up => (0.0, -step_im),
                    PanDirection::Down => (0.0, step_im),
                };

                viewport.pan_by(d_re, d_im)?;
                GestureEffect::Changed
            }
            Gesture::Wheel { delta } => {
                if delta == 0.0 || delta.is_nan() {
                    return Ok(GestureEffect::Ignored);
                }

                let before = viewport.max_iterations();
                let scale = self.settings.iteration_scale_factor;
                viewport.adjust_iteration_bound(delta > 0.0, scale)?;

                // a step never moves the bound the wrong way, even from above the ceiling
                if let Some(ceiling) = self.settings.iteration_ceiling {
                    viewport.cap_iteration_bound(ceiling.max(before));
                }

                GestureEffect::Changed
            }
        };

        debug!(
            "applied {:?}: iterations={} zoom={}",
            gesture,
            viewport.max_iterations(),
            viewport.zoom()
        );

        Ok(effect)
    }
}
