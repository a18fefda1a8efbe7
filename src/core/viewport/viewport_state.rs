use crate::core::data::complex::Real;
use crate::core::data::complex_rect::{ComplexRect, ComplexRectError};
use crate::core::data::pixel_size::PixelSize;
use crate::core::data::point::Point;
use crate::core::viewport::region_math::{ZoomAnchor, panned_region, zoomed_region};
use thiserror::Error;

pub const DEFAULT_MAX_ITERATIONS: u32 = 128;
pub const MIN_ITERATIONS: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ViewportError {
    #[error("maximum iterations must be greater than zero")]
    ZeroMaxIterations,
    #[error("zoom factor must be finite and positive, got {factor}")]
    InvalidZoomFactor { factor: Real },
    #[error("iteration scale factor must be finite and positive, got {factor}")]
    InvalidScaleFactor { factor: f64 },
    #[error("viewport region would become invalid: {0}")]
    Region(#[from] ComplexRectError),
}

/// The whole set: [-2.5, 1] x [-1, 1].
pub const DEFAULT_REGION: ComplexRect = ComplexRect::new_unchecked(-2.5, 1.0, -1.0, 1.0);

/// Consistent copy of everything a render pass reads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportSnapshot {
    pub region: ComplexRect,
    pub max_iterations: u32,
}

/// The visible region of the plane plus the iteration bound.
///
/// Mutated only through the named operations below, each of which leaves the
/// state untouched when it fails.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportState {
    region: ComplexRect,
    max_iterations: u32,
    zoom: f64,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            zoom: 1.0,
        }
    }
}

impl ViewportState {
    pub fn new(region: ComplexRect, max_iterations: u32) -> Result<Self, ViewportError> {
        if max_iterations < MIN_ITERATIONS {
            return Err(ViewportError::ZeroMaxIterations);
        }

        Ok(Self {
            region,
            max_iterations,
            zoom: 1.0,
        })
    }

    #[must_use]
    pub fn region(&self) -> ComplexRect {
        self.region
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    /// Product of every zoom factor applied since construction. Display only.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    #[must_use]
    pub fn snapshot(&self) -> ViewportSnapshot {
        ViewportSnapshot {
            region: self.region,
            max_iterations: self.max_iterations,
        }
    }

    pub fn pan_by(&mut self, d_re: Real, d_im: Real) -> Result<(), ViewportError> {
        self.region = panned_region(self.region, d_re, d_im)?;
        Ok(())
    }

    pub fn zoom_at(
        &mut self,
        point: Point,
        size: PixelSize,
        factor: Real,
        anchor: ZoomAnchor,
    ) -> Result<(), ViewportError> {
        check_zoom_factor(factor)?;

        self.region = self.zoomed(point, size, factor, anchor)?;
        self.zoom *= factor;

        Ok(())
    }

    /// Inverse of [`zoom_at`](Self::zoom_at): the extent grows by `factor` and
    /// the accumulator is divided by it.
    pub fn zoom_out_at(
        &mut self,
        point: Point,
        size: PixelSize,
        factor: Real,
        anchor: ZoomAnchor,
    ) -> Result<(), ViewportError> {
        check_zoom_factor(factor)?;

        self.region = self.zoomed(point, size, 1.0 / factor, anchor)?;
        self.zoom /= factor;

        Ok(())
    }

    fn zoomed(
        &self,
        point: Point,
        size: PixelSize,
        scale: Real,
        anchor: ZoomAnchor,
    ) -> Result<ComplexRect, ViewportError> {
        Ok(zoomed_region(
            self.region,
            Real::from(point.x),
            Real::from(point.y),
            size,
            scale,
            anchor,
        )?)
    }

    /// Scales the iteration bound up or down, flooring and clamping at 1.
    pub fn adjust_iteration_bound(
        &mut self,
        increase: bool,
        scale_factor: f64,
    ) -> Result<(), ViewportError> {
        if !(scale_factor.is_finite() && scale_factor > 0.0) {
            return Err(ViewportError::InvalidScaleFactor {
                factor: scale_factor,
            });
        }

        let current = f64::from(self.max_iterations);
        let scaled = if increase {
            current * scale_factor
        } else {
            current / scale_factor
        };

        // float-to-int `as` saturates at u32::MAX
        self.max_iterations = (scaled.floor() as u32).max(MIN_ITERATIONS);

        Ok(())
    }

    /// Lowers the iteration bound to `ceiling` if it is above it.
    pub fn cap_iteration_bound(&mut self, ceiling: u32) {
        self.max_iterations = self.max_iterations.min(ceiling.max(MIN_ITERATIONS));
    }

    /// Returns to `initial`, dropping the accumulated zoom.
    pub fn reset_to(&mut self, initial: &ViewportState) {
        *self = *initial;
    }
}

fn check_zoom_factor(factor: Real) -> Result<(), ViewportError> {
    if factor.is_finite() && factor > 0.0 {
        Ok(())
    } else {
        Err(ViewportError::InvalidZoomFactor { factor })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CENTRE: Point = Point { x: 400, y: 300 };

    fn size(width: u32, height: u32) -> PixelSize {
        PixelSize::new(width, height).unwrap()
    }

    #[test]
    fn test_default_view() {
        let viewport = ViewportState::default();

        assert_eq!(
            viewport.region(),
            ComplexRect::new(-2.5, 1.0, -1.0, 1.0).unwrap()
        );
        assert_eq!(viewport.region(), DEFAULT_REGION);
        assert_eq!(viewport.max_iterations(), 128);
        assert_eq!(viewport.zoom(), 1.0);
    }

    #[test]
    fn test_new_rejects_zero_iterations() {
        let region = DEFAULT_REGION;

        assert_eq!(
            ViewportState::new(region, 0),
            Err(ViewportError::ZeroMaxIterations)
        );
        assert!(ViewportState::new(region, 1).is_ok());
    }

    #[test]
    fn test_snapshot_copies_region_and_bound() {
        let viewport = ViewportState::default();
        let snapshot = viewport.snapshot();

        assert_eq!(snapshot.region, viewport.region());
        assert_eq!(snapshot.max_iterations, viewport.max_iterations());
    }

    #[test]
    fn test_pan_keeps_extent() {
        let mut viewport = ViewportState::default();
        let before = viewport.region();

        viewport.pan_by(1.05, -0.6).unwrap();

        let after = viewport.region();
        assert!((after.width() - before.width()).abs() < 1e-12);
        assert!((after.height() - before.height()).abs() < 1e-12);
        assert!((after.min_re() - (before.min_re() + 1.05)).abs() < 1e-12);
        assert!((after.min_im() - (before.min_im() - 0.6)).abs() < 1e-12);
    }

    #[test]
    fn test_pan_then_inverse_restores_bit_identical_bounds() {
        let mut viewport = ViewportState::default();
        let before = viewport.region();

        viewport.pan_by(0.75, -0.5).unwrap();
        viewport.pan_by(-0.75, 0.5).unwrap();

        assert_eq!(viewport.region(), before);
        assert_eq!(
            viewport.region().min_re().to_bits(),
            before.min_re().to_bits()
        );
        assert_eq!(
            viewport.region().max_im().to_bits(),
            before.max_im().to_bits()
        );
    }

    #[test]
    fn test_zoom_at_centre_multiplies_accumulator() {
        let mut viewport = ViewportState::default();
        let grid = size(800, 600);

        viewport
            .zoom_at(CENTRE, grid, 5.0, ZoomAnchor::Recenter)
            .unwrap();

        assert_eq!(viewport.zoom(), 5.0);
        assert!((viewport.region().width() - 0.7).abs() < 1e-12);
        assert!((viewport.region().height() - 0.4).abs() < 1e-12);

        viewport
            .zoom_at(CENTRE, grid, 0.2, ZoomAnchor::Recenter)
            .unwrap();

        assert!((viewport.zoom() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_zoom_out_divides_accumulator() {
        let mut viewport = ViewportState::default();
        let grid = size(800, 600);

        for _ in 0..2 {
            viewport
                .zoom_out_at(CENTRE, grid, 5.0, ZoomAnchor::Recenter)
                .unwrap();
        }

        assert_eq!(viewport.zoom(), 0.04);
        assert!((viewport.region().width() - 87.5).abs() < 1e-9);
        assert!((viewport.region().height() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_zoom_in_then_out_restores_accumulator() {
        let mut viewport = ViewportState::default();
        let grid = size(800, 600);

        viewport
            .zoom_at(CENTRE, grid, 5.0, ZoomAnchor::Recenter)
            .unwrap();
        viewport
            .zoom_out_at(CENTRE, grid, 5.0, ZoomAnchor::Recenter)
            .unwrap();

        assert_eq!(viewport.zoom(), 1.0);
    }

    #[test]
    fn test_zoom_rejects_non_positive_factor() {
        let mut viewport = ViewportState::default();
        let before = viewport;

        let point = Point { x: 1, y: 1 };

        for factor in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let zoom_in = viewport.zoom_at(point, size(4, 4), factor, ZoomAnchor::Recenter);
            let zoom_out = viewport.zoom_out_at(point, size(4, 4), factor, ZoomAnchor::Recenter);

            assert!(matches!(zoom_in, Err(ViewportError::InvalidZoomFactor { .. })));
            assert!(matches!(zoom_out, Err(ViewportError::InvalidZoomFactor { .. })));
            assert_eq!(viewport.region(), before.region());
            assert_eq!(viewport.zoom(), before.zoom());
        }
    }

    #[test]
    fn test_zoom_that_collapses_region_is_rejected_and_state_kept() {
        let region = ComplexRect::new(1.0, 1.0 + 1e-15, 0.0, 1e-15).unwrap();
        let mut viewport = ViewportState::new(region, 64).unwrap();
        let before = viewport;

        let result = viewport.zoom_at(Point { x: 0, y: 0 }, size(4, 4), 1e6, ZoomAnchor::Recenter);

        assert!(matches!(result, Err(ViewportError::Region(_))));
        assert_eq!(viewport, before);
    }

    #[test]
    fn test_adjust_iteration_bound_doubles_and_halves() {
        let mut viewport = ViewportState::default();

        viewport.adjust_iteration_bound(true, 2.0).unwrap();
        assert_eq!(viewport.max_iterations(), 256);

        viewport.adjust_iteration_bound(false, 2.0).unwrap();
        viewport.adjust_iteration_bound(false, 2.0).unwrap();
        assert_eq!(viewport.max_iterations(), 64);
    }

    #[test]
    fn test_adjust_iteration_bound_clamps_at_one() {
        let mut viewport = ViewportState::default();

        for _ in 0..20 {
            viewport.adjust_iteration_bound(false, 2.0).unwrap();
        }

        assert_eq!(viewport.max_iterations(), 1);
    }

    #[test]
    fn test_adjust_iteration_bound_floors() {
        let mut viewport = ViewportState::new(DEFAULT_REGION, 5).unwrap();

        viewport.adjust_iteration_bound(false, 2.0).unwrap();
        assert_eq!(viewport.max_iterations(), 2);

        viewport.adjust_iteration_bound(true, 1.5).unwrap();
        assert_eq!(viewport.max_iterations(), 3);
    }

    #[test]
    fn test_adjust_iteration_bound_saturates() {
        let mut viewport = ViewportState::new(DEFAULT_REGION, u32::MAX / 2 + 1).unwrap();

        viewport.adjust_iteration_bound(true, 4.0).unwrap();

        assert_eq!(viewport.max_iterations(), u32::MAX);
    }

    #[test]
    fn test_adjust_iteration_bound_rejects_bad_scale() {
        let mut viewport = ViewportState::default();

        for factor in [0.0, -2.0, f64::NAN] {
            assert!(matches!(
                viewport.adjust_iteration_bound(true, factor),
                Err(ViewportError::InvalidScaleFactor { .. })
            ));
        }
        assert_eq!(viewport.max_iterations(), 128);
    }

    #[test]
    fn test_cap_iteration_bound() {
        let mut viewport = ViewportState::default();

        viewport.cap_iteration_bound(100);
        assert_eq!(viewport.max_iterations(), 100);

        viewport.cap_iteration_bound(1000);
        assert_eq!(viewport.max_iterations(), 100);

        viewport.cap_iteration_bound(0);
        assert_eq!(viewport.max_iterations(), 1);
    }

    #[test]
    fn test_reset_to_restores_initial_view() {
        let initial = ViewportState::default();
        let mut viewport = initial;

        viewport.pan_by(0.5, 0.5).unwrap();
        viewport
            .zoom_at(Point { x: 1, y: 2 }, size(4, 4), 5.0, ZoomAnchor::Recenter)
            .unwrap();
        viewport.adjust_iteration_bound(true, 2.0).unwrap();
        viewport.reset_to(&initial);

        assert_eq!(viewport, initial);
    }
}
