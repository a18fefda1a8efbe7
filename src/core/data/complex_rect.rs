use crate::core::data::complex::{Complex, Real};
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum ComplexRectError {
    #[error("complex rect size must be positive: {width}x{height}")]
    InvalidSize { width: Real, height: Real },
    #[error("complex rect bounds must be finite")]
    NonFiniteBounds,
}

/// Axis-aligned region of the complex plane.
///
/// Always satisfies `min_re < max_re` and `min_im < max_im`, so a value of this
/// type is never degenerate.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ComplexRect {
    min_re: Real,
    max_re: Real,
    min_im: Real,
    max_im: Real,
}

impl ComplexRect {
    pub fn new(
        min_re: Real,
        max_re: Real,
        min_im: Real,
        max_im: Real,
    ) -> Result<Self, ComplexRectError> {
        if ![min_re, max_re, min_im, max_im].iter().all(|v| v.is_finite()) {
            return Err(ComplexRectError::NonFiniteBounds);
        }

        let width = max_re - min_re;
        let height = max_im - min_im;

        // also rejects the case where the bounds are distinct but the
        // extent overflows or rounds to zero
        if !(width > 0.0 && height > 0.0) || !width.is_finite() || !height.is_finite() {
            return Err(ComplexRectError::InvalidSize { width, height });
        }

        Ok(Self {
            min_re,
            max_re,
            min_im,
            max_im,
        })
    }

    /// For compile-time constants whose bounds are known to be ordered and finite.
    pub(crate) const fn new_unchecked(
        min_re: Real,
        max_re: Real,
        min_im: Real,
        max_im: Real,
    ) -> Self {
        Self {
            min_re,
            max_re,
            min_im,
            max_im,
        }
    }

    /// Builds the rect spanning `center ± (half_width, half_height)`.
    pub fn from_center(
        center: Complex,
        half_width: Real,
        half_height: Real,
    ) -> Result<Self, ComplexRectError> {
        Self::new(
            center.real - half_width,
            center.real + half_width,
            center.imag - half_height,
            center.imag + half_height,
        )
    }

    #[must_use]
    pub fn min_re(&self) -> Real {
        self.min_re
    }

    #[must_use]
    pub fn max_re(&self) -> Real {
        self.max_re
    }

    #[must_use]
    pub fn min_im(&self) -> Real {
        self.min_im
    }

    #[must_use]
    pub fn max_im(&self) -> Real {
        self.max_im
    }

    #[must_use]
    pub fn width(&self) -> Real {
        self.max_re - self.min_re
    }

    #[must_use]
    pub fn height(&self) -> Real {
        self.max_im - self.min_im
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        Complex {
            real: self.min_re + self.width() / 2.0,
            imag: self.min_im + self.height() / 2.0,
        }
    }

    /// Shifts both bounds on each axis by the given deltas.
    pub fn translated(&self, d_re: Real, d_im: Real) -> Result<Self, ComplexRectError> {
        Self::new(
            self.min_re + d_re,
            self.max_re + d_re,
            self.min_im + d_im,
            self.max_im + d_im,
        )
    }
}
