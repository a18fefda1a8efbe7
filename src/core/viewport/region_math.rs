use crate::core::data::complex::Real;
use crate::core::data::complex_rect::{ComplexRect, ComplexRectError};
use crate::core::data::pixel_size::PixelSize;
use crate::core::util::pixel_to_complex_coords::screen_to_complex;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown zoom anchor '{0}', expected 'recenter' or 'cursor'")]
pub struct UnknownZoomAnchor(pub String);

/// Where the zoomed region is placed relative to the point under the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZoomAnchor {
    /// The point under the cursor becomes the centre of the new region.
    #[default]
    Recenter,
    /// The point under the cursor stays at the same screen position.
    KeepCursorFixed,
}

impl FromStr for ZoomAnchor {
    type Err = UnknownZoomAnchor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "recenter" | "center" => Ok(Self::Recenter),
            "cursor" | "keep-cursor-fixed" => Ok(Self::KeepCursorFixed),
            _ => Err(UnknownZoomAnchor(s.to_owned())),
        }
    }
}

pub fn panned_region(
    region: ComplexRect,
    d_re: Real,
    d_im: Real,
) -> Result<ComplexRect, ComplexRectError> {
    region.translated(d_re, d_im)
}

/// Region after zooming by `factor` around the screen point `(screen_x, screen_y)`.
///
/// `factor > 1` zooms in. The caller is responsible for rejecting
/// non-positive factors; an invalid factor surfaces here as a degenerate rect.
pub fn zoomed_region(
    region: ComplexRect,
    screen_x: Real,
    screen_y: Real,
    size: PixelSize,
    factor: Real,
    anchor: ZoomAnchor,
) -> Result<ComplexRect, ComplexRectError> {
    let focus = screen_to_complex(screen_x, screen_y, size, region);

    match anchor {
        ZoomAnchor::Recenter => {
            let half_width = region.width() / (2.0 * factor);
            let half_height = region.height() / (2.0 * factor);

            ComplexRect::from_center(focus, half_width, half_height)
        }
        ZoomAnchor::KeepCursorFixed => {
            let new_width = region.width() / factor;
            let new_height = region.height() / factor;
            let min_re = focus.real - new_width * screen_x / Real::from(size.width());
            let min_im = focus.imag - new_height * screen_y / Real::from(size.height());

            ComplexRect::new(min_re, min_re + new_width, min_im, min_im + new_height)
        }
    }
}
