use crate::core::data::complex::{Complex, Real};
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::pixel_size::PixelSize;
use crate::core::data::point::Point;

/// Maps a (possibly fractional) screen position onto the plane.
///
/// The map is linear and independent per axis: `x = 0` lands on `min_re` and
/// `x = width` would land on `max_re`. No aspect-ratio correction is applied.
/// Positions outside the grid extrapolate along the same line.
#[must_use]
pub fn screen_to_complex(x: Real, y: Real, size: PixelSize, region: ComplexRect) -> Complex {
    Complex {
        real: region.min_re() + region.width() * x / Real::from(size.width()),
        imag: region.min_im() + region.height() * y / Real::from(size.height()),
    }
}

#[must_use]
pub fn pixel_to_complex_coords(pixel: Point, size: PixelSize, region: ComplexRect) -> Complex {
    screen_to_complex(Real::from(pixel.x), Real::from(pixel.y), size, region)
}
