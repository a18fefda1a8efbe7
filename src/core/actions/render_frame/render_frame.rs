use rayon::prelude::*;

use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::complex::Real;
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer};
use crate::core::data::pixel_size::PixelSize;
use crate::core::fractals::mandelbrot::algorithm::escape_time;
use crate::core::util::pixel_to_complex_coords::screen_to_complex;
use crate::core::viewport::viewport_state::ViewportSnapshot;

fn pixel_colour<C: ColourMap + ?Sized>(
    snapshot: &ViewportSnapshot,
    size: PixelSize,
    colour_map: &C,
    x: u32,
    y: u32,
) -> Colour {
    let c = screen_to_complex(Real::from(x), Real::from(y), size, snapshot.region);
    let result = escape_time(c, snapshot.max_iterations);

    colour_map.map(result.normalized(snapshot.max_iterations))
}

fn render_row<C: ColourMap + ?Sized>(
    snapshot: &ViewportSnapshot,
    size: PixelSize,
    colour_map: &C,
    y: u32,
    row: &mut [u8],
) {
    for (x, pixel) in row.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
        let colour = pixel_colour(snapshot, size, colour_map, x as u32, y);
        pixel.copy_from_slice(&colour.to_rgb());
    }
}

/// Renders one frame, fanning rows out over rayon's pool.
///
/// Each row owns a disjoint slice of the output, so no synchronisation is
/// needed beyond waiting for every row to finish.
pub fn render_frame<C>(snapshot: ViewportSnapshot, size: PixelSize, colour_map: &C) -> PixelBuffer
where
    C: ColourMap + Sync + ?Sized,
{
    let mut buffer = PixelBuffer::new(size);
    let stride = buffer.row_stride();

    buffer
        .buffer_mut()
        .par_chunks_mut(stride)
        .enumerate()
        .for_each(|(y, row)| render_row(&snapshot, size, colour_map, y as u32, row));

    buffer
}

/// Single-threaded reference implementation of [`render_frame`].
pub fn render_frame_serial<C>(
    snapshot: ViewportSnapshot,
    size: PixelSize,
    colour_map: &C,
) -> PixelBuffer
where
    C: ColourMap + ?Sized,
{
    let mut buffer = PixelBuffer::new(size);
    let stride = buffer.row_stride();

    for (y, row) in buffer.buffer_mut().chunks_exact_mut(stride).enumerate() {
        render_row(&snapshot, size, colour_map, y as u32, row);
    }

    buffer
}
