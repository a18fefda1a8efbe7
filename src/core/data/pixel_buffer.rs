use crate::core::data::colour::Colour;
use crate::core::data::pixel_size::PixelSize;
use thiserror::Error;

pub const BYTES_PER_PIXEL: usize = 3;

fn pixel_size_to_buffer_size(size: PixelSize) -> usize {
    size.pixel_count() * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PixelBufferError {
    #[error("pixel at x:{x}, y:{y} outside of {width}x{height} buffer")]
    PixelOutsideBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
    #[error("pixel grid size {expected} does not match buffer size {actual}")]
    BoundsMismatch { expected: usize, actual: usize },
}

pub type PixelBufferData = Vec<u8>;

/// Row-major grid of packed RGB triples.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    size: PixelSize,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(size: PixelSize) -> Self {
        Self {
            size,
            buffer: vec![0; pixel_size_to_buffer_size(size)],
        }
    }

    pub fn from_data(size: PixelSize, buffer: PixelBufferData) -> Result<Self, PixelBufferError> {
        let expected = pixel_size_to_buffer_size(size);

        if expected != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                expected,
                actual: buffer.len(),
            });
        }

        Ok(Self { size, buffer })
    }

    #[must_use]
    pub fn size(&self) -> PixelSize {
        self.size
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn row_stride(&self) -> usize {
        self.size.width() as usize * BYTES_PER_PIXEL
    }

    pub(crate) fn buffer_mut(&mut self) -> &mut [u8] {
        &mut self.buffer
    }

    fn index_of(&self, x: u32, y: u32) -> Result<usize, PixelBufferError> {
        if x >= self.size.width() || y >= self.size.height() {
            return Err(PixelBufferError::PixelOutsideBounds {
                x,
                y,
                width: self.size.width(),
                height: self.size.height(),
            });
        }

        Ok(y as usize * self.row_stride() + x as usize * BYTES_PER_PIXEL)
    }

    pub fn pixel(&self, x: u32, y: u32) -> Result<Colour, PixelBufferError> {
        let index = self.index_of(x, y)?;

        Ok(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, colour: Colour) -> Result<(), PixelBufferError> {
        let index = self.index_of(x, y)?;

        self.buffer[index..index + BYTES_PER_PIXEL].copy_from_slice(&colour.to_rgb());

        Ok(())
    }

    /// Iterates over every pixel colour in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = Colour> + '_ {
        self.buffer
            .chunks_exact(BYTES_PER_PIXEL)
            .map(|rgb| Colour::new(rgb[0], rgb[1], rgb[2]))
    }
}
