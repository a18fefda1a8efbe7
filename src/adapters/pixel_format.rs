//! Pixel format conversion helpers for presentation adapters.

use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer};
use thiserror::Error;

pub const RGBA_BYTES_PER_PIXEL: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PixelFormatError {
    #[error("source length {0} is not a multiple of 3")]
    RaggedSource(usize),
    #[error("destination length {actual} does not match expected {expected}")]
    DestinationSize { expected: usize, actual: usize },
}

/// Copies RGB pixel data to RGBA format, setting alpha to 255.
///
/// `dst` must hold exactly four bytes for every three in `src`.
pub fn copy_rgb_to_rgba(src: &[u8], dst: &mut [u8]) -> Result<(), PixelFormatError> {
    if src.len() % BYTES_PER_PIXEL != 0 {
        return Err(PixelFormatError::RaggedSource(src.len()));
    }

    let expected = (src.len() / BYTES_PER_PIXEL) * RGBA_BYTES_PER_PIXEL;

    if dst.len() != expected {
        return Err(PixelFormatError::DestinationSize {
            expected,
            actual: dst.len(),
        });
    }

    for (src_pixel, dst_pixel) in src
        .chunks_exact(BYTES_PER_PIXEL)
        .zip(dst.chunks_exact_mut(RGBA_BYTES_PER_PIXEL))
    {
        dst_pixel[..BYTES_PER_PIXEL].copy_from_slice(src_pixel);
        dst_pixel[3] = u8::MAX;
    }

    Ok(())
}

pub fn copy_pixel_buffer_to_rgba(
    buffer: &PixelBuffer,
    dst: &mut [u8],
) -> Result<(), PixelFormatError> {
    copy_rgb_to_rgba(buffer.buffer(), dst)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::pixel_size::PixelSize;

    #[test]
    fn test_copy_rgb_to_rgba_known_values() {
        let src = vec![
            255, 0, 0, // red
            0, 255, 0, // green
            0, 0, 255, // blue
            255, 255, 255, // white
        ];
        let mut dst = vec![0; (src.len() / 3) * 4];

        copy_rgb_to_rgba(&src, &mut dst).unwrap();

        assert_eq!(
            dst,
            vec![
                255, 0, 0, 255, 0, 255, 0, 255, 0, 0, 255, 255, 255, 255, 255, 255
            ]
        );
    }

    #[test]
    fn test_copy_rgb_to_rgba_empty_buffers() {
        let src: Vec<u8> = vec![];
        let mut dst: Vec<u8> = vec![];

        copy_rgb_to_rgba(&src, &mut dst).unwrap();

        assert!(dst.is_empty());
    }

    #[test]
    fn test_copy_rgb_to_rgba_rejects_ragged_source() {
        let mut dst = vec![0; 4];

        assert_eq!(
            copy_rgb_to_rgba(&[1, 2, 3, 4], &mut dst),
            Err(PixelFormatError::RaggedSource(4))
        );
    }

    #[test]
    fn test_copy_rgb_to_rgba_rejects_wrong_destination() {
        let mut dst = vec![0; 7];

        assert_eq!(
            copy_rgb_to_rgba(&[10, 20, 30, 40, 50, 60], &mut dst),
            Err(PixelFormatError::DestinationSize {
                expected: 8,
                actual: 7
            })
        );
        assert_eq!(dst, vec![0; 7]);
    }

    #[test]
    fn test_copy_pixel_buffer_to_rgba() {
        let size = PixelSize::new(2, 1).unwrap();
        let mut buffer = PixelBuffer::new(size);
        buffer.set_pixel(1, 0, Colour::new(128, 64, 32)).unwrap();
        let mut dst = vec![0; 8];

        copy_pixel_buffer_to_rgba(&buffer, &mut dst).unwrap();

        assert_eq!(dst, vec![0, 0, 0, 255, 128, 64, 32, 255]);
    }
}
