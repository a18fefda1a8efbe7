use std::borrow::Cow;

use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use thiserror::Error;

pub const MIN_PALETTE_ANCHORS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PaletteError {
    #[error("palette needs at least 2 anchor colours, got {count}")]
    TooFewAnchors { count: usize },
}

/// Ordered anchor colours with piecewise-linear interpolation between them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    name: Cow<'static, str>,
    anchors: Cow<'static, [Colour]>,
}

impl Palette {
    pub fn new(name: impl Into<String>, anchors: Vec<Colour>) -> Result<Self, PaletteError> {
        if anchors.len() < MIN_PALETTE_ANCHORS {
            return Err(PaletteError::TooFewAnchors {
                count: anchors.len(),
            });
        }

        Ok(Self {
            name: Cow::Owned(name.into()),
            anchors: Cow::Owned(anchors),
        })
    }

    /// Wraps a built-in anchor table. `anchors` must hold at least
    /// [`MIN_PALETTE_ANCHORS`] colours.
    pub(crate) const fn from_static(name: &'static str, anchors: &'static [Colour]) -> Self {
        Self {
            name: Cow::Borrowed(name),
            anchors: Cow::Borrowed(anchors),
        }
    }

    #[must_use]
    pub fn anchors(&self) -> &[Colour] {
        &self.anchors
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Colour at position `t`, where 0 is the first anchor and 1 the last.
    ///
    /// `t` is clamped to `[0, 1]`; NaN is treated as 0.
    #[must_use]
    pub fn interpolate(&self, t: f64) -> Colour {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let last_segment = self.anchors.len() - 2;
        let scaled = t * (self.anchors.len() - 1) as f64;
        let lower = (scaled.floor() as usize).min(last_segment);
        let ratio = scaled - lower as f64;

        self.anchors[lower].lerp(self.anchors[lower + 1], ratio)
    }
}

impl ColourMap for Palette {
    fn map(&self, position: f64) -> Colour {
        self.interpolate(position)
    }

    fn display_name(&self) -> &str {
        self.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_anchor_palette() -> Palette {
        Palette::new(
            "test",
            vec![
                Colour::new(0, 0, 0),
                Colour::new(200, 100, 0),
                Colour::new(255, 255, 255),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_rejects_fewer_than_two_anchors() {
        assert_eq!(
            Palette::new("empty", vec![]),
            Err(PaletteError::TooFewAnchors { count: 0 })
        );
        assert_eq!(
            Palette::new("single", vec![Colour::BLACK]),
            Err(PaletteError::TooFewAnchors { count: 1 })
        );
    }

    #[test]
    fn test_endpoints_are_exact_anchors() {
        let palette = three_anchor_palette();

        assert_eq!(palette.interpolate(0.0), Colour::new(0, 0, 0));
        assert_eq!(palette.interpolate(1.0), Colour::new(255, 255, 255));
    }

    #[test]
    fn test_two_anchor_palette_endpoints() {
        let palette = Palette::new(
            "pair",
            vec![Colour::new(10, 20, 30), Colour::new(40, 50, 60)],
        )
        .unwrap();

        assert_eq!(palette.interpolate(0.0), Colour::new(10, 20, 30));
        assert_eq!(palette.interpolate(1.0), Colour::new(40, 50, 60));
        assert_eq!(palette.interpolate(0.5), Colour::new(25, 35, 45));
    }

    #[test]
    fn test_interior_anchor_is_hit_exactly() {
        let palette = three_anchor_palette();

        assert_eq!(palette.interpolate(0.5), Colour::new(200, 100, 0));
    }

    #[test]
    fn test_blends_within_segment() {
        let palette = three_anchor_palette();

        // scaled = 0.5 -> halfway between anchors 0 and 1
        assert_eq!(palette.interpolate(0.25), Colour::new(100, 50, 0));
        // scaled = 1.5 -> halfway between anchors 1 and 2, 127.5 rounds up
        assert_eq!(palette.interpolate(0.75), Colour::new(228, 178, 128));
    }

    #[test]
    fn test_out_of_range_positions_are_clamped() {
        let palette = three_anchor_palette();

        assert_eq!(palette.interpolate(-3.0), palette.interpolate(0.0));
        assert_eq!(palette.interpolate(7.5), palette.interpolate(1.0));
        assert_eq!(palette.interpolate(f64::NAN), palette.interpolate(0.0));
    }

    #[test]
    fn test_colour_map_port_delegates_to_interpolate() {
        let palette = three_anchor_palette();

        assert_eq!(palette.map(0.25), palette.interpolate(0.25));
        assert_eq!(palette.display_name(), "test");
    }
}
