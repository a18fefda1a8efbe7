#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

fn blend_channel(from: u8, to: u8, ratio: f64) -> u8 {
    let value = (1.0 - ratio) * f64::from(from) + ratio * f64::from(to);

    value.round().clamp(0.0, 255.0) as u8
}

impl Colour {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linear blend towards `other`; `ratio` 0 gives `self`, 1 gives `other`.
    #[must_use]
    pub fn lerp(self, other: Self, ratio: f64) -> Self {
        Self {
            r: blend_channel(self.r, other.r, ratio),
            g: blend_channel(self.g, other.g, ratio),
            b: blend_channel(self.b, other.b, ratio),
        }
    }

    #[must_use]
    pub const fn to_rgb(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints_are_exact() {
        let a = Colour::new(255, 127, 0);
        let b = Colour::new(75, 0, 130);

        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
    }

    #[test]
    fn test_lerp_rounds_to_nearest() {
        // 0.5 * 255 = 127.5 rounds away from zero
        let colour = Colour::BLACK.lerp(Colour::new(255, 255, 1), 0.5);

        assert_eq!(colour, Colour::new(128, 128, 1));
    }

    #[test]
    fn test_lerp_clamps_out_of_range_ratio() {
        let colour = Colour::BLACK.lerp(Colour::new(200, 200, 200), 2.0);

        assert_eq!(colour, Colour::new(255, 255, 255));
    }

    #[test]
    fn test_to_rgb() {
        assert_eq!(Colour::new(1, 2, 3).to_rgb(), [1, 2, 3]);
    }
}
