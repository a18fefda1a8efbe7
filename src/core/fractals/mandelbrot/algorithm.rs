use crate::core::data::complex::{Complex, Real};

/// Squared escape radius; `|z| > 2` once `|z|² > 4`.
pub const ESCAPE_RADIUS_SQUARED: Real = 4.0;

/// Outcome of iterating a single point.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct EscapeTime {
    /// Index of the iteration on which `z` left the escape radius, or the
    /// iteration bound when it never did.
    pub iterations: u32,
    pub escaped: bool,
}

impl EscapeTime {
    /// Position in `[0, 1]` used to pick a palette colour.
    ///
    /// Points that never escaped sit at 0, the in-set colour.
    #[must_use]
    pub fn normalized(&self, max_iterations: u32) -> f64 {
        if !self.escaped || max_iterations == 0 {
            return 0.0;
        }

        f64::from(self.iterations) / f64::from(max_iterations)
    }
}

/// Iterates `z -> z² + c` from `z = 0` for at most `max_iterations` steps.
#[must_use]
pub fn escape_time(c: Complex, max_iterations: u32) -> EscapeTime {
    let mut z = Complex::ZERO;

    for iteration in 0..max_iterations {
        z = z * z + c;

        if z.magnitude_squared() > ESCAPE_RADIUS_SQUARED {
            return EscapeTime {
                iterations: iteration,
                escaped: true,
            };
        }
    }

    EscapeTime {
        iterations: max_iterations,
        escaped: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_never_escapes() {
        for max_iterations in [1, 2, 128, 1000] {
            let result = escape_time(Complex::ZERO, max_iterations);

            assert_eq!(
                result,
                EscapeTime {
                    iterations: max_iterations,
                    escaped: false
                }
            );
        }
    }

    #[test]
    fn test_two_escapes_on_iteration_one() {
        // z1 = 2 sits exactly on the radius, z2 = 6 is outside
        let result = escape_time(Complex::new(2.0, 0.0), 128);

        assert_eq!(
            result,
            EscapeTime {
                iterations: 1,
                escaped: true
            }
        );
    }

    #[test]
    fn test_points_outside_radius_escape_on_first_pass() {
        for c in [
            Complex::new(3.0, 0.0),
            Complex::new(-2.5, 0.0),
            Complex::new(0.0, 2.1),
            Complex::new(1.5, 1.5),
        ] {
            let result = escape_time(c, 128);

            assert!(result.escaped, "{c:?} should escape");
            assert_eq!(result.iterations, 0, "{c:?} should escape immediately");
        }
    }

    #[test]
    fn test_known_members_stay_bounded() {
        for c in [
            Complex::new(-1.0, 0.0),
            Complex::new(-0.5, 0.5),
            Complex::new(0.25, 0.0),
            Complex::new(0.0, 1.0),
        ] {
            assert!(!escape_time(c, 500).escaped, "{c:?} is in the set");
        }
    }

    #[test]
    fn test_is_deterministic() {
        let points = [
            Complex::new(-0.743643887037151, 0.131825904205330),
            Complex::new(0.3, 0.5),
            Complex::new(-1.25, 0.02),
        ];

        for c in points {
            let first = escape_time(c, 256);

            for _ in 0..10 {
                assert_eq!(escape_time(c, 256), first);
            }
        }
    }

    #[test]
    fn test_zero_bound_reports_no_escape() {
        assert_eq!(
            escape_time(Complex::new(5.0, 5.0), 0),
            EscapeTime {
                iterations: 0,
                escaped: false
            }
        );
    }

    #[test]
    fn test_normalized_maps_in_set_points_to_zero() {
        let in_set = EscapeTime {
            iterations: 128,
            escaped: false,
        };
        let escaped = EscapeTime {
            iterations: 32,
            escaped: true,
        };

        assert_eq!(in_set.normalized(128), 0.0);
        assert_eq!(escaped.normalized(128), 0.25);
    }
}
