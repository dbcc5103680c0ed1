//! Rotation-mode CORDIC solver: fixed-point sine/cosine pairs
//!
//! Rotates the gain-compensated unit vector `(GAIN_RECIP, 0)` through the
//! input angle with a sequence of arctangent micro-rotations. Every
//! iteration is branch-free: the rotation direction comes from a sign mask
//! of the residual angle, so execution time does not depend on the data.
//!
//! All values use the [`UNIT`] fixed-point scale, 16384 per 1.0.

/// Fixed-point 1.0.
pub const UNIT: i32 = 16384;

/// π/2 on the [`UNIT`] scale; the convergence limit of [`sin_cos`].
pub const HALF_PI: i32 = 25736;

/// π on the [`UNIT`] scale; the fold limit of [`sin_cos_folded`].
pub const PI: i32 = 51472;

/// Largest useful iteration count; larger requests are clamped.
pub const MAX_ITERATIONS: usize = 16;

/// 16384 · 0.6072529350088813, the reciprocal of the CORDIC gain after
/// [`MAX_ITERATIONS`] pseudo-rotations. Starting from this value makes the
/// results come out magnitude-corrected with no scaling step at the end.
const GAIN_RECIP: i32 = 9949;

/// Micro-rotation angles `floor(16384 * atan(2^-k))`.
const ATAN_STEPS: [i32; MAX_ITERATIONS] = [
    12867, 7596, 4013, 2037, 1022, 511, 255, 127, 63, 31, 15, 7, 3, 1, 0, 0,
];

/// A fixed-point sine/cosine pair on the [`UNIT`] scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SinCos {
    pub sin: i32,
    pub cos: i32,
}

/// Sine and cosine of `theta`, valid for `theta` in `[-HALF_PI, HALF_PI]`.
///
/// `theta` is an angle in radians on the [`UNIT`] scale. `iterations`
/// trades accuracy for time and is clamped to [`MAX_ITERATIONS`]; 16
/// iterations resolve to within a few counts of the true values.
///
/// Angles outside the convergence range produce a mathematically wrong
/// (but well-defined) result; callers must range-reduce first, either by
/// hand or through [`sin_cos_folded`].
#[inline]
pub fn sin_cos(theta: i32, iterations: usize) -> SinCos {
    let n = iterations.min(MAX_ITERATIONS);

    let mut x = GAIN_RECIP;
    let mut y = 0;
    let mut z = theta;
    for k in 0..n {
        // d is all-zero or all-one bits from the sign of the residual
        // angle, and (v ^ d) - d is +v or -v accordingly. This keeps the
        // rotation step free of data-dependent branches.
        let d = z >> 31;
        let tx = x - (((y >> k) ^ d) - d);
        let ty = y + (((x >> k) ^ d) - d);
        let tz = z - ((ATAN_STEPS[k] ^ d) - d);
        x = tx;
        y = ty;
        z = tz;
    }

    SinCos { sin: y, cos: x }
}

/// Sine and cosine of `theta` for the full circle `[-PI, PI]`.
///
/// Folds `theta` into the convergence range of [`sin_cos`] with the mirror
/// identity `sin(π - t) = sin(t)`, `cos(π - t) = -cos(t)` before solving.
#[inline]
pub fn sin_cos_folded(theta: i32, iterations: usize) -> SinCos {
    if theta > HALF_PI {
        let r = sin_cos(PI - theta, iterations);
        SinCos {
            sin: r.sin,
            cos: -r.cos,
        }
    } else if theta < -HALF_PI {
        let r = sin_cos(-PI - theta, iterations);
        SinCos {
            sin: r.sin,
            cos: -r.cos,
        }
    } else {
        sin_cos(theta, iterations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use libm::{cos, fabs, sin};

    /// Reference sine/cosine of a fixed-point angle, on the same scale.
    fn reference(theta: i32) -> (f64, f64) {
        let t = theta as f64 / UNIT as f64;
        (sin(t) * UNIT as f64, cos(t) * UNIT as f64)
    }

    /// Worst sine or cosine error over the convergence range at `n`.
    fn max_error(n: usize) -> f64 {
        let mut worst: f64 = 0.0;
        let mut theta = -HALF_PI + 1;
        while theta < HALF_PI {
            let got = sin_cos(theta, n);
            let (s, c) = reference(theta);
            let err_s = fabs(got.sin as f64 - s);
            let err_c = fabs(got.cos as f64 - c);
            if err_s > worst {
                worst = err_s;
            }
            if err_c > worst {
                worst = err_c;
            }
            theta += 97;
        }
        worst
    }

    #[test]
    fn test_zero_angle() {
        // Truncation bias leaves the result a couple of counts off the
        // exact (0, UNIT); anything tighter than ±4 would be flaky.
        let r = sin_cos(0, 16);
        assert!(r.sin.abs() <= 4, "sin {}", r.sin);
        assert!((r.cos - UNIT).abs() <= 4, "cos {}", r.cos);
    }

    #[test]
    fn test_quarter_turn_boundaries() {
        let r = sin_cos(HALF_PI - 1, 16);
        assert!((r.sin - UNIT).abs() <= 8, "sin {}", r.sin);
        assert!(r.cos.abs() <= 8, "cos {}", r.cos);

        let r = sin_cos(-(HALF_PI - 1), 16);
        assert!((r.sin + UNIT).abs() <= 8, "sin {}", r.sin);
        assert!(r.cos.abs() <= 8, "cos {}", r.cos);
    }

    #[test]
    fn test_reference_sweep() {
        // Full-precision CORDIC stays within ~15 counts of the true values
        // across the whole convergence range.
        let mut theta = -HALF_PI + 1;
        while theta < HALF_PI {
            let got = sin_cos(theta, 16);
            let (s, c) = reference(theta);
            assert!(
                fabs(got.sin as f64 - s) <= 24.0,
                "sin {} vs {} at theta {}",
                got.sin,
                s,
                theta
            );
            assert!(
                fabs(got.cos as f64 - c) <= 24.0,
                "cos {} vs {} at theta {}",
                got.cos,
                c,
                theta
            );
            theta += 97;
        }
    }

    #[test]
    fn test_pythagorean_identity() {
        let unit_sq = (UNIT as i64) * (UNIT as i64);
        for n in [6, 8, 16] {
            let mut theta = -HALF_PI + 1;
            while theta < HALF_PI {
                let r = sin_cos(theta, n);
                let norm = (r.sin as i64) * (r.sin as i64) + (r.cos as i64) * (r.cos as i64);
                let err = (norm - unit_sq).abs();
                assert!(
                    err <= unit_sq / 400,
                    "norm error {} at theta {} n {}",
                    err,
                    theta,
                    n
                );
                theta += 97;
            }
        }
    }

    #[test]
    fn test_accuracy_improves_with_iterations() {
        // Per-angle error is not monotone in n for truncated integer
        // CORDIC, but the worst case over the range is, along a doubling
        // ladder.
        let e2 = max_error(2);
        let e4 = max_error(4);
        let e8 = max_error(8);
        let e16 = max_error(16);
        assert!(e4 <= e2, "{} > {}", e4, e2);
        assert!(e8 <= e4, "{} > {}", e8, e4);
        assert!(e16 <= e8, "{} > {}", e16, e8);
        assert!(e16 <= 24.0, "converged error {}", e16);
        assert!(e2 >= 1000.0, "two iterations cannot be this good: {}", e2);
    }

    #[test]
    fn test_iteration_count_clamps_to_table() {
        for theta in [-20000, -1, 0, 1, 12345, 25000] {
            assert_eq!(sin_cos(theta, 64), sin_cos(theta, 16), "theta {}", theta);
            assert_eq!(
                sin_cos(theta, usize::MAX),
                sin_cos(theta, MAX_ITERATIONS),
                "theta {}",
                theta
            );
        }
    }

    #[test]
    fn test_folded_full_circle() {
        let mut theta = -PI;
        while theta <= PI {
            let got = sin_cos_folded(theta, 16);
            let (s, c) = reference(theta);
            assert!(
                fabs(got.sin as f64 - s) <= 32.0,
                "sin {} vs {} at theta {}",
                got.sin,
                s,
                theta
            );
            assert!(
                fabs(got.cos as f64 - c) <= 32.0,
                "cos {} vs {} at theta {}",
                got.cos,
                c,
                theta
            );
            theta += 101;
        }
    }

    #[test]
    fn test_folded_half_turn() {
        let r = sin_cos_folded(PI, 16);
        assert!(r.sin.abs() <= 4, "sin {}", r.sin);
        assert!((r.cos + UNIT).abs() <= 4, "cos {}", r.cos);

        let r = sin_cos_folded(-PI, 16);
        assert!(r.sin.abs() <= 4, "sin {}", r.sin);
        assert!((r.cos + UNIT).abs() <= 4, "cos {}", r.cos);
    }

    #[test]
    fn test_folded_matches_plain_in_range() {
        for theta in [-HALF_PI, -12345, 0, 7, 25000, HALF_PI] {
            assert_eq!(
                sin_cos_folded(theta, 16),
                sin_cos(theta, 16),
                "theta {}",
                theta
            );
        }
    }
}
