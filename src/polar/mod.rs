//! Vectoring-mode CORDIC solvers: angle and radius of an integer vector
//!
//! Both solvers compute the equivalent of `atan2(y, x)` and `hypot(x, y)`
//! for a 2-D integer vector by folding it into the first octant and then
//! rotating it onto the positive x axis with a short sequence of
//! table-driven micro-rotations. The rotated x component is the radius;
//! the angle is recovered from the octant correction and the accumulated
//! rotation.
//!
//! The two variants differ only in resolution: [`atan2_radius8`] runs
//! 5 micro-rotations for an 8-bit angle, [`atan2_radius10`] runs 7 for a
//! 10-bit angle stretched to a 16-bit output range.

mod tables;
mod types;

use tables::{COS_STEPS, SIN_STEPS};
pub use types::{AngleRadius10, AngleRadius8};

/// Angle and radius of the vector pointing at `(x, y)`, 8-bit angle.
///
/// The angle is returned with 256 representing one full turn, so one LSB
/// is about 1.4°. The radius is the Euclidean length of the vector on the
/// same scale as the inputs.
///
/// # Preconditions
///
/// The vector magnitude must not exceed `i16::MAX` (32767). Larger vectors
/// are not rejected; they silently lose radius accuracy once the folded
/// vector no longer fits the internal scale. Accuracy also degrades for
/// very short vectors (magnitude below ~100), where input quantization
/// dominates the result.
///
/// # Returns
///
/// [`AngleRadius8`] with `angle` in 0..=255 and `radius >= 0`. The zero
/// vector yields `angle = 0, radius = 0`.
#[inline]
pub fn atan2_radius8(x: i16, y: i16) -> AngleRadius8 {
    if x == 0 && y == 0 {
        return AngleRadius8 { angle: 0, radius: 0 };
    }

    let mut x0 = x as i32;
    let mut y0 = y as i32;
    let mut angle: u8 = 0;
    let mut reflected = false;

    // Fold into the first octant, tracking the correction needed to map
    // the micro-rotation result back to the true angle. Angle arithmetic
    // is modulo one turn, 256 units.
    if y0 < 0 {
        x0 = -x0;
        y0 = -y0;
        angle = 128;
    }
    if x0 < 0 {
        let tmp = x0;
        x0 = y0;
        y0 = -tmp;
        angle = angle.wrapping_add(64);
    }
    if y0 > x0 {
        reflected = true;
        angle = angle.wrapping_add(64);
        core::mem::swap(&mut x0, &mut y0);
    }

    // Rotate the vector down onto the x axis. A step is committed only if
    // it leaves y non-negative; phi accumulates the committed step angles
    // (16, 8, 4, 2, 1 in 256ths of a turn).
    let mut phi: u8 = 0;
    let mut step: u8 = 16;
    for k in 0..5 {
        let x1 = COS_STEPS[k] * x0 + SIN_STEPS[k] * y0;
        let y1 = COS_STEPS[k] * y0 - SIN_STEPS[k] * x0;
        if y1 >= 0 {
            x0 = x1 >> 15;
            y0 = y1 >> 15;
            phi += step;
        }
        step >>= 1;
    }

    // The reflection across the 45° line mirrors the rotation direction,
    // so phi is subtracted instead of added after that fold.
    let angle = if reflected {
        angle.wrapping_sub(phi)
    } else {
        angle.wrapping_add(phi)
    };

    AngleRadius8 {
        angle,
        radius: x0 as u16,
    }
}

/// Angle and radius of the vector pointing at `(x, y)`, 10-bit angle.
///
/// Same algorithm as [`atan2_radius8`] with 7 micro-rotations and a
/// 1024-per-turn internal scale. The result is left-shifted by 6 bits so
/// 65536 represents one full turn; the extra bits carry no precision (one
/// internal LSB is about 0.35°). Preconditions as for [`atan2_radius8`].
#[inline]
pub fn atan2_radius10(x: i16, y: i16) -> AngleRadius10 {
    if x == 0 && y == 0 {
        return AngleRadius10 { angle: 0, radius: 0 };
    }

    let mut x0 = x as i32;
    let mut y0 = y as i32;
    let mut angle: u16 = 0;
    let mut reflected = false;

    if y0 < 0 {
        x0 = -x0;
        y0 = -y0;
        angle = 512;
    }
    if x0 < 0 {
        let tmp = x0;
        x0 = y0;
        y0 = -tmp;
        angle = angle.wrapping_add(256);
    }
    if y0 > x0 {
        reflected = true;
        angle = angle.wrapping_add(256);
        core::mem::swap(&mut x0, &mut y0);
    }

    let mut phi: u16 = 0;
    let mut step: u16 = 64;
    for k in 0..7 {
        let x1 = COS_STEPS[k] * x0 + SIN_STEPS[k] * y0;
        let y1 = COS_STEPS[k] * y0 - SIN_STEPS[k] * x0;
        if y1 >= 0 {
            x0 = x1 >> 15;
            y0 = y1 >> 15;
            phi += step;
        }
        step >>= 1;
    }

    let angle = if reflected {
        angle.wrapping_sub(phi)
    } else {
        angle.wrapping_add(phi)
    };

    AngleRadius10 {
        // Stretch 1024 per turn to 65536 per turn. A full turn of exactly
        // 1024 wraps to 0 here.
        angle: angle.wrapping_shl(6),
        radius: x0 as u16,
    }
}
