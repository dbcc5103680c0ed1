//! Micro-rotation step tables shared by the polar solvers
//!
//! Each entry holds the sine and cosine of a halving step angle, scaled to
//! 32768. The step angles are 16, 8, 4, 2, 1 in 256ths of a turn for the
//! 8-bit solver and 64, 32, 16, 8, 4, 2, 1 in 1024ths of a turn for the
//! 10-bit solver. These are the same physical angles (16/256 of a turn is
//! 64/1024 of a turn), so one table pair serves both: the 8-bit solver
//! indexes the first five entries, the 10-bit solver all seven.
//!
//! Derivation, entry k counting from 0:
//!
//! ```text
//! SIN_STEPS[k] = round(32768 * sin(360° * 64 / (1024 * 2^k)))
//! COS_STEPS[k] = round(32768 * cos(360° * 64 / (1024 * 2^k)))
//! ```
//!
//! The rotation matrix built from entry k is a true rotation (not a CORDIC
//! pseudo-rotation), so vector length is preserved through the loop up to
//! rounding and no gain compensation step is needed.

/// 32768-scaled sines of the step angles 22.5°, 11.25°, ..., 0.35°.
pub(super) const SIN_STEPS: [i32; 7] = [12540, 6393, 3212, 1608, 804, 402, 201];

/// 32768-scaled cosines of the same step angles.
pub(super) const COS_STEPS: [i32; 7] = [30274, 32138, 32610, 32729, 32758, 32766, 32767];
