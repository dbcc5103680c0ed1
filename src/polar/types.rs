//! Result types for the polar solvers

/// Angle and magnitude of a 2-D integer vector at 8-bit angle resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AngleRadius8 {
    /// Vector angle; 256 represents one full turn (2π). Wraps modulo 256.
    pub angle: u8,
    /// Vector length on the same scale as the inputs.
    pub radius: u16,
}

/// Angle and magnitude of a 2-D integer vector at 10-bit angle resolution.
///
/// The angle is stretched to a 16-bit range (65536 per full turn) for
/// compatibility with callers expecting 16-bit angle units. Internal
/// resolution stays at 1024 steps per turn, so the low 6 bits of `angle`
/// are always zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AngleRadius10 {
    /// Vector angle; 65536 represents one full turn (2π). Low 6 bits are 0.
    pub angle: u16,
    /// Vector length on the same scale as the inputs.
    pub radius: u16,
}
