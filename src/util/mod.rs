//! Small shared helpers.

/// Angle wrapping and unit-conversion helpers.
pub mod angle;
