//! Camera system for 3D scene viewing.
//!
//! Provides an orbit/pan camera with rotation, panning, zoom, pose
//! persistence, and a trait contract shared by all camera variants.

/// View parameters and the derived matrix cache.
pub mod core;
/// Orbit/pan camera controller.
pub mod orbit;
/// Portable pose record and pose-file persistence.
pub mod properties;
/// Contract implemented by every camera variant.
pub mod rig;

pub use self::core::{MatrixCache, ViewParams};
pub use orbit::OrbitCamera;
pub use properties::CameraProperties;
pub use rig::CameraRig;
