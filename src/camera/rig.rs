//! The contract every camera variant implements.
//!
//! Re-expresses the usual "camera base class" as an object-safe trait with
//! no shared state: an orbit rig, a first-person rig, and a fixed rig can
//! all sit behind `Box<dyn CameraRig>` in a viewport.

use glam::{Mat4, Vec3};

use super::properties::CameraProperties;
use crate::input::InputSource;
use crate::ui::OptionsUi;

/// A camera rig: something that turns per-frame input into a pose and
/// exposes derived matrices plus a portable pose record.
pub trait CameraRig {
    /// Advance the rig by one frame.
    ///
    /// Must be called exactly once per frame, before the renderer reads
    /// the matrices for that frame. When `controls_enabled` is `false`
    /// input is ignored, but constraints and matrix derivation still run.
    fn update(&mut self, input: &dyn InputSource, dt: f32, controls_enabled: bool);

    /// Restore the pose captured at construction time.
    fn reset(&mut self);

    /// Draw this rig's settings into the host's options panel.
    fn add_options_section(&mut self, ui: &mut dyn OptionsUi);

    /// Export the current pose as a portable record.
    fn save_properties(&self) -> CameraProperties;

    /// Import a pose from a portable record.
    fn load_properties(&mut self, props: &CameraProperties);

    /// World-to-camera transform from the last update.
    fn view_matrix(&self) -> Mat4;

    /// Camera-to-world transform from the last update.
    fn inverse_view_matrix(&self) -> Mat4;

    /// Camera-to-clip transform from the last update.
    fn projection_matrix(&self) -> Mat4;

    /// Clip-to-camera transform from the last update.
    fn inverse_projection_matrix(&self) -> Mat4;

    /// Display gamma carried alongside the pose.
    fn gamma(&self) -> f32;

    /// Current eye position in world space.
    fn position(&self) -> Vec3;
}
