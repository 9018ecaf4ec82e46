//! Orbit/pan camera controller.
//!
//! The camera stores a minimal pose — focus point, distance, yaw, pitch,
//! optics — and re-derives its basis vectors, eye position, and the full
//! matrix set every frame. Angles are radians everywhere; degrees exist
//! only inside [`add_options_section`](OrbitCamera::add_options_section).
//!
//! Orientation convention, used uniformly by rotate, pan, position
//! recovery, and property conversion:
//!
//! ```text
//! R       = Ry(yaw) * Rx(pitch)
//! forward = R * -Z      right = R * +X      up = R * +Y
//! eye     = focus_point - forward * distance
//! ```

use std::f32::consts::PI;

use glam::{Mat4, Quat, Vec2, Vec3};

use super::core::{MatrixCache, ViewParams};
use super::properties::CameraProperties;
use super::rig::CameraRig;
use crate::input::{InputSource, Key};
use crate::options::{BindingOptions, ControlOptions};
use crate::ui::OptionsUi;
use crate::util::angle::{wrap_degrees, wrap_tau};

const RAD_PER_DEG: f32 = PI / 180.0;

/// World up axis. The rig never rolls.
const WORLD_UP: Vec3 = Vec3::Y;

// Gesture speeds. Angular speeds are radians per pixel of drag so they
// compose directly with radian-stored state.
const YAW_SPEED: f32 = 0.3 * RAD_PER_DEG;
const PITCH_SPEED: f32 = 0.3 * RAD_PER_DEG;
const ZOOM_SPEED: f32 = 0.3;
const ZOOM_SCROLL_MULTIPLIER: f32 = 2.0;
const PAN_SPEED: f32 = 500.0;

const MIN_DISTANCE: f32 = 0.001;
const MAX_DISTANCE: f32 = 10_000.0;
// Strictly inside ±90° so the look-at basis never degenerates.
const PITCH_MIN_DEG: f32 = -89.99;
const PITCH_MAX_DEG: f32 = 89.99;
const PITCH_MIN: f32 = PITCH_MIN_DEG * RAD_PER_DEG;
const PITCH_MAX: f32 = PITCH_MAX_DEG * RAD_PER_DEG;
const NEAR_MIN: f32 = 1e-5;
const NEAR_MAX: f32 = 10.0;

// Default initial pose.
const INIT_DISTANCE: f32 = 8.0;
const INIT_PITCH: f32 = -45.0 * RAD_PER_DEG;
const INIT_YAW: f32 = 315.0 * RAD_PER_DEG;
const INIT_NEAR: f32 = 0.01;
const INIT_FOV: f32 = 90.0 * RAD_PER_DEG;
const INIT_GAMMA: f32 = 2.2;
const DEFAULT_FAR: f32 = 1000.0;

/// The pose captured at construction time. [`OrbitCamera::reset`] is a
/// pure copy from this struct — never from literals.
#[derive(Debug, Clone, Copy, PartialEq)]
struct InitialPose {
    distance: f32,
    focus_point: Vec3,
    pitch: f32,
    yaw: f32,
    near: f32,
    fov: f32,
    gamma: f32,
}

/// Orbit/pan camera: orbits a focus point at a distance, derived matrices
/// rebuilt once per [`update`](Self::update).
///
/// One instance serves one viewport; multiple viewports each own their
/// own. Call `update` exactly once per frame, from the thread that owns
/// the render context, before reading the matrices for that frame.
pub struct OrbitCamera {
    distance: f32,
    focus_point: Vec3,
    /// Elevation, radians, clamped inside ±90°.
    pitch: f32,
    /// Rotation about world up, radians, wrapped to `[0, 2π)`.
    yaw: f32,
    near: f32,
    far: f32,
    fov: f32,
    gamma: f32,

    initial: InitialPose,
    matrices: MatrixCache,
    /// Last pointer-lock state requested, for edge detection.
    cursor_locked: bool,

    /// Sensitivity multipliers applied on top of the stock gesture speeds.
    pub controls: ControlOptions,
    /// Button/key bindings for the rotate/pan/reset gestures.
    pub bindings: BindingOptions,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new()
    }
}

impl OrbitCamera {
    /// Create a camera with the default initial pose.
    #[must_use]
    pub fn new() -> Self {
        Self::with_pose(
            INIT_DISTANCE,
            Vec3::ZERO,
            INIT_PITCH,
            INIT_YAW,
            INIT_NEAR,
            INIT_FOV,
        )
    }

    /// Create a camera with a specific initial pose, which also becomes
    /// the [`reset`](Self::reset) target. Angles in radians.
    #[must_use]
    pub fn with_pose(
        distance: f32,
        focus_point: Vec3,
        pitch: f32,
        yaw: f32,
        near: f32,
        fov: f32,
    ) -> Self {
        let initial = InitialPose {
            distance,
            focus_point,
            pitch,
            yaw,
            near,
            fov,
            gamma: INIT_GAMMA,
        };
        Self {
            distance,
            focus_point,
            pitch,
            yaw,
            near,
            far: DEFAULT_FAR,
            fov,
            gamma: INIT_GAMMA,
            initial,
            matrices: MatrixCache::default(),
            cursor_locked: false,
            controls: ControlOptions::default(),
            bindings: BindingOptions::default(),
        }
    }

    /// Advance the camera by one frame.
    ///
    /// Processes input (unless `controls_enabled` is `false`), applies the
    /// pose constraints, then rebuilds the matrix cache. Deterministic: an
    /// identical input snapshot yields bit-identical matrices.
    pub fn update(
        &mut self,
        input: &dyn InputSource,
        dt: f32,
        controls_enabled: bool,
    ) {
        if controls_enabled {
            self.handle_input(input, dt);
        }
        self.constrain();
        self.rebuild_matrices(input.aspect_ratio());
    }

    /// Restore the construction-time pose.
    pub fn reset(&mut self) {
        log::debug!("camera reset to initial pose");
        self.distance = self.initial.distance;
        self.focus_point = self.initial.focus_point;
        self.pitch = self.initial.pitch;
        self.yaw = self.initial.yaw;
        self.near = self.initial.near;
        self.fov = self.initial.fov;
        self.gamma = self.initial.gamma;
    }

    fn handle_input(&mut self, input: &dyn InputSource, dt: f32) {
        let ctrl_held = input.is_key_held(Key::ControlLeft)
            || input.is_key_held(Key::ControlRight);

        // Reset takes exclusive priority over drag/pan/zoom this frame.
        if input.was_key_pressed(self.bindings.reset_key) && !ctrl_held {
            self.reset();
            return;
        }

        let rotate = input.mouse_delta(self.bindings.rotate_button);
        if rotate != Vec2::ZERO {
            // Grab-and-drag: dragging right decreases yaw, dragging down
            // decreases pitch.
            self.yaw -= YAW_SPEED * self.controls.rotate_speed * rotate.x;
            self.pitch -= PITCH_SPEED * self.controls.rotate_speed * rotate.y;
        }

        let pan = input.mouse_delta(self.bindings.pan_button);
        if pan != Vec2::ZERO {
            let rotation = self.rotation();
            let right = rotation * Vec3::X;
            let up = rotation * Vec3::Y;
            // Scales with distance so screen-space drag rate feels the
            // same at every zoom level.
            let scale = PAN_SPEED * self.controls.pan_speed * dt
                * self.distance
                / input.viewport_height();
            self.focus_point += right * pan.x * scale + up * pan.y * scale;
        }

        let scroll = input.scroll_delta();
        if scroll != 0.0 {
            // Scroll up = zoom in = decrease distance.
            self.distance -= ZOOM_SCROLL_MULTIPLIER
                * ZOOM_SPEED
                * self.controls.zoom_speed
                * scroll;
        }

        let dragging = input.is_button_held(self.bindings.rotate_button)
            || input.is_button_held(self.bindings.pan_button);
        if dragging != self.cursor_locked {
            self.cursor_locked = dragging;
            input.set_cursor_locked(dragging);
        }
    }

    /// Normalize/clamp the pose. Runs every update, input or not.
    fn constrain(&mut self) {
        self.yaw = wrap_tau(self.yaw);
        self.pitch = self.pitch.clamp(PITCH_MIN, PITCH_MAX);
        self.distance = self.distance.clamp(MIN_DISTANCE, MAX_DISTANCE);
        self.near = self.near.clamp(NEAR_MIN, NEAR_MAX);
    }

    fn rebuild_matrices(&mut self, aspect: f32) {
        let params = ViewParams {
            eye: self.position(),
            target: self.focus_point,
            up: WORLD_UP,
            aspect,
            fov: self.fov,
            near: self.near,
            far: self.far,
        };
        self.matrices.rebuild(&params);
    }

    /// Orientation derived from yaw and pitch: `Ry(yaw) * Rx(pitch)`.
    fn rotation(&self) -> Quat {
        Quat::from_rotation_y(self.yaw) * Quat::from_rotation_x(self.pitch)
    }

    /// View direction under the crate's `forward = R * -Z` convention.
    fn forward(&self) -> Vec3 {
        self.rotation() * Vec3::NEG_Z
    }

    /// Current eye position, derived from the pose. Pure: valid without a
    /// prior [`update`](Self::update).
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.focus_point - self.forward() * self.distance
    }

    /// Export the pose as a portable record. Angles stay radians; no unit
    /// conversion at this boundary.
    #[must_use]
    pub fn save_properties(&self) -> CameraProperties {
        CameraProperties {
            position: self.position(),
            yaw: self.yaw,
            pitch: self.pitch,
            fov: self.fov,
            gamma: self.gamma,
            near: self.near,
        }
    }

    /// Import a pose from a portable record.
    ///
    /// The absolute position is preserved exactly; the focus/distance
    /// decomposition is deliberately lossy — the same viewpoint is
    /// reachable at any distance, and import always normalizes to
    /// `distance = 1` with the focus placed one unit ahead of the eye.
    pub fn load_properties(&mut self, props: &CameraProperties) {
        self.yaw = props.yaw;
        self.pitch = props.pitch;
        self.fov = props.fov;
        self.gamma = props.gamma;
        self.near = props.near;

        self.distance = 1.0;
        // position() computes focus - forward * distance, so placing the
        // focus at position + forward * distance makes it return
        // props.position exactly.
        self.focus_point = props.position + self.forward() * self.distance;
    }

    /// Draw the camera settings into the host's options panel.
    ///
    /// Angle widgets display degrees; conversion to/from the radian state
    /// happens only here.
    pub fn add_options_section(&mut self, ui: &mut dyn OptionsUi) {
        if !ui.collapsing_header("Camera Options") {
            return;
        }

        let _ = ui.drag_vec3("Focus Point (x,y,z)", &mut self.focus_point, 0.01);
        let _ = ui.drag_float(
            "Distance",
            &mut self.distance,
            0.01,
            MIN_DISTANCE,
            MAX_DISTANCE,
        );

        let mut pitch_degrees = self.pitch.to_degrees();
        let _ = ui.slider("Pitch", &mut pitch_degrees, PITCH_MIN_DEG, PITCH_MAX_DEG);
        self.pitch = pitch_degrees.to_radians();

        let mut yaw_degrees = self.yaw.to_degrees();
        let _ = ui.drag_float("Yaw", &mut yaw_degrees, 1.0, f32::MIN, f32::MAX);
        self.yaw = wrap_degrees(yaw_degrees).to_radians();

        let _ = ui.slider_log("Near Plane", &mut self.near, 0.001, 1.0);
        let _ = ui.slider("Far Plane", &mut self.far, 1.0, 2000.0);

        let mut fov_degrees = self.fov.to_degrees();
        let _ = ui.slider("FOV", &mut fov_degrees, 40.0, 170.0);
        self.fov = fov_degrees.to_radians();

        let _ = ui.slider("Gamma", &mut self.gamma, 1.0, 5.0);

        if ui.button("Reset (R)") {
            self.reset();
        }
    }

    /// World-to-camera transform from the last update.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        self.matrices.view
    }

    /// Camera-to-world transform from the last update.
    #[must_use]
    pub fn inverse_view_matrix(&self) -> Mat4 {
        self.matrices.inverse_view
    }

    /// Camera-to-clip transform from the last update.
    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        self.matrices.projection
    }

    /// Clip-to-camera transform from the last update.
    #[must_use]
    pub fn inverse_projection_matrix(&self) -> Mat4 {
        self.matrices.inverse_projection
    }

    /// Display gamma.
    #[must_use]
    pub fn gamma(&self) -> f32 {
        self.gamma
    }

    /// World-space focus point the camera orbits.
    #[must_use]
    pub fn focus_point(&self) -> Vec3 {
        self.focus_point
    }

    /// Distance from the focus point to the eye.
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Yaw in radians, wrapped to `[0, 2π)` as of the last update.
    #[must_use]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Pitch in radians.
    #[must_use]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Near clipping plane distance.
    #[must_use]
    pub fn near(&self) -> f32 {
        self.near
    }

    /// Vertical field of view in radians.
    #[must_use]
    pub fn fov(&self) -> f32 {
        self.fov
    }
}

impl CameraRig for OrbitCamera {
    fn update(&mut self, input: &dyn InputSource, dt: f32, controls_enabled: bool) {
        Self::update(self, input, dt, controls_enabled);
    }

    fn reset(&mut self) {
        Self::reset(self);
    }

    fn add_options_section(&mut self, ui: &mut dyn OptionsUi) {
        Self::add_options_section(self, ui);
    }

    fn save_properties(&self) -> CameraProperties {
        Self::save_properties(self)
    }

    fn load_properties(&mut self, props: &CameraProperties) {
        Self::load_properties(self, props);
    }

    fn view_matrix(&self) -> Mat4 {
        Self::view_matrix(self)
    }

    fn inverse_view_matrix(&self) -> Mat4 {
        Self::inverse_view_matrix(self)
    }

    fn projection_matrix(&self) -> Mat4 {
        Self::projection_matrix(self)
    }

    fn inverse_projection_matrix(&self) -> Mat4 {
        Self::inverse_projection_matrix(self)
    }

    fn gamma(&self) -> f32 {
        Self::gamma(self)
    }

    fn position(&self) -> Vec3 {
        Self::position(self)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::f32::consts::TAU;

    use glam::Vec2;

    use super::*;
    use crate::input::{Key, MouseButton};

    /// Scripted input source for deterministic interaction tests.
    #[derive(Default)]
    struct ScriptedInput {
        held_buttons: Vec<MouseButton>,
        held_keys: Vec<Key>,
        just_pressed: Vec<Key>,
        deltas: Vec<(MouseButton, Vec2)>,
        scroll: f32,
        viewport_height: f32,
        aspect: f32,
        lock_requests: RefCell<Vec<bool>>,
    }

    impl ScriptedInput {
        fn idle() -> Self {
            Self {
                viewport_height: 1000.0,
                aspect: 16.0 / 9.0,
                ..Self::default()
            }
        }
    }

    impl InputSource for ScriptedInput {
        fn is_button_held(&self, button: MouseButton) -> bool {
            self.held_buttons.contains(&button)
        }

        fn is_key_held(&self, key: Key) -> bool {
            self.held_keys.contains(&key)
        }

        fn was_key_pressed(&self, key: Key) -> bool {
            self.just_pressed.contains(&key)
        }

        fn mouse_delta(&self, button: MouseButton) -> Vec2 {
            self.deltas
                .iter()
                .find(|(b, _)| *b == button)
                .map_or(Vec2::ZERO, |(_, d)| *d)
        }

        fn scroll_delta(&self) -> f32 {
            self.scroll
        }

        fn viewport_height(&self) -> f32 {
            self.viewport_height
        }

        fn aspect_ratio(&self) -> f32 {
            self.aspect
        }

        fn set_cursor_locked(&self, locked: bool) {
            self.lock_requests.borrow_mut().push(locked);
        }
    }

    fn approx_vec3(a: Vec3, b: Vec3, eps: f32) -> bool {
        (a - b).length() < eps
    }

    #[test]
    fn zero_input_update_matches_analytic_position() {
        let mut cam = OrbitCamera::with_pose(
            8.0,
            Vec3::ZERO,
            (-45f32).to_radians(),
            315f32.to_radians(),
            0.01,
            90f32.to_radians(),
        );
        cam.update(&ScriptedInput::idle(), 0.016, true);

        let rotation = Quat::from_rotation_y(315f32.to_radians())
            * Quat::from_rotation_x((-45f32).to_radians());
        let forward = rotation * Vec3::NEG_Z;
        let expected = Vec3::ZERO - forward * 8.0;
        assert!(approx_vec3(cam.position(), expected, 1e-5));

        let expected_view = Mat4::look_at_rh(expected, Vec3::ZERO, Vec3::Y);
        let diff = (cam.view_matrix().to_cols_array().iter())
            .zip(expected_view.to_cols_array().iter())
            .map(|(a, b)| (a - b).abs())
            .fold(0.0f32, f32::max);
        assert!(diff < 1e-5);
    }

    #[test]
    fn negative_pitch_places_eye_above_focus() {
        let mut cam = OrbitCamera::new();
        cam.update(&ScriptedInput::idle(), 0.016, true);
        // init pitch is -45°, which is a bird's-eye vantage
        assert!(cam.position().y > cam.focus_point().y);
    }

    #[test]
    fn yaw_normalizes_into_one_turn() {
        let mut cam = OrbitCamera::new();
        let input = ScriptedInput {
            // Huge leftward drag drives yaw far negative
            held_buttons: vec![MouseButton::Right],
            deltas: vec![(MouseButton::Right, Vec2::new(5000.0, 0.0))],
            ..ScriptedInput::idle()
        };
        cam.update(&input, 0.016, true);
        assert!((0.0..TAU).contains(&cam.yaw()));
    }

    #[test]
    fn pitch_clamps_inside_gimbal_guard() {
        let mut cam = OrbitCamera::new();
        let input = ScriptedInput {
            held_buttons: vec![MouseButton::Right],
            deltas: vec![(MouseButton::Right, Vec2::new(0.0, -100_000.0))],
            ..ScriptedInput::idle()
        };
        cam.update(&input, 0.016, true);
        assert!((cam.pitch() - 89.99f32.to_radians()).abs() < 1e-5);
        // Basis stays well-conditioned at the clamp
        assert!(cam.view_matrix().is_finite());
    }

    #[test]
    fn rotate_drag_decreases_yaw_and_pitch() {
        let mut cam = OrbitCamera::with_pose(
            8.0,
            Vec3::ZERO,
            0.0,
            PI,
            0.01,
            90f32.to_radians(),
        );
        let input = ScriptedInput {
            held_buttons: vec![MouseButton::Right],
            deltas: vec![(MouseButton::Right, Vec2::new(10.0, 10.0))],
            ..ScriptedInput::idle()
        };
        cam.update(&input, 0.016, true);
        let expected_step = 0.3f32.to_radians() * 10.0;
        assert!((cam.yaw() - (PI - expected_step)).abs() < 1e-5);
        assert!((cam.pitch() - (-expected_step)).abs() < 1e-5);
    }

    #[test]
    fn pan_moves_focus_along_right_axis_only() {
        // yaw = 0, pitch = 0: right is world +X, up is world +Y
        let mut cam = OrbitCamera::with_pose(
            10.0,
            Vec3::ZERO,
            0.0,
            0.0,
            0.01,
            90f32.to_radians(),
        );
        let input = ScriptedInput {
            held_buttons: vec![MouseButton::Middle],
            deltas: vec![(MouseButton::Middle, Vec2::new(100.0, 0.0))],
            ..ScriptedInput::idle()
        };
        cam.update(&input, 0.016, true);

        let expected_shift = 500.0 * 0.016 * 10.0 / 1000.0 * 100.0;
        assert!((cam.focus_point().x - expected_shift).abs() < 1e-3);
        assert!(cam.focus_point().y.abs() < 1e-6);
        assert!(cam.focus_point().z.abs() < 1e-6);
    }

    #[test]
    fn pan_scale_tracks_distance() {
        let pan_at = |distance: f32| {
            let mut cam = OrbitCamera::with_pose(
                distance,
                Vec3::ZERO,
                0.0,
                0.0,
                0.01,
                90f32.to_radians(),
            );
            let input = ScriptedInput {
                held_buttons: vec![MouseButton::Middle],
                deltas: vec![(MouseButton::Middle, Vec2::new(50.0, 0.0))],
                ..ScriptedInput::idle()
            };
            cam.update(&input, 0.016, true);
            cam.focus_point().x
        };
        let near_shift = pan_at(2.0);
        let far_shift = pan_at(20.0);
        assert!((far_shift / near_shift - 10.0).abs() < 1e-3);
    }

    #[test]
    fn scroll_zoom_decrements_distance_exactly() {
        let mut cam = OrbitCamera::new();
        let input = ScriptedInput {
            scroll: 1.0,
            ..ScriptedInput::idle()
        };
        cam.update(&input, 0.016, true);
        assert!((cam.distance() - (8.0 - 2.0 * 0.3)).abs() < 1e-6);
    }

    #[test]
    fn zoom_clamps_at_min_distance() {
        let mut cam = OrbitCamera::new();
        let input = ScriptedInput {
            scroll: 1e6,
            ..ScriptedInput::idle()
        };
        cam.update(&input, 0.016, true);
        assert_eq!(cam.distance(), 0.001);
    }

    #[test]
    fn reset_restores_initial_pose_after_interaction() {
        let mut cam = OrbitCamera::with_pose(
            3.0,
            Vec3::new(1.0, 2.0, 3.0),
            0.2,
            1.0,
            0.05,
            60f32.to_radians(),
        );
        let before = cam.save_properties();

        // Arbitrary interaction history
        let drag = ScriptedInput {
            held_buttons: vec![MouseButton::Right, MouseButton::Middle],
            deltas: vec![
                (MouseButton::Right, Vec2::new(40.0, -17.0)),
                (MouseButton::Middle, Vec2::new(-3.0, 12.0)),
            ],
            scroll: -4.0,
            ..ScriptedInput::idle()
        };
        for _ in 0..5 {
            cam.update(&drag, 0.016, true);
        }
        assert!(!approx_vec3(cam.position(), before.position, 1e-6));

        // Reset via the bound key, then settle one frame
        let reset = ScriptedInput {
            just_pressed: vec![Key::R],
            ..ScriptedInput::idle()
        };
        cam.update(&reset, 0.016, true);

        let after = cam.save_properties();
        assert!(approx_vec3(after.position, before.position, 1e-4));
        assert!((after.yaw - before.yaw).abs() < 1e-6);
        assert!((after.pitch - before.pitch).abs() < 1e-6);
        assert_eq!(after.fov, before.fov);
        assert_eq!(after.near, before.near);
        assert_eq!(after.gamma, before.gamma);
    }

    #[test]
    fn reset_is_skipped_while_control_held() {
        let mut cam = OrbitCamera::new();
        let drag = ScriptedInput {
            held_buttons: vec![MouseButton::Right],
            deltas: vec![(MouseButton::Right, Vec2::new(30.0, 0.0))],
            ..ScriptedInput::idle()
        };
        cam.update(&drag, 0.016, true);
        let moved_yaw = cam.yaw();

        // Ctrl+R is someone else's shortcut; camera must not reset
        let input = ScriptedInput {
            just_pressed: vec![Key::R],
            held_keys: vec![Key::ControlLeft],
            ..ScriptedInput::idle()
        };
        cam.update(&input, 0.016, true);
        assert_eq!(cam.yaw(), moved_yaw);
    }

    #[test]
    fn reset_preempts_drag_in_same_frame() {
        let mut cam = OrbitCamera::new();
        let input = ScriptedInput {
            just_pressed: vec![Key::R],
            held_buttons: vec![MouseButton::Right],
            deltas: vec![(MouseButton::Right, Vec2::new(500.0, 500.0))],
            ..ScriptedInput::idle()
        };
        cam.update(&input, 0.016, true);
        assert!((cam.yaw() - 315f32.to_radians()).abs() < 1e-5);
        assert!((cam.pitch() - (-45f32).to_radians()).abs() < 1e-5);
    }

    #[test]
    fn disabled_controls_ignore_input_but_still_derive() {
        let mut cam = OrbitCamera::new();
        let input = ScriptedInput {
            held_buttons: vec![MouseButton::Right],
            deltas: vec![(MouseButton::Right, Vec2::new(100.0, 100.0))],
            scroll: 3.0,
            ..ScriptedInput::idle()
        };
        cam.update(&input, 0.016, false);
        assert!((cam.yaw() - 315f32.to_radians()).abs() < 1e-5);
        assert_eq!(cam.distance(), 8.0);
        // Matrices still rebuilt
        assert!(cam.view_matrix() != Mat4::IDENTITY);
    }

    #[test]
    fn update_is_idempotent_for_identical_input() {
        let mut cam = OrbitCamera::new();
        let idle = ScriptedInput::idle();
        cam.update(&idle, 0.016, true);
        let first_view = cam.view_matrix();
        let first_proj = cam.projection_matrix();
        cam.update(&idle, 0.016, true);
        assert_eq!(cam.view_matrix().to_cols_array(), first_view.to_cols_array());
        assert_eq!(
            cam.projection_matrix().to_cols_array(),
            first_proj.to_cols_array()
        );
    }

    #[test]
    fn pointer_lock_follows_drag_edges() {
        let mut cam = OrbitCamera::new();

        let idle = ScriptedInput::idle();
        cam.update(&idle, 0.016, true);
        assert!(idle.lock_requests.borrow().is_empty());

        let dragging = ScriptedInput {
            held_buttons: vec![MouseButton::Right],
            ..ScriptedInput::idle()
        };
        cam.update(&dragging, 0.016, true);
        cam.update(&dragging, 0.016, true);
        // Locked once on the transition, not re-requested every frame
        assert_eq!(*dragging.lock_requests.borrow(), vec![true]);

        let released = ScriptedInput::idle();
        cam.update(&released, 0.016, true);
        assert_eq!(*released.lock_requests.borrow(), vec![false]);
    }

    #[test]
    fn properties_round_trip_preserves_position_exactly() {
        let props = CameraProperties {
            position: Vec3::new(1234.5, -987.25, 0.125),
            yaw: 2.5,
            pitch: 0.4,
            fov: 1.2,
            gamma: 1.8,
            near: 0.02,
        };
        let mut cam = OrbitCamera::new();
        cam.load_properties(&props);
        let saved = cam.save_properties();

        // (focus + forward) - forward re-rounds, so allow a few ulps at
        // this magnitude
        assert!(approx_vec3(saved.position, props.position, 1e-3));
        assert_eq!(saved.yaw, props.yaw);
        assert_eq!(saved.pitch, props.pitch);
        assert_eq!(saved.fov, props.fov);
        assert_eq!(saved.gamma, props.gamma);
        assert_eq!(saved.near, props.near);
        // The documented lossy half: distance always normalizes to 1
        assert_eq!(cam.distance(), 1.0);
    }

    #[test]
    fn save_reflects_live_pose() {
        let mut cam = OrbitCamera::new();
        cam.update(&ScriptedInput::idle(), 0.016, true);
        let props = cam.save_properties();
        assert!(approx_vec3(props.position, cam.position(), 1e-6));
        assert_eq!(props.yaw, cam.yaw());
        assert_eq!(props.pitch, cam.pitch());
    }

    // ── options section / degrees boundary ────────────────────────────

    /// Recording widget surface: logs labels, optionally overrides values.
    #[derive(Default)]
    struct RecordingUi {
        open: bool,
        labels: Vec<String>,
        seen_values: Vec<(String, f32)>,
        overrides: Vec<(&'static str, f32)>,
    }

    impl OptionsUi for RecordingUi {
        fn collapsing_header(&mut self, label: &str) -> bool {
            self.labels.push(label.to_owned());
            self.open
        }

        fn drag_vec3(&mut self, label: &str, _value: &mut Vec3, _speed: f32) -> bool {
            self.labels.push(label.to_owned());
            false
        }

        fn drag_float(
            &mut self,
            label: &str,
            value: &mut f32,
            _speed: f32,
            _min: f32,
            _max: f32,
        ) -> bool {
            self.slider(label, value, 0.0, 0.0)
        }

        fn slider(
            &mut self,
            label: &str,
            value: &mut f32,
            _min: f32,
            _max: f32,
        ) -> bool {
            self.labels.push(label.to_owned());
            self.seen_values.push((label.to_owned(), *value));
            if let Some((_, v)) =
                self.overrides.iter().find(|(l, _)| *l == label)
            {
                *value = *v;
                return true;
            }
            false
        }

        fn slider_log(
            &mut self,
            label: &str,
            value: &mut f32,
            min: f32,
            max: f32,
        ) -> bool {
            self.slider(label, value, min, max)
        }

        fn button(&mut self, label: &str) -> bool {
            self.labels.push(label.to_owned());
            false
        }
    }

    #[test]
    fn closed_header_draws_nothing() {
        let mut cam = OrbitCamera::new();
        let mut ui = RecordingUi::default();
        cam.add_options_section(&mut ui);
        assert_eq!(ui.labels, vec!["Camera Options"]);
    }

    #[test]
    fn angle_widgets_speak_degrees() {
        let mut cam = OrbitCamera::new();
        let mut ui = RecordingUi {
            open: true,
            ..RecordingUi::default()
        };
        cam.add_options_section(&mut ui);

        let seen = |label: &str| {
            ui.seen_values
                .iter()
                .find(|(l, _)| l == label)
                .map(|(_, v)| *v)
        };
        // Internal state is radians; the widgets must have seen degrees
        assert!((seen("Pitch").unwrap() - (-45.0)).abs() < 1e-3);
        assert!((seen("Yaw").unwrap() - 315.0).abs() < 1e-3);
        assert!((seen("FOV").unwrap() - 90.0).abs() < 1e-3);
        // Non-angle widgets stay in native units
        assert_eq!(seen("Near Plane").unwrap(), 0.01);
        assert_eq!(seen("Gamma").unwrap(), 2.2);
    }

    #[test]
    fn ui_edits_convert_back_to_radians_and_wrap() {
        let mut cam = OrbitCamera::new();
        let mut ui = RecordingUi {
            open: true,
            overrides: vec![("Pitch", -30.0), ("Yaw", 450.0), ("FOV", 120.0)],
            ..RecordingUi::default()
        };
        cam.add_options_section(&mut ui);

        assert!((cam.pitch() - (-30f32).to_radians()).abs() < 1e-5);
        // 450° wraps to 90° at the boundary
        assert!((cam.yaw() - 90f32.to_radians()).abs() < 1e-4);
        assert!((cam.fov() - 120f32.to_radians()).abs() < 1e-5);
    }

    #[test]
    fn rig_trait_is_object_safe_and_delegates() {
        let mut cam: Box<dyn CameraRig> = Box::new(OrbitCamera::new());
        cam.update(&ScriptedInput::idle(), 0.016, true);
        let props = cam.save_properties();
        assert!(approx_vec3(props.position, cam.position(), 1e-6));
        assert_eq!(cam.gamma(), 2.2);
    }
}
