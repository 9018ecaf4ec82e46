//! Injected immediate-mode widget surface for options panels.
//!
//! The actual overlay library (egui, ImGui bindings, a web panel) lives in
//! the host application; cameras draw their settings section against this
//! trait so the widget toolkit stays swappable and testable.

use glam::Vec3;

/// One frame's worth of immediate-mode widgets.
///
/// Every value widget returns `true` when the user changed the value this
/// frame. Widgets mutate the bound value in place, so callers that need a
/// unit conversion (degrees at the boundary, radians internally) convert
/// before and after the call.
pub trait OptionsUi {
    /// Collapsible section header. Returns `true` when the section is open.
    fn collapsing_header(&mut self, label: &str) -> bool;

    /// Three-component drag widget (unbounded).
    fn drag_vec3(&mut self, label: &str, value: &mut Vec3, speed: f32) -> bool;

    /// Scalar drag widget clamped to `[min, max]`.
    ///
    /// Passing `f32::MIN`/`f32::MAX` leaves the drag unbounded.
    fn drag_float(
        &mut self,
        label: &str,
        value: &mut f32,
        speed: f32,
        min: f32,
        max: f32,
    ) -> bool;

    /// Linear slider over `[min, max]`.
    fn slider(&mut self, label: &str, value: &mut f32, min: f32, max: f32) -> bool;

    /// Logarithmic slider over `[min, max]`, for scale-free parameters
    /// like the near plane.
    fn slider_log(&mut self, label: &str, value: &mut f32, min: f32, max: f32) -> bool;

    /// Momentary push button. Returns `true` on the frame it is clicked.
    fn button(&mut self, label: &str) -> bool;
}
