//! The per-frame input contract camera rigs read.
//!
//! Cameras never talk to the windowing backend directly; they are handed a
//! `&dyn InputSource` each frame. The production implementation is
//! [`InputCollector`](super::InputCollector); tests substitute a scripted
//! source for deterministic interaction sequences.

use glam::Vec2;

use super::event::{Key, MouseButton};

/// Read-only view of one frame's worth of input, plus the one permitted
/// side effect (pointer lock requests).
///
/// Implementations must present a consistent snapshot: every query during a
/// single [`update`](crate::camera::OrbitCamera::update) call reflects the
/// same logical frame, with no tearing between consecutive reads.
pub trait InputSource {
    /// Whether a mouse button is currently held.
    fn is_button_held(&self, button: MouseButton) -> bool;

    /// Whether a key is currently held.
    fn is_key_held(&self, key: Key) -> bool;

    /// Whether a key was newly pressed this frame (edge, not level).
    fn was_key_pressed(&self, key: Key) -> bool;

    /// Cumulative pointer delta in pixels accumulated while `button` was
    /// held, since the last frame boundary. Zero when the button is up.
    fn mouse_delta(&self, button: MouseButton) -> Vec2;

    /// Scroll delta since the last frame boundary (positive = zoom in).
    fn scroll_delta(&self) -> f32;

    /// Viewport height in physical pixels.
    fn viewport_height(&self) -> f32;

    /// Framebuffer aspect ratio (width / height).
    fn aspect_ratio(&self) -> f32;

    /// Request the pointer be locked/hidden (`true`) or released (`false`).
    ///
    /// Fire-and-forget: the host applies it whenever convenient. Takes
    /// `&self` so cameras can issue requests mid-update; implementations
    /// use interior mutability to record it.
    fn set_cursor_locked(&self, locked: bool);
}
