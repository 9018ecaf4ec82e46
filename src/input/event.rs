//! Platform-agnostic input events.
//!
//! These are fed into an [`InputCollector`](super::InputCollector), which
//! accumulates them into the per-frame snapshot a camera rig reads through
//! [`InputSource`](super::InputSource).
//!
//! # Example
//!
//! ```ignore
//! collector.begin_frame();
//! for event in window_events {
//!     collector.handle_event(event.into());
//! }
//! camera.update(&collector, dt, true);
//! ```

use serde::{Deserialize, Serialize};

/// A raw input event, decoupled from any particular windowing backend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to absolute screen position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// Mouse button pressed or released.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Scroll wheel (positive = zoom in).
    Scroll {
        /// Scroll amount (positive = zoom in, negative = zoom out).
        delta: f32,
    },
    /// Keyboard key pressed or released.
    Key {
        /// Which key changed.
        key: Key,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
}

/// Platform-agnostic mouse button identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
}

/// The subset of keyboard keys camera controls can bind to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Key {
    /// The `R` key (default camera reset).
    R,
    /// The `F` key.
    F,
    /// The `Home` key.
    Home,
    /// The space bar.
    Space,
    /// The `Escape` key.
    Escape,
    /// Left control modifier.
    ControlLeft,
    /// Right control modifier.
    ControlRight,
}

#[cfg(feature = "viewer")]
impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Right => Self::Right,
            winit::event::MouseButton::Middle => Self::Middle,
            _ => Self::Left,
        }
    }
}

#[cfg(feature = "viewer")]
impl Key {
    /// Map a winit key code to a bindable key, if it is one.
    #[must_use]
    pub fn from_key_code(code: winit::keyboard::KeyCode) -> Option<Self> {
        use winit::keyboard::KeyCode;
        match code {
            KeyCode::KeyR => Some(Self::R),
            KeyCode::KeyF => Some(Self::F),
            KeyCode::Home => Some(Self::Home),
            KeyCode::Space => Some(Self::Space),
            KeyCode::Escape => Some(Self::Escape),
            KeyCode::ControlLeft => Some(Self::ControlLeft),
            KeyCode::ControlRight => Some(Self::ControlRight),
            _ => None,
        }
    }
}
