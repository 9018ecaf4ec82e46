use serde::{Deserialize, Serialize};

use crate::input::{Key, MouseButton};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Configurable button/key bindings for camera gestures.
pub struct BindingOptions {
    /// Button held to orbit (rotate) the camera.
    pub rotate_button: MouseButton,
    /// Button held to pan the focus point.
    pub pan_button: MouseButton,
    /// Key that resets the camera to its initial pose.
    pub reset_key: Key,
}

impl Default for BindingOptions {
    fn default() -> Self {
        Self {
            rotate_button: MouseButton::Right,
            pan_button: MouseButton::Middle,
            reset_key: Key::R,
        }
    }
}
