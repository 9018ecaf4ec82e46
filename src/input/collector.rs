//! Accumulates raw platform events into per-frame input state.
//!
//! The collector is the production [`InputSource`]: the host event loop
//! calls [`begin_frame`](InputCollector::begin_frame) at the top of each
//! frame, feeds every pending [`InputEvent`] through
//! [`handle_event`](InputCollector::handle_event), then passes the
//! collector to the camera's `update`. Pointer deltas accumulate per
//! button while that button is held, so rotate and pan drags are tracked
//! independently.

use std::cell::Cell;
use std::collections::{HashMap, HashSet};

use glam::Vec2;

use super::event::{InputEvent, Key, MouseButton};
use super::source::InputSource;

/// Per-frame input accumulator implementing [`InputSource`].
pub struct InputCollector {
    /// Last seen cursor position in physical pixels.
    cursor_pos: Vec2,
    /// Buttons currently held.
    held_buttons: HashSet<MouseButton>,
    /// Cumulative per-button pointer deltas for this frame.
    deltas: HashMap<MouseButton, Vec2>,
    /// Keys currently held.
    held_keys: HashSet<Key>,
    /// Keys that went down this frame (edge set).
    just_pressed: HashSet<Key>,
    /// Scroll accumulated this frame.
    scroll: f32,
    /// Viewport size in physical pixels.
    viewport: Vec2,
    /// Pending pointer-lock request from the camera, if any.
    cursor_request: Cell<Option<bool>>,
}

impl InputCollector {
    /// Create a collector for a viewport of the given pixel size.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            cursor_pos: Vec2::ZERO,
            held_buttons: HashSet::new(),
            deltas: HashMap::new(),
            held_keys: HashSet::new(),
            just_pressed: HashSet::new(),
            scroll: 0.0,
            viewport: Vec2::new(width.max(1) as f32, height.max(1) as f32),
            cursor_request: Cell::new(None),
        }
    }

    /// Start a new frame: clear deltas, scroll, and the just-pressed edge
    /// set. Held-button and held-key state persists across frames.
    pub fn begin_frame(&mut self) {
        self.deltas.clear();
        self.just_pressed.clear();
        self.scroll = 0.0;
    }

    /// Record a viewport resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.viewport = Vec2::new(width.max(1) as f32, height.max(1) as f32);
    }

    /// Feed one raw event into the frame's accumulators.
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::CursorMoved { x, y } => {
                let pos = Vec2::new(x, y);
                let delta = pos - self.cursor_pos;
                self.cursor_pos = pos;
                for button in &self.held_buttons {
                    *self.deltas.entry(*button).or_insert(Vec2::ZERO) += delta;
                }
            }
            InputEvent::MouseButton { button, pressed } => {
                if pressed {
                    let _ = self.held_buttons.insert(button);
                } else {
                    let _ = self.held_buttons.remove(&button);
                }
            }
            InputEvent::Scroll { delta } => self.scroll += delta,
            InputEvent::Key { key, pressed } => {
                if pressed {
                    if self.held_keys.insert(key) {
                        let _ = self.just_pressed.insert(key);
                    }
                } else {
                    let _ = self.held_keys.remove(&key);
                }
            }
        }
    }

    /// Take the camera's pending pointer-lock request, if one was issued
    /// this frame. The host applies it to the window.
    pub fn take_cursor_request(&mut self) -> Option<bool> {
        self.cursor_request.take()
    }
}

impl InputSource for InputCollector {
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
        self.deltas.get(&button).copied().unwrap_or(Vec2::ZERO)
    }

    fn scroll_delta(&self) -> f32 {
        self.scroll
    }

    fn viewport_height(&self) -> f32 {
        self.viewport.y
    }

    fn aspect_ratio(&self) -> f32 {
        self.viewport.x / self.viewport.y
    }

    fn set_cursor_locked(&self, locked: bool) {
        self.cursor_request.set(Some(locked));
    }
}
