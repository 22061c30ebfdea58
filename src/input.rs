//! Window input relevant to the simulation.
//!
//! Tracks where the cursor is (the respawn point), how large the drawable
//! area is, and which keys went down since the presses were last handled.

use crate::viewport::Viewport;
use glam::Vec2;
use std::collections::HashSet;
use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Input state accumulated from winit events.
#[derive(Debug)]
pub struct Input {
    /// Cursor in physical pixels, `None` until it first enters the window
    /// and after it leaves.
    cursor: Option<Vec2>,
    window_size: (u32, u32),
    keys_held: HashSet<KeyCode>,
    keys_pressed: HashSet<KeyCode>,
}

impl Input {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            cursor: None,
            window_size: (width, height),
            keys_held: HashSet::new(),
            keys_pressed: HashSet::new(),
        }
    }

    /// Cursor position in pixels, origin at the top-left corner.
    pub fn cursor(&self) -> Option<Vec2> {
        self.cursor
    }

    pub fn window_size(&self) -> (u32, u32) {
        self.window_size
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.window_size.0, self.window_size.1)
    }

    /// Cursor in normalized device coordinates, if known.
    pub fn cursor_ndc(&self) -> Option<Vec2> {
        self.cursor.map(|c| self.viewport().to_ndc(c).truncate())
    }

    /// Whether `key` went down since the last [`clear_pressed`](Self::clear_pressed). Key repeat does not count.
    pub fn key_pressed(&self, key: KeyCode) -> bool {
        self.keys_pressed.contains(&key)
    }

    pub fn key_held(&self, key: KeyCode) -> bool {
        self.keys_held.contains(&key)
    }

    pub fn escape_pressed(&self) -> bool {
        self.key_pressed(KeyCode::Escape)
    }

    pub fn space_pressed(&self) -> bool {
        self.key_pressed(KeyCode::Space)
    }

    /// Forget which keys went down. Call once the presses have been handled.
    pub fn clear_pressed(&mut self) {
        self.keys_pressed.clear();
    }

    /// Feed a winit window event.
    pub fn handle_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(code) = event.physical_key {
                    self.key(code, event.state);
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_moved(position.x, position.y);
            }
            WindowEvent::CursorLeft { .. } => self.cursor_left(),
            WindowEvent::Resized(size) => self.resized(size.width, size.height),
            _ => {}
        }
    }

    pub(crate) fn key(&mut self, code: KeyCode, state: ElementState) {
        match state {
            ElementState::Pressed => {
                if self.keys_held.insert(code) {
                    self.keys_pressed.insert(code);
                }
            }
            ElementState::Released => {
                self.keys_held.remove(&code);
            }
        }
    }

    pub(crate) fn cursor_moved(&mut self, x: f64, y: f64) {
        self.cursor = Some(Vec2::new(x as f32, y as f32));
    }

    pub(crate) fn cursor_left(&mut self) {
        self.cursor = None;
    }

    pub(crate) fn resized(&mut self, width: u32, height: u32) {
        self.window_size = (width, height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_tracking() {
        let mut input = Input::new(800, 600);
        assert_eq!(input.cursor(), None);
        assert_eq!(input.cursor_ndc(), None);

        input.cursor_moved(400.0, 300.0);
        assert_eq!(input.cursor(), Some(Vec2::new(400.0, 300.0)));
        let ndc = input.cursor_ndc().unwrap();
        assert!(ndc.x.abs() < 1e-6 && ndc.y.abs() < 1e-6);

        input.cursor_left();
        assert_eq!(input.cursor(), None);
    }

    #[test]
    fn test_resize_updates_viewport() {
        let mut input = Input::new(800, 600);
        input.resized(1024, 768);
        assert_eq!(input.viewport(), Viewport::new(1024, 768));
    }

    #[test]
    fn test_key_pressed_once() {
        let mut input = Input::new(1, 1);
        input.key(KeyCode::Escape, ElementState::Pressed);
        assert!(input.escape_pressed());
        assert!(input.key_held(KeyCode::Escape));

        input.clear_pressed();
        // Repeat while held
        input.key(KeyCode::Escape, ElementState::Pressed);
        assert!(!input.escape_pressed());

        input.key(KeyCode::Escape, ElementState::Released);
        input.key(KeyCode::Space, ElementState::Pressed);
        assert!(!input.key_held(KeyCode::Escape));
        assert!(input.space_pressed());
    }
}
