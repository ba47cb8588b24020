use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::keyboard::{Key, NamedKey};

use crate::camera::CameraController;

/// What a window event meant for the host loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    /// Camera state changed or the event was not for the camera
    Handled,
    /// The user asked to quit
    Exit,
}

/// Adapter that routes Winit window events into the camera.
///
/// Movement keys go through the camera's layout using the logical key
/// character. Cursor motion while the left button is held turns the camera;
/// motion without it only refreshes the cached mouse position so the next
/// drag starts from where the cursor actually is.
#[derive(Debug, Clone, Default)]
pub struct InputAdapter {
    dragging: bool,
    cursor_seen: bool,
}

impl InputAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a Winit WindowEvent and update the camera
    pub fn process_event(
        &mut self,
        camera: &mut CameraController,
        event: &WindowEvent,
    ) -> InputOutcome {
        match event {
            WindowEvent::CloseRequested => return InputOutcome::Exit,
            WindowEvent::KeyboardInput { event, .. } => {
                if event.logical_key == Key::Named(NamedKey::Escape) {
                    return InputOutcome::Exit;
                }
                if let Some(key) = key_char(&event.logical_key) {
                    self.key(camera, key, event.state);
                }
            }
            WindowEvent::MouseInput { state, button, .. } => self.button(*button, *state),
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor(camera, position.x as f32, position.y as f32);
            }
            WindowEvent::CursorLeft { .. } => self.cursor_seen = false,
            WindowEvent::Focused(false) => {
                self.dragging = false;
                camera.release_all();
            }
            _ => {}
        }
        InputOutcome::Handled
    }

    /// Forward a typed key to the camera
    pub fn key(&mut self, camera: &mut CameraController, key: char, state: ElementState) {
        if camera.set_key(key, state.is_pressed()) {
            log::trace!("movement key {key:?} {state:?}");
        }
    }

    pub fn button(&mut self, button: MouseButton, state: ElementState) {
        if button == MouseButton::Left {
            self.dragging = state.is_pressed();
        }
    }

    pub fn cursor(&mut self, camera: &mut CameraController, x: f32, y: f32) {
        if self.dragging && self.cursor_seen {
            camera.rotate(x, y);
        } else {
            camera.set_mouse_position(x, y);
        }
        self.cursor_seen = true;
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }
}

/// Single character carried by a logical key, if any
pub fn key_char(key: &Key) -> Option<char> {
    match key {
        Key::Character(text) => {
            let mut chars = text.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Some(c),
                _ => None,
            }
        }
        _ => None,
    }
}
