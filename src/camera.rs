use std::f32::consts::{FRAC_PI_2, PI, TAU};
use std::time::Instant;

use glam::Vec3;

use crate::keyboard::{Direction, KeyboardLayout, MovementState};
use crate::traits::Viewpoint;

/// Closest psi may get to either pole
pub const PSI_MARGIN: f32 = 0.01;
pub const DEFAULT_ROTATION_SPEED: f32 = 0.005;
pub const DEFAULT_TRANSLATION_SPEED: f32 = 40.0;

/// How forward/backward motion follows the sight direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TranslationMode {
    /// Move along the sight direction projected on the horizontal plane
    #[default]
    Horizontal,
    /// Move along the full sight direction, pitch included
    Sight,
}

/// Construction parameters for [`CameraController`]
#[derive(Debug, Clone, Copy)]
pub struct CameraSettings {
    pub layout: KeyboardLayout,
    pub psi: f32,
    pub theta: f32,
    /// Radians per pixel of mouse motion
    pub rotation_speed: f32,
    /// World units per second
    pub translation_speed: f32,
    pub position: Vec3,
    pub mouse: (f32, f32),
    pub mode: TranslationMode,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            layout: KeyboardLayout::default(),
            psi: FRAC_PI_2 + 0.3,
            theta: 0.0,
            rotation_speed: DEFAULT_ROTATION_SPEED,
            translation_speed: DEFAULT_TRANSLATION_SPEED,
            position: Vec3::new(0.0, 25.0, -50.0),
            mouse: (0.0, 0.0),
            mode: TranslationMode::Horizontal,
        }
    }
}

/// Free-look camera on a unit sphere.
///
/// The sphere center is the camera position and the sight target is the
/// point on its surface given by the spherical angles: `theta` is the
/// azimuth around the vertical axis, `psi` the inclination from it.
#[derive(Debug, Clone)]
pub struct CameraController {
    position: Vec3,
    theta: f32,
    psi: f32,
    rotation_speed: f32,
    translation_speed: f32,
    layout: KeyboardLayout,
    mode: TranslationMode,
    movement: MovementState,
    last_mouse: (f32, f32),
    last_timestamp: Instant,
}

fn clamp_psi(psi: f32) -> f32 {
    // NaN collapses to the lower bound
    psi.max(PSI_MARGIN).min(PI - PSI_MARGIN)
}

/// Wrap into `[0, TAU)`; a non-finite angle yields `fallback`
fn wrap_theta(theta: f32, fallback: f32) -> f32 {
    if !theta.is_finite() {
        return fallback;
    }
    let wrapped = theta.rem_euclid(TAU);
    // rem_euclid rounds tiny negatives up to TAU itself
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

impl CameraController {
    pub fn new(settings: CameraSettings, start: Instant) -> Self {
        log::debug!(
            "camera at {:?}, theta {:.3}, psi {:.3}, layout {:?}, mode {:?}",
            settings.position,
            settings.theta,
            settings.psi,
            settings.layout,
            settings.mode
        );

        Self {
            position: settings.position,
            theta: wrap_theta(settings.theta, 0.0),
            psi: clamp_psi(settings.psi),
            rotation_speed: settings.rotation_speed,
            translation_speed: settings.translation_speed,
            layout: settings.layout,
            mode: settings.mode,
            movement: MovementState::default(),
            last_mouse: settings.mouse,
            last_timestamp: start,
        }
    }

    /// Record a press or release of a logical direction
    pub fn set_key_state(&mut self, direction: Direction, pressed: bool) {
        self.movement.set(direction, pressed);
    }

    /// Record a press or release of a typed key.
    ///
    /// Returns false when the key does not move the camera in this layout.
    pub fn set_key(&mut self, key: char, pressed: bool) -> bool {
        match self.layout.direction(key) {
            Some(direction) => {
                self.set_key_state(direction, pressed);
                true
            }
            None => false,
        }
    }

    /// Release every held direction, e.g. when the window loses focus
    pub fn release_all(&mut self) {
        self.movement.clear();
    }

    /// Cache the mouse position without turning the camera
    pub fn set_mouse_position(&mut self, x: f32, y: f32) {
        self.last_mouse = (x, y);
    }

    /// Turn the camera by the mouse motion since the last observed position
    pub fn rotate(&mut self, x: f32, y: f32) {
        let (last_x, last_y) = self.last_mouse;
        self.rotate_by(x - last_x, y - last_y);
        self.last_mouse = (x, y);
    }

    /// Turn the camera by a raw mouse delta in pixels
    pub fn rotate_by(&mut self, dx: f32, dy: f32) {
        self.theta = wrap_theta(self.theta + dx * self.rotation_speed, self.theta);

        let psi = self.psi + dy * self.rotation_speed;
        if !psi.is_nan() {
            self.psi = clamp_psi(psi);
        }
    }

    /// Advance the position by the motion accumulated since the last call
    pub fn integrate(&mut self, now: Instant) {
        let elapsed = now.saturating_duration_since(self.last_timestamp).as_secs_f32();
        self.last_timestamp = now;

        if self.movement.is_idle() {
            return;
        }

        let displacement: Vec3 = self.movement.held().map(|d| self.basis(d)).sum();
        self.position += displacement * (self.translation_speed * elapsed);
    }

    /// Unit displacement for one held direction in the current orientation
    fn basis(&self, direction: Direction) -> Vec3 {
        let forward = match self.mode {
            TranslationMode::Horizontal => self.horizontal_forward(),
            TranslationMode::Sight => self.sight_direction(),
        };
        let right = self.horizontal_forward().cross(Vec3::Y);

        match direction {
            Direction::Forward => forward,
            Direction::Backward => -forward,
            Direction::Right => right,
            Direction::Left => -right,
        }
    }

    fn horizontal_forward(&self) -> Vec3 {
        let (sin_theta, cos_theta) = self.theta.sin_cos();
        Vec3::new(sin_theta, 0.0, cos_theta)
    }

    /// Unit vector from the position toward the sight target
    pub fn sight_direction(&self) -> Vec3 {
        let (sin_theta, cos_theta) = self.theta.sin_cos();
        let (sin_psi, cos_psi) = self.psi.sin_cos();
        Vec3::new(sin_theta * sin_psi, cos_psi, cos_theta * sin_psi)
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Point on the unit sphere around the position the camera looks at
    pub fn sight_target(&self) -> Vec3 {
        self.position + self.sight_direction()
    }

    pub fn theta(&self) -> f32 {
        self.theta
    }

    pub fn psi(&self) -> f32 {
        self.psi
    }

    pub fn last_mouse(&self) -> (f32, f32) {
        self.last_mouse
    }

    pub fn layout(&self) -> KeyboardLayout {
        self.layout
    }

    pub fn mode(&self) -> TranslationMode {
        self.mode
    }

    pub fn is_pressed(&self, direction: Direction) -> bool {
        self.movement.is_held(direction)
    }
}

impl Viewpoint for CameraController {
    fn eye(&self) -> Vec3 {
        self.position()
    }

    fn target(&self) -> Vec3 {
        self.sight_target()
    }
}
