use glam::{Vec2, Vec3};
use winit::event::MouseButton;

use crate::camera::Camera;

pub const ROTATE_SPEED: f32 = 2.0;
pub const ZOOM_SPEED: f32 = 1.0;
pub const PAN_SPEED: f32 = 1.0;
pub const DAMPING_FACTOR: f32 = 0.3;
pub const MIN_DISTANCE: f32 = 600.0;
pub const MAX_DISTANCE: f32 = 1000.0;

/// Velocities below this are treated as settled.
const REST_THRESHOLD: f32 = 1.0e-4;
/// Pixels of cursor travel per radian of orbit.
const PIXELS_TO_RADIANS: f32 = 0.005;

/// Damped orbit camera controls.
///
/// Mouse input accumulates angular/zoom velocity; each tick `update`
/// applies the pending motion around the camera target and decays it by
/// the damping factor. With no pending input the camera is untouched, so
/// the render loop stays deterministic while the user is idle.
#[derive(Debug, Clone, Copy)]
pub struct OrbitControls {
    rotating: bool,
    panning: bool,
    cursor: Option<Vec2>,
    yaw_velocity: f32,
    pitch_velocity: f32,
    zoom_velocity: f32,
    pan_velocity: Vec2,
}

impl OrbitControls {
    pub fn new() -> Self {
        Self {
            rotating: false,
            panning: false,
            cursor: None,
            yaw_velocity: 0.0,
            pitch_velocity: 0.0,
            zoom_velocity: 0.0,
            pan_velocity: Vec2::ZERO,
        }
    }

    pub fn process_mouse_button(&mut self, button: MouseButton, pressed: bool) {
        match button {
            MouseButton::Left => self.rotating = pressed,
            MouseButton::Right => self.panning = pressed,
            _ => {}
        }
    }

    pub fn process_cursor(&mut self, x: f32, y: f32) {
        let pos = Vec2::new(x, y);
        if let Some(last) = self.cursor {
            let delta = pos - last;
            if self.rotating {
                self.yaw_velocity -= delta.x * PIXELS_TO_RADIANS * ROTATE_SPEED;
                self.pitch_velocity -= delta.y * PIXELS_TO_RADIANS * ROTATE_SPEED;
            } else if self.panning {
                self.pan_velocity += delta * PAN_SPEED;
            }
        }
        self.cursor = Some(pos);
    }

    pub fn process_scroll(&mut self, delta: f32) {
        self.zoom_velocity -= delta * 0.1 * ZOOM_SPEED;
    }

    pub fn is_idle(&self) -> bool {
        self.yaw_velocity.abs() < REST_THRESHOLD
            && self.pitch_velocity.abs() < REST_THRESHOLD
            && self.zoom_velocity.abs() < REST_THRESHOLD
            && self.pan_velocity.length_squared() < REST_THRESHOLD * REST_THRESHOLD
    }

    /// Applies one tick of damped motion, orbiting the camera about its
    /// target.
    pub fn update(&mut self, camera: &mut Camera) {
        if self.is_idle() {
            self.yaw_velocity = 0.0;
            self.pitch_velocity = 0.0;
            self.zoom_velocity = 0.0;
            self.pan_velocity = Vec2::ZERO;
            return;
        }

        let offset = camera.position - camera.target;
        let mut radius = offset.length();
        if radius <= f32::EPSILON {
            return;
        }

        // Spherical orbit: azimuth about world Y, polar clamped off the
        // poles so the up vector stays valid.
        let mut theta = offset.x.atan2(offset.z);
        let mut phi = (offset.y / radius).clamp(-1.0, 1.0).acos();
        theta += self.yaw_velocity;
        phi = (phi + self.pitch_velocity).clamp(0.01, std::f32::consts::PI - 0.01);

        // Distance limits only engage while a zoom is in flight.
        if self.zoom_velocity.abs() > REST_THRESHOLD {
            radius = (radius * (1.0 + self.zoom_velocity)).clamp(MIN_DISTANCE, MAX_DISTANCE);
        }

        if self.pan_velocity.length_squared() > REST_THRESHOLD * REST_THRESHOLD {
            let forward = (-offset / radius).normalize_or_zero();
            let right = forward.cross(Vec3::Y).normalize_or_zero();
            let up = right.cross(forward);
            let scale = radius * 0.001;
            camera.target += (right * -self.pan_velocity.x + up * self.pan_velocity.y) * scale;
        }

        let sin_phi = phi.sin();
        camera.position = camera.target
            + Vec3::new(
                radius * sin_phi * theta.sin(),
                radius * phi.cos(),
                radius * sin_phi * theta.cos(),
            );

        let decay = 1.0 - DAMPING_FACTOR;
        self.yaw_velocity *= decay;
        self.pitch_velocity *= decay;
        self.zoom_velocity *= decay;
        self.pan_velocity *= decay;
    }
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self::new()
    }
}
