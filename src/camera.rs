use glam::{Mat4, Vec3};

pub const FOV_Y_DEGREES: f32 = 75.0;
pub const NEAR_PLANE: f32 = 1.0;
pub const FAR_PLANE: f32 = 5000.0;
/// Per-tick diagonal drift applied by the render loop.
pub const DRIFT_PER_TICK: f32 = 1.0;

/// Perspective camera.
///
/// Three writers, never concurrently: the render loop (drift + re-aim),
/// the orbit controls (damped motion) and the resize handler (aspect
/// ratio only).
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    pub fov_y: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    /// Camera for a fresh viewport: offset to half the viewport on x/y,
    /// pulled back to z = 1000.
    pub fn new(viewport_width: f32, viewport_height: f32) -> Self {
        Self {
            position: Vec3::new(viewport_width / 2.0, viewport_height / 2.0, 1000.0),
            target: Vec3::ZERO,
            fov_y: FOV_Y_DEGREES.to_radians(),
            aspect: viewport_width / viewport_height,
            near: NEAR_PLANE,
            far: FAR_PLANE,
        }
    }

    /// Resize handler: only the aspect ratio changes.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.aspect = width / height.max(1.0);
    }

    pub fn look_at(&mut self, target: Vec3) {
        self.target = target;
    }

    /// One render-loop step of the slow diagonal pan. Monotonic, never
    /// clamped or wrapped.
    pub fn advance(&mut self) {
        self.position.x += DRIFT_PER_TICK;
        self.position.y += DRIFT_PER_TICK;
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }

    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect.max(0.01), self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection() * self.view()
    }
}
