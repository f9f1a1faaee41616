use glam::Vec3;

use crate::camera::Camera;
use crate::controls::OrbitControls;

/// The per-tick camera discipline of the animation loop.
///
/// Two states: not started (zero ticks) and running. Drawing itself stays
/// with the caller — the windowed binary renders after each tick, while
/// tests drive `run_until` to a deterministic stop with no display
/// surface at all.
#[derive(Debug, Default)]
pub struct RenderLoop {
    ticks: u64,
}

impl RenderLoop {
    pub fn new() -> Self {
        Self { ticks: 0 }
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// One cooperative tick: damped controls first, then the diagonal
    /// drift, then re-aim at the anchor.
    pub fn tick(&mut self, camera: &mut Camera, controls: &mut OrbitControls, anchor: Vec3) {
        controls.update(camera);
        camera.advance();
        camera.look_at(anchor);
        self.ticks += 1;
    }

    /// Ticks until `stop` returns true for the current tick count.
    pub fn run_until(
        &mut self,
        camera: &mut Camera,
        controls: &mut OrbitControls,
        anchor: Vec3,
        mut stop: impl FnMut(u64) -> bool,
    ) {
        while !stop(self.ticks) {
            self.tick(camera, controls, anchor);
        }
    }
}
