use glam::Vec3;
use orbfield::camera::Camera;
use orbfield::controls::{OrbitControls, MAX_DISTANCE};
use orbfield::frame::RenderLoop;

#[cfg(test)]
mod render_loop_tests {
    use super::*;

    #[test]
    fn test_ticks_advance_camera_diagonally() {
        let mut camera = Camera::new(1920.0, 1080.0);
        let mut controls = OrbitControls::new();
        let mut render_loop = RenderLoop::new();

        let start = camera.position;
        for _ in 0..25 {
            render_loop.tick(&mut camera, &mut controls, Vec3::ZERO);
        }

        assert_eq!(camera.position.x, start.x + 25.0, "x drifts one unit per tick");
        assert_eq!(camera.position.y, start.y + 25.0, "y drifts one unit per tick");
        assert_eq!(camera.position.z, start.z, "z never drifts");
        assert_eq!(render_loop.ticks(), 25);
    }

    #[test]
    fn test_drift_is_monotonic_and_unclamped() {
        let mut camera = Camera::new(100.0, 100.0);
        let mut controls = OrbitControls::new();
        let mut render_loop = RenderLoop::new();

        let mut last_x = camera.position.x;
        for _ in 0..5000 {
            render_loop.tick(&mut camera, &mut controls, Vec3::ZERO);
            assert!(camera.position.x > last_x, "x must keep increasing");
            last_x = camera.position.x;
        }
    }

    #[test]
    fn test_tick_reaims_at_anchor() {
        let mut camera = Camera::new(1920.0, 1080.0);
        camera.look_at(Vec3::new(9.0, 9.0, 9.0));
        let mut controls = OrbitControls::new();
        let mut render_loop = RenderLoop::new();

        let anchor = Vec3::new(1.0, 2.0, 3.0);
        render_loop.tick(&mut camera, &mut controls, anchor);
        assert_eq!(camera.target, anchor);
    }

    #[test]
    fn test_run_until_stops_at_condition() {
        let mut camera = Camera::new(800.0, 600.0);
        let mut controls = OrbitControls::new();
        let mut render_loop = RenderLoop::new();

        render_loop.run_until(&mut camera, &mut controls, Vec3::ZERO, |ticks| ticks >= 10);
        assert_eq!(render_loop.ticks(), 10, "stop condition bounds the loop");

        render_loop.run_until(&mut camera, &mut controls, Vec3::ZERO, |ticks| ticks >= 10);
        assert_eq!(render_loop.ticks(), 10, "an already-met condition runs zero ticks");
    }
}

#[cfg(test)]
mod controls_tests {
    use super::*;

    #[test]
    fn test_idle_controls_leave_camera_untouched() {
        let mut camera = Camera::new(1920.0, 1080.0);
        let before = camera.position;
        let mut controls = OrbitControls::new();

        for _ in 0..100 {
            controls.update(&mut camera);
        }
        assert_eq!(camera.position, before, "no input means no motion");
    }

    #[test]
    fn test_zoom_clamps_to_distance_limits() {
        let mut camera = Camera::new(1920.0, 1080.0);
        let mut controls = OrbitControls::new();

        controls.process_scroll(-10.0);
        controls.update(&mut camera);

        let distance = (camera.position - camera.target).length();
        assert!(
            distance <= MAX_DISTANCE + 0.001,
            "zooming must respect the distance ceiling, got {}",
            distance
        );
    }

    #[test]
    fn test_motion_damps_back_to_rest() {
        let mut camera = Camera::new(1920.0, 1080.0);
        let mut controls = OrbitControls::new();

        controls.process_mouse_button(winit::event::MouseButton::Left, true);
        controls.process_cursor(0.0, 0.0);
        controls.process_cursor(40.0, 25.0);

        assert!(!controls.is_idle(), "drag input leaves pending velocity");
        for _ in 0..200 {
            controls.update(&mut camera);
        }
        assert!(controls.is_idle(), "velocity decays to rest after input stops");
    }

    #[test]
    fn test_orbit_keeps_distance_without_zoom() {
        let mut camera = Camera::new(1000.0, 1000.0);
        let mut controls = OrbitControls::new();
        let before = (camera.position - camera.target).length();

        controls.process_mouse_button(winit::event::MouseButton::Left, true);
        controls.process_cursor(0.0, 0.0);
        controls.process_cursor(30.0, 0.0);
        controls.update(&mut camera);

        let after = (camera.position - camera.target).length();
        assert!(
            (after - before).abs() < before * 0.001,
            "pure rotation should preserve the orbit radius: {} vs {}",
            before,
            after
        );
    }
}
