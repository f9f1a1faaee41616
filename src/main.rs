use std::sync::Arc;
use std::time::Instant;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use orbfield::cli::Cli;
use orbfield::renderer::Renderer;
use orbfield::scene::{bootstrap, Stage};
use orbfield::{populate, OrbitControls, RenderLoop};

// === Constants ===

const FPS_UPDATE_INTERVAL: f32 = 1.0;
const INITIAL_WINDOW_WIDTH: u32 = 1280;
const INITIAL_WINDOW_HEIGHT: u32 = 720;

// === Application ===

struct App {
    cli: Cli,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    stage: Option<Stage>,
    controls: OrbitControls,
    render_loop: RenderLoop,
    last_frame_time: Instant,
    frame_count: u32,
    fps: f32,
    fps_update_timer: f32,
}

impl App {
    fn new(cli: Cli) -> Self {
        Self {
            cli,
            window: None,
            renderer: None,
            stage: None,
            controls: OrbitControls::new(),
            render_loop: RenderLoop::new(),
            last_frame_time: Instant::now(),
            frame_count: 0,
            fps: 0.0,
            fps_update_timer: 0.0,
        }
    }

    fn update_fps(&mut self, delta: f32) {
        self.frame_count += 1;
        self.fps_update_timer += delta;

        if self.fps_update_timer >= FPS_UPDATE_INTERVAL {
            self.fps = self.frame_count as f32 / self.fps_update_timer;
            self.frame_count = 0;
            self.fps_update_timer = 0.0;
        }
    }

    fn redraw(&mut self) {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame_time).as_secs_f32();
        self.last_frame_time = now;
        self.update_fps(delta);

        let (Some(stage), Some(renderer), Some(window)) =
            (&mut self.stage, &mut self.renderer, &self.window)
        else {
            return;
        };

        self.render_loop
            .tick(&mut stage.camera, &mut self.controls, stage.scene.anchor);

        match renderer.render(&stage.camera, window, self.fps) {
            Ok(()) => {}
            // The surface comes back on the next frame after a reconfigure.
            Err(wgpu::SurfaceError::Lost) | Err(wgpu::SurfaceError::Outdated) => {
                renderer.resize(window.inner_size());
            }
            Err(e) => log::error!("render error: {e}"),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match event_loop.create_window(
            Window::default_attributes()
                .with_title("orbfield")
                .with_inner_size(winit::dpi::LogicalSize::new(
                    INITIAL_WINDOW_WIDTH,
                    INITIAL_WINDOW_HEIGHT,
                )),
        ) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let size = window.inner_size();
        let seed = self.cli.seed.unwrap_or_else(rand::random);
        log::info!("assembling scene with seed {seed}");

        let mut stage = bootstrap(size.width as f32, size.height.max(1) as f32);
        let mut rng = StdRng::seed_from_u64(seed);
        populate(&mut stage.scene, &mut rng);

        let renderer =
            match pollster::block_on(Renderer::new(window.clone(), &stage.scene, !self.cli.no_ui))
            {
                Ok(r) => r,
                Err(e) => {
                    log::error!("failed to initialize renderer: {e:#}");
                    event_loop.exit();
                    return;
                }
            };

        self.window = Some(window);
        self.renderer = Some(renderer);
        self.stage = Some(stage);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // Let the overlay take the event first.
        if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
            if renderer.handle_event(window, &event) {
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::Resized(new_size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(new_size);
                }
                if let Some(stage) = &mut self.stage {
                    stage
                        .camera
                        .set_viewport(new_size.width as f32, new_size.height as f32);
                }
            }
            WindowEvent::MouseInput { state, button, .. } => {
                self.controls.process_mouse_button(button, state.is_pressed());
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.controls.process_cursor(position.x as f32, position.y as f32);
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let scroll = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / 50.0,
                };
                self.controls.process_scroll(scroll);
            }
            WindowEvent::RedrawRequested => self.redraw(),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let event_loop = EventLoop::new()?;
    let mut app = App::new(cli);

    println!("orbfield - drag to orbit, scroll to zoom, Escape to quit");
    event_loop.run_app(&mut app)?;

    Ok(())
}
