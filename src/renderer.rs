use std::sync::Arc;

use anyhow::{Context, Result};
use bytemuck::Zeroable;
use wgpu::util::DeviceExt;
use winit::window::Window;

use crate::camera::Camera;
use crate::scene::{Light, Scene, SceneObject};
use crate::types::{LightsUniform, SceneUniform, Vertex};

pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

// === Scene Packing ===

/// CPU-side vertex streams for one static scene upload.
///
/// Opaque geometry draws first with depth writes; lines and transparent
/// geometry follow with blending and read-only depth.
#[derive(Debug, Default)]
pub struct PackedScene {
    pub opaque: Vec<Vertex>,
    pub transparent: Vec<Vertex>,
    pub lines: Vec<Vertex>,
}

/// Flattens the scene graph into vertex streams.
///
/// Mesh faces are expanded with flat per-face normals and baked through
/// each instance's placement transform; wireframe meshes contribute their
/// unique edges to the line stream.
pub fn pack_scene(scene: &Scene) -> PackedScene {
    let mut packed = PackedScene::default();

    for object in scene.objects() {
        match object {
            SceneObject::Line(line) => {
                let color = [line.color[0], line.color[1], line.color[2], line.opacity];
                for point in [line.start, line.end] {
                    packed.lines.push(Vertex {
                        position: point.to_array(),
                        normal: [0.0, 0.0, 0.0],
                        color,
                        params: [0.0, 0.0],
                    });
                }
            }
            SceneObject::Mesh(mesh) => {
                let material = &mesh.material;
                let color = [
                    material.color[0],
                    material.color[1],
                    material.color[2],
                    material.opacity,
                ];
                let params = if material.lit {
                    [material.shininess, material.specular]
                } else {
                    [0.0, 0.0]
                };

                if mesh.style == crate::scene::MeshStyle::Wireframe {
                    for (a, b) in mesh.geometry.edges() {
                        for point in [a, b] {
                            packed.lines.push(Vertex {
                                position: mesh.transform.transform_point3(point).to_array(),
                                normal: [0.0, 0.0, 0.0],
                                color,
                                params,
                            });
                        }
                    }
                } else {
                    let target = if material.is_transparent() {
                        &mut packed.transparent
                    } else {
                        &mut packed.opaque
                    };
                    for (position, normal) in mesh.geometry.flat_triangles() {
                        target.push(Vertex {
                            position: mesh.transform.transform_point3(position).to_array(),
                            normal: mesh.transform.transform_vector3(normal).to_array(),
                            color,
                            params,
                        });
                    }
                }
            }
        }
    }

    packed
}

/// Packs the scene's light rig into the shader uniform: the first two
/// directional lights and the first point light.
pub fn lights_uniform(scene: &Scene) -> LightsUniform {
    let mut uniform = LightsUniform::zeroed();
    let mut directional = 0;

    for light in scene.lights() {
        match *light {
            Light::Directional { direction, color } if directional < 2 => {
                if directional == 0 {
                    uniform.dir0_direction = direction.to_array();
                    uniform.dir0_color = color;
                } else {
                    uniform.dir1_direction = direction.to_array();
                    uniform.dir1_color = color;
                }
                directional += 1;
            }
            Light::Point {
                position,
                color,
                intensity,
                range,
            } => {
                uniform.point_position = position.to_array();
                uniform.point_color = color;
                uniform.point_intensity = intensity;
                uniform.point_range = range;
            }
            _ => {}
        }
    }

    uniform
}

// === Renderer ===

struct DrawBatch {
    buffer: wgpu::Buffer,
    count: u32,
}

impl DrawBatch {
    fn new(device: &wgpu::Device, label: &str, vertices: &[Vertex]) -> Self {
        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        Self {
            buffer,
            count: vertices.len() as u32,
        }
    }
}

/// Forward renderer for the static scene.
///
/// Geometry is uploaded once at startup; per frame only the camera
/// uniform changes.
pub struct Renderer {
    device: wgpu::Device,
    queue: wgpu::Queue,
    surface: wgpu::Surface<'static>,
    config: wgpu::SurfaceConfiguration,
    size: winit::dpi::PhysicalSize<u32>,
    depth_view: wgpu::TextureView,
    scene_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    opaque_pipeline: wgpu::RenderPipeline,
    blend_pipeline: wgpu::RenderPipeline,
    line_pipeline: wgpu::RenderPipeline,
    opaque: DrawBatch,
    transparent: DrawBatch,
    lines: DrawBatch,
    background: wgpu::Color,
    fog_color: [f32; 3],
    fog_density: f32,
    egui_renderer: egui_wgpu::Renderer,
    egui_state: egui_winit::State,
    egui_ctx: egui::Context,
    show_overlay: bool,
}

impl Renderer {
    pub async fn new(window: Arc<Window>, scene: &Scene, show_overlay: bool) -> Result<Self> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });

        let surface = instance
            .create_surface(window.clone())
            .context("create render surface")?;
        let adapter = Self::request_adapter(&instance, &surface).await?;
        let (device, queue) = Self::request_device(&adapter).await?;

        let config = Self::create_surface_config(&surface, &adapter, size);
        surface.configure(&device, &config);

        let depth_view = Self::create_depth_texture(&device, size);

        let packed = pack_scene(scene);
        log::info!(
            "scene upload: {} opaque, {} transparent, {} line vertices",
            packed.opaque.len(),
            packed.transparent.len(),
            packed.lines.len()
        );

        let opaque = DrawBatch::new(&device, "Opaque Vertices", &packed.opaque);
        let transparent = DrawBatch::new(&device, "Transparent Vertices", &packed.transparent);
        let lines = DrawBatch::new(&device, "Line Vertices", &packed.lines);

        let scene_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Scene Uniform"),
            contents: bytemuck::cast_slice(&[SceneUniform::zeroed()]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let lights_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Lights Uniform"),
            contents: bytemuck::cast_slice(&[lights_uniform(scene)]),
            usage: wgpu::BufferUsages::UNIFORM,
        });

        let (bind_group_layout, bind_group) =
            Self::create_bind_group(&device, &scene_buffer, &lights_buffer);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Scene Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("scene.wgsl").into()),
        });
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Scene Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let opaque_pipeline = Self::create_pipeline(
            &device,
            &pipeline_layout,
            &shader,
            config.format,
            wgpu::PrimitiveTopology::TriangleList,
            true,
        );
        let blend_pipeline = Self::create_pipeline(
            &device,
            &pipeline_layout,
            &shader,
            config.format,
            wgpu::PrimitiveTopology::TriangleList,
            false,
        );
        let line_pipeline = Self::create_pipeline(
            &device,
            &pipeline_layout,
            &shader,
            config.format,
            wgpu::PrimitiveTopology::LineList,
            false,
        );

        let egui_ctx = egui::Context::default();
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(
            &device,
            config.format,
            egui_wgpu::RendererOptions::default(),
        );

        let [br, bg, bb] = scene.background;

        Ok(Self {
            device,
            queue,
            surface,
            config,
            size,
            depth_view,
            scene_buffer,
            bind_group,
            opaque_pipeline,
            blend_pipeline,
            line_pipeline,
            opaque,
            transparent,
            lines,
            background: wgpu::Color {
                r: br as f64,
                g: bg as f64,
                b: bb as f64,
                a: 1.0,
            },
            fog_color: scene.fog.color,
            fog_density: scene.fog.density,
            egui_renderer,
            egui_state,
            egui_ctx,
            show_overlay,
        })
    }

    async fn request_adapter(
        instance: &wgpu::Instance,
        surface: &wgpu::Surface<'_>,
    ) -> Result<wgpu::Adapter> {
        instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(surface),
                force_fallback_adapter: false,
            })
            .await
            .context("request GPU adapter")
    }

    async fn request_device(adapter: &wgpu::Adapter) -> Result<(wgpu::Device, wgpu::Queue)> {
        adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: None,
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
                experimental_features: Default::default(),
                trace: Default::default(),
            })
            .await
            .context("request GPU device")
    }

    fn create_surface_config(
        surface: &wgpu::Surface,
        adapter: &wgpu::Adapter,
        size: winit::dpi::PhysicalSize<u32>,
    ) -> wgpu::SurfaceConfiguration {
        let surface_caps = surface.get_capabilities(adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .unwrap_or(surface_caps.formats[0]);

        wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: surface_caps.present_modes[0],
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        }
    }

    fn create_depth_texture(
        device: &wgpu::Device,
        size: winit::dpi::PhysicalSize<u32>,
    ) -> wgpu::TextureView {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Depth Texture"),
            size: wgpu::Extent3d {
                width: size.width.max(1),
                height: size.height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        texture.create_view(&wgpu::TextureViewDescriptor::default())
    }

    fn create_bind_group(
        device: &wgpu::Device,
        scene_buffer: &wgpu::Buffer,
        lights_buffer: &wgpu::Buffer,
    ) -> (wgpu::BindGroupLayout, wgpu::BindGroup) {
        let uniform_entry = |binding| wgpu::BindGroupLayoutEntry {
            binding,
            visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        };

        let layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            entries: &[uniform_entry(0), uniform_entry(1)],
            label: Some("scene_bind_group_layout"),
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: scene_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: lights_buffer.as_entire_binding(),
                },
            ],
            label: Some("scene_bind_group"),
        });

        (layout, bind_group)
    }

    fn create_pipeline(
        device: &wgpu::Device,
        layout: &wgpu::PipelineLayout,
        shader: &wgpu::ShaderModule,
        surface_format: wgpu::TextureFormat,
        topology: wgpu::PrimitiveTopology,
        depth_write: bool,
    ) -> wgpu::RenderPipeline {
        device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Scene Pipeline"),
            layout: Some(layout),
            vertex: wgpu::VertexState {
                module: shader,
                entry_point: Some("vs_main"),
                buffers: &[Vertex::layout()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: depth_write,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
            cache: None,
        })
    }

    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.size = new_size;
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
        self.depth_view = Self::create_depth_texture(&self.device, new_size);
    }

    /// One draw call against the current camera and the static scene.
    pub fn render(
        &mut self,
        camera: &Camera,
        window: &Window,
        fps: f32,
    ) -> std::result::Result<(), wgpu::SurfaceError> {
        let scene_uniform = SceneUniform {
            view_proj: camera.view_projection().to_cols_array_2d(),
            camera_position: camera.position.to_array(),
            _pad0: 0.0,
            fog_color: self.fog_color,
            fog_density: self.fog_density,
        };
        self.queue
            .write_buffer(&self.scene_buffer, 0, bytemuck::cast_slice(&[scene_uniform]));

        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Encoder"),
            });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Scene Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.background),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            pass.set_bind_group(0, &self.bind_group, &[]);

            // Opaque first with depth writes, then the blended geometry
            // against read-only depth.
            pass.set_pipeline(&self.opaque_pipeline);
            pass.set_vertex_buffer(0, self.opaque.buffer.slice(..));
            pass.draw(0..self.opaque.count, 0..1);

            pass.set_pipeline(&self.line_pipeline);
            pass.set_vertex_buffer(0, self.lines.buffer.slice(..));
            pass.draw(0..self.lines.count, 0..1);

            pass.set_pipeline(&self.blend_pipeline);
            pass.set_vertex_buffer(0, self.transparent.buffer.slice(..));
            pass.draw(0..self.transparent.count, 0..1);
        }

        if self.show_overlay {
            self.draw_overlay(window, &view, &mut encoder, fps);
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();
        Ok(())
    }

    fn draw_overlay(
        &mut self,
        window: &Window,
        view: &wgpu::TextureView,
        encoder: &mut wgpu::CommandEncoder,
        fps: f32,
    ) {
        let raw_input = self.egui_state.take_egui_input(window);
        let full_output = self.egui_ctx.run(raw_input, |ctx| {
            egui::Window::new("FPS")
                .title_bar(false)
                .resizable(false)
                .fixed_pos(egui::pos2(10.0, 10.0))
                .frame(egui::Frame::NONE)
                .show(ctx, |ui| {
                    ui.label(
                        egui::RichText::new(format!("{:.0}", fps))
                            .size(48.0)
                            .color(egui::Color32::from_rgb(217, 43, 106)),
                    );
                    ui.label(
                        egui::RichText::new("FPS")
                            .size(12.0)
                            .color(egui::Color32::GRAY),
                    );
                });
        });

        self.egui_state
            .handle_platform_output(window, full_output.platform_output);

        let tris = self
            .egui_ctx
            .tessellate(full_output.shapes, self.egui_ctx.pixels_per_point());
        for (id, image_delta) in &full_output.textures_delta.set {
            self.egui_renderer
                .update_texture(&self.device, &self.queue, *id, image_delta);
        }

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.size.width, self.size.height],
            pixels_per_point: window.scale_factor() as f32,
        };

        self.egui_renderer.update_buffers(
            &self.device,
            &self.queue,
            encoder,
            &tris,
            &screen_descriptor,
        );

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("egui Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            // SAFETY: The render pass lifetime is actually tied to the encoder,
            // but egui-wgpu requires 'static. This is safe because we drop the
            // render pass before using the encoder again.
            let render_pass_static = unsafe {
                std::mem::transmute::<&mut wgpu::RenderPass<'_>, &mut wgpu::RenderPass<'static>>(
                    &mut render_pass,
                )
            };

            self.egui_renderer
                .render(render_pass_static, &tris, &screen_descriptor);
        }

        for id in &full_output.textures_delta.free {
            self.egui_renderer.free_texture(id);
        }
    }

    /// Routes a window event through egui; true when consumed by the
    /// overlay.
    pub fn handle_event(&mut self, window: &Window, event: &winit::event::WindowEvent) -> bool {
        self.egui_state.on_window_event(window, event).consumed
    }
}
