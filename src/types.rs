/// Scene-wide uniform data for the shader.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniform {
    pub view_proj: [[f32; 4]; 4],
    pub camera_position: [f32; 3],
    pub _pad0: f32,
    pub fog_color: [f32; 3],
    pub fog_density: f32,
}

/// The scene's fixed light rig: two directional lights and one
/// range-limited point light.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightsUniform {
    pub dir0_direction: [f32; 3],
    pub _pad0: f32,
    pub dir0_color: [f32; 3],
    pub _pad1: f32,
    pub dir1_direction: [f32; 3],
    pub _pad2: f32,
    pub dir1_color: [f32; 3],
    pub _pad3: f32,
    pub point_position: [f32; 3],
    pub point_range: f32,
    pub point_color: [f32; 3],
    pub point_intensity: f32,
}

/// Vertex data for both mesh and line pipelines.
///
/// `params` packs shininess and specular strength; a shininess of zero
/// disables lighting for the vertex.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 4],
    pub params: [f32; 2],
}

impl Vertex {
    const ATTRS: [wgpu::VertexAttribute; 4] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3, 2 => Float32x4, 3 => Float32x2];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}
