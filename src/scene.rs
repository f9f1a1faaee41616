use std::sync::Arc;

use glam::{Mat4, Vec3};

use crate::camera::Camera;
use crate::geometry::MeshData;
use crate::math::rgb;

// === Scene Constants ===

/// Background and fog color.
pub const BACKDROP_COLOR: u32 = 0xFCF7E1;
/// Accent color shared by the solid orb and the tinted directional light.
pub const ACCENT_COLOR: u32 = 0xD92B6A;

pub const FOG_DENSITY: f32 = 0.0011;
pub const POINT_LIGHT_INTENSITY: f32 = 1.2;
pub const POINT_LIGHT_RANGE: f32 = 200.0;

// === Materials ===

/// Surface appearance of a mesh object.
///
/// `shininess` and `specular` only matter when `lit`; unlit materials are
/// drawn at their plain color. Specular highlights are white, scaled by
/// `specular`.
#[derive(Debug, Clone, Copy)]
pub struct Material {
    pub color: [f32; 3],
    pub opacity: f32,
    pub lit: bool,
    pub specular: f32,
    pub shininess: f32,
}

impl Material {
    /// Lit, flat-shaded material with the default dim specular.
    pub fn shaded(color: u32) -> Self {
        Self {
            color: rgb(color),
            opacity: 1.0,
            lit: true,
            specular: 0.07,
            shininess: 30.0,
        }
    }

    /// Unlit material; `opacity` below 1.0 renders translucent.
    pub fn unlit(color: u32, opacity: f32) -> Self {
        Self {
            color: rgb(color),
            opacity,
            lit: false,
            specular: 0.0,
            shininess: 0.0,
        }
    }

    pub fn with_specular(mut self, specular: f32, shininess: f32) -> Self {
        self.specular = specular;
        self.shininess = shininess;
        self
    }

    pub fn is_transparent(&self) -> bool {
        self.opacity < 1.0
    }
}

// === Lights ===

#[derive(Debug, Clone, Copy)]
pub enum Light {
    Directional {
        direction: Vec3,
        color: [f32; 3],
    },
    Point {
        position: Vec3,
        color: [f32; 3],
        intensity: f32,
        range: f32,
    },
}

/// Exponential-squared distance fog.
#[derive(Debug, Clone, Copy)]
pub struct Fog {
    pub color: [f32; 3],
    pub density: f32,
}

// === Drawables ===

/// How a mesh's faces reach the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeshStyle {
    /// Filled triangles with per-face normals.
    Fill,
    /// Edge outlines only, no filled faces.
    Wireframe,
}

/// A translucent two-point segment.
#[derive(Debug, Clone, Copy)]
pub struct LineSegment {
    pub start: Vec3,
    pub end: Vec3,
    pub color: [f32; 3],
    pub opacity: f32,
}

/// A placed mesh instance.
///
/// Geometry and material are reference-counted so instances can share
/// them. The world transform is baked once at placement; nothing
/// recomputes it afterwards.
#[derive(Debug, Clone)]
pub struct MeshObject {
    pub geometry: Arc<MeshData>,
    pub material: Arc<Material>,
    pub style: MeshStyle,
    pub position: Vec3,
    pub transform: Mat4,
    pub transform_static: bool,
}

impl MeshObject {
    pub fn new(geometry: Arc<MeshData>, material: Arc<Material>, style: MeshStyle) -> Self {
        Self {
            geometry,
            material,
            style,
            position: Vec3::ZERO,
            transform: Mat4::IDENTITY,
            transform_static: false,
        }
    }

    /// Moves the object to `position` and bakes its final transform.
    /// The instance is static from here on.
    pub fn placed_at(mut self, position: Vec3) -> Self {
        self.position = position;
        self.transform = Mat4::from_translation(position);
        self.transform_static = true;
        self
    }
}

#[derive(Debug, Clone)]
pub enum SceneObject {
    Line(LineSegment),
    Mesh(MeshObject),
}

// === Scene ===

/// The drawable collection submitted to each render call.
///
/// Objects are append-only: generation steps add to the scene and nothing
/// removes or rewrites existing entries for the life of the program.
#[derive(Debug)]
pub struct Scene {
    objects: Vec<SceneObject>,
    lights: Vec<Light>,
    pub fog: Fog,
    pub background: [f32; 3],
    /// Point the render loop re-aims the camera at every tick.
    pub anchor: Vec3,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
            lights: Vec::new(),
            fog: Fog {
                color: rgb(BACKDROP_COLOR),
                density: FOG_DENSITY,
            },
            background: rgb(BACKDROP_COLOR),
            anchor: Vec3::ZERO,
        }
    }

    pub fn add(&mut self, object: SceneObject) {
        self.objects.push(object);
    }

    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    pub fn light_count(&self) -> usize {
        self.lights.len()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

// === Bootstrap ===

/// Everything the generation steps and the render loop operate on.
pub struct Stage {
    pub scene: Scene,
    pub camera: Camera,
}

/// Sets up the scene atmosphere, lights and camera for a viewport.
///
/// Runs exactly once, before any generation step. The render surface
/// itself belongs to the renderer.
pub fn bootstrap(viewport_width: f32, viewport_height: f32) -> Stage {
    let mut scene = Scene::new();

    scene.add_light(Light::Directional {
        direction: Vec3::new(1.0, 1.0, 1.0),
        color: rgb(0xFFFFFF),
    });
    scene.add_light(Light::Directional {
        direction: Vec3::new(-5.0, -1.0, -10.0),
        color: rgb(ACCENT_COLOR),
    });
    scene.add_light(Light::Point {
        position: Vec3::new(100.0, 100.0, 100.0),
        color: rgb(0xFFFFFF),
        intensity: POINT_LIGHT_INTENSITY,
        range: POINT_LIGHT_RANGE,
    });

    let camera = Camera::new(viewport_width, viewport_height);

    Stage { scene, camera }
}
