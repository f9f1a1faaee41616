use std::collections::{HashMap, HashSet};

use glam::Vec3;

/// Indexed triangle mesh with welded vertices.
///
/// `positions` holds each vertex exactly once; `faces` index into it
/// (CCW winding, outward-facing). Generators keep this list minimal so
/// consumers that walk the vertex sequence (marker placement) see each
/// point once.
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    pub positions: Vec<Vec3>,
    pub faces: Vec<[u32; 3]>,
}

impl MeshData {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Expands the index buffer into per-face triangles with flat normals.
    ///
    /// Returns `(position, normal)` pairs, three per face, every vertex of
    /// a face carrying that face's normal.
    pub fn flat_triangles(&self) -> Vec<(Vec3, Vec3)> {
        let mut out = Vec::with_capacity(self.faces.len() * 3);
        for face in &self.faces {
            let a = self.positions[face[0] as usize];
            let b = self.positions[face[1] as usize];
            let c = self.positions[face[2] as usize];
            let normal = (b - a).cross(c - a).try_normalize().unwrap_or(Vec3::Y);
            out.push((a, normal));
            out.push((b, normal));
            out.push((c, normal));
        }
        out
    }

    /// Unique undirected edges as endpoint pairs, for wireframe rendering.
    pub fn edges(&self) -> Vec<(Vec3, Vec3)> {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for face in &self.faces {
            for (i, j) in [(0, 1), (1, 2), (2, 0)] {
                let (lo, hi) = if face[i] < face[j] {
                    (face[i], face[j])
                } else {
                    (face[j], face[i])
                };
                if seen.insert((lo, hi)) {
                    out.push((self.positions[lo as usize], self.positions[hi as usize]));
                }
            }
        }
        out
    }
}

/// Builds vertices incrementally, welding duplicates by quantized position.
struct MeshBuilder {
    mesh: MeshData,
    index: HashMap<[i32; 3], u32>,
}

impl MeshBuilder {
    fn new() -> Self {
        Self {
            mesh: MeshData::default(),
            index: HashMap::new(),
        }
    }

    fn vertex(&mut self, p: Vec3) -> u32 {
        let key = [
            (p.x * 1.0e4).round() as i32,
            (p.y * 1.0e4).round() as i32,
            (p.z * 1.0e4).round() as i32,
        ];
        if let Some(&index) = self.index.get(&key) {
            return index;
        }
        let index = self.mesh.positions.len() as u32;
        self.mesh.positions.push(p);
        self.index.insert(key, index);
        index
    }

    fn face(&mut self, a: Vec3, b: Vec3, c: Vec3) {
        let ia = self.vertex(a);
        let ib = self.vertex(b);
        let ic = self.vertex(c);
        self.mesh.faces.push([ia, ib, ic]);
    }

    fn build(self) -> MeshData {
        self.mesh
    }
}

// === Primitive Generators ===

const OCTAHEDRON_VERTICES: [[f32; 3]; 6] = [
    [1.0, 0.0, 0.0],
    [-1.0, 0.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, -1.0, 0.0],
    [0.0, 0.0, 1.0],
    [0.0, 0.0, -1.0],
];

const OCTAHEDRON_FACES: [[usize; 3]; 8] = [
    [0, 2, 4],
    [0, 4, 3],
    [0, 3, 5],
    [0, 5, 2],
    [1, 2, 5],
    [1, 5, 3],
    [1, 3, 4],
    [1, 4, 2],
];

/// Generates a subdivided octahedron projected onto a sphere.
///
/// Each base face is split into `(detail + 1)^2` sub-faces and every grid
/// point is pushed out to `radius`. Vertices on shared edges are welded,
/// so `detail = 0` yields the 6-vertex base solid and `detail = 2` yields
/// 38 vertices over 72 faces.
pub fn octahedron(radius: f32, detail: u32) -> MeshData {
    let mut builder = MeshBuilder::new();
    let cols = detail + 1;

    for base in &OCTAHEDRON_FACES {
        let a = Vec3::from_array(OCTAHEDRON_VERTICES[base[0]]);
        let b = Vec3::from_array(OCTAHEDRON_VERTICES[base[1]]);
        let c = Vec3::from_array(OCTAHEDRON_VERTICES[base[2]]);

        // Triangular grid over the face: row i runs from edge ab toward c.
        let mut rows: Vec<Vec<Vec3>> = Vec::with_capacity(cols as usize + 1);
        for i in 0..=cols {
            let t = i as f32 / cols as f32;
            let aj = a.lerp(c, t);
            let bj = b.lerp(c, t);
            let steps = cols - i;
            let row = (0..=steps)
                .map(|j| {
                    if steps == 0 {
                        aj
                    } else {
                        aj.lerp(bj, j as f32 / steps as f32)
                    }
                })
                .collect();
            rows.push(row);
        }

        for i in 0..cols as usize {
            for j in 0..2 * (cols as usize - i) - 1 {
                let k = j / 2;
                let (p0, p1, p2) = if j % 2 == 0 {
                    (rows[i][k + 1], rows[i + 1][k], rows[i][k])
                } else {
                    (rows[i][k + 1], rows[i + 1][k + 1], rows[i + 1][k])
                };
                builder.face(
                    p0.normalize() * radius,
                    p1.normalize() * radius,
                    p2.normalize() * radius,
                );
            }
        }
    }

    builder.build()
}

/// Generates a UV sphere from stacked latitude rings.
pub fn uv_sphere(radius: f32, stacks: u32, slices: u32) -> MeshData {
    let stacks = stacks.max(2);
    let slices = slices.max(3);
    let mut builder = MeshBuilder::new();

    let point = |stack: u32, slice: u32| {
        let phi = stack as f32 / stacks as f32 * std::f32::consts::PI;
        let theta = slice as f32 / slices as f32 * std::f32::consts::TAU;
        Vec3::new(
            radius * phi.sin() * theta.cos(),
            radius * phi.cos(),
            radius * phi.sin() * theta.sin(),
        )
    };

    for stack in 0..stacks {
        for slice in 0..slices {
            let p0 = point(stack, slice);
            let p1 = point(stack, slice + 1);
            let p2 = point(stack + 1, slice);
            let p3 = point(stack + 1, slice + 1);

            // Pole rows collapse one triangle of each quad.
            if stack > 0 {
                builder.face(p0, p1, p2);
            }
            if stack + 1 < stacks {
                builder.face(p1, p3, p2);
            }
        }
    }

    builder.build()
}

/// Generates a capped cone: apex on top, `radial_segments` around the base.
///
/// A top radius of zero and four radial segments give the squat pyramid
/// used for debris rubble.
pub fn cone(base_radius: f32, height: f32, radial_segments: u32) -> MeshData {
    let segments = radial_segments.max(3);
    let mut builder = MeshBuilder::new();

    let half = height * 0.5;
    let apex = Vec3::new(0.0, half, 0.0);
    let base_center = Vec3::new(0.0, -half, 0.0);
    let ring = |i: u32| {
        let theta = i as f32 / segments as f32 * std::f32::consts::TAU;
        Vec3::new(base_radius * theta.sin(), -half, base_radius * theta.cos())
    };

    for i in 0..segments {
        let p0 = ring(i);
        let p1 = ring(i + 1);
        builder.face(apex, p0, p1);
        builder.face(base_center, p1, p0);
    }

    builder.build()
}

/// Generates an axis-aligned box centered at the origin.
pub fn cuboid(width: f32, height: f32, depth: f32) -> MeshData {
    let (hx, hy, hz) = (width * 0.5, height * 0.5, depth * 0.5);
    let corner = |x: f32, y: f32, z: f32| Vec3::new(x * hx, y * hy, z * hz);
    let mut builder = MeshBuilder::new();

    // Two triangles per face, corners chosen so normals point outward.
    let quads = [
        // +X, -X
        [(1, -1, -1), (1, 1, -1), (1, 1, 1), (1, -1, 1)],
        [(-1, -1, 1), (-1, 1, 1), (-1, 1, -1), (-1, -1, -1)],
        // +Y, -Y
        [(-1, 1, -1), (-1, 1, 1), (1, 1, 1), (1, 1, -1)],
        [(-1, -1, 1), (-1, -1, -1), (1, -1, -1), (1, -1, 1)],
        // +Z, -Z
        [(1, -1, 1), (1, 1, 1), (-1, 1, 1), (-1, -1, 1)],
        [(-1, -1, -1), (-1, 1, -1), (1, 1, -1), (1, -1, -1)],
    ];

    for quad in &quads {
        let p: Vec<Vec3> = quad
            .iter()
            .map(|&(x, y, z)| corner(x as f32, y as f32, z as f32))
            .collect();
        builder.face(p[0], p[1], p[2]);
        builder.face(p[0], p[2], p[3]);
    }

    builder.build()
}
