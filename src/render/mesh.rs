use nalgebra::Point3;
use tracing::debug;

// ---------------------------------------------------------------------------
// Mesh geometry
// ---------------------------------------------------------------------------

pub const BOB_RADIUS: f64 = 0.1;
pub const CIRCLE_SEGMENTS: usize = 128;
pub const ROD_HALF_WIDTH: f64 = 0.01;

/// Indexed triangle list in model space.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    pub vertices: Vec<Point3<f64>>,
    pub indices: Vec<u32>,
}

impl Mesh {
    /// Filled disc centered on the origin, fanned from the first rim vertex.
    pub fn circle(radius: f64, segments: usize) -> Self {
        let step = std::f64::consts::TAU / segments as f64;
        let vertices = (0..segments)
            .map(|i| {
                let angle = step * i as f64;
                Point3::new(radius * angle.cos(), radius * angle.sin(), 0.0)
            })
            .collect();

        let indices = (0..segments.saturating_sub(2) as u32)
            .flat_map(|i| [0, i + 1, i + 2])
            .collect();

        Self { vertices, indices }
    }

    /// Thin quad from the origin up to y = length.
    pub fn rod(length: f64, half_width: f64) -> Self {
        Self {
            vertices: vec![
                Point3::new(-half_width, 0.0, 0.0),
                Point3::new(-half_width, length, 0.0),
                Point3::new(half_width, 0.0, 0.0),
                Point3::new(half_width, length, 0.0),
            ],
            // Strip order 0-1-2-3 as two triangles
            indices: vec![0, 1, 2, 2, 1, 3],
        }
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Bob and rod geometry, built once at startup and shared by reference with
/// the renderer for every draw.
#[derive(Debug, Clone, PartialEq)]
pub struct PendulumMesh {
    pub bob: Mesh,
    pub rod: Mesh,
}

impl PendulumMesh {
    pub fn new(rod_length: f64) -> Self {
        let mesh = Self {
            bob: Mesh::circle(BOB_RADIUS, CIRCLE_SEGMENTS),
            rod: Mesh::rod(rod_length, ROD_HALF_WIDTH),
        };
        debug!(
            bob_triangles = mesh.bob.triangle_count(),
            rod_triangles = mesh.rod.triangle_count(),
            "pendulum mesh built"
        );
        mesh
    }
}
