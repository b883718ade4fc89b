//! Boundary between the simulation and whatever draws it.
//!
//! The core never touches a window: each frame it hands a [`Renderer`] one
//! [`RenderParams`] per scheme plus the shared [`PendulumMesh`].

pub mod mesh;

use nalgebra::{IsometryMatrix3, Matrix4, Point3, Rotation3, Translation3, Vector3};
use tracing::{info, trace};

use crate::sim::{Scheme, SimulationDriver};
pub use mesh::{Mesh, PendulumMesh};

pub const WINDOW_TITLE: &str = "Pendulum";
pub const WINDOW_SIZE: (u32, u32) = (800, 600);
pub const CLEAR_COLOR: [f32; 3] = [0.0, 0.2, 0.2];

// ---------------------------------------------------------------------------
// Per-draw parameters
// ---------------------------------------------------------------------------

/// Placement and color of one pendulum for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderParams {
    pub rotation: f64,              // rad about the view (z) axis
    pub translation: Vector3<f64>,  // applied before the rotation
    pub color: [f32; 3],            // RGB
}

impl RenderParams {
    pub fn rotation_matrix(&self) -> Rotation3<f64> {
        Rotation3::from_axis_angle(&Vector3::z_axis(), self.rotation)
    }

    /// view = R(θ) · T(translation), as a rigid transform.
    pub fn view_transform(&self) -> IsometryMatrix3<f64> {
        let rot = self.rotation_matrix();
        IsometryMatrix3::from_parts(Translation3::from(rot * self.translation), rot)
    }

    /// Homogeneous 4x4 form of [`Self::view_transform`], for shader uniforms.
    pub fn view_matrix(&self) -> Matrix4<f64> {
        self.view_transform().to_homogeneous()
    }

    pub fn transform_point(&self, p: &Point3<f64>) -> Point3<f64> {
        self.view_transform().transform_point(p)
    }
}

/// Map normalized device coordinates to pixels, origin top-left.
pub fn ndc_to_viewport(p: &Point3<f64>, width: u32, height: u32) -> [f32; 2] {
    let x = (p.x + 1.0) * 0.5 * f64::from(width);
    let y = (1.0 - p.y) * 0.5 * f64::from(height);
    [x as f32, y as f32]
}

// ---------------------------------------------------------------------------
// Renderer collaborator
// ---------------------------------------------------------------------------

/// Something that can put pendulums on screen.
///
/// Implement this to plug a windowing backend into [`run`].
pub trait Renderer {
    /// False once the window has been asked to close.
    fn should_continue(&self) -> bool;

    /// Current drawable size in pixels.
    fn window_size(&self) -> (u32, u32);

    /// Set the viewport and clear.
    fn begin_frame(&mut self, width: u32, height: u32, clear: [f32; 3]);

    /// Draw the bob and rod of `mesh` under `params`.
    fn draw(&mut self, mesh: &PendulumMesh, params: &RenderParams);

    /// Present the frame.
    fn end_frame(&mut self) {}
}

/// One frame: clear, advance every scheme by one step, draw all three.
///
/// Simulation time advances by one step per frame regardless of how long
/// the frame took on the wall clock.
pub fn render_frame<R: Renderer + ?Sized>(
    driver: &mut SimulationDriver,
    renderer: &mut R,
    mesh: &PendulumMesh,
) {
    let (width, height) = renderer.window_size();
    renderer.begin_frame(width, height, CLEAR_COLOR);

    driver.tick();
    for scheme in Scheme::ALL {
        let params = driver.render_params(scheme);
        trace!(?scheme, theta = params.rotation, "draw");
        renderer.draw(mesh, &params);
    }

    renderer.end_frame();
}

/// Drive frames until the renderer asks to stop. Returns frames rendered.
pub fn run<R: Renderer + ?Sized>(
    driver: &mut SimulationDriver,
    renderer: &mut R,
    mesh: &PendulumMesh,
) -> u64 {
    info!("render loop started");
    let start = driver.frames();
    while renderer.should_continue() {
        render_frame(driver, renderer, mesh);
    }
    let frames = driver.frames() - start;
    info!(
        frames,
        sim_time = driver.state(Scheme::RungeKutta4).time,
        "render loop finished"
    );
    frames
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dynamics::state::{H, ROD_LENGTH};
    use std::f64::consts::FRAC_PI_2;

    /// Records what it was asked to draw; closes after `budget` frames.
    struct RecordingRenderer {
        budget: u64,
        frames: u64,
        size: (u32, u32),
        viewports: Vec<(u32, u32)>,
        draws: Vec<RenderParams>,
    }

    impl RecordingRenderer {
        fn new(budget: u64) -> Self {
            Self { budget, frames: 0, size: (640, 480), viewports: Vec::new(), draws: Vec::new() }
        }
    }

    impl Renderer for RecordingRenderer {
        fn should_continue(&self) -> bool {
            self.frames < self.budget
        }

        fn window_size(&self) -> (u32, u32) {
            self.size
        }

        fn begin_frame(&mut self, width: u32, height: u32, clear: [f32; 3]) {
            assert_eq!(clear, CLEAR_COLOR);
            self.viewports.push((width, height));
        }

        fn draw(&mut self, _mesh: &PendulumMesh, params: &RenderParams) {
            self.draws.push(*params);
        }

        fn end_frame(&mut self) {
            self.frames += 1;
        }
    }

    fn params(theta: f64) -> RenderParams {
        RenderParams {
            rotation: theta,
            translation: Vector3::new(0.0, -ROD_LENGTH, 0.0),
            color: [1.0, 0.0, 0.0],
        }
    }

    #[test]
    fn bob_hangs_below_pivot_at_rest() {
        let p = params(0.0);
        let bob = p.transform_point(&Point3::origin());
        assert!((bob - Point3::new(0.0, -ROD_LENGTH, 0.0)).norm() < 1e-12);
        // Top of the rod lands on the pivot
        let top = p.transform_point(&Point3::new(0.0, ROD_LENGTH, 0.0));
        assert!(top.coords.norm() < 1e-12);
    }

    #[test]
    fn quarter_turn_swings_bob_sideways() {
        let bob = params(FRAC_PI_2).transform_point(&Point3::origin());
        assert!((bob.x - ROD_LENGTH).abs() < 1e-12, "Got {:?}", bob);
        assert!(bob.y.abs() < 1e-12);
    }

    #[test]
    fn view_matrix_agrees_with_isometry() {
        let p = params(0.6);
        let q = Point3::new(0.05, 0.3, 0.0);
        let via_matrix = p.view_matrix().transform_point(&q);
        assert!((via_matrix - p.transform_point(&q)).norm() < 1e-12);
        // Rod length preserved
        let bob = p.transform_point(&Point3::origin());
        assert!((bob.coords.norm() - ROD_LENGTH).abs() < 1e-12);
    }

    #[test]
    fn ndc_corners() {
        assert_eq!(ndc_to_viewport(&Point3::new(-1.0, 1.0, 0.0), 800, 600), [0.0, 0.0]);
        assert_eq!(ndc_to_viewport(&Point3::new(1.0, -1.0, 0.0), 800, 600), [800.0, 600.0]);
        assert_eq!(ndc_to_viewport(&Point3::origin(), 800, 600), [400.0, 300.0]);
    }

    #[test]
    fn run_ticks_once_per_frame() {
        let mut driver = SimulationDriver::default();
        let mesh = PendulumMesh::new(ROD_LENGTH);
        let mut r = RecordingRenderer::new(250);

        let frames = run(&mut driver, &mut r, &mesh);

        assert_eq!(frames, 250);
        assert_eq!(driver.frames(), 250);
        for scheme in Scheme::ALL {
            let t = driver.state(scheme).time;
            assert!((t - 250.0 * H).abs() < 1e-9, "{:?} at t={}", scheme, t);
        }
        assert_eq!(r.viewports.len(), 250);
        assert!(r.viewports.iter().all(|&v| v == (640, 480)));
    }

    #[test]
    fn three_draws_per_frame_in_scheme_order() {
        let mut driver = SimulationDriver::default();
        let mesh = PendulumMesh::new(ROD_LENGTH);
        let mut r = RecordingRenderer::new(4);
        run(&mut driver, &mut r, &mesh);

        assert_eq!(r.draws.len(), 12);
        for frame in r.draws.chunks(3) {
            let colors: Vec<[f32; 3]> = frame.iter().map(|p| p.color).collect();
            assert_eq!(colors, vec![[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
        }
        // Last frame shows the final angles
        let last = &r.draws[9..];
        for (p, scheme) in last.iter().zip(Scheme::ALL) {
            assert_eq!(p.rotation, driver.state(scheme).theta);
        }
    }

    #[test]
    fn closed_window_renders_nothing() {
        let mut driver = SimulationDriver::default();
        let mesh = PendulumMesh::new(ROD_LENGTH);
        let mut r = RecordingRenderer::new(0);
        assert_eq!(run(&mut driver, &mut r, &mesh), 0);
        assert_eq!(driver.state(Scheme::Euler).time, 0.0);
    }
}
