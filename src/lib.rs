pub mod dynamics;
pub mod sim;
pub mod render;
pub mod error;

pub mod prelude {
    pub use crate::dynamics::state::{GRAVITY, H, OMEGA_INIT, ROD_LENGTH, THETA_INIT, TIME_INIT};
    pub use crate::dynamics::{OdeSystem, Pendulum, PendulumConfig, PendulumState};
    pub use crate::render::{run, render_frame, PendulumMesh, RenderParams, Renderer};
    pub use crate::sim::{IntegrationEngine, Integrator, Scheme, SimulationDriver};
}

/// Install a fmt subscriber honouring `RUST_LOG`, defaulting to `info`.
pub fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // A second install (e.g. from tests) is harmless
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
