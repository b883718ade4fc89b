pub mod integrator;
pub mod engine;
pub mod driver;
pub mod diagnostics;
pub mod event;

pub use driver::SimulationDriver;
pub use engine::{IntegrationEngine, Scheme};
pub use integrator::{euler_step, rk4_step, verlet_bootstrap, verlet_step, Integrator};
