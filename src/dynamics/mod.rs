pub mod state;

pub use state::{wrap_angle, Deriv, PendulumConfig, PendulumState};

// ---------------------------------------------------------------------------
// Equations of motion
// ---------------------------------------------------------------------------

/// Right-hand side of a first-order system in (theta, omega).
///
/// Every integration scheme reads the physics through this trait, so the
/// three schemes compare the same problem.
pub trait OdeSystem {
    fn derivatives(&self, state: &PendulumState) -> Deriv;

    /// Angular acceleration at a state, the second component of the RHS.
    fn acceleration(&self, state: &PendulumState) -> f64 {
        self.derivatives(state).domega
    }
}

/// Undamped simple pendulum:
///   dθ/dt = ω
///   dω/dt = -(g / L) · sin θ
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pendulum {
    pub gravity: f64,    // m/s^2
    pub rod_length: f64, // m
}

impl Pendulum {
    pub fn new(gravity: f64, rod_length: f64) -> Self {
        Self { gravity, rod_length }
    }

    pub fn from_config(config: &PendulumConfig) -> Self {
        Self::new(config.gravity, config.rod_length)
    }

    /// g / L, the square of the small-angle angular frequency.
    pub fn stiffness(&self) -> f64 {
        self.gravity / self.rod_length
    }

    /// Specific mechanical energy: ω²/2 − (g/L)·cos θ.
    pub fn energy(&self, state: &PendulumState) -> f64 {
        0.5 * state.omega * state.omega - self.stiffness() * state.theta.cos()
    }
}

impl Default for Pendulum {
    fn default() -> Self {
        Self::from_config(&PendulumConfig::default())
    }
}

impl OdeSystem for Pendulum {
    fn derivatives(&self, state: &PendulumState) -> Deriv {
        Deriv {
            dtheta: state.omega,
            domega: -self.stiffness() * state.theta.sin(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
