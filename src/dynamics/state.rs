use std::f64::consts::{FRAC_PI_4, TAU};

// ---------------------------------------------------------------------------
// Physical constants
// ---------------------------------------------------------------------------

pub const GRAVITY: f64 = 9.81; // m/s^2
pub const ROD_LENGTH: f64 = 0.8; // m

// ---------------------------------------------------------------------------
// Integration constants
// ---------------------------------------------------------------------------

pub const H: f64 = 0.005; // fixed step, simulation seconds
pub const THETA_INIT: f64 = FRAC_PI_4; // rad
pub const OMEGA_INIT: f64 = 2.0; // rad/s
pub const TIME_INIT: f64 = 0.0; // s

/// Wrap bound for theta. Deliberately one full turn, not half.
pub const THETA_WRAP: f64 = TAU;

// ---------------------------------------------------------------------------
// Pendulum state: angle, angular rate, elapsed time
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendulumState {
    pub time: f64,  // s
    pub theta: f64, // rad, from the downward vertical
    pub omega: f64, // rad/s
}

impl PendulumState {
    pub fn new(theta: f64, omega: f64, time: f64) -> Self {
        Self { time, theta, omega }
    }

    /// Advance state by a derivative scaled by dt (used inside RK4).
    pub fn apply(&self, d: &Deriv, dt: f64) -> PendulumState {
        PendulumState {
            time: self.time + dt,
            theta: self.theta + d.dtheta * dt,
            omega: self.omega + d.domega * dt,
        }
    }
}

/// Fold theta back by one turn once its magnitude exceeds 2π.
///
/// A single correction per call: the value may sit anywhere in (-2π, 2π)
/// afterwards, it is never normalised to (-π, π].
pub fn wrap_angle(theta: f64) -> f64 {
    let mut theta = theta;
    if theta > THETA_WRAP {
        theta -= THETA_WRAP;
    }
    if theta < -THETA_WRAP {
        theta += THETA_WRAP;
    }
    theta
}

// ---------------------------------------------------------------------------
// State derivative (dθ/dt, dω/dt)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Deriv {
    pub dtheta: f64, // angular velocity
    pub domega: f64, // angular acceleration
}

// ---------------------------------------------------------------------------
// Simulation config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct PendulumConfig {
    pub dt: f64,
    pub rod_length: f64,
    pub gravity: f64,
    pub theta0: f64,
    pub omega0: f64,
    pub time0: f64,
}

impl PendulumConfig {
    /// State every scheme starts from.
    pub fn initial_state(&self) -> PendulumState {
        PendulumState::new(self.theta0, self.omega0, self.time0)
    }

    /// Period of the linearised pendulum: 2π·sqrt(L/g).
    pub fn small_angle_period(&self) -> f64 {
        TAU * (self.rod_length / self.gravity).sqrt()
    }
}

impl Default for PendulumConfig {
    fn default() -> Self {
        Self {
            dt: H,
            rod_length: ROD_LENGTH,
            gravity: GRAVITY,
            theta0: THETA_INIT,
            omega0: OMEGA_INIT,
            time0: TIME_INIT,
        }
    }
}
