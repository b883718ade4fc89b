use tracing::debug;

use crate::dynamics::{Pendulum, PendulumConfig, PendulumState};
use super::integrator::Integrator;

/// Which integration scheme an engine runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scheme {
    RungeKutta4,
    Euler,
    Verlet,
}

impl Scheme {
    /// Draw order and slot order in the driver.
    pub const ALL: [Scheme; 3] = [Scheme::RungeKutta4, Scheme::Euler, Scheme::Verlet];

    pub fn index(self) -> usize {
        match self {
            Scheme::RungeKutta4 => 0,
            Scheme::Euler => 1,
            Scheme::Verlet => 2,
        }
    }

    /// RGB used to draw this scheme's pendulum.
    pub fn color(self) -> [f32; 3] {
        match self {
            Scheme::RungeKutta4 => [1.0, 0.0, 0.0],
            Scheme::Euler => [0.0, 1.0, 0.0],
            Scheme::Verlet => [0.0, 0.0, 1.0],
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Scheme::RungeKutta4 => "Runge-Kutta 4",
            Scheme::Euler => "Euler",
            Scheme::Verlet => "Störmer-Verlet",
        }
    }

    fn integrator(self, initial: &PendulumState, dt: f64) -> Integrator {
        match self {
            Scheme::RungeKutta4 => Integrator::RungeKutta4,
            Scheme::Euler => Integrator::Euler,
            Scheme::Verlet => Integrator::verlet(initial, dt),
        }
    }
}

// ---------------------------------------------------------------------------
// Integration engine: one scheme, one pendulum
// ---------------------------------------------------------------------------

/// Owns a pendulum state and advances it with a single scheme at a fixed
/// step.
#[derive(Debug, Clone)]
pub struct IntegrationEngine {
    scheme: Scheme,
    integrator: Integrator,
    ode: Pendulum,
    state: PendulumState,
    dt: f64,
    steps: u64,
}

impl IntegrationEngine {
    pub fn new(scheme: Scheme, config: &PendulumConfig) -> Self {
        let state = config.initial_state();
        let integrator = scheme.integrator(&state, config.dt);
        debug!(
            scheme = integrator.name(),
            theta0 = state.theta,
            omega0 = state.omega,
            dt = config.dt,
            "integration engine ready"
        );
        Self {
            scheme,
            integrator,
            ode: Pendulum::from_config(config),
            state,
            dt: config.dt,
            steps: 0,
        }
    }

    /// Advance by exactly one fixed step.
    pub fn step(&mut self) {
        self.integrator.advance(&mut self.state, &self.ode, self.dt);
        self.steps += 1;
    }

    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    pub fn state(&self) -> &PendulumState {
        &self.state
    }

    pub fn integrator(&self) -> &Integrator {
        &self.integrator
    }

    pub fn pendulum(&self) -> &Pendulum {
        &self.ode
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Previous angle, for Verlet only.
    pub fn theta_old(&self) -> Option<f64> {
        match self.integrator {
            Integrator::Verlet { theta_old } => Some(theta_old),
            _ => None,
        }
    }

    /// Specific energy of the current state.
    pub fn energy(&self) -> f64 {
        self.ode.energy(&self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_4;

    #[test]
    fn zero_steps_is_initial_state() {
        let c = PendulumConfig::default();
        for scheme in Scheme::ALL {
            let e = IntegrationEngine::new(scheme, &c);
            assert_eq!(e.state().theta, FRAC_PI_4);
            assert_eq!(e.state().omega, 2.0);
            assert_eq!(e.state().time, 0.0);
            assert_eq!(e.steps(), 0);
        }
    }

    #[test]
    fn only_verlet_carries_history() {
        let c = PendulumConfig::default();
        assert!(IntegrationEngine::new(Scheme::RungeKutta4, &c).theta_old().is_none());
        assert!(IntegrationEngine::new(Scheme::Euler, &c).theta_old().is_none());
        let old = IntegrationEngine::new(Scheme::Verlet, &c).theta_old().unwrap();
        assert!((old - (FRAC_PI_4 - 0.01)).abs() < 1e-14);
    }

    #[test]
    fn time_advances_by_dt_each_step() {
        let c = PendulumConfig::default();
        for scheme in Scheme::ALL {
            let mut e = IntegrationEngine::new(scheme, &c);
            for n in 1..=1000u32 {
                e.step();
                let expected = f64::from(n) * c.dt;
                assert!(
                    (e.state().time - expected).abs() < 1e-9,
                    "{:?}: t={} after {} steps",
                    scheme,
                    e.state().time,
                    n
                );
            }
            assert_eq!(e.steps(), 1000);
        }
    }

    #[test]
    fn replay_is_identical() {
        let c = PendulumConfig::default();
        for scheme in Scheme::ALL {
            let mut a = IntegrationEngine::new(scheme, &c);
            let mut b = IntegrationEngine::new(scheme, &c);
            for _ in 0..500 {
                a.step();
                b.step();
            }
            assert_eq!(a.state(), b.state());
            assert_eq!(a.theta_old(), b.theta_old());
        }
    }

    #[test]
    fn colors_are_primaries() {
        assert_eq!(Scheme::RungeKutta4.color(), [1.0, 0.0, 0.0]);
        assert_eq!(Scheme::Euler.color(), [0.0, 1.0, 0.0]);
        assert_eq!(Scheme::Verlet.color(), [0.0, 0.0, 1.0]);
    }
}
