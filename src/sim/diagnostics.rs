//! Energy bookkeeping for comparing schemes.
//!
//! The pendulum conserves specific energy exactly, so any change in
//! ω²/2 − (g/L)·cos θ along a trajectory is integration error.

use crate::dynamics::{Pendulum, PendulumState};

/// Tracks how far a trajectory's energy has wandered from its start.
#[derive(Debug, Clone)]
pub struct EnergyMonitor {
    pub baseline: f64,
    latest: f64,
    max_drift: f64,
    samples: u64,
}

impl EnergyMonitor {
    pub fn new(pendulum: &Pendulum, initial: &PendulumState) -> Self {
        let baseline = pendulum.energy(initial);
        Self {
            baseline,
            latest: baseline,
            max_drift: 0.0,
            samples: 0,
        }
    }

    /// Record a state; returns its absolute drift |E − E₀|.
    pub fn record(&mut self, pendulum: &Pendulum, state: &PendulumState) -> f64 {
        self.latest = pendulum.energy(state);
        let drift = (self.latest - self.baseline).abs();
        self.max_drift = self.max_drift.max(drift);
        self.samples += 1;
        drift
    }

    /// Signed drift of the last recorded state.
    pub fn drift(&self) -> f64 {
        self.latest - self.baseline
    }

    /// Largest |E − E₀| seen so far.
    pub fn max_drift(&self) -> f64 {
        self.max_drift
    }

    /// Largest drift relative to |E₀| (absolute if E₀ is ~0).
    pub fn max_relative_drift(&self) -> f64 {
        if self.baseline.abs() > 1e-12 {
            self.max_drift / self.baseline.abs()
        } else {
            self.max_drift
        }
    }

    pub fn samples(&self) -> u64 {
        self.samples
    }
}
