use nalgebra::Vector3;
use tracing::{debug, trace};

use crate::dynamics::{PendulumConfig, PendulumState};
use crate::render::RenderParams;
use super::engine::{IntegrationEngine, Scheme};

// ---------------------------------------------------------------------------
// Simulation driver: three schemes stepped in lock-step
// ---------------------------------------------------------------------------

/// Owns one engine per scheme and steps all of them once per frame.
///
/// Slots are independent: no engine ever reads another's state.
#[derive(Debug, Clone)]
pub struct SimulationDriver {
    engines: [IntegrationEngine; 3],
    rod_length: f64,
    frames: u64,
}

impl SimulationDriver {
    pub fn new(config: &PendulumConfig) -> Self {
        debug!(?config, "starting simulation driver");
        Self {
            engines: Scheme::ALL.map(|scheme| IntegrationEngine::new(scheme, config)),
            rod_length: config.rod_length,
            frames: 0,
        }
    }

    /// Advance every scheme by exactly one fixed step.
    pub fn tick(&mut self) {
        for engine in &mut self.engines {
            engine.step();
        }
        self.frames += 1;
        trace!(
            frame = self.frames,
            rk4 = self.engines[0].state().theta,
            euler = self.engines[1].state().theta,
            verlet = self.engines[2].state().theta,
            "tick"
        );
    }

    /// Transform and color the renderer needs to draw `scheme`'s pendulum:
    /// rotate by theta about the view axis, hang the bob a rod length below
    /// the pivot.
    pub fn render_params(&self, scheme: Scheme) -> RenderParams {
        RenderParams {
            rotation: self.state(scheme).theta,
            translation: Vector3::new(0.0, -self.rod_length, 0.0),
            color: scheme.color(),
        }
    }

    pub fn engine(&self, scheme: Scheme) -> &IntegrationEngine {
        &self.engines[scheme.index()]
    }

    pub fn engine_mut(&mut self, scheme: Scheme) -> &mut IntegrationEngine {
        &mut self.engines[scheme.index()]
    }

    pub fn state(&self, scheme: Scheme) -> &PendulumState {
        self.engine(scheme).state()
    }

    pub fn engines(&self) -> &[IntegrationEngine] {
        &self.engines
    }

    /// Number of ticks since construction.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Default for SimulationDriver {
    fn default() -> Self {
        Self::new(&PendulumConfig::default())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dynamics::state::ROD_LENGTH;

    #[test]
    fn tick_steps_each_scheme_once() {
        let mut d = SimulationDriver::default();
        d.tick();
        d.tick();
        for scheme in Scheme::ALL {
            assert_eq!(d.engine(scheme).steps(), 2);
        }
        assert_eq!(d.frames(), 2);
    }

    #[test]
    fn engines_are_in_scheme_order() {
        let d = SimulationDriver::default();
        let order: Vec<Scheme> = d.engines().iter().map(|e| e.scheme()).collect();
        assert_eq!(order, Scheme::ALL.to_vec());
    }

    #[test]
    fn render_params_follow_theta() {
        let mut d = SimulationDriver::default();
        for _ in 0..37 {
            d.tick();
        }
        for scheme in Scheme::ALL {
            let p = d.render_params(scheme);
            assert_eq!(p.rotation, d.state(scheme).theta);
            assert_eq!(p.translation, Vector3::new(0.0, -ROD_LENGTH, 0.0));
            assert_eq!(p.color, scheme.color());
        }
    }

    #[test]
    fn render_params_has_no_side_effects() {
        let d = SimulationDriver::default();
        let before = *d.state(Scheme::Euler);
        let _ = d.render_params(Scheme::Euler);
        let _ = d.render_params(Scheme::Euler);
        assert_eq!(*d.state(Scheme::Euler), before);
        assert_eq!(d.frames(), 0);
    }

    #[test]
    fn schemes_diverge_from_same_start() {
        let mut d = SimulationDriver::default();
        for _ in 0..400 {
            d.tick();
        }
        let rk = d.state(Scheme::RungeKutta4).theta;
        let eu = d.state(Scheme::Euler).theta;
        let vv = d.state(Scheme::Verlet).theta;
        assert!(rk != eu && rk != vv && eu != vv, "rk={} eu={} vv={}", rk, eu, vv);
    }

    #[test]
    fn stepping_one_slot_leaves_others_alone() {
        let mut d = SimulationDriver::default();
        d.tick();
        let rk = *d.state(Scheme::RungeKutta4);
        let vv = *d.state(Scheme::Verlet);
        let vv_old = d.engine(Scheme::Verlet).theta_old();

        for _ in 0..100 {
            d.engine_mut(Scheme::Euler).step();
        }

        assert_eq!(*d.state(Scheme::RungeKutta4), rk);
        assert_eq!(*d.state(Scheme::Verlet), vv);
        assert_eq!(d.engine(Scheme::Verlet).theta_old(), vv_old);
        assert_eq!(d.engine(Scheme::Euler).steps(), 101);
    }
}
