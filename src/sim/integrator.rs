use crate::dynamics::state::wrap_angle;
use crate::dynamics::{OdeSystem, PendulumState};

// ---------------------------------------------------------------------------
// Classical 4th-order Runge-Kutta
// ---------------------------------------------------------------------------

/// Single RK4 step: advance state by dt.
///
/// Both theta and omega are updated from the same pre-step state.
pub fn rk4_step<S: OdeSystem>(state: &PendulumState, ode: &S, dt: f64) -> PendulumState {
    let k1 = ode.derivatives(state);
    let k2 = ode.derivatives(&state.apply(&k1, dt * 0.5));
    let k3 = ode.derivatives(&state.apply(&k2, dt * 0.5));
    let k4 = ode.derivatives(&state.apply(&k3, dt));

    PendulumState {
        time: state.time + dt,
        theta: wrap_angle(
            state.theta + (k1.dtheta + 2.0 * k2.dtheta + 2.0 * k3.dtheta + k4.dtheta) * (dt / 6.0),
        ),
        omega: state.omega + (k1.domega + 2.0 * k2.domega + 2.0 * k3.domega + k4.domega) * (dt / 6.0),
    }
}

// ---------------------------------------------------------------------------
// Euler, position first
// ---------------------------------------------------------------------------

/// Single Euler step: theta moves with the old omega, then omega is kicked
/// by the acceleration at the *new* theta.
///
/// Swapping the two updates gives plain explicit Euler, which gains energy
/// every swing. This ordering keeps the energy error bounded.
pub fn euler_step<S: OdeSystem>(state: &PendulumState, ode: &S, dt: f64) -> PendulumState {
    let moved = PendulumState {
        theta: state.theta + dt * state.omega,
        ..*state
    };
    let omega = moved.omega + dt * ode.acceleration(&moved);

    PendulumState {
        time: state.time + dt,
        theta: wrap_angle(moved.theta),
        omega,
    }
}

// ---------------------------------------------------------------------------
// Störmer-Verlet
// ---------------------------------------------------------------------------

/// Verlet needs the previous angle; this is the backward Euler estimate
/// θ0 − ω0·dt used before the first step.
pub fn verlet_bootstrap(state: &PendulumState, dt: f64) -> f64 {
    state.theta - state.omega * dt
}

/// Single Störmer-Verlet step. Returns the new state and the new previous
/// angle.
///
/// omega is the central difference (θ_new − θ_old) / 2dt, so it lags the
/// position by one step. The previous angle becomes the pre-step theta as
/// is; only the new theta goes through the wrap.
pub fn verlet_step<S: OdeSystem>(
    state: &PendulumState,
    theta_old: f64,
    ode: &S,
    dt: f64,
) -> (PendulumState, f64) {
    let theta_new = 2.0 * state.theta - theta_old + dt * dt * ode.acceleration(state);
    let omega = (theta_new - theta_old) / (2.0 * dt);

    let next = PendulumState {
        time: state.time + dt,
        theta: wrap_angle(theta_new),
        omega,
    };
    (next, state.theta)
}

// ---------------------------------------------------------------------------
// Scheme dispatch
// ---------------------------------------------------------------------------

/// An integration scheme together with whatever history it carries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Integrator {
    RungeKutta4,
    Euler,
    Verlet { theta_old: f64 },
}

impl Integrator {
    /// Verlet primed with the backward estimate for `initial`.
    pub fn verlet(initial: &PendulumState, dt: f64) -> Self {
        Integrator::Verlet {
            theta_old: verlet_bootstrap(initial, dt),
        }
    }

    /// Advance `state` in place by one step of `dt`.
    pub fn advance<S: OdeSystem>(&mut self, state: &mut PendulumState, ode: &S, dt: f64) {
        match self {
            Integrator::RungeKutta4 => *state = rk4_step(state, ode, dt),
            Integrator::Euler => *state = euler_step(state, ode, dt),
            Integrator::Verlet { theta_old } => {
                let (next, old) = verlet_step(state, *theta_old, ode, dt);
                *state = next;
                *theta_old = old;
            }
        }
    }

    /// Local truncation order of the position update.
    pub fn order(&self) -> usize {
        match self {
            Integrator::RungeKutta4 => 4,
            Integrator::Euler => 1,
            Integrator::Verlet { .. } => 2,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Integrator::RungeKutta4 => "runge_kutta_4",
            Integrator::Euler => "euler",
            Integrator::Verlet { .. } => "stormer_verlet",
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
