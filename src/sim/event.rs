use crate::dynamics::PendulumState;

// ---------------------------------------------------------------------------
// Swing events
// ---------------------------------------------------------------------------

/// Kinds of swing events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EventKind {
    /// theta crossed zero going positive; `time` is linearly interpolated.
    UpwardCrossing { time: f64 },
    /// omega changed sign from positive to non-positive.
    TurningPoint { theta: f64 },
}

/// Trait for passive event detectors.
/// Implementations inspect consecutive states and report events.
pub trait EventDetector {
    fn check(&mut self, prev: &PendulumState, current: &PendulumState) -> Option<EventKind>;
}

/// Detects the bob passing the bottom while swinging towards positive theta.
pub struct ZeroCrossingDetector;

impl EventDetector for ZeroCrossingDetector {
    fn check(&mut self, prev: &PendulumState, current: &PendulumState) -> Option<EventKind> {
        if prev.theta < 0.0 && current.theta >= 0.0 {
            let frac = -prev.theta / (current.theta - prev.theta);
            Some(EventKind::UpwardCrossing {
                time: prev.time + frac * (current.time - prev.time),
            })
        } else {
            None
        }
    }
}

/// Detects the positive-side extreme of a swing.
pub struct TurningPointDetector;

impl EventDetector for TurningPointDetector {
    fn check(&mut self, prev: &PendulumState, current: &PendulumState) -> Option<EventKind> {
        if prev.omega > 0.0 && current.omega <= 0.0 {
            Some(EventKind::TurningPoint { theta: current.theta })
        } else {
            None
        }
    }
}

/// Collects the times of upward zero crossings along a trajectory and
/// estimates the swing period from them.
#[derive(Debug, Clone, Default)]
pub struct PeriodEstimator {
    crossings: Vec<f64>,
}

impl PeriodEstimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, prev: &PendulumState, current: &PendulumState) {
        if let Some(EventKind::UpwardCrossing { time }) = ZeroCrossingDetector.check(prev, current) {
            self.crossings.push(time);
        }
    }

    pub fn crossings(&self) -> &[f64] {
        &self.crossings
    }

    /// Mean spacing of crossings; None until two have been seen.
    pub fn period(&self) -> Option<f64> {
        let n = self.crossings.len();
        if n < 2 {
            return None;
        }
        Some((self.crossings[n - 1] - self.crossings[0]) / (n - 1) as f64)
    }
}
