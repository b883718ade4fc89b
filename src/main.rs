use tracing::info;

use pendulum_sim::dynamics::PendulumConfig;
use pendulum_sim::sim::diagnostics::EnergyMonitor;
use pendulum_sim::sim::event::{EventDetector, EventKind, PeriodEstimator, TurningPointDetector};
use pendulum_sim::sim::{Scheme, SimulationDriver};

const FRAMES: usize = 4_000; // 20 s of simulation time at H = 0.005
const ROWS: usize = 25;

fn main() {
    pendulum_sim::init_logging();

    let config = PendulumConfig::default();
    let mut driver = SimulationDriver::new(&config);

    let mut monitors: Vec<EnergyMonitor> = Scheme::ALL
        .iter()
        .map(|&s| EnergyMonitor::new(driver.engine(s).pendulum(), driver.state(s)))
        .collect();
    let mut periods: Vec<PeriodEstimator> = Scheme::ALL.iter().map(|_| PeriodEstimator::new()).collect();
    let mut amplitudes: Vec<Option<f64>> = vec![None; Scheme::ALL.len()];

    // -----------------------------------------------------------------------
    // Run all three schemes in lock-step
    // -----------------------------------------------------------------------
    let mut samples = Vec::with_capacity(ROWS + 1);
    samples.push(Scheme::ALL.map(|s| *driver.state(s)));
    let sample_interval = (FRAMES / ROWS).max(1);

    for frame in 1..=FRAMES {
        let prev = Scheme::ALL.map(|s| *driver.state(s));
        driver.tick();
        for (i, engine) in driver.engines().iter().enumerate() {
            monitors[i].record(engine.pendulum(), engine.state());
            periods[i].observe(&prev[i], engine.state());
            if let Some(EventKind::TurningPoint { theta }) =
                TurningPointDetector.check(&prev[i], engine.state())
            {
                amplitudes[i] = Some(amplitudes[i].map_or(theta, |a: f64| a.max(theta)));
            }
        }
        if frame % sample_interval == 0 {
            samples.push(Scheme::ALL.map(|s| *driver.state(s)));
        }
    }
    info!(frames = driver.frames(), "simulation complete");

    // -----------------------------------------------------------------------
    // Print results
    // -----------------------------------------------------------------------
    println!();
    println!("====================================================================");
    println!("  PENDULUM INTEGRATOR COMPARISON");
    println!("====================================================================");
    println!();
    println!("  Parameters");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Rod length:    {:>8.3} m     Gravity:      {:>8.3} m/s^2",
        config.rod_length, config.gravity
    );
    println!(
        "  theta0:        {:>8.4} rad   omega0:       {:>8.4} rad/s",
        config.theta0, config.omega0
    );
    println!(
        "  Step:          {:>8.4} s     Small-angle period: {:.4} s",
        config.dt,
        config.small_angle_period()
    );
    println!();

    println!("  Scheme Summary");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  {:<16} {:>5}  {:>10}  {:>10}  {:>10}  {:>10}  {:>9}",
        "scheme", "order", "max |dE|", "rel dE", "final dE", "period (s)", "amp (rad)"
    );
    for (i, engine) in driver.engines().iter().enumerate() {
        let period = periods[i]
            .period()
            .map_or_else(|| "-".to_string(), |p| format!("{:.4}", p));
        let amplitude = amplitudes[i].map_or_else(|| "-".to_string(), |a| format!("{:.4}", a));
        println!(
            "  {:<16} {:>5}  {:>10.3e}  {:>10.3e}  {:>10.3e}  {:>10}  {:>9}",
            engine.scheme().label(),
            engine.integrator().order(),
            monitors[i].max_drift(),
            monitors[i].max_relative_drift(),
            monitors[i].drift(),
            period,
            amplitude
        );
    }
    println!();

    println!("  Trajectory (theta, rad)");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  {:>7}  {:>10}  {:>10}  {:>10}",
        "t (s)", "RK4", "Euler", "Verlet"
    );
    println!("  {}", "─".repeat(44));
    for row in &samples {
        println!(
            "  {:>7.2}  {:>10.5}  {:>10.5}  {:>10.5}",
            row[0].time, row[0].theta, row[1].theta, row[2].theta
        );
    }

    println!();
    println!("  Simulation: {} frames, dt={} s", driver.frames(), config.dt);
    println!("====================================================================");
    println!();
}
