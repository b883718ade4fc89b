use std::collections::VecDeque;
use std::process::ExitCode;

use eframe::egui;
use egui_plot::{Line, Plot, PlotPoints};
use tracing::{error, info};

use pendulum_sim::dynamics::PendulumConfig;
use pendulum_sim::error::Result;
use pendulum_sim::render::{self, Mesh, PendulumMesh, RenderParams, Renderer};
use pendulum_sim::sim::diagnostics::EnergyMonitor;
use pendulum_sim::sim::{Scheme, SimulationDriver};

const HISTORY_LEN: usize = 2_000;
const HISTORY_EVERY: u64 = 10; // frames between plotted samples

fn main() -> ExitCode {
    pendulum_sim::init_logging();
    match launch() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "pendulum viewer failed");
            ExitCode::FAILURE
        }
    }
}

fn launch() -> Result<()> {
    let config = PendulumConfig::default();
    let app = PendulumViz::new(&config);

    let (w, h) = render::WINDOW_SIZE;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([w as f32, h as f32]),
        ..Default::default()
    };
    info!(width = w, height = h, "opening window");
    eframe::run_native(render::WINDOW_TITLE, options, Box::new(|_| Ok(Box::new(app))))?;
    Ok(())
}

fn color32(rgb: [f32; 3]) -> egui::Color32 {
    egui::Rgba::from_rgb(rgb[0], rgb[1], rgb[2]).into()
}

// ---------------------------------------------------------------------------
// egui painter as a Renderer
// ---------------------------------------------------------------------------

/// Draws one frame into a painter clipped to `rect`.
struct PainterRenderer<'a> {
    painter: &'a egui::Painter,
    rect: egui::Rect,
}

impl PainterRenderer<'_> {
    fn paint_mesh(&self, mesh: &Mesh, params: &RenderParams, color: egui::Color32) {
        let (w, h) = self.window_size();
        let mut out = egui::Mesh::default();
        for v in &mesh.vertices {
            let [x, y] = render::ndc_to_viewport(&params.transform_point(v), w, h);
            out.colored_vertex(self.rect.min + egui::vec2(x, y), color);
        }
        out.indices.extend_from_slice(&mesh.indices);
        self.painter.add(egui::Shape::mesh(out));
    }
}

impl Renderer for PainterRenderer<'_> {
    // eframe owns the close request; while update() runs the window is open.
    fn should_continue(&self) -> bool {
        true
    }

    fn window_size(&self) -> (u32, u32) {
        (self.rect.width() as u32, self.rect.height() as u32)
    }

    fn begin_frame(&mut self, _width: u32, _height: u32, clear: [f32; 3]) {
        self.painter.rect_filled(self.rect, 0.0, color32(clear));
    }

    fn draw(&mut self, mesh: &PendulumMesh, params: &RenderParams) {
        let color = color32(params.color);
        self.paint_mesh(&mesh.bob, params, color);
        self.paint_mesh(&mesh.rod, params, color);
    }
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

struct PendulumViz {
    driver: SimulationDriver,
    mesh: PendulumMesh,
    monitors: Vec<EnergyMonitor>,
    drift_history: Vec<VecDeque<[f64; 2]>>,
}

impl PendulumViz {
    fn new(config: &PendulumConfig) -> Self {
        let driver = SimulationDriver::new(config);
        let monitors = Scheme::ALL
            .iter()
            .map(|&s| EnergyMonitor::new(driver.engine(s).pendulum(), driver.state(s)))
            .collect();
        Self {
            driver,
            mesh: PendulumMesh::new(config.rod_length),
            monitors,
            drift_history: vec![VecDeque::with_capacity(HISTORY_LEN); Scheme::ALL.len()],
        }
    }

    fn record_energy(&mut self) {
        let sample = self.driver.frames() % HISTORY_EVERY == 0;
        for (i, &scheme) in Scheme::ALL.iter().enumerate() {
            let engine = self.driver.engine(scheme);
            self.monitors[i].record(engine.pendulum(), engine.state());
            if sample {
                let history = &mut self.drift_history[i];
                if history.len() == HISTORY_LEN {
                    history.pop_front();
                }
                history.push_back([engine.state().time, self.monitors[i].drift()]);
            }
        }
    }
}

impl eframe::App for PendulumViz {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!("t = {:.2} s", self.driver.state(Scheme::RungeKutta4).time));
                for scheme in Scheme::ALL {
                    ui.colored_label(
                        color32(scheme.color()),
                        format!("{}: θ = {:+.4}", scheme.label(), self.driver.state(scheme).theta),
                    );
                }
            });
        });

        egui::TopBottomPanel::bottom("energy").show(ctx, |ui| {
            ui.label("Energy drift  E − E₀");
            Plot::new("energy_drift")
                .height(160.0)
                .x_axis_label("Time (s)")
                .show(ui, |plot_ui| {
                    for (i, scheme) in Scheme::ALL.iter().enumerate() {
                        let points: PlotPoints = self.drift_history[i].iter().copied().collect();
                        plot_ui.line(Line::new(scheme.label(), points).color(color32(scheme.color())));
                    }
                });
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::default())
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                let mut renderer = PainterRenderer { painter: ui.painter(), rect };
                render::render_frame(&mut self.driver, &mut renderer, &self.mesh);
            });

        self.record_energy();
        ctx.request_repaint();
    }
}
