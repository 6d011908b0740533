#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 데스크톱 엔트리 포인트. 결과표와 성능 차트를 보여준다.

use eframe::{egui, App, Frame};
use egui_plot::{Legend, Line, Plot, PlotPoints};
use std::path::PathBuf;

use engine_bench_toolbox::{
    app::AppError,
    bench::{self, table::format_value, ChartData, EngineConstants, ResultTable, Scenario},
    config::{self, Config},
    logging,
    units::Unit,
};

fn main() -> Result<(), eframe::Error> {
    let config_path = PathBuf::from(config::DEFAULT_CONFIG_PATH);
    let app_cfg = match config::load_or_default(&config_path) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Config error, using defaults: {e}");
            Config::default()
        }
    };
    if let Err(e) = logging::init(logging::parse_level(&app_cfg.log_level)) {
        eprintln!("Logger error: {e}");
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_title("Engine Bench Toolbox"),
        ..Default::default()
    };
    eframe::run_native(
        "Engine Bench Toolbox",
        options,
        Box::new(move |_cc| Box::new(GuiApp::new(app_cfg, config_path))),
    )
}

/// 시나리오 하나에 그리는 내용.
struct ScenarioView {
    table: ResultTable,
    charts: Vec<ChartData>,
}

fn build_view(scenario: Scenario, constants: &EngineConstants) -> Result<ScenarioView, AppError> {
    let table = bench::tabulate_scenario(scenario, constants)?;
    let charts = bench::charts_for(scenario)
        .iter()
        .map(|spec| spec.resolve(&table))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ScenarioView { table, charts })
}

struct GuiApp {
    config: Config,
    config_path: PathBuf,
    selected: Scenario,
    // 설정을 로드할 때마다 한 번 계산. 오류는 표시용 문자열로 보관
    views: Vec<(Scenario, Result<ScenarioView, String>)>,
    show_formula_modal: bool,
    status: Option<String>,
}

impl GuiApp {
    fn new(config: Config, config_path: PathBuf) -> Self {
        let mut app = Self {
            config,
            config_path,
            selected: Scenario::VariableSpeed,
            views: Vec::new(),
            show_formula_modal: false,
            status: None,
        };
        app.recompute();
        app
    }

    fn recompute(&mut self) {
        let constants = self.config.engine_constants();
        self.views = Scenario::ALL
            .iter()
            .map(|s| {
                let view = build_view(*s, &constants).map_err(|e| {
                    log::error!("{}: {e}", s.table_name());
                    e.to_string()
                });
                (*s, view)
            })
            .collect();
    }

    fn reload_config(&mut self) {
        match config::load_or_default(&self.config_path) {
            Ok(cfg) => {
                self.config = cfg;
                self.recompute();
                self.status = Some(format!("Reloaded {}", self.config_path.display()));
                log::info!("config reloaded from {}", self.config_path.display());
            }
            Err(e) => self.status = Some(format!("Reload failed: {e}")),
        }
    }

    fn view(&self, scenario: Scenario) -> Option<&Result<ScenarioView, String>> {
        self.views
            .iter()
            .find(|(s, _)| *s == scenario)
            .map(|(_, v)| v)
    }

    fn ui_constants(&self, ui: &mut egui::Ui) {
        let c = &self.config.constants;
        ui.heading("Engine constants");
        ui.separator();
        egui::Grid::new("constants_grid")
            .num_columns(2)
            .spacing([8.0, 4.0])
            .show(ui, |ui| {
                ui.label("Displacement");
                ui.label(format!("{} {}", c.displacement, c.displacement_unit.symbol()));
                ui.end_row();
                ui.label("Air density");
                ui.label(format!("{} {}", c.air_density, c.air_density_unit.symbol()));
                ui.end_row();
                ui.label("Air cp");
                ui.label(format!(
                    "{} {}",
                    c.air_specific_heat,
                    c.air_specific_heat_unit.symbol()
                ));
                ui.end_row();
                ui.label("Fuel LHV");
                ui.label(format!("{} {}", c.fuel_lhv, c.fuel_lhv_unit.symbol()));
                ui.end_row();
            });
        ui.separator();
        ui.small(format!("Config file: {}", self.config_path.display()));
        if let Some(msg) = &self.status {
            ui.small(msg);
        }
    }
}

fn table_ui(ui: &mut egui::Ui, id: &str, table: &ResultTable, decimals: usize) {
    egui::ScrollArea::horizontal()
        .id_source(format!("{id}_scroll"))
        .show(ui, |ui| {
            egui::Grid::new(id)
                .striped(true)
                .num_columns(table.columns().len())
                .spacing([12.0, 4.0])
                .show(ui, |ui| {
                    for label in table.labels() {
                        ui.strong(label);
                    }
                    ui.end_row();
                    for i in 0..table.row_count() {
                        for value in table.row(i) {
                            ui.label(format_value(value, decimals));
                        }
                        ui.end_row();
                    }
                });
        });
}

fn chart_ui(ui: &mut egui::Ui, id: String, chart: &ChartData) {
    ui.label(egui::RichText::new(&chart.title).strong());
    let mut plot = Plot::new(id)
        .height(280.0)
        .x_axis_label(chart.x_label.clone())
        .y_axis_label(chart.y_label.clone());
    if chart.has_legend() {
        plot = plot.legend(Legend::default());
    }
    plot.show(ui, |plot_ui| {
        for line in &chart.lines {
            let mut plotted = Line::new(PlotPoints::new(line.points.clone()));
            if let Some(name) = &line.legend {
                plotted = plotted.name(name);
            }
            plot_ui.line(plotted);
        }
    });
    ui.add_space(12.0);
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        // 상단 바
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Engine Bench Toolbox");
                ui.separator();
                for scenario in Scenario::ALL {
                    ui.selectable_value(&mut self.selected, scenario, scenario.table_name());
                }
                ui.separator();
                if ui.button("Reload config").clicked() {
                    self.reload_config();
                }
                if ui.button("Formula reference").clicked() {
                    self.show_formula_modal = true;
                }
            });
        });

        if self.show_formula_modal {
            egui::Window::new("Formula reference")
                .collapsible(true)
                .resizable(true)
                .open(&mut self.show_formula_modal)
                .show(ctx, |ui| {
                    ui.label("Air mass flow: m_air = rho_air * D * N / (2 turn)  (four-stroke)");
                    ui.label("Exhaust heat: Q_exh = m_air * cp_air * dT");
                    ui.label("Input heat: Q_in = m_fuel * LHV");
                    ui.label("Shaft power: P = omega * T");
                    ui.label("Fins heat: Q_fins = Q_in - Q_exh - P");
                    ui.label("Efficiency: eta = 100 * P / Q_in");
                    ui.label("BSFC = m_fuel / P");
                    ui.label("MEP = 4 * pi * T / D");
                    ui.separator();
                    ui.label("Part B torque: T_i = slope * (load_i - load_1) + T_1");
                });
        }

        egui::SidePanel::left("constants")
            .resizable(true)
            .default_width(220.0)
            .show(ctx, |ui| {
                self.ui_constants(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    let scenario = self.selected;
                    ui.heading(scenario.title());
                    ui.separator();
                    match self.view(scenario) {
                        Some(Ok(view)) => {
                            ui.strong(scenario.table_name());
                            table_ui(
                                ui,
                                &format!("{scenario:?}_table"),
                                &view.table,
                                self.config.display.decimals,
                            );
                            ui.add_space(16.0);
                            for (i, chart) in view.charts.iter().enumerate() {
                                chart_ui(ui, format!("{scenario:?}_chart_{i}"), chart);
                            }
                        }
                        Some(Err(msg)) => {
                            ui.colored_label(egui::Color32::RED, msg);
                        }
                        None => {
                            ui.label("Not computed.");
                        }
                    }
                });
        });
    }
}
