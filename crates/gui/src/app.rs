//! Interactive trend window: TrendApp implements eframe::App.

use anyhow::anyhow;
use eframe::egui::{self, Color32, Ui};
use egui_plot::{GridMark, Legend, Line, Plot, PlotPoints, Points};

use crate::trend::TrendChart;

const SERIES_COLOR: Color32 = Color32::from_rgb(30, 144, 255);

/// Open a native window showing `chart` and block until it is closed.
///
/// Nothing is written to disk.
pub fn show_trend(chart: TrendChart) -> anyhow::Result<()> {
    tracing::debug!("opening trend window with {} points", chart.points.len());

    let title = chart.title.clone();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(&title)
            .with_inner_size([1200.0, 700.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(TrendApp { chart }))),
    )
    .map_err(|e| anyhow!("trend window failed: {e}"))
}

struct TrendApp {
    chart: TrendChart,
}

impl eframe::App for TrendApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(&self.chart.title);
            });
            trend_plot(ui, &self.chart);
        });
    }
}

fn trend_plot(ui: &mut Ui, chart: &TrendChart) {
    let ticks: Vec<f64> = chart.years.iter().map(|&y| f64::from(y)).collect();

    Plot::new("trend_plot")
        .legend(Legend::default())
        .x_axis_label(chart.x_label)
        .y_axis_label(chart.y_label)
        .x_grid_spacer(move |_input| {
            ticks
                .iter()
                .map(|&value| GridMark {
                    value,
                    step_size: 1.0,
                })
                .collect()
        })
        .x_axis_formatter(|mark, _range| format!("{}", mark.value.round() as i64))
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            let line = Line::new(PlotPoints::from(chart.points.clone()))
                .name(&chart.series_label)
                .color(SERIES_COLOR)
                .width(2.0);
            let markers = Points::new(PlotPoints::from(chart.points.clone()))
                .name(&chart.series_label)
                .color(SERIES_COLOR)
                .radius(4.0);

            plot_ui.line(line);
            plot_ui.points(markers);
        });
}
