//! The hourly chart: one line per visible metric, a toggle bar driving the
//! visibility state, and hover text composed from the metric catalog.

use std::ops::RangeInclusive;

use egui::Ui;
use egui_plot::{AxisHints, GridMark, Legend, Line, Plot};

use crate::metrics::{Metric, Secondary};
use crate::series::SeriesPoint;
use crate::visibility::VisibilityController;

fn format_value(value: f64) -> String {
    if value.is_finite() {
        format!("{value}")
    } else {
        "-".to_string()
    }
}

/// Hover text for one metric at one sample: label, primary value with its
/// unit, then whichever secondary the catalog declares — the other unit, the
/// compass label, or (for UV) the severity band in parentheses.
pub fn tooltip_line(metric: Metric, point: &SeriesPoint) -> String {
    let info = metric.info();
    let primary = point.primary(metric);
    let value = format_value(primary);
    match info.secondary {
        Secondary::None => match info.scale {
            Some(scale) if primary.is_finite() => {
                format!("{}: {} ({})", info.label, value, scale.classify(primary))
            }
            _ if info.unit.is_empty() => format!("{}: {}", info.label, value),
            _ => format!("{}: {} {}", info.label, value, info.unit),
        },
        Secondary::Unit(alt_unit) => format!(
            "{}: {} {} / {} {}",
            info.label,
            value,
            info.unit,
            format_value(point.secondary(metric)),
            alt_unit,
        ),
        Secondary::Compass => format!("{}: {} {} ({})", info.label, value, info.unit, point.wind_dir),
    }
}

#[derive(Default, Clone)]
pub struct ChartView {
    visibility: VisibilityController,
}

impl ChartView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ui(&mut self, points: &[SeriesPoint], ui: &mut Ui) {
        self.toggle_bar(ui);
        ui.separator();
        self.plot(points, ui);
    }

    fn toggle_bar(&mut self, ui: &mut Ui) {
        ui.horizontal_wrapped(|ui| {
            let all = self.visibility.all_selected();
            let bulk_label = if all { "Unselect All" } else { "Select All" };
            if ui.selectable_label(all, bulk_label).clicked() {
                self.visibility.toggle_all();
            }
            for metric in Metric::ALL {
                let shown = self.visibility.is_shown(metric);
                let verb = if shown { "Hide" } else { "Show" };
                let text = format!("{verb} {}", metric.info().label);
                if ui.selectable_label(shown, text).clicked() {
                    self.visibility.toggle(metric);
                }
            }
        });
    }

    fn plot(&self, points: &[SeriesPoint], ui: &mut Ui) {
        let labels: Vec<String> = points.iter().map(|point| point.time.clone()).collect();
        let hour_formatter = move |mark: GridMark, _max_chars: usize, _range: &RangeInclusive<f64>| {
            if mark.value < 0.0 || mark.value.fract() != 0.0 {
                return String::new();
            }
            labels.get(mark.value as usize).cloned().unwrap_or_default()
        };

        let hovered = points.to_vec();
        let label_formatter = move |name: &str, value: &egui_plot::PlotPoint| {
            let index = value.x.round();
            let point = (index >= 0.0)
                .then(|| hovered.get(index as usize))
                .flatten();
            match (point, Metric::from_label(name)) {
                (Some(point), Some(metric)) => {
                    format!("Time: {}\n{}", point.time, tooltip_line(metric, point))
                }
                (Some(point), None) => format!("Time: {}", point.time),
                (None, _) => String::new(),
            }
        };

        let plot = Plot::new("hourly_forecast")
            .legend(Legend::default())
            .custom_x_axes(vec![AxisHints::new_x()
                .label("Time")
                .formatter(hour_formatter)])
            .label_formatter(label_formatter);

        plot.show(ui, |plot_ui| {
            for metric in Metric::ALL {
                if !self.visibility.is_shown(metric) {
                    continue;
                }
                let info = metric.info();
                let series: Vec<[f64; 2]> = points
                    .iter()
                    .enumerate()
                    .filter(|(_, point)| point.primary(metric).is_finite())
                    .map(|(hour, point)| [hour as f64, point.primary(metric)])
                    .collect();
                plot_ui.line(Line::new(series).color(info.color).name(info.label));
            }
        });
    }
}
