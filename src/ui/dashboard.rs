//! Demand charts for the dashboard, drawn with egui_plot.

use crate::charts::{self, DashboardData, DemandLevel};
use eframe::egui;
use egui_plot::{Bar, BarChart, GridMark, Line, Plot, PlotPoints};

const CHART_HEIGHT: f32 = 260.0;

/// Draws whichever charts the snapshot has data for. Missing sections are
/// skipped without comment, matching a page that simply lacks that panel.
pub fn show(ui: &mut egui::Ui, data: &DashboardData) {
    if data.has_distribution() {
        distribution_chart(ui, data);
        ui.add_space(18.0);
    }

    if data.has_trend() {
        trend_chart(ui, data);
    }
}

/// Bar chart of predicted demand per category, categories in supplied order.
fn distribution_chart(ui: &mut egui::Ui, data: &DashboardData) {
    let series = charts::demand_distribution(&data.demand_counts);

    let bars: Vec<Bar> = series
        .values
        .iter()
        .enumerate()
        .map(|(i, &value)| Bar::new(i as f64, value).width(0.6))
        .collect();

    let tick_labels = series.labels.clone();
    let tick_count = tick_labels.len();

    ui.label(egui::RichText::new("Demand Distribution").size(16.0).strong());
    ui.add_space(6.0);

    Plot::new("demand_distribution")
        .height(CHART_HEIGHT)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .include_y(0.0)
        .x_grid_spacer(move |_input| category_marks(tick_count))
        .x_axis_formatter(move |mark, _range| category_label(&tick_labels, mark))
        .show(ui, |plot_ui| {
            // No .name() on the chart, so the legend stays hidden
            plot_ui.bar_chart(BarChart::new(bars));
        });
}

/// Line chart of the recent demand trend: x ticks "#1", "#2", ..., y values
/// are the Low/Medium/High ordinals redisplayed as category names.
fn trend_chart(ui: &mut egui::Ui, data: &DashboardData) {
    let series = charts::demand_trend(&data.recent_predictions);
    let curve = charts::smoothed(&series.points, 12);

    let tick_labels = series.x_labels.clone();
    let tick_count = tick_labels.len();

    ui.label(egui::RichText::new("Demand Trend").size(16.0).strong());
    ui.add_space(6.0);

    Plot::new("demand_trend")
        .height(CHART_HEIGHT)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .include_y(0.0)
        .include_y(3.5)
        .x_grid_spacer(move |_input| category_marks(tick_count))
        .x_axis_formatter(move |mark, _range| category_label(&tick_labels, mark))
        .y_grid_spacer(|_input| {
            (0..=3)
                .map(|v| GridMark {
                    value: v as f64,
                    step_size: 1.0,
                })
                .collect()
        })
        .y_axis_formatter(|mark, _range| ordinal_label(mark))
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(PlotPoints::from(curve))
                    .width(2.0)
                    .fill(0.0),
            );
        });
}

/// One grid mark per category index.
fn category_marks(count: usize) -> Vec<GridMark> {
    (0..count)
        .map(|i| GridMark {
            value: i as f64,
            step_size: 1.0,
        })
        .collect()
}

/// Tick label for a category axis; positions between categories stay blank.
fn category_label(labels: &[String], mark: GridMark) -> String {
    let idx = mark.value.round();
    if (mark.value - idx).abs() > 1e-6 || idx < 0.0 {
        return String::new();
    }
    labels
        .get(idx as usize)
        .cloned()
        .unwrap_or_default()
}

fn ordinal_label(mark: GridMark) -> String {
    let idx = mark.value.round();
    if (mark.value - idx).abs() > 1e-6 {
        return String::new();
    }
    DemandLevel::label_for_ordinal(idx as i64).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mark(value: f64) -> GridMark {
        GridMark {
            value,
            step_size: 1.0,
        }
    }

    #[test]
    fn test_category_label_lookup() {
        let labels = vec!["Low".to_string(), "High".to_string()];
        assert_eq!(category_label(&labels, mark(0.0)), "Low");
        assert_eq!(category_label(&labels, mark(1.0)), "High");
        assert_eq!(category_label(&labels, mark(2.0)), "");
        assert_eq!(category_label(&labels, mark(0.4)), "");
        assert_eq!(category_label(&labels, mark(-1.0)), "");
    }

    #[test]
    fn test_ordinal_label_redisplays_categories() {
        assert_eq!(ordinal_label(mark(0.0)), "");
        assert_eq!(ordinal_label(mark(1.0)), "Low");
        assert_eq!(ordinal_label(mark(2.0)), "Medium");
        assert_eq!(ordinal_label(mark(3.0)), "High");
        assert_eq!(ordinal_label(mark(2.5)), "");
    }

    #[test]
    fn test_category_marks_cover_all_indices() {
        let marks = category_marks(3);
        let values: Vec<f64> = marks.iter().map(|m| m.value).collect();
        assert_eq!(values, vec![0.0, 1.0, 2.0]);
    }
}
