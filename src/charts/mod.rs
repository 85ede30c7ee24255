use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Demand category assigned to a single prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DemandLevel {
    Low,
    Medium,
    High,
}

impl DemandLevel {
    /// Plotting ordinal: Low=1, Medium=2, High=3.
    pub fn ordinal(self) -> f64 {
        match self {
            DemandLevel::Low => 1.0,
            DemandLevel::Medium => 2.0,
            DemandLevel::High => 3.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DemandLevel::Low => "Low",
            DemandLevel::Medium => "Medium",
            DemandLevel::High => "High",
        }
    }

    /// Axis tick label for an ordinal position. Zero and out-of-range
    /// positions display empty.
    pub fn label_for_ordinal(ordinal: i64) -> &'static str {
        match ordinal {
            1 => "Low",
            2 => "Medium",
            3 => "High",
            _ => "",
        }
    }
}

/// Pre-computed dashboard summary produced by the prediction backend.
/// Keys and values arrive display-ready; no validation is performed here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardData {
    /// Category label -> occurrence count, in display order.
    #[serde(default)]
    pub demand_counts: Vec<(String, u64)>,
    /// Most recent predicted demand levels, oldest first.
    #[serde(default)]
    pub recent_predictions: Vec<DemandLevel>,
}

impl DashboardData {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let data: DashboardData = serde_json::from_str(&content)?;
        Ok(data)
    }

    pub fn has_distribution(&self) -> bool {
        !self.demand_counts.is_empty()
    }

    pub fn has_trend(&self) -> bool {
        !self.recent_predictions.is_empty()
    }
}

/// Bar chart series for the demand distribution: one bar per category,
/// in the order the categories were supplied.
#[derive(Debug, Clone, PartialEq)]
pub struct BarSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

pub fn demand_distribution(counts: &[(String, u64)]) -> BarSeries {
    BarSeries {
        labels: counts.iter().map(|(label, _)| label.clone()).collect(),
        values: counts.iter().map(|(_, count)| *count as f64).collect(),
    }
}

/// Line chart series for the demand trend: x positions are sequential
/// indices labelled "#1", "#2", ..., y values are demand ordinals.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendSeries {
    pub x_labels: Vec<String>,
    pub points: Vec<[f64; 2]>,
}

pub fn demand_trend(predictions: &[DemandLevel]) -> TrendSeries {
    TrendSeries {
        x_labels: (1..=predictions.len()).map(|i| format!("#{}", i)).collect(),
        points: predictions
            .iter()
            .enumerate()
            .map(|(i, level)| [i as f64, level.ordinal()])
            .collect(),
    }
}

/// Catmull-Rom resampling of a polyline. Input points are kept as knots,
/// so the curve passes through every original point.
pub fn smoothed(points: &[[f64; 2]], samples_per_segment: usize) -> Vec<[f64; 2]> {
    if points.len() < 3 || samples_per_segment < 2 {
        return points.to_vec();
    }

    let mut out = Vec::with_capacity((points.len() - 1) * samples_per_segment + 1);
    for i in 0..points.len() - 1 {
        // Clamp endpoint neighbours at the boundaries
        let p0 = points[i.saturating_sub(1)];
        let p1 = points[i];
        let p2 = points[i + 1];
        let p3 = points[(i + 2).min(points.len() - 1)];

        for s in 0..samples_per_segment {
            let t = s as f64 / samples_per_segment as f64;
            out.push(catmull_rom(p0, p1, p2, p3, t));
        }
    }
    out.push(points[points.len() - 1]);
    out
}

fn catmull_rom(p0: [f64; 2], p1: [f64; 2], p2: [f64; 2], p3: [f64; 2], t: f64) -> [f64; 2] {
    let t2 = t * t;
    let t3 = t2 * t;
    let coord = |a: f64, b: f64, c: f64, d: f64| {
        0.5 * ((2.0 * b) + (-a + c) * t + (2.0 * a - 5.0 * b + 4.0 * c - d) * t2
            + (-a + 3.0 * b - 3.0 * c + d) * t3)
    };
    [
        coord(p0[0], p1[0], p2[0], p3[0]),
        coord(p0[1], p1[1], p2[1], p3[1]),
    ]
}
