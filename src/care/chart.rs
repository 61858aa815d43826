use serde::{Deserialize, Serialize};

use crate::models::enums::StoneLocation;
use crate::models::ScanObservation;

pub const STONE_CHART_TITLE: &str = "Kidney Stone Sizes and Locations";
pub const STONE_CHART_X_AXIS: &str = "Stones";
pub const STONE_CHART_Y_AXIS: &str = "Size (mm)";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoneBar {
    pub label: String,
    pub size_mm: f64,
    pub location: StoneLocation,
    pub legend: String,
}

/// Bar chart series: stone index on x, size on y, legend names the location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoneChart {
    pub title: String,
    pub x_axis: String,
    pub y_axis: String,
    pub bars: Vec<StoneBar>,
}

pub fn stone_chart(observation: &ScanObservation) -> StoneChart {
    let bars = observation
        .stones()
        .enumerate()
        .map(|(i, (size_mm, location))| StoneBar {
            label: format!("Stone {}", i + 1),
            size_mm,
            location,
            legend: format!("{} ({size_mm:.1}mm)", location.label()),
        })
        .collect();

    StoneChart {
        title: STONE_CHART_TITLE.into(),
        x_axis: STONE_CHART_X_AXIS.into(),
        y_axis: STONE_CHART_Y_AXIS.into(),
        bars,
    }
}
