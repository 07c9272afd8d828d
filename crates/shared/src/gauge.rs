//! Serializable gauge configuration pushed to the page on every update.

use serde::{Deserialize, Serialize};

use crate::domain::BandKind;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaugeFigure {
    pub mode: String,
    pub value: f64,
    pub title: GaugeTitle,
    pub axis: GaugeAxis,
    pub bar: GaugeBar,
    pub steps: Vec<GaugeBand>,
    pub layout: GaugeLayout,
}

impl GaugeFigure {
    /// Band whose range contains the needle value.
    pub fn active_band(&self) -> Option<&GaugeBand> {
        let kind = BandKind::for_score(self.value);
        self.steps.iter().find(|band| band.kind == kind)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaugeTitle {
    pub text: String,
    pub font: GaugeFont,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaugeFont {
    pub size: u32,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaugeAxis {
    pub range: [f64; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaugeBar {
    pub color: String,
    pub thickness: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaugeBand {
    pub kind: BandKind,
    pub range: [f64; 2],
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaugeLayout {
    pub height: u32,
    pub width: u32,
    pub margin: GaugeMargin,
    pub font_color: String,
    pub plot_bgcolor: String,
    pub paper_bgcolor: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GaugeMargin {
    pub r: u32,
    pub t: u32,
    pub l: u32,
    pub b: u32,
}
