//! Mapping from a sentiment result to the gauge figure, and its SVG rendering.

use std::{f64::consts::PI, fmt::Write as _};

use shared::{
    domain::{BandKind, SentimentResult, SCORE_MAX, SCORE_MIN},
    gauge::{
        GaugeAxis, GaugeBand, GaugeBar, GaugeFigure, GaugeFont, GaugeLayout, GaugeMargin,
        GaugeTitle,
    },
};

const TITLE_FONT_SIZE: u32 = 20;
const TEXT_COLOR: &str = "white";
const BAR_COLOR: &str = "grey";
const BAR_THICKNESS: f64 = 0.25;
const TRANSPARENT: &str = "rgba(0,0,0,0)";
const WIDTH: u32 = 300;
const HEIGHT: u32 = 200;
const MARGIN: GaugeMargin = GaugeMargin {
    r: 0,
    t: 70,
    l: 0,
    b: 20,
};

pub fn figure_for(result: &SentimentResult) -> GaugeFigure {
    GaugeFigure {
        mode: "gauge+number".into(),
        value: result.score,
        title: GaugeTitle {
            text: result.verdict.to_string(),
            font: GaugeFont {
                size: TITLE_FONT_SIZE,
                color: TEXT_COLOR.into(),
            },
        },
        axis: GaugeAxis {
            range: [SCORE_MIN, SCORE_MAX],
        },
        bar: GaugeBar {
            color: BAR_COLOR.into(),
            thickness: BAR_THICKNESS,
        },
        steps: BandKind::all()
            .into_iter()
            .map(|kind| GaugeBand {
                kind,
                range: kind.range(),
                color: kind.color().into(),
            })
            .collect(),
        layout: GaugeLayout {
            height: HEIGHT,
            width: WIDTH,
            margin: MARGIN,
            font_color: TEXT_COLOR.into(),
            plot_bgcolor: TRANSPARENT.into(),
            paper_bgcolor: TRANSPARENT.into(),
        },
    }
}

/// Geometry of the half-ring inside the plot area.
struct Dial {
    cx: f64,
    cy: f64,
    outer: f64,
    inner: f64,
    min: f64,
    max: f64,
}

impl Dial {
    fn for_figure(figure: &GaugeFigure) -> Self {
        let layout = &figure.layout;
        let plot_width = f64::from(layout.width.saturating_sub(layout.margin.l + layout.margin.r));
        let plot_height =
            f64::from(layout.height.saturating_sub(layout.margin.t + layout.margin.b));
        let outer = (plot_width / 2.0).min(plot_height).max(1.0) * 0.9;
        Self {
            cx: f64::from(layout.margin.l) + plot_width / 2.0,
            cy: f64::from(layout.margin.t) + plot_height,
            outer,
            inner: outer * 0.6,
            min: figure.axis.range[0],
            max: figure.axis.range[1],
        }
    }

    /// -1 maps to the left end of the dial, 1 to the right end.
    fn angle(&self, value: f64) -> f64 {
        let span = self.max - self.min;
        let fraction = if span > 0.0 {
            ((value - self.min) / span).clamp(0.0, 1.0)
        } else {
            0.0
        };
        PI * (1.0 - fraction)
    }

    fn point(&self, value: f64, radius: f64) -> (f64, f64) {
        let angle = self.angle(value);
        (
            self.cx + radius * angle.cos(),
            self.cy - radius * angle.sin(),
        )
    }

    fn sector(&self, from: f64, to: f64, inner: f64, outer: f64) -> String {
        let (ox0, oy0) = self.point(from, outer);
        let (ox1, oy1) = self.point(to, outer);
        let (ix1, iy1) = self.point(to, inner);
        let (ix0, iy0) = self.point(from, inner);
        format!(
            "M {ox0:.2} {oy0:.2} A {outer:.2} {outer:.2} 0 0 1 {ox1:.2} {oy1:.2} \
             L {ix1:.2} {iy1:.2} A {inner:.2} {inner:.2} 0 0 0 {ix0:.2} {iy0:.2} Z"
        )
    }
}

pub fn render_svg(figure: &GaugeFigure) -> String {
    let layout = &figure.layout;
    let dial = Dial::for_figure(figure);
    let mut svg = String::new();

    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" style="background:{bg}" font-family="sans-serif" fill="{fg}">"#,
        w = layout.width,
        h = layout.height,
        bg = layout.paper_bgcolor,
        fg = escape_xml(&layout.font_color),
    );

    for band in &figure.steps {
        let _ = write!(
            svg,
            r#"<path class="band band-{kind}" d="{d}" fill="{color}"/>"#,
            kind = band_class(band.kind),
            d = dial.sector(band.range[0], band.range[1], dial.inner, dial.outer),
            color = escape_xml(&band.color),
        );
    }

    let value = figure.value.clamp(dial.min, dial.max);
    if value > dial.min {
        let ring = dial.outer - dial.inner;
        let middle = dial.inner + ring / 2.0;
        let half = ring * figure.bar.thickness / 2.0;
        let _ = write!(
            svg,
            r#"<path class="bar" d="{d}" fill="{color}"/>"#,
            d = dial.sector(dial.min, value, middle - half, middle + half),
            color = escape_xml(&figure.bar.color),
        );
    }

    let (lx, ly) = dial.point(dial.min, (dial.outer + dial.inner) / 2.0);
    let (rx, ry) = dial.point(dial.max, (dial.outer + dial.inner) / 2.0);
    let (tx, ty) = dial.point((dial.min + dial.max) / 2.0, dial.outer + 6.0);
    let _ = write!(
        svg,
        r#"<g class="ticks" font-size="11" text-anchor="middle"><text x="{lx:.2}" y="{ly:.2}" dy="14">{min}</text><text x="{tx:.2}" y="{ty:.2}">{mid}</text><text x="{rx:.2}" y="{ry:.2}" dy="14">{max}</text></g>"#,
        min = format_value(dial.min),
        mid = format_value((dial.min + dial.max) / 2.0),
        max = format_value(dial.max),
    );

    let _ = write!(
        svg,
        r#"<text class="title" x="{x:.2}" y="{y:.2}" text-anchor="middle" font-size="{size}" fill="{color}">{text}</text>"#,
        x = dial.cx,
        y = f64::from(layout.margin.t) / 2.0,
        size = figure.title.font.size,
        color = escape_xml(&figure.title.font.color),
        text = escape_xml(&figure.title.text),
    );
    let _ = write!(
        svg,
        r#"<text class="number" x="{x:.2}" y="{y:.2}" text-anchor="middle" font-size="28">{value}</text>"#,
        x = dial.cx,
        y = dial.cy - 4.0,
        value = format_value(figure.value),
    );

    svg.push_str("</svg>");
    svg
}

fn band_class(kind: BandKind) -> &'static str {
    match kind {
        BandKind::Negative => "negative",
        BandKind::Neutral => "neutral",
        BandKind::Positive => "positive",
    }
}

/// Up to four decimals, trailing zeros dropped, never "-0".
pub fn format_value(value: f64) -> String {
    let formatted = format!("{value:.4}");
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" | "" => "0".into(),
        other => other.into(),
    }
}

pub(crate) fn escape_xml(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
#[path = "tests/gauge_tests.rs"]
mod tests;
