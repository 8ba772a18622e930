//! Geometry for the chart shapes a widget card can draw.
//!
//! All functions are pure. They return `None` when the series cannot be drawn
//! (no points, or nothing above zero to scale against) so callers render a
//! "no data" placeholder instead of propagating non-finite numbers.

/// Circumference of the donut ring in display units.
pub const DONUT_CIRCUMFERENCE: f64 = 283.0;
/// Height of the tallest bar in display units.
pub const BAR_MAX_HEIGHT: f64 = 80.0;
/// Smallest height a bar is drawn with.
pub const BAR_MIN_HEIGHT: f64 = 4.0;
pub const FALLBACK_COLOR: &str = "#3B82F6";

#[derive(Debug, Clone, PartialEq)]
pub struct DonutSegment {
    pub label: String,
    pub value: f64,
    /// Arc length along the ring.
    pub arc: f64,
    /// Negative cumulative arc of the preceding segments.
    pub offset: f64,
    pub color: String,
}

impl DonutSegment {
    /// Fraction of the full ring covered by this segment.
    pub fn fraction(&self) -> f64 {
        self.arc / DONUT_CIRCUMFERENCE
    }

    /// Fraction of the ring at which this segment starts.
    pub fn start_fraction(&self) -> f64 {
        -self.offset / DONUT_CIRCUMFERENCE
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Donut {
    pub total: f64,
    pub segments: Vec<DonutSegment>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    pub height: f64,
    pub color: String,
}

/// Normalised points for line and area charts: `x` and `y` in `[0, 1]`,
/// `y = 0` on the baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    pub points: Vec<[f64; 2]>,
    pub labels: Vec<String>,
    pub color: String,
    pub filled: bool,
}

fn color_at(colors: &[String], idx: usize) -> String {
    colors
        .get(idx)
        .filter(|c| !c.trim().is_empty())
        .cloned()
        .unwrap_or_else(|| FALLBACK_COLOR.to_string())
}

/// Values paired with labels, truncated to the shorter series. Negative values
/// count as zero; any non-finite value rejects the series.
fn paired(values: &[f64], labels: &[String]) -> Option<Vec<(f64, String)>> {
    if values.iter().any(|v| !v.is_finite()) {
        return None;
    }
    let pairs: Vec<_> = values
        .iter()
        .zip(labels)
        .map(|(v, l)| (v.max(0.0), l.clone()))
        .collect();
    if pairs.is_empty() {
        None
    } else {
        Some(pairs)
    }
}

fn max_value(pairs: &[(f64, String)]) -> Option<f64> {
    let max = pairs.iter().map(|(v, _)| *v).fold(0.0_f64, f64::max);
    (max > 0.0).then_some(max)
}

pub fn donut(values: &[f64], labels: &[String], colors: &[String]) -> Option<Donut> {
    let pairs = paired(values, labels)?;
    let total: f64 = pairs.iter().map(|(v, _)| *v).sum();
    if total <= 0.0 {
        return None;
    }
    let mut consumed = 0.0;
    let segments = pairs
        .into_iter()
        .enumerate()
        .map(|(idx, (value, label))| {
            let arc = value / total * DONUT_CIRCUMFERENCE;
            let segment = DonutSegment {
                label,
                value,
                arc,
                offset: -consumed,
                color: color_at(colors, idx),
            };
            consumed += arc;
            segment
        })
        .collect();
    Some(Donut { total, segments })
}

pub fn bars(values: &[f64], labels: &[String], colors: &[String]) -> Option<Vec<Bar>> {
    let pairs = paired(values, labels)?;
    let max = max_value(&pairs)?;
    Some(
        pairs
            .into_iter()
            .enumerate()
            .map(|(idx, (value, label))| Bar {
                height: (value / max * BAR_MAX_HEIGHT).max(BAR_MIN_HEIGHT),
                label,
                value,
                color: color_at(colors, idx),
            })
            .collect(),
    )
}

/// Line (or, with `filled`, area) through the series. Needs two points.
pub fn polyline(
    values: &[f64],
    labels: &[String],
    colors: &[String],
    filled: bool,
) -> Option<Polyline> {
    let pairs = paired(values, labels)?;
    if pairs.len() < 2 {
        return None;
    }
    let max = max_value(&pairs)?;
    let step = 1.0 / (pairs.len() - 1) as f64;
    let (points, labels) = pairs
        .into_iter()
        .enumerate()
        .map(|(idx, (value, label))| ([idx as f64 * step, value / max], label))
        .unzip();
    Some(Polyline {
        points,
        labels,
        color: color_at(colors, 0),
        filled,
    })
}

/// Parse `#RRGGBB` (or `RRGGBB`) into its channels.
pub fn parse_hex_color(hex: &str) -> Option<[u8; 3]> {
    let digits = hex.trim().trim_start_matches('#');
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    Some([channel(0..2)?, channel(2..4)?, channel(4..6)?])
}
