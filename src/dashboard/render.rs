use crate::dashboard::chart::{self, Bar, Donut, Polyline};
use crate::dashboard::model::{ChartType, Widget, WidgetKind};
use crate::dashboard::presets;

pub const NO_GRAPH_MESSAGE: &str = "No Graph data available!";
pub const NO_DATA_MESSAGE: &str = "No data available";

#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub value: f64,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProgressSummary {
    pub total: u64,
    pub caption: String,
    pub legend: Vec<LegendEntry>,
}

/// What a widget card draws below its title.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderDescriptor {
    Donut { donut: Donut, center: String },
    Bars(Vec<Bar>),
    Line(Polyline),
    Progress(ProgressSummary),
    GraphPlaceholder { message: String },
    NoData,
    Text {
        text: String,
        description: Option<String>,
    },
}

fn describe_series(widget: &Widget) -> Option<RenderDescriptor> {
    if widget.kind != WidgetKind::Chart {
        return None;
    }
    let data = widget.custom_data.as_ref().filter(|d| d.has_series())?;
    let (values, labels, colors) = (&data.values, &data.labels, &data.colors);
    let described = match data.chart_type {
        ChartType::Donut => chart::donut(values, labels, colors).map(|donut| {
            let center = format_value(donut.total);
            RenderDescriptor::Donut { donut, center }
        }),
        ChartType::Bar => chart::bars(values, labels, colors).map(RenderDescriptor::Bars),
        ChartType::Line | ChartType::Area => {
            let filled = data.chart_type == ChartType::Area;
            chart::polyline(values, labels, colors, filled).map(RenderDescriptor::Line)
        }
    };
    Some(described.unwrap_or(RenderDescriptor::NoData))
}

/// Pick the visual for `widget`: its own series first, then the named preset
/// table, then a default by widget kind.
pub fn describe(widget: &Widget) -> RenderDescriptor {
    if let Some(desc) = describe_series(widget) {
        return desc;
    }
    if let Some(desc) = presets::lookup(&widget.name, widget.kind) {
        return desc;
    }
    match widget.kind {
        WidgetKind::Graph => RenderDescriptor::GraphPlaceholder {
            message: NO_GRAPH_MESSAGE.into(),
        },
        WidgetKind::Chart | WidgetKind::Progress => RenderDescriptor::NoData,
        WidgetKind::Metric => RenderDescriptor::Text {
            text: widget.text.clone(),
            description: widget
                .description
                .clone()
                .filter(|d| !d.trim().is_empty()),
        },
    }
}

/// Integers print without a fractional part.
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value:.2}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::model::{CustomData, NewWidget};

    fn chart_widget(name: &str, chart_type: ChartType, values: &[f64]) -> Widget {
        let mut w = NewWidget::new(name, WidgetKind::Chart);
        w.custom_data = Some(CustomData {
            values: values.to_vec(),
            labels: (0..values.len()).map(|i| format!("P{i}")).collect(),
            colors: Vec::new(),
            chart_type,
        });
        w.into_widget("w".into())
    }

    #[test]
    fn custom_series_beats_name_preset() {
        let w = chart_widget("Cloud Accounts", ChartType::Bar, &[1.0, 2.0]);
        assert!(matches!(describe(&w), RenderDescriptor::Bars(_)));
    }

    #[test]
    fn custom_donut_center_shows_total() {
        let w = chart_widget("X", ChartType::Donut, &[2.0, 3.0]);
        let RenderDescriptor::Donut { center, .. } = describe(&w) else {
            panic!("expected donut");
        };
        assert_eq!(center, "5");
    }

    #[test]
    fn all_zero_series_renders_no_data() {
        let w = chart_widget("X", ChartType::Donut, &[0.0, 0.0]);
        assert_eq!(describe(&w), RenderDescriptor::NoData);
    }

    #[test]
    fn defaults_by_kind() {
        let graph = NewWidget::new("Anything", WidgetKind::Graph).into_widget("g".into());
        assert!(matches!(
            describe(&graph),
            RenderDescriptor::GraphPlaceholder { .. }
        ));
        let chart = NewWidget::new("Anything", WidgetKind::Chart).into_widget("c".into());
        assert_eq!(describe(&chart), RenderDescriptor::NoData);
        let mut metric = NewWidget::new("Ticket Overview", WidgetKind::Metric).with_text("hello");
        metric.description = Some("more".into());
        assert_eq!(
            describe(&metric.into_widget("m".into())),
            RenderDescriptor::Text {
                text: "hello".into(),
                description: Some("more".into())
            }
        );
    }

    #[test]
    fn series_on_non_chart_is_ignored() {
        let mut w = chart_widget("Image Risk Assessment", ChartType::Bar, &[1.0]);
        w.kind = WidgetKind::Progress;
        assert!(matches!(describe(&w), RenderDescriptor::Progress(_)));
    }

    #[test]
    fn value_formatting() {
        assert_eq!(format_value(9659.0), "9659");
        assert_eq!(format_value(2.5), "2.50");
    }
}
