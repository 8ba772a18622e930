use serde::{Deserialize, Serialize};

/// Display kind of a widget card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetKind {
    Chart,
    Metric,
    Graph,
    Progress,
}

impl Default for WidgetKind {
    fn default() -> Self {
        WidgetKind::Chart
    }
}

impl WidgetKind {
    pub const ALL: [WidgetKind; 4] = [
        WidgetKind::Chart,
        WidgetKind::Metric,
        WidgetKind::Graph,
        WidgetKind::Progress,
    ];

    pub fn label(self) -> &'static str {
        match self {
            WidgetKind::Chart => "Chart",
            WidgetKind::Metric => "Metric",
            WidgetKind::Graph => "Graph",
            WidgetKind::Progress => "Progress",
        }
    }
}

/// Chart style used by widgets carrying their own data points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    Donut,
    Bar,
    Line,
    Area,
}

impl Default for ChartType {
    fn default() -> Self {
        ChartType::Donut
    }
}

impl ChartType {
    pub const ALL: [ChartType; 4] = [
        ChartType::Donut,
        ChartType::Bar,
        ChartType::Line,
        ChartType::Area,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ChartType::Donut => "Donut Chart",
            ChartType::Bar => "Bar Chart",
            ChartType::Line => "Line Chart",
            ChartType::Area => "Area Chart",
        }
    }
}

/// Palette offered to new custom charts.
pub const DEFAULT_CHART_COLORS: [&str; 4] = ["#3B82F6", "#10B981", "#F59E0B", "#EF4444"];

/// User supplied series for a chart widget.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CustomData {
    #[serde(default)]
    pub values: Vec<f64>,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub chart_type: ChartType,
}

impl CustomData {
    /// Whether the series carries anything the generic renderer can draw.
    pub fn has_series(&self) -> bool {
        !self.values.is_empty() && !self.labels.is_empty()
    }
}

/// A single display unit inside a [`Category`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Widget {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub text: String,
    pub kind: WidgetKind,
    /// Opaque sample payload carried by seeded widgets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_data: Option<CustomData>,
}

/// Widget fields supplied by callers of
/// [`DashboardStore::add_widget`](crate::dashboard::DashboardStore::add_widget);
/// the store assigns the id.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NewWidget {
    pub name: String,
    #[serde(default)]
    pub text: String,
    pub kind: WidgetKind,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub custom_data: Option<CustomData>,
}

impl NewWidget {
    pub fn new(name: impl Into<String>, kind: WidgetKind) -> Self {
        Self {
            name: name.into(),
            kind,
            ..Self::default()
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn into_widget(self, id: String) -> Widget {
        Widget {
            id,
            name: self.name,
            text: self.text,
            kind: self.kind,
            data: self.data,
            description: self.description,
            custom_data: self.custom_data,
        }
    }
}

/// Named, ordered group of widgets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub widgets: Vec<Widget>,
}

impl Category {
    pub fn contains_widget(&self, widget_id: &str) -> bool {
        self.widgets.iter().any(|w| w.id == widget_id)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NewCategory {
    pub name: String,
    #[serde(default)]
    pub widgets: Vec<Widget>,
}

impl NewCategory {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            widgets: Vec::new(),
        }
    }
}

/// Root of the mutable dashboard state.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DashboardData {
    pub categories: Vec<Category>,
}

impl DashboardData {
    pub fn widget_count(&self) -> usize {
        self.categories.iter().map(|c| c.widgets.len()).sum()
    }
}

/// Catalog entry describing an addable widget kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetTemplate {
    pub id: String,
    pub name: String,
    /// Catalog tab the template is listed under (`CSPM`, `CWPP`, ...).
    pub group: String,
    pub kind: WidgetKind,
    #[serde(default)]
    pub selected: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enums_serialize_lowercase() {
        assert_eq!(
            serde_json::to_string(&WidgetKind::Progress).unwrap(),
            "\"progress\""
        );
        assert_eq!(serde_json::to_string(&ChartType::Area).unwrap(), "\"area\"");
    }

    #[test]
    fn widget_without_optional_fields_deserializes() {
        let w: Widget =
            serde_json::from_str(r#"{"id":"a","name":"A","kind":"metric"}"#).unwrap();
        assert_eq!(w.text, "");
        assert!(w.custom_data.is_none());
        assert!(w.description.is_none());
    }

    #[test]
    fn series_requires_values_and_labels() {
        let mut data = CustomData::default();
        assert!(!data.has_series());
        data.values.push(1.0);
        assert!(!data.has_series());
        data.labels.push("A".into());
        assert!(data.has_series());
    }
}
