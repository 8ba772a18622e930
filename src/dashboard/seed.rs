//! Sample content the dashboard starts with.

use crate::dashboard::model::{Category, DashboardData, Widget, WidgetKind, WidgetTemplate};
use serde_json::json;

pub const TEMPLATE_GROUPS: [&str; 4] = ["CSPM", "CWPP", "Image", "Ticket"];

const CLOUD_ACCOUNTS_TEXT: &str = "Connected (2)\nNot Connected (2)";
const CLOUD_RISK_TEXT: &str = "Failed (1689)\nWarning (681)\nNot available (36)\nPassed (7253)";
const NO_GRAPH_TEXT: &str = "No Graph data available!";
const IMAGE_RISK_TEXT: &str = "1470 Total Vulnerabilities\nCritical (9)\nHigh (150)";
const IMAGE_ISSUES_TEXT: &str = "2 Total Images\nCritical (2)\nHigh (2)";
const FALLBACK_TEXT: &str = "Widget data will be displayed here";

const DEFAULT_TEXTS: &[(&str, &str)] = &[
    ("Cloud Accounts", CLOUD_ACCOUNTS_TEXT),
    ("Cloud Account Risk Assessment", CLOUD_RISK_TEXT),
    ("Top 5 Namespace Specific Alerts", NO_GRAPH_TEXT),
    ("Workload Alerts", NO_GRAPH_TEXT),
    ("Image Risk Assessment", IMAGE_RISK_TEXT),
    ("Image Security Issues", IMAGE_ISSUES_TEXT),
];

/// Body text given to widgets created from a template.
pub fn default_widget_text(template_name: &str) -> &'static str {
    DEFAULT_TEXTS
        .iter()
        .find(|(name, _)| *name == template_name)
        .map(|(_, text)| *text)
        .unwrap_or(FALLBACK_TEXT)
}

fn widget(
    id: &str,
    name: &str,
    kind: WidgetKind,
    data: Option<serde_json::Value>,
) -> Widget {
    Widget {
        id: id.into(),
        name: name.into(),
        text: default_widget_text(name).into(),
        kind,
        data,
        description: None,
        custom_data: None,
    }
}

pub fn initial_data() -> DashboardData {
    DashboardData {
        categories: vec![
            Category {
                id: "cspm-executive".into(),
                name: "CSPM Executive Dashboard".into(),
                widgets: vec![
                    widget(
                        "cloud-accounts",
                        "Cloud Accounts",
                        WidgetKind::Chart,
                        Some(json!({ "connected": 2, "total": 4 })),
                    ),
                    widget(
                        "cloud-risk-assessment",
                        "Cloud Account Risk Assessment",
                        WidgetKind::Chart,
                        Some(json!({
                            "failed": 1689,
                            "warning": 681,
                            "notAvailable": 36,
                            "passed": 7253,
                            "total": 9659
                        })),
                    ),
                ],
            },
            Category {
                id: "cwpp-dashboard".into(),
                name: "CWPP Dashboard".into(),
                widgets: vec![
                    widget(
                        "namespace-alerts",
                        "Top 5 Namespace Specific Alerts",
                        WidgetKind::Graph,
                        None,
                    ),
                    widget("workload-alerts", "Workload Alerts", WidgetKind::Graph, None),
                ],
            },
            Category {
                id: "registry-scan".into(),
                name: "Registry Scan".into(),
                widgets: vec![
                    widget(
                        "image-risk-assessment",
                        "Image Risk Assessment",
                        WidgetKind::Progress,
                        Some(json!({ "total": 1470, "critical": 9, "high": 150 })),
                    ),
                    widget(
                        "image-security-issues",
                        "Image Security Issues",
                        WidgetKind::Progress,
                        Some(json!({ "total": 2, "critical": 2, "high": 2 })),
                    ),
                ],
            },
        ],
    }
}

pub fn widget_templates() -> Vec<WidgetTemplate> {
    [
        ("cloud-accounts", "Cloud Accounts", "CSPM", WidgetKind::Chart),
        (
            "cloud-risk-assessment",
            "Cloud Account Risk Assessment",
            "CSPM",
            WidgetKind::Chart,
        ),
        (
            "namespace-alerts",
            "Top 5 Namespace Specific Alerts",
            "CWPP",
            WidgetKind::Graph,
        ),
        ("workload-alerts", "Workload Alerts", "CWPP", WidgetKind::Graph),
        (
            "image-risk-assessment",
            "Image Risk Assessment",
            "Image",
            WidgetKind::Progress,
        ),
        (
            "image-security-issues",
            "Image Security Issues",
            "Image",
            WidgetKind::Progress,
        ),
        ("ticket-overview", "Ticket Overview", "Ticket", WidgetKind::Metric),
    ]
    .into_iter()
    .map(|(id, name, group, kind)| WidgetTemplate {
        id: id.into(),
        name: name.into(),
        group: group.into(),
        kind,
        selected: false,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_template_gets_placeholder_text() {
        assert_eq!(default_widget_text("Ticket Overview"), FALLBACK_TEXT);
        assert_eq!(default_widget_text("Workload Alerts"), NO_GRAPH_TEXT);
    }

    #[test]
    fn every_template_belongs_to_a_known_group() {
        for t in widget_templates() {
            assert!(TEMPLATE_GROUPS.contains(&t.group.as_str()), "{}", t.group);
            assert!(!t.selected);
        }
    }

    #[test]
    fn seed_ids_unique_per_category() {
        for cat in initial_data().categories {
            let mut ids: Vec<_> = cat.widgets.iter().map(|w| w.id.as_str()).collect();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), cat.widgets.len());
        }
    }
}
