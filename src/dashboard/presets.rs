//! Fixed sample visuals for the widgets that ship with the dashboard.
//!
//! Looked up by exact widget name before falling back to the generic
//! renderer in [`crate::dashboard::render`].

use crate::dashboard::chart;
use crate::dashboard::model::WidgetKind;
use crate::dashboard::render::{LegendEntry, ProgressSummary, RenderDescriptor};
use once_cell::sync::Lazy;
use std::collections::HashMap;

const BLUE: &str = "#3B82F6";
const TRACK_GRAY: &str = "#D1D5DB";
const RED: &str = "#DC2626";
const AMBER: &str = "#F59E0B";
const GRAY: &str = "#9CA3AF";
const GREEN: &str = "#10B981";

/// Sample segment or legend row: label, value, color.
type Entry = (&'static str, f64, &'static str);

#[derive(Debug, Clone)]
enum Preset {
    Donut {
        center: &'static str,
        entries: &'static [Entry],
    },
    Progress {
        total: u64,
        caption: &'static str,
        entries: &'static [Entry],
    },
}

impl Preset {
    fn kind(&self) -> WidgetKind {
        match self {
            Preset::Donut { .. } => WidgetKind::Chart,
            Preset::Progress { .. } => WidgetKind::Progress,
        }
    }

    fn describe(&self) -> RenderDescriptor {
        match self {
            Preset::Donut { center, entries } => {
                let labels: Vec<String> = entries.iter().map(|(l, _, _)| l.to_string()).collect();
                let values: Vec<f64> = entries.iter().map(|(_, v, _)| *v).collect();
                let colors: Vec<String> = entries.iter().map(|(_, _, c)| c.to_string()).collect();
                match chart::donut(&values, &labels, &colors) {
                    Some(donut) => RenderDescriptor::Donut {
                        donut,
                        center: center.to_string(),
                    },
                    None => RenderDescriptor::NoData,
                }
            }
            Preset::Progress {
                total,
                caption,
                entries,
            } => RenderDescriptor::Progress(ProgressSummary {
                total: *total,
                caption: caption.to_string(),
                legend: entries
                    .iter()
                    .map(|(label, value, color)| LegendEntry {
                        label: label.to_string(),
                        value: *value,
                        color: color.to_string(),
                    })
                    .collect(),
            }),
        }
    }
}

static PRESETS: Lazy<HashMap<&'static str, Preset>> = Lazy::new(|| {
    HashMap::from([
        (
            "Cloud Accounts",
            Preset::Donut {
                center: "2",
                entries: &[("Connected", 2.0, BLUE), ("Not Connected", 2.0, TRACK_GRAY)],
            },
        ),
        (
            "Cloud Account Risk Assessment",
            Preset::Donut {
                center: "9659",
                entries: &[
                    ("Failed", 1689.0, RED),
                    ("Warning", 681.0, AMBER),
                    ("Not available", 36.0, GRAY),
                    ("Passed", 7253.0, GREEN),
                ],
            },
        ),
        (
            "Image Risk Assessment",
            Preset::Progress {
                total: 1470,
                caption: "Total Vulnerabilities",
                entries: &[("Critical", 9.0, RED), ("High", 150.0, AMBER)],
            },
        ),
        (
            "Image Security Issues",
            Preset::Progress {
                total: 2,
                caption: "Total Images",
                entries: &[("Critical", 2.0, RED), ("High", 2.0, AMBER)],
            },
        ),
    ])
});

/// Preset visual for a widget `name` of the given `kind`, if one exists.
pub fn lookup(name: &str, kind: WidgetKind) -> Option<RenderDescriptor> {
    PRESETS
        .get(name)
        .filter(|preset| preset.kind() == kind)
        .map(Preset::describe)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cloud_accounts_is_half_connected() {
        let Some(RenderDescriptor::Donut { donut, center }) =
            lookup("Cloud Accounts", WidgetKind::Chart)
        else {
            panic!("expected donut preset");
        };
        assert_eq!(center, "2");
        assert_eq!(donut.total, 4.0);
        assert!((donut.segments[0].fraction() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn risk_assessment_segments_match_counts() {
        let Some(RenderDescriptor::Donut { donut, .. }) =
            lookup("Cloud Account Risk Assessment", WidgetKind::Chart)
        else {
            panic!("expected donut preset");
        };
        assert_eq!(donut.total, 9659.0);
        assert_eq!(donut.segments.len(), 4);
        assert_eq!(donut.segments[3].label, "Passed");
    }

    #[test]
    fn kind_must_match() {
        assert!(lookup("Cloud Accounts", WidgetKind::Metric).is_none());
        assert!(lookup("Image Risk Assessment", WidgetKind::Progress).is_some());
        assert!(lookup("cloud accounts", WidgetKind::Chart).is_none());
    }
}
