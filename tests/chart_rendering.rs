use cnapp_dashboard::dashboard::chart::{bars, donut, DONUT_CIRCUMFERENCE};
use cnapp_dashboard::dashboard::render::{describe, RenderDescriptor, NO_GRAPH_MESSAGE};
use cnapp_dashboard::dashboard::{seed, ChartType, CustomData, NewWidget, WidgetKind};

fn labels(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("P{i}")).collect()
}

#[test]
fn donut_segments_from_values() {
    let d = donut(&[25.0, 75.0], &labels(2), &[]).unwrap();
    let arcs: Vec<_> = d.segments.iter().map(|s| s.arc).collect();
    let offsets: Vec<_> = d.segments.iter().map(|s| s.offset).collect();
    assert!((arcs[0] - 70.75).abs() < 1e-9);
    assert!((arcs[1] - 212.25).abs() < 1e-9);
    assert_eq!(offsets[0], 0.0);
    assert!((offsets[1] + 70.75).abs() < 1e-9);
    assert!((arcs.iter().sum::<f64>() - DONUT_CIRCUMFERENCE).abs() < 1e-9);
}

#[test]
fn bar_heights_from_values() {
    let heights: Vec<_> = bars(&[10.0, 40.0, 20.0], &labels(3), &[])
        .unwrap()
        .iter()
        .map(|b| b.height)
        .collect();
    assert_eq!(heights, vec![20.0, 80.0, 40.0]);
}

#[test]
fn seeded_widgets_all_have_visuals() {
    for category in seed::initial_data().categories {
        for widget in &category.widgets {
            let desc = describe(widget);
            assert_ne!(desc, RenderDescriptor::NoData, "{}", widget.name);
            if widget.kind == WidgetKind::Graph {
                assert_eq!(
                    desc,
                    RenderDescriptor::GraphPlaceholder {
                        message: NO_GRAPH_MESSAGE.into()
                    }
                );
            }
        }
    }
}

#[test]
fn progress_presets_carry_totals() {
    let data = seed::initial_data();
    let registry = data
        .categories
        .iter()
        .find(|c| c.id == "registry-scan")
        .unwrap();
    let totals: Vec<u64> = registry
        .widgets
        .iter()
        .map(|w| match describe(w) {
            RenderDescriptor::Progress(summary) => summary.total,
            other => panic!("unexpected {other:?}"),
        })
        .collect();
    assert_eq!(totals, vec![1470, 2]);
}

#[test]
fn custom_bar_chart_renders_bars() {
    let mut widget = NewWidget::new("Spend", WidgetKind::Chart);
    widget.custom_data = Some(CustomData {
        values: vec![10.0, 40.0, 20.0],
        labels: labels(3),
        colors: vec!["#10B981".into()],
        chart_type: ChartType::Bar,
    });
    let RenderDescriptor::Bars(bars) = describe(&widget.into_widget("w".into())) else {
        panic!("expected bars");
    };
    assert_eq!(bars.len(), 3);
    assert_eq!(bars[0].color, "#10B981");
    assert_eq!(bars[2].label, "P2");
}

#[test]
fn zero_valued_custom_series_shows_no_data() {
    for chart_type in ChartType::ALL {
        let mut widget = NewWidget::new("Empty", WidgetKind::Chart);
        widget.custom_data = Some(CustomData {
            values: vec![0.0, 0.0],
            labels: labels(2),
            colors: Vec::new(),
            chart_type,
        });
        assert_eq!(
            describe(&widget.into_widget("w".into())),
            RenderDescriptor::NoData,
            "{chart_type:?}"
        );
    }
}

#[test]
fn chart_without_points_shows_no_data() {
    let mut widget = NewWidget::new("Draft", WidgetKind::Chart);
    widget.custom_data = Some(CustomData::default());
    assert_eq!(
        describe(&widget.into_widget("w".into())),
        RenderDescriptor::NoData
    );
}
