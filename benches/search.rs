use cnapp_dashboard::dashboard::{DashboardStore, NewWidget, WidgetKind};
use criterion::{criterion_group, criterion_main, Criterion};

fn bench_search(c: &mut Criterion) {
    let mut store = DashboardStore::default();
    let ids: Vec<String> = store.categories().iter().map(|c| c.id.clone()).collect();
    for i in 0..10_000 {
        let category = &ids[i % ids.len()];
        store.add_widget(
            category,
            NewWidget::new(format!("Widget {i}"), WidgetKind::Metric)
                .with_text(format!("Sample body {i}")),
        );
    }
    store.set_search_query("widget 9999");
    c.bench_function("filter_10k", |b| b.iter(|| store.filtered_widgets().len()));
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
