pub mod chart;
pub mod model;
pub mod presets;
pub mod render;
pub mod seed;
pub mod store;

pub use model::{
    Category, ChartType, CustomData, DashboardData, NewCategory, NewWidget, Widget, WidgetKind,
    WidgetTemplate,
};
pub use render::{describe, RenderDescriptor};
pub use store::{filter_widgets, DashboardStore, SearchHit};
