mod add_category_dialog;
mod add_widget_dialog;
mod category_view;
mod chart_painter;
mod header;
mod search_results;
pub mod theme;
mod widget_card;
mod widget_management;

pub use add_category_dialog::AddCategoryDialog;
pub use add_widget_dialog::{
    AddWidgetDialog, CustomWidgetDraft, DataPoint, DialogOutcome, DialogState,
};
pub use category_view::card_width;
pub use widget_management::WidgetManagementPanel;

use crate::dashboard::store::DashboardStore;
use crate::settings::Settings;
use eframe::egui;
use egui_toast::{Toast, ToastKind, ToastOptions, Toasts};

/// Requests raised by views that the app applies to the store or to its own
/// dialog state after the frame's widgets have been drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewAction {
    OpenAddWidget {
        category_id: String,
    },
    OpenAddCategory,
    ToggleManagement,
    RemoveWidget {
        category_id: String,
        widget_id: String,
    },
}

/// Top level `eframe` application: owns the store and all view-local state.
pub struct DashboardApp {
    store: DashboardStore,
    columns: usize,
    enable_toasts: bool,
    toast_duration: f32,
    toasts: Toasts,
    pub add_widget: AddWidgetDialog,
    pub add_category: AddCategoryDialog,
    pub management: WidgetManagementPanel,
}

impl DashboardApp {
    pub fn new(ctx: &egui::Context, store: DashboardStore, settings: &Settings) -> Self {
        let defaults = ctx.style().visuals.clone();
        ctx.set_visuals(theme::visuals_for(settings.theme, &defaults));
        tracing::info!(
            categories = store.categories().len(),
            widgets = store.widget_count(),
            theme = %settings.theme,
            "dashboard ready"
        );
        Self {
            store,
            columns: settings.columns(),
            enable_toasts: settings.enable_toasts,
            toast_duration: settings.toast_secs(),
            toasts: Toasts::new()
                .anchor(egui::Align2::RIGHT_BOTTOM, [-10.0, -10.0])
                .direction(egui::Direction::BottomUp),
            add_widget: AddWidgetDialog::default(),
            add_category: AddCategoryDialog::default(),
            management: WidgetManagementPanel::default(),
        }
    }

    pub fn store(&self) -> &DashboardStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut DashboardStore {
        &mut self.store
    }

    fn notify(&mut self, text: String, kind: ToastKind) {
        tracing::info!("{text}");
        if self.enable_toasts {
            self.toasts.add(Toast {
                text: text.into(),
                kind,
                options: ToastOptions::default().duration_in_seconds(self.toast_duration as f64),
            });
        }
    }

    pub fn apply(&mut self, action: ViewAction) {
        match action {
            ViewAction::OpenAddWidget { category_id } => {
                let Some(name) = self.store.category(&category_id).map(|c| c.name.clone()) else {
                    tracing::warn!(category_id = %category_id, "add widget: unknown category");
                    return;
                };
                self.add_category.open = false;
                self.add_widget.open(&category_id, &name);
            }
            ViewAction::OpenAddCategory => {
                if self.add_widget.is_open() {
                    self.add_widget.cancel(&mut self.store);
                }
                self.add_category.open();
            }
            ViewAction::ToggleManagement => self.management.toggle(),
            ViewAction::RemoveWidget {
                category_id,
                widget_id,
            } => {
                let name = self
                    .store
                    .category(&category_id)
                    .and_then(|c| c.widgets.iter().find(|w| w.id == widget_id))
                    .map(|w| w.name.clone());
                if self.store.remove_widget(&category_id, &widget_id) {
                    self.notify(
                        format!("Removed {}", name.unwrap_or(widget_id)),
                        ToastKind::Info,
                    );
                }
            }
        }
    }

    fn handle_outcome(&mut self, outcome: DialogOutcome) {
        match outcome {
            DialogOutcome::TemplatesAdded { count: 0, .. } | DialogOutcome::Cancelled => {}
            DialogOutcome::TemplatesAdded { category, count } => {
                let noun = if count == 1 { "widget" } else { "widgets" };
                self.notify(format!("Added {count} {noun} to {category}"), ToastKind::Success);
            }
            DialogOutcome::CustomCreated { category, name } => {
                self.notify(format!("Created {name} in {category}"), ToastKind::Success);
            }
        }
    }

    fn body(&self, ui: &mut egui::Ui) -> Option<ViewAction> {
        ui.horizontal(|ui| {
            ui.heading(egui::RichText::new("CNAPP Dashboard").size(24.0).strong());
        });
        ui.add_space(16.0);

        if self.store.is_searching() {
            let hits = self.store.filtered_widgets();
            search_results::search_results(ui, self.store.search_query(), &hits, self.columns);
            return None;
        }

        let mut action = None;
        for category in self.store.categories() {
            if let Some(a) = category_view::category_section(ui, category, self.columns) {
                action = Some(a);
            }
        }
        action
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut actions = Vec::new();

        egui::TopBottomPanel::top("header")
            .exact_height(48.0)
            .show(ctx, |ui| {
                ui.add_space(10.0);
                if let Some(a) = header::header(ui, &mut self.store, self.management.open) {
                    actions.push(a);
                }
            });

        if let Some(a) = self.management.ui(ctx, &self.store) {
            actions.push(a);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    if let Some(a) = self.body(ui) {
                        actions.push(a);
                    }
                });
        });

        if let Some(outcome) = self.add_widget.ui(ctx, &mut self.store) {
            self.handle_outcome(outcome);
        }
        if let Some(name) = self.add_category.ui(ctx, &mut self.store) {
            self.notify(format!("Added category {name}"), ToastKind::Success);
        }

        for action in actions {
            self.apply(action);
        }

        if self.enable_toasts {
            self.toasts.show(ctx);
        }
    }
}
