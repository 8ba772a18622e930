use crate::dashboard::store::DashboardStore;
use crate::gui::theme::{DANGER, MUTED};
use crate::gui::ViewAction;
use eframe::egui;

/// Side panel listing every widget with a remove action.
#[derive(Debug, Default)]
pub struct WidgetManagementPanel {
    pub open: bool,
}

impl WidgetManagementPanel {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn ui(&mut self, ctx: &egui::Context, store: &DashboardStore) -> Option<ViewAction> {
        if !self.open {
            return None;
        }
        let mut action = None;
        egui::SidePanel::right("widget_management")
            .resizable(false)
            .exact_width(320.0)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading("Widget Management");
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button("✖").clicked() {
                            action = Some(ViewAction::ToggleManagement);
                        }
                    });
                });
                ui.label(egui::RichText::new("Manage all your widgets").color(MUTED));
                ui.separator();
                egui::ScrollArea::vertical().show(ui, |ui| {
                    for category in store.categories() {
                        ui.label(egui::RichText::new(&category.name).strong());
                        if category.widgets.is_empty() {
                            ui.label(
                                egui::RichText::new("No widgets in this category")
                                    .italics()
                                    .color(MUTED),
                            );
                        }
                        for widget in &category.widgets {
                            ui.horizontal(|ui| {
                                ui.vertical(|ui| {
                                    ui.set_width(220.0);
                                    ui.label(&widget.name);
                                    let first_line = widget.text.lines().next().unwrap_or("");
                                    ui.label(egui::RichText::new(first_line).small().color(MUTED));
                                });
                                let remove =
                                    egui::Button::new(egui::RichText::new("Remove").color(DANGER))
                                        .small();
                                if ui.add(remove).clicked() {
                                    action = Some(ViewAction::RemoveWidget {
                                        category_id: category.id.clone(),
                                        widget_id: widget.id.clone(),
                                    });
                                }
                            });
                        }
                        ui.separator();
                    }
                });
            });
        action
    }
}
