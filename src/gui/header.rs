use crate::dashboard::store::DashboardStore;
use crate::gui::theme::MUTED;
use crate::gui::ViewAction;
use eframe::egui;

/// Top bar with breadcrumb, search box and panel toggles. Edits to the search
/// box are written straight into the store.
pub fn header(
    ui: &mut egui::Ui,
    store: &mut DashboardStore,
    management_open: bool,
) -> Option<ViewAction> {
    let mut action = None;
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("Home").color(MUTED));
        ui.label(egui::RichText::new("›").color(MUTED));
        ui.label(egui::RichText::new("Dashboard V2").strong());

        ui.add_space(32.0);
        let mut query = store.search_query().to_string();
        let response = ui.add(
            egui::TextEdit::singleline(&mut query)
                .hint_text("🔍 Search anything...")
                .desired_width(360.0),
        );
        if response.changed() {
            tracing::debug!(query = %query, "search query changed");
            store.set_search_query(query);
        }
        if store.is_searching() && ui.small_button("✖").on_hover_text("Clear search").clicked() {
            store.set_search_query(String::new());
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui
                .selectable_label(management_open, "⚙ Manage Widgets")
                .clicked()
            {
                action = Some(ViewAction::ToggleManagement);
            }
            if ui.button("+ Add Category").clicked() {
                action = Some(ViewAction::OpenAddCategory);
            }
        });
    });
    action
}
