use crate::dashboard::store::SearchHit;
use crate::gui::category_view::card_width;
use crate::gui::theme::{self, ACCENT, MUTED};
use eframe::egui;

pub fn search_results(ui: &mut egui::Ui, query: &str, hits: &[SearchHit<'_>], columns: usize) {
    ui.heading(format!("Search Results ({})", hits.len()));
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        ui.label(egui::RichText::new("Showing results for \"").color(MUTED));
        ui.label(egui::RichText::new(query).strong());
        ui.label(egui::RichText::new("\"").color(MUTED));
    });
    ui.add_space(12.0);

    if hits.is_empty() {
        ui.vertical_centered(|ui| {
            ui.add_space(48.0);
            ui.label(egui::RichText::new("No widgets found").size(18.0).color(MUTED));
            ui.label(egui::RichText::new("Try adjusting your search terms").color(MUTED));
        });
        return;
    }

    let columns = columns.max(1);
    let width = card_width(ui.available_width(), columns);
    egui::Grid::new("search_results")
        .spacing([16.0, 16.0])
        .show(ui, |ui| {
            for (idx, hit) in hits.iter().enumerate() {
                egui::Frame::none()
                    .fill(theme::card_fill(ui.visuals()))
                    .stroke(ui.visuals().widgets.noninteractive.bg_stroke)
                    .rounding(8.0)
                    .inner_margin(12.0)
                    .show(ui, |ui| {
                        ui.set_width(width - 24.0);
                        ui.horizontal(|ui| {
                            ui.label(egui::RichText::new(&hit.widget.name).strong());
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    ui.label(
                                        egui::RichText::new(hit.category_name)
                                            .small()
                                            .color(ACCENT),
                                    );
                                },
                            );
                        });
                        ui.add_space(4.0);
                        ui.label(egui::RichText::new(&hit.widget.text).color(MUTED));
                    });
                if (idx + 1) % columns == 0 {
                    ui.end_row();
                }
            }
        });
}
