use crate::dashboard::model::Category;
use crate::gui::theme::ACCENT;
use crate::gui::widget_card::{add_widget_tile, widget_card};
use crate::gui::ViewAction;
use eframe::egui;

const GRID_SPACING: f32 = 16.0;

/// Width of one card when `columns` cards share `available` points.
pub fn card_width(available: f32, columns: usize) -> f32 {
    let columns = columns.max(1) as f32;
    ((available - GRID_SPACING * (columns - 1.0)) / columns).max(220.0)
}

/// One category section: heading, "Add Widget" button and the card grid.
pub fn category_section(
    ui: &mut egui::Ui,
    category: &Category,
    columns: usize,
) -> Option<ViewAction> {
    let mut action = None;
    ui.horizontal(|ui| {
        ui.heading(&category.name);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let button = egui::Button::new(egui::RichText::new("+ Add Widget").color(ACCENT))
                .stroke(egui::Stroke::new(1.0, ACCENT));
            if ui.add(button).clicked() {
                action = Some(ViewAction::OpenAddWidget {
                    category_id: category.id.clone(),
                });
            }
        });
    });
    ui.add_space(8.0);

    let columns = columns.max(1);
    let width = card_width(ui.available_width(), columns);
    egui::Grid::new(("category_grid", &category.id))
        .spacing([GRID_SPACING, GRID_SPACING])
        .show(ui, |ui| {
            let mut col = 0;
            for widget in &category.widgets {
                if let Some(a) = widget_card(ui, widget, &category.id, width) {
                    action = Some(a);
                }
                col += 1;
                if col == columns {
                    ui.end_row();
                    col = 0;
                }
            }
            if let Some(a) = add_widget_tile(ui, &category.id, width) {
                action = Some(a);
            }
        });
    ui.add_space(24.0);
    action
}

#[cfg(test)]
mod tests {
    use super::card_width;

    #[test]
    fn cards_share_available_width() {
        assert_eq!(card_width(992.0, 3), 320.0);
        assert_eq!(card_width(500.0, 1), 500.0);
    }

    #[test]
    fn narrow_windows_keep_minimum_width() {
        assert_eq!(card_width(300.0, 3), 220.0);
        assert_eq!(card_width(300.0, 0), 300.0);
    }
}
