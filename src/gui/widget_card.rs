use crate::dashboard::model::Widget;
use crate::dashboard::render;
use crate::gui::chart_painter;
use crate::gui::theme::{self, ACCENT, DANGER, MUTED};
use crate::gui::ViewAction;
use eframe::egui;

pub const CARD_HEIGHT: f32 = 200.0;

fn card_frame(ui: &egui::Ui) -> egui::Frame {
    egui::Frame::none()
        .fill(theme::card_fill(ui.visuals()))
        .stroke(ui.visuals().widgets.noninteractive.bg_stroke)
        .rounding(8.0)
        .inner_margin(12.0)
}

/// A dashboard card for `widget`. Returns a removal request when the close
/// button is clicked.
pub fn widget_card(
    ui: &mut egui::Ui,
    widget: &Widget,
    category_id: &str,
    width: f32,
) -> Option<ViewAction> {
    let mut action = None;
    card_frame(ui).show(ui, |ui| {
        ui.set_width(width - 24.0);
        ui.set_min_height(CARD_HEIGHT - 24.0);
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(&widget.name).strong());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let remove = ui
                    .add(egui::Button::new(egui::RichText::new("✖").color(DANGER)).frame(false))
                    .on_hover_text("Remove widget");
                if remove.clicked() {
                    action = Some(ViewAction::RemoveWidget {
                        category_id: category_id.to_string(),
                        widget_id: widget.id.clone(),
                    });
                }
            });
        });
        ui.add_space(8.0);
        chart_painter::paint(ui, &render::describe(widget));
    });
    action
}

/// Dashed tile at the end of each category grid.
pub fn add_widget_tile(ui: &mut egui::Ui, category_id: &str, width: f32) -> Option<ViewAction> {
    let (rect, response) =
        ui.allocate_exact_size(egui::vec2(width, CARD_HEIGHT), egui::Sense::click());
    let painter = ui.painter_at(rect);
    let color = if response.hovered() { ACCENT } else { MUTED };
    painter.rect_filled(rect, 8.0, theme::card_fill(ui.visuals()));
    let r = rect.shrink(1.0);
    let corners = [r.left_top(), r.right_top(), r.right_bottom(), r.left_bottom(), r.left_top()];
    for edge in corners.windows(2) {
        painter.extend(egui::Shape::dashed_line(
            &[edge[0], edge[1]],
            egui::Stroke::new(1.5, color),
            6.0,
            4.0,
        ));
    }
    painter.text(
        rect.center() - egui::vec2(0.0, 12.0),
        egui::Align2::CENTER_CENTER,
        "+",
        egui::FontId::proportional(28.0),
        color,
    );
    painter.text(
        rect.center() + egui::vec2(0.0, 16.0),
        egui::Align2::CENTER_CENTER,
        "Add Widget",
        egui::FontId::proportional(14.0),
        color,
    );
    if response
        .on_hover_cursor(egui::CursorIcon::PointingHand)
        .clicked()
    {
        return Some(ViewAction::OpenAddWidget {
            category_id: category_id.to_string(),
        });
    }
    None
}
