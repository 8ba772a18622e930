use crate::dashboard::chart::{Bar, Donut, Polyline, BAR_MAX_HEIGHT};
use crate::dashboard::render::{format_value, ProgressSummary, RenderDescriptor, NO_DATA_MESSAGE};
use crate::gui::theme::{hex_to_color32, MUTED, RING_TRACK};
use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Sense, Shape, Stroke, Vec2};
use std::f32::consts::{FRAC_PI_2, TAU};

const CONTENT_HEIGHT: f32 = 128.0;
const DONUT_SIZE: f32 = 120.0;
const DONUT_RADIUS: f32 = 45.0;
const RING_WIDTH: f32 = 10.0;
const BAR_WIDTH: f32 = 32.0;
const SPARKLINE: [(f32, f32); 6] = [
    (5.0, 35.0),
    (15.0, 25.0),
    (25.0, 30.0),
    (35.0, 15.0),
    (45.0, 20.0),
    (55.0, 10.0),
];

/// Points along the ring between two fractions of a full turn, starting at
/// twelve o'clock and running clockwise.
fn arc_points(center: Pos2, radius: f32, start: f32, end: f32) -> Vec<Pos2> {
    let steps = (((end - start) * 120.0).ceil() as usize).max(2);
    (0..=steps)
        .map(|i| {
            let t = start + (end - start) * i as f32 / steps as f32;
            let angle = t * TAU - FRAC_PI_2;
            center + Vec2::new(angle.cos(), angle.sin()) * radius
        })
        .collect()
}

fn legend_row(ui: &mut egui::Ui, color: Color32, text: String) {
    ui.horizontal(|ui| {
        let (rect, _) = ui.allocate_exact_size(Vec2::splat(10.0), Sense::hover());
        ui.painter().circle_filled(rect.center(), 5.0, color);
        ui.label(egui::RichText::new(text).small());
    });
}

fn paint_donut(ui: &mut egui::Ui, donut: &Donut, center_text: &str) {
    ui.horizontal(|ui| {
        let (rect, _) = ui.allocate_exact_size(Vec2::splat(DONUT_SIZE), Sense::hover());
        let painter = ui.painter_at(rect);
        let center = rect.center();
        painter.circle_stroke(center, DONUT_RADIUS, Stroke::new(RING_WIDTH, RING_TRACK));
        for segment in &donut.segments {
            if segment.arc <= 0.0 {
                continue;
            }
            let start = segment.start_fraction() as f32;
            let end = start + segment.fraction() as f32;
            let color = hex_to_color32(&segment.color);
            painter.add(Shape::line(
                arc_points(center, DONUT_RADIUS, start, end),
                Stroke::new(RING_WIDTH, color),
            ));
        }
        let text_color = ui.visuals().strong_text_color();
        painter.text(
            center - Vec2::new(0.0, 6.0),
            Align2::CENTER_CENTER,
            center_text,
            FontId::proportional(18.0),
            text_color,
        );
        painter.text(
            center + Vec2::new(0.0, 12.0),
            Align2::CENTER_CENTER,
            "Total",
            FontId::proportional(11.0),
            MUTED,
        );

        ui.vertical(|ui| {
            ui.add_space(12.0);
            for segment in &donut.segments {
                legend_row(
                    ui,
                    hex_to_color32(&segment.color),
                    format!("{} ({})", segment.label, format_value(segment.value)),
                );
            }
        });
    });
}

fn paint_bars(ui: &mut egui::Ui, bars: &[Bar]) {
    let gap = 8.0;
    let label_height = 16.0;
    let width = (bars.len() as f32 * (BAR_WIDTH + gap)).max(ui.available_width());
    let (rect, response) =
        ui.allocate_exact_size(Vec2::new(width, CONTENT_HEIGHT), Sense::hover());
    let painter = ui.painter_at(rect);
    let used = bars.len() as f32 * (BAR_WIDTH + gap) - gap;
    let mut x = rect.center().x - used / 2.0;
    let baseline = rect.bottom() - label_height;
    let scale = (CONTENT_HEIGHT - label_height - 8.0) / BAR_MAX_HEIGHT as f32;
    let mut hovered = None;
    for bar in bars {
        let height = bar.height as f32 * scale;
        let bar_rect = Rect::from_min_max(
            Pos2::new(x, baseline - height),
            Pos2::new(x + BAR_WIDTH, baseline),
        );
        painter.rect_filled(bar_rect, 3.0, hex_to_color32(&bar.color));
        painter.text(
            Pos2::new(bar_rect.center().x, baseline + 2.0),
            Align2::CENTER_TOP,
            &bar.label,
            FontId::proportional(10.0),
            MUTED,
        );
        if response
            .hover_pos()
            .is_some_and(|p| bar_rect.expand(2.0).contains(p))
        {
            hovered = Some(bar);
        }
        x += BAR_WIDTH + gap;
    }
    if let Some(bar) = hovered {
        response.on_hover_text(format!("{}: {}", bar.label, format_value(bar.value)));
    }
}

fn paint_polyline(ui: &mut egui::Ui, line: &Polyline) {
    let (rect, _) = ui.allocate_exact_size(
        Vec2::new(ui.available_width(), CONTENT_HEIGHT),
        Sense::hover(),
    );
    let plot = rect.shrink2(Vec2::new(12.0, 10.0));
    let painter = ui.painter_at(rect);
    let color = hex_to_color32(&line.color);
    let to_screen = |[x, y]: [f64; 2]| {
        Pos2::new(
            plot.left() + x as f32 * plot.width(),
            plot.bottom() - y as f32 * plot.height(),
        )
    };
    let points: Vec<Pos2> = line.points.iter().copied().map(to_screen).collect();

    if line.filled {
        let fill = color.gamma_multiply(0.25);
        for pair in points.windows(2) {
            painter.add(Shape::convex_polygon(
                vec![
                    Pos2::new(pair[0].x, plot.bottom()),
                    pair[0],
                    pair[1],
                    Pos2::new(pair[1].x, plot.bottom()),
                ],
                fill,
                Stroke::NONE,
            ));
        }
    }
    painter.line_segment(
        [plot.left_bottom(), plot.right_bottom()],
        Stroke::new(1.0, RING_TRACK),
    );
    painter.add(Shape::line(points.clone(), Stroke::new(2.0, color)));
    for p in points {
        painter.circle_filled(p, 3.0, color);
    }
}

fn paint_progress(ui: &mut egui::Ui, summary: &ProgressSummary) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(summary.total.to_string()).size(22.0).strong());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(egui::RichText::new(&summary.caption).color(MUTED));
        });
    });
    let (rect, _) = ui.allocate_exact_size(Vec2::new(ui.available_width(), 8.0), Sense::hover());
    let painter = ui.painter_at(rect);
    let stops = [
        hex_to_color32("#EF4444"),
        hex_to_color32("#EAB308"),
        hex_to_color32("#22C55E"),
    ];
    // Gradient approximated by vertical slices.
    let slices = 48;
    let slice_width = rect.width() / slices as f32;
    for i in 0..slices {
        let t = i as f32 / (slices - 1) as f32;
        let color = if t < 0.5 {
            lerp_color(stops[0], stops[1], t * 2.0)
        } else {
            lerp_color(stops[1], stops[2], (t - 0.5) * 2.0)
        };
        let x = rect.left() + i as f32 * slice_width;
        let slice = Rect::from_min_max(
            Pos2::new(x, rect.top()),
            Pos2::new(x + slice_width + 0.5, rect.bottom()),
        );
        painter.rect_filled(slice, 0.0, color);
    }
    ui.add_space(6.0);
    ui.horizontal_wrapped(|ui| {
        for entry in &summary.legend {
            legend_row(
                ui,
                hex_to_color32(&entry.color),
                format!("{} ({})", entry.label, format_value(entry.value)),
            );
        }
    });
}

fn lerp_color(a: Color32, b: Color32, t: f32) -> Color32 {
    let mix = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;
    Color32::from_rgb(mix(a.r(), b.r()), mix(a.g(), b.g()), mix(a.b(), b.b()))
}

fn paint_graph_placeholder(ui: &mut egui::Ui, message: &str) {
    ui.vertical_centered(|ui| {
        let (rect, _) = ui.allocate_exact_size(Vec2::new(60.0, 40.0), Sense::hover());
        let painter = ui.painter_at(rect);
        let points: Vec<Pos2> = SPARKLINE
            .into_iter()
            .map(|(x, y)| rect.min + Vec2::new(x, y))
            .collect();
        painter.add(Shape::line(points.clone(), Stroke::new(2.0, MUTED)));
        for p in points {
            painter.circle_filled(p, 2.0, MUTED);
        }
        ui.add_space(8.0);
        ui.label(egui::RichText::new(message).color(MUTED));
    });
}

/// Draw the body of a widget card.
pub fn paint(ui: &mut egui::Ui, descriptor: &RenderDescriptor) {
    match descriptor {
        RenderDescriptor::Donut { donut, center } => paint_donut(ui, donut, center),
        RenderDescriptor::Bars(bars) => paint_bars(ui, bars),
        RenderDescriptor::Line(line) => paint_polyline(ui, line),
        RenderDescriptor::Progress(summary) => paint_progress(ui, summary),
        RenderDescriptor::GraphPlaceholder { message } => paint_graph_placeholder(ui, message),
        RenderDescriptor::NoData => {
            ui.vertical_centered(|ui| {
                ui.add_space(CONTENT_HEIGHT / 2.0 - 10.0);
                ui.label(egui::RichText::new(NO_DATA_MESSAGE).color(MUTED));
            });
        }
        RenderDescriptor::Text { text, description } => {
            ui.vertical_centered(|ui| {
                ui.add_space(16.0);
                ui.label(egui::RichText::new(text).color(MUTED));
                if let Some(description) = description {
                    ui.label(egui::RichText::new(description).small().italics().color(MUTED));
                }
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arc_starts_at_twelve_o_clock() {
        let pts = arc_points(Pos2::ZERO, 10.0, 0.0, 0.25);
        let first = pts[0];
        let last = *pts.last().unwrap();
        assert!(first.x.abs() < 1e-4 && (first.y + 10.0).abs() < 1e-4);
        assert!((last.x - 10.0).abs() < 1e-4 && last.y.abs() < 1e-4);
    }

    #[test]
    fn color_interpolation_hits_endpoints() {
        let a = Color32::from_rgb(0, 0, 0);
        let b = Color32::from_rgb(200, 100, 50);
        assert_eq!(lerp_color(a, b, 0.0), a);
        assert_eq!(lerp_color(a, b, 1.0), b);
    }
}
