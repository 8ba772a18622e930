use crate::dashboard::chart::{parse_hex_color, FALLBACK_COLOR};
use crate::settings::ThemeMode;
use eframe::egui;

pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(37, 99, 235);
pub const DANGER: egui::Color32 = egui::Color32::from_rgb(220, 38, 38);
pub const MUTED: egui::Color32 = egui::Color32::from_rgb(107, 114, 128);
pub const RING_TRACK: egui::Color32 = egui::Color32::from_rgb(229, 231, 235);

/// Color for a `#RRGGBB` string, falling back to the default chart blue.
pub fn hex_to_color32(hex: &str) -> egui::Color32 {
    let [r, g, b] = parse_hex_color(hex)
        .or_else(|| parse_hex_color(FALLBACK_COLOR))
        .unwrap_or([59, 130, 246]);
    egui::Color32::from_rgb(r, g, b)
}

fn light_visuals(defaults: &egui::Visuals) -> egui::Visuals {
    let mut visuals = egui::Visuals {
        dark_mode: false,
        ..egui::Visuals::light()
    };
    visuals.panel_fill = egui::Color32::from_rgb(249, 250, 251);
    visuals.window_fill = egui::Color32::WHITE;
    visuals.extreme_bg_color = egui::Color32::WHITE;
    visuals.hyperlink_color = ACCENT;
    visuals.selection.bg_fill = egui::Color32::from_rgb(219, 234, 254);
    visuals.selection.stroke.color = ACCENT;
    visuals.window_rounding = defaults.window_rounding;
    visuals
}

fn dark_visuals(defaults: &egui::Visuals) -> egui::Visuals {
    let mut visuals = egui::Visuals {
        dark_mode: true,
        ..egui::Visuals::dark()
    };
    visuals.panel_fill = egui::Color32::from_rgb(17, 24, 39);
    visuals.window_fill = egui::Color32::from_rgb(31, 41, 55);
    visuals.extreme_bg_color = egui::Color32::from_rgb(31, 41, 55);
    visuals.hyperlink_color = egui::Color32::from_rgb(96, 165, 250);
    visuals.window_rounding = defaults.window_rounding;
    visuals
}

pub fn visuals_for(mode: ThemeMode, defaults: &egui::Visuals) -> egui::Visuals {
    match mode {
        ThemeMode::System => defaults.clone(),
        ThemeMode::Light => light_visuals(defaults),
        ThemeMode::Dark => dark_visuals(defaults),
    }
}

/// Background of a widget card.
pub fn card_fill(visuals: &egui::Visuals) -> egui::Color32 {
    visuals.extreme_bg_color
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_colors_convert() {
        assert_eq!(
            hex_to_color32("#10B981"),
            egui::Color32::from_rgb(16, 185, 129)
        );
        assert_eq!(hex_to_color32("nope"), egui::Color32::from_rgb(59, 130, 246));
    }

    #[test]
    fn mode_switching_is_deterministic() {
        let base = egui::Visuals::dark();
        let light = visuals_for(ThemeMode::Light, &base);
        let dark = visuals_for(ThemeMode::Dark, &base);
        let system = visuals_for(ThemeMode::System, &base);

        assert!(!light.dark_mode);
        assert!(dark.dark_mode);
        assert_ne!(light.panel_fill, dark.panel_fill);
        assert_eq!(system, base);
    }
}
