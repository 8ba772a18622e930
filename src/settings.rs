use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const SETTINGS_FILE: &str = "settings.json";

const MAX_TOAST_SECS: f32 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    System,
    Light,
    Dark,
}

impl Default for ThemeMode {
    fn default() -> Self {
        ThemeMode::Light
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeMode::System => write!(f, "System"),
            ThemeMode::Light => write!(f, "Light"),
            ThemeMode::Dark => write!(f, "Dark"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Settings {
    /// When enabled the application initialises the logger at debug level.
    #[serde(default)]
    pub debug_logging: bool,
    /// Additional file receiving log output. `None` logs to stderr only.
    #[serde(default)]
    pub log_file: Option<PathBuf>,
    /// Initial window size in points.
    #[serde(default = "default_window_size")]
    pub window_size: (f32, f32),
    /// Enable toast notifications in the UI.
    #[serde(default = "default_toasts")]
    pub enable_toasts: bool,
    /// Duration of toast notifications in seconds.
    #[serde(default = "default_toast_duration")]
    pub toast_duration: f32,
    #[serde(default)]
    pub theme: ThemeMode,
    /// Widget cards per row in a category section.
    #[serde(default = "default_grid_columns")]
    pub grid_columns: usize,
}

fn default_window_size() -> (f32, f32) {
    (1280.0, 860.0)
}

fn default_toasts() -> bool {
    true
}

fn default_toast_duration() -> f32 {
    3.0
}

fn default_grid_columns() -> usize {
    3
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug_logging: false,
            log_file: None,
            window_size: default_window_size(),
            enable_toasts: default_toasts(),
            toast_duration: default_toast_duration(),
            theme: ThemeMode::default(),
            grid_columns: default_grid_columns(),
        }
    }
}

impl Settings {
    /// Read settings from `path`. A missing or empty file yields the defaults.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).unwrap_or_default();
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, path: &str) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Column count clamped to something the grid can lay out.
    pub fn columns(&self) -> usize {
        self.grid_columns.clamp(1, 6)
    }

    /// Toast duration in seconds, limited to `0.0..=60.0`. Non-finite values
    /// fall back to the default.
    pub fn toast_secs(&self) -> f32 {
        if self.toast_duration.is_finite() {
            self.toast_duration.clamp(0.0, MAX_TOAST_SECS)
        } else {
            default_toast_duration()
        }
    }
}
