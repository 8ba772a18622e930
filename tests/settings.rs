use cnapp_dashboard::settings::{Settings, ThemeMode};
use tempfile::tempdir;

#[test]
fn missing_file_yields_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    let settings = Settings::load(path.to_str().unwrap()).unwrap();
    assert_eq!(settings, Settings::default());
    assert!(settings.enable_toasts);
    assert_eq!(settings.columns(), 3);
}

#[test]
fn partial_file_fills_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{ "theme": "dark", "grid_columns": 40 }"#).unwrap();
    let settings = Settings::load(path.to_str().unwrap()).unwrap();
    assert_eq!(settings.theme, ThemeMode::Dark);
    assert_eq!(settings.columns(), 6);
    assert_eq!(settings.toast_duration, 3.0);
    assert!(!settings.debug_logging);
}

#[test]
fn malformed_file_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert!(Settings::load(path.to_str().unwrap()).is_err());
}

#[test]
fn save_then_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    let path = path.to_str().unwrap();
    let settings = Settings {
        debug_logging: true,
        log_file: Some("dashboard.log".into()),
        window_size: (800.0, 600.0),
        theme: ThemeMode::System,
        ..Settings::default()
    };
    settings.save(path).unwrap();
    assert_eq!(Settings::load(path).unwrap(), settings);
}

#[test]
fn toast_duration_is_clamped() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{ "toast_duration": -1.0 }"#).unwrap();
    let settings = Settings::load(path.to_str().unwrap()).unwrap();
    assert_eq!(settings.toast_secs(), 0.0);

    let long = Settings {
        toast_duration: 1.0e12,
        ..Settings::default()
    };
    assert_eq!(long.toast_secs(), 60.0);

    let nan = Settings {
        toast_duration: f32::NAN,
        ..Settings::default()
    };
    assert_eq!(nan.toast_secs(), Settings::default().toast_duration);
}
