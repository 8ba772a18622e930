use cnapp_dashboard::dashboard::DashboardStore;
use cnapp_dashboard::gui::{DashboardApp, DialogState, ViewAction};
use cnapp_dashboard::settings::Settings;

fn new_app(ctx: &eframe::egui::Context) -> DashboardApp {
    let settings = Settings {
        enable_toasts: false,
        ..Settings::default()
    };
    DashboardApp::new(ctx, DashboardStore::default(), &settings)
}

#[test]
fn open_add_widget_binds_category() {
    let ctx = eframe::egui::Context::default();
    let mut app = new_app(&ctx);
    app.apply(ViewAction::OpenAddWidget {
        category_id: "registry-scan".into(),
    });
    assert_eq!(app.add_widget.state(), DialogState::TemplatePicker);
    assert_eq!(app.add_widget.category_id(), "registry-scan");
}

#[test]
fn open_add_widget_for_unknown_category_stays_closed() {
    let ctx = eframe::egui::Context::default();
    let mut app = new_app(&ctx);
    app.apply(ViewAction::OpenAddWidget {
        category_id: "missing".into(),
    });
    assert_eq!(app.add_widget.state(), DialogState::Closed);
}

#[test]
fn opening_category_dialog_cancels_widget_dialog() {
    let ctx = eframe::egui::Context::default();
    let mut app = new_app(&ctx);
    app.apply(ViewAction::OpenAddWidget {
        category_id: "registry-scan".into(),
    });
    app.store_mut().toggle_widget_template("cloud-accounts");
    app.apply(ViewAction::OpenAddCategory);
    assert!(!app.add_widget.is_open());
    assert!(app.add_category.open);
    assert_eq!(app.store().selected_template_count(), 0);
}

#[test]
fn remove_action_removes_widget_once() {
    let ctx = eframe::egui::Context::default();
    let mut app = new_app(&ctx);
    let before = app.store().widget_count();
    let action = ViewAction::RemoveWidget {
        category_id: "cspm-executive".into(),
        widget_id: "cloud-accounts".into(),
    };
    app.apply(action.clone());
    app.apply(action);
    assert_eq!(app.store().widget_count(), before - 1);
}

#[test]
fn management_panel_toggles() {
    let ctx = eframe::egui::Context::default();
    let mut app = new_app(&ctx);
    assert!(!app.management.open);
    app.apply(ViewAction::ToggleManagement);
    assert!(app.management.open);
    app.apply(ViewAction::ToggleManagement);
    assert!(!app.management.open);
}

#[test]
fn category_dialog_creates_category() {
    let ctx = eframe::egui::Context::default();
    let mut app = new_app(&ctx);
    app.apply(ViewAction::OpenAddCategory);
    *app.add_category.name_mut() = "  ".into();
    let mut store = app.store().clone();
    assert!(app.add_category.create(&mut store).is_none());
    *app.add_category.name_mut() = " Tickets ".into();
    assert_eq!(app.add_category.create(&mut store), Some("Tickets".into()));
    assert!(!app.add_category.open);
    assert_eq!(store.categories().last().unwrap().name, "Tickets");
}

#[test]
fn negative_toast_duration_does_not_break_notifications() {
    let ctx = eframe::egui::Context::default();
    let settings = Settings {
        enable_toasts: true,
        toast_duration: -1.0,
        ..Settings::default()
    };
    let mut app = DashboardApp::new(&ctx, DashboardStore::default(), &settings);
    let before = app.store().widget_count();
    app.apply(ViewAction::RemoveWidget {
        category_id: "cspm-executive".into(),
        widget_id: "cloud-accounts".into(),
    });
    assert_eq!(app.store().widget_count(), before - 1);
}
