use crate::dashboard::model::NewCategory;
use crate::dashboard::store::DashboardStore;
use eframe::egui;

/// Dialog for adding an empty category to the dashboard.
#[derive(Debug, Default)]
pub struct AddCategoryDialog {
    pub open: bool,
    name: String,
}

impl AddCategoryDialog {
    pub fn open(&mut self) {
        self.open = true;
        self.name.clear();
    }

    pub fn name_mut(&mut self) -> &mut String {
        &mut self.name
    }

    pub fn can_create(&self) -> bool {
        !self.name.trim().is_empty()
    }

    /// Add the category and close. Returns its name, or `None` while blank.
    pub fn create(&mut self, store: &mut DashboardStore) -> Option<String> {
        if !self.open || !self.can_create() {
            return None;
        }
        let name = self.name.trim().to_string();
        store.add_category(NewCategory::named(name.clone()));
        self.open = false;
        self.name.clear();
        Some(name)
    }

    pub fn ui(&mut self, ctx: &egui::Context, store: &mut DashboardStore) -> Option<String> {
        if !self.open {
            return None;
        }
        let mut created = None;
        let mut cancel = false;
        let mut open = true;
        egui::Window::new("Add Category")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .open(&mut open)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label("Name");
                    let response = ui.add(
                        egui::TextEdit::singleline(&mut self.name).hint_text("Category name"),
                    );
                    if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                        created = self.create(store);
                    }
                });
                ui.horizontal(|ui| {
                    if ui
                        .add_enabled(self.can_create(), egui::Button::new("Create"))
                        .clicked()
                    {
                        created = self.create(store);
                    }
                    if ui.button("Cancel").clicked() {
                        cancel = true;
                    }
                });
            });
        if cancel || !open {
            self.open = false;
            self.name.clear();
        }
        created
    }
}
