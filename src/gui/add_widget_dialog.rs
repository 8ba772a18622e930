use crate::dashboard::model::{ChartType, CustomData, NewWidget, WidgetKind, DEFAULT_CHART_COLORS};
use crate::dashboard::seed::TEMPLATE_GROUPS;
use crate::dashboard::store::DashboardStore;
use crate::gui::theme::{ACCENT, MUTED};
use eframe::egui;

/// Which page of the dialog is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogState {
    Closed,
    TemplatePicker,
    CustomForm,
}

/// How the dialog was closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogOutcome {
    /// Selected templates were committed.
    TemplatesAdded { category: String, count: usize },
    /// A custom widget was created.
    CustomCreated { category: String, name: String },
    Cancelled,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DataPoint {
    pub label: String,
    pub value: f64,
}

/// Fields of the "Create Custom Widget" form.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomWidgetDraft {
    pub name: String,
    pub text: String,
    pub description: String,
    pub kind: WidgetKind,
    pub chart_type: ChartType,
    pub colors: Vec<String>,
    pub points: Vec<DataPoint>,
}

impl Default for CustomWidgetDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            text: String::new(),
            description: String::new(),
            kind: WidgetKind::Chart,
            chart_type: ChartType::Donut,
            colors: DEFAULT_CHART_COLORS.iter().map(|c| c.to_string()).collect(),
            points: Vec::new(),
        }
    }
}

impl CustomWidgetDraft {
    pub fn is_submittable(&self) -> bool {
        !self.name.trim().is_empty()
    }

    pub fn add_point(&mut self) {
        self.points.push(DataPoint {
            label: String::new(),
            value: 0.0,
        });
    }

    pub fn remove_point(&mut self, idx: usize) {
        if idx < self.points.len() {
            self.points.remove(idx);
        }
    }

    /// Widget fields for the store. Chart widgets carry the data points.
    pub fn to_new_widget(&self) -> NewWidget {
        let custom_data = (self.kind == WidgetKind::Chart).then(|| CustomData {
            values: self.points.iter().map(|p| p.value).collect(),
            labels: self.points.iter().map(|p| p.label.clone()).collect(),
            colors: self.colors.clone(),
            chart_type: self.chart_type,
        });
        let description = Some(self.description.trim())
            .filter(|d| !d.is_empty())
            .map(str::to_string);
        NewWidget {
            name: self.name.trim().to_string(),
            text: self.text.clone(),
            kind: self.kind,
            data: None,
            description,
            custom_data,
        }
    }
}

/// "Add Widget" dialog bound to one category at a time.
///
/// `Closed → TemplatePicker` on open, `TemplatePicker ↔ CustomForm` through the
/// page toggle, and back to `Closed` on confirm, create or cancel. Every close
/// resets the draft and clears the template selection held by the store.
#[derive(Debug)]
pub struct AddWidgetDialog {
    state: DialogState,
    category_id: String,
    category_name: String,
    active_tab: usize,
    draft: CustomWidgetDraft,
}

impl Default for AddWidgetDialog {
    fn default() -> Self {
        Self {
            state: DialogState::Closed,
            category_id: String::new(),
            category_name: String::new(),
            active_tab: 0,
            draft: CustomWidgetDraft::default(),
        }
    }
}

impl AddWidgetDialog {
    pub fn state(&self) -> DialogState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state != DialogState::Closed
    }

    pub fn category_id(&self) -> &str {
        &self.category_id
    }

    pub fn draft(&self) -> &CustomWidgetDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut CustomWidgetDraft {
        &mut self.draft
    }

    pub fn active_group(&self) -> &'static str {
        TEMPLATE_GROUPS[self.active_tab]
    }

    pub fn select_group(&mut self, group: &str) {
        if let Some(idx) = TEMPLATE_GROUPS.iter().position(|g| *g == group) {
            self.active_tab = idx;
        }
    }

    /// Open on the template picker for `category_id`.
    pub fn open(&mut self, category_id: &str, category_name: &str) {
        self.category_id = category_id.to_string();
        self.category_name = category_name.to_string();
        self.active_tab = 0;
        self.draft = CustomWidgetDraft::default();
        self.state = DialogState::TemplatePicker;
    }

    pub fn show_templates(&mut self) {
        if self.is_open() {
            self.state = DialogState::TemplatePicker;
        }
    }

    pub fn show_custom_form(&mut self) {
        if self.is_open() {
            self.state = DialogState::CustomForm;
        }
    }

    fn close(&mut self, store: &mut DashboardStore) {
        store.clear_template_selection();
        self.draft = CustomWidgetDraft::default();
        self.state = DialogState::Closed;
    }

    /// Commit every selected template to the bound category.
    pub fn confirm(&mut self, store: &mut DashboardStore) -> Option<DialogOutcome> {
        if self.state != DialogState::TemplatePicker {
            return None;
        }
        let count = store.add_selected_widgets(&self.category_id);
        let outcome = DialogOutcome::TemplatesAdded {
            category: self.category_name.clone(),
            count,
        };
        self.close(store);
        Some(outcome)
    }

    /// Create the drafted widget. Does nothing while the name is blank.
    pub fn create(&mut self, store: &mut DashboardStore) -> Option<DialogOutcome> {
        if self.state != DialogState::CustomForm || !self.draft.is_submittable() {
            return None;
        }
        let widget = self.draft.to_new_widget();
        let name = widget.name.clone();
        let outcome = match store.add_widget(&self.category_id, widget) {
            Some(_) => DialogOutcome::CustomCreated {
                category: self.category_name.clone(),
                name,
            },
            None => DialogOutcome::Cancelled,
        };
        self.close(store);
        Some(outcome)
    }

    pub fn cancel(&mut self, store: &mut DashboardStore) -> Option<DialogOutcome> {
        if !self.is_open() {
            return None;
        }
        self.close(store);
        Some(DialogOutcome::Cancelled)
    }

    pub fn ui(
        &mut self,
        ctx: &egui::Context,
        store: &mut DashboardStore,
    ) -> Option<DialogOutcome> {
        if !self.is_open() {
            return None;
        }
        let mut open = true;
        let mut outcome = None;
        let title = format!("Add Widget · {}", self.category_name);
        egui::Window::new(title)
            .id(egui::Id::new("add_widget_dialog"))
            .collapsible(false)
            .resizable(false)
            .default_width(560.0)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .open(&mut open)
            .show(ctx, |ui| {
                ui.label(
                    egui::RichText::new("Personalise your dashboard by adding the following widget")
                        .color(MUTED),
                );
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    let on_templates = self.state == DialogState::TemplatePicker;
                    if ui
                        .selectable_label(on_templates, "Choose from Templates")
                        .clicked()
                    {
                        self.show_templates();
                    }
                    if ui
                        .selectable_label(!on_templates, "Create Custom Widget")
                        .clicked()
                    {
                        self.show_custom_form();
                    }
                });
                ui.separator();

                match self.state {
                    DialogState::TemplatePicker => self.templates_ui(ui, store),
                    DialogState::CustomForm => self.custom_form_ui(ui),
                    DialogState::Closed => {}
                }

                ui.separator();
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let (label, enabled) = match self.state {
                        DialogState::CustomForm => ("Create Widget", self.draft.is_submittable()),
                        _ => ("Confirm", true),
                    };
                    let primary = egui::Button::new(egui::RichText::new(label).strong());
                    if ui.add_enabled(enabled, primary).clicked() {
                        outcome = match self.state {
                            DialogState::CustomForm => self.create(store),
                            _ => self.confirm(store),
                        };
                    }
                    if ui.button("Cancel").clicked() {
                        outcome = self.cancel(store);
                    }
                });
            });
        if !open && outcome.is_none() {
            outcome = self.cancel(store);
        }
        outcome
    }

    fn templates_ui(&mut self, ui: &mut egui::Ui, store: &mut DashboardStore) {
        ui.horizontal(|ui| {
            for (idx, group) in TEMPLATE_GROUPS.iter().enumerate() {
                if ui.selectable_label(self.active_tab == idx, *group).clicked() {
                    self.active_tab = idx;
                }
            }
        });
        ui.add_space(8.0);
        let mut toggled = Vec::new();
        egui::ScrollArea::vertical()
            .max_height(240.0)
            .show(ui, |ui| {
                for template in store.templates_in_group(self.active_group()) {
                    let mut checked = template.selected;
                    if ui.checkbox(&mut checked, template.name.as_str()).changed() {
                        toggled.push(template.id.clone());
                    }
                }
            });
        for id in toggled {
            store.toggle_widget_template(&id);
        }
        let selected = store.selected_template_count();
        if selected > 0 {
            ui.label(egui::RichText::new(format!("{selected} selected")).color(ACCENT));
        }
    }

    fn custom_form_ui(&mut self, ui: &mut egui::Ui) {
        let draft = &mut self.draft;
        egui::Grid::new("custom_widget_form")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.label("Widget Name *");
                ui.add(egui::TextEdit::singleline(&mut draft.name).hint_text("Enter widget name"));
                ui.end_row();

                ui.label("Widget Type");
                egui::ComboBox::from_id_source("custom_widget_kind")
                    .selected_text(draft.kind.label())
                    .show_ui(ui, |ui| {
                        for kind in WidgetKind::ALL {
                            ui.selectable_value(&mut draft.kind, kind, kind.label());
                        }
                    });
                ui.end_row();

                ui.label("Widget Text/Content");
                ui.add(
                    egui::TextEdit::multiline(&mut draft.text)
                        .desired_rows(3)
                        .hint_text("Enter widget content or description"),
                );
                ui.end_row();

                ui.label("Additional Description");
                ui.add(
                    egui::TextEdit::multiline(&mut draft.description)
                        .desired_rows(2)
                        .hint_text("Additional information about this widget"),
                );
                ui.end_row();
            });

        if draft.kind != WidgetKind::Chart {
            return;
        }
        ui.add_space(8.0);
        ui.label(egui::RichText::new("Chart Configuration").strong());
        ui.horizontal(|ui| {
            for chart_type in ChartType::ALL {
                ui.selectable_value(&mut draft.chart_type, chart_type, chart_type.label());
            }
        });
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.label("Data Points");
            if ui.button("+ Add Point").clicked() {
                draft.add_point();
            }
        });
        let mut remove = None;
        egui::ScrollArea::vertical()
            .id_source("custom_widget_points")
            .max_height(160.0)
            .show(ui, |ui| {
                for (idx, point) in draft.points.iter_mut().enumerate() {
                    ui.horizontal(|ui| {
                        ui.add(
                            egui::TextEdit::singleline(&mut point.label)
                                .hint_text("Label")
                                .desired_width(220.0),
                        );
                        ui.add(egui::DragValue::new(&mut point.value).speed(1.0));
                        if ui.small_button("✖").clicked() {
                            remove = Some(idx);
                        }
                    });
                }
            });
        if let Some(idx) = remove {
            draft.remove_point(idx);
        }
    }
}
