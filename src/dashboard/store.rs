use crate::dashboard::model::{
    Category, DashboardData, NewCategory, NewWidget, Widget, WidgetTemplate,
};
use crate::dashboard::seed;
use rand::Rng;

const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const ID_SUFFIX_LEN: usize = 9;

/// `<prefix>-<unix millis>-<9 base36 chars>`, retried until `taken` rejects it.
fn generate_id(prefix: &str, taken: impl Fn(&str) -> bool) -> String {
    let mut rng = rand::thread_rng();
    loop {
        let suffix: String = (0..ID_SUFFIX_LEN)
            .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
            .collect();
        let id = format!(
            "{prefix}-{}-{suffix}",
            chrono::Utc::now().timestamp_millis()
        );
        if !taken(&id) {
            return id;
        }
    }
}

/// A widget matched by the search box together with its owning category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchHit<'a> {
    pub category_id: &'a str,
    pub category_name: &'a str,
    pub widget: &'a Widget,
}

/// Widgets whose name or text contains `query`, ignoring case, in display
/// order across all categories.
pub fn filter_widgets<'a>(data: &'a DashboardData, query: &str) -> Vec<SearchHit<'a>> {
    let needle = query.to_lowercase();
    data.categories
        .iter()
        .flat_map(|category| {
            let needle = needle.clone();
            category
                .widgets
                .iter()
                .filter(move |w| {
                    w.name.to_lowercase().contains(&needle)
                        || w.text.to_lowercase().contains(&needle)
                })
                .map(move |widget| SearchHit {
                    category_id: &category.id,
                    category_name: &category.name,
                    widget,
                })
        })
        .collect()
}

/// Single owner of the dashboard contents, the search text and the template
/// selection. Views receive `&mut DashboardStore` and mutate only through the
/// methods below; unknown ids are ignored rather than reported.
#[derive(Debug, Clone)]
pub struct DashboardStore {
    data: DashboardData,
    search_query: String,
    templates: Vec<WidgetTemplate>,
}

impl Default for DashboardStore {
    fn default() -> Self {
        Self::new(seed::initial_data(), seed::widget_templates())
    }
}

impl DashboardStore {
    pub fn new(data: DashboardData, templates: Vec<WidgetTemplate>) -> Self {
        Self {
            data,
            search_query: String::new(),
            templates,
        }
    }

    pub fn data(&self) -> &DashboardData {
        &self.data
    }

    pub fn categories(&self) -> &[Category] {
        &self.data.categories
    }

    pub fn category(&self, category_id: &str) -> Option<&Category> {
        self.data.categories.iter().find(|c| c.id == category_id)
    }

    fn category_mut(&mut self, category_id: &str) -> Option<&mut Category> {
        self.data.categories.iter_mut().find(|c| c.id == category_id)
    }

    pub fn widget_count(&self) -> usize {
        self.data.widget_count()
    }

    /// Append a widget to `category_id` and return its generated id.
    pub fn add_widget(&mut self, category_id: &str, widget: NewWidget) -> Option<String> {
        let Some(category) = self.category_mut(category_id) else {
            tracing::debug!(category_id, "add_widget: unknown category");
            return None;
        };
        let id = generate_id("widget", |id| category.contains_widget(id));
        tracing::debug!(category_id, widget_id = %id, name = %widget.name, "widget added");
        category.widgets.push(widget.into_widget(id.clone()));
        Some(id)
    }

    /// Remove a widget. Returns `false` when nothing matched.
    pub fn remove_widget(&mut self, category_id: &str, widget_id: &str) -> bool {
        let Some(category) = self.category_mut(category_id) else {
            tracing::debug!(category_id, "remove_widget: unknown category");
            return false;
        };
        let before = category.widgets.len();
        category.widgets.retain(|w| w.id != widget_id);
        let removed = category.widgets.len() != before;
        if removed {
            tracing::debug!(category_id, widget_id, "widget removed");
        } else {
            tracing::debug!(category_id, widget_id, "remove_widget: unknown widget");
        }
        removed
    }

    pub fn add_category(&mut self, category: NewCategory) -> String {
        let id = generate_id("category", |id| {
            self.data.categories.iter().any(|c| c.id == id)
        });
        tracing::debug!(category_id = %id, name = %category.name, "category added");
        self.data.categories.push(Category {
            id: id.clone(),
            name: category.name,
            widgets: category.widgets,
        });
        id
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    /// Whether the search results replace the category view.
    pub fn is_searching(&self) -> bool {
        !self.search_query.is_empty()
    }

    pub fn filtered_widgets(&self) -> Vec<SearchHit<'_>> {
        filter_widgets(&self.data, &self.search_query)
    }

    pub fn templates(&self) -> &[WidgetTemplate] {
        &self.templates
    }

    pub fn templates_in_group<'a>(
        &'a self,
        group: &'a str,
    ) -> impl Iterator<Item = &'a WidgetTemplate> + 'a {
        self.templates.iter().filter(move |t| t.group == group)
    }

    pub fn selected_template_count(&self) -> usize {
        self.templates.iter().filter(|t| t.selected).count()
    }

    /// Flip the selection of one template. Returns `false` for unknown ids.
    pub fn toggle_widget_template(&mut self, template_id: &str) -> bool {
        match self.templates.iter_mut().find(|t| t.id == template_id) {
            Some(template) => {
                template.selected = !template.selected;
                true
            }
            None => {
                tracing::debug!(template_id, "toggle_widget_template: unknown template");
                false
            }
        }
    }

    pub fn clear_template_selection(&mut self) {
        for template in &mut self.templates {
            template.selected = false;
        }
    }

    /// Turn every selected template into a widget of `category_id`, then clear
    /// the selection across all groups. Returns the number of widgets added.
    pub fn add_selected_widgets(&mut self, category_id: &str) -> usize {
        let picked: Vec<NewWidget> = self
            .templates
            .iter()
            .filter(|t| t.selected)
            .map(|t| {
                NewWidget::new(t.name.clone(), t.kind)
                    .with_text(seed::default_widget_text(&t.name))
            })
            .collect();
        self.clear_template_selection();

        let mut added = 0;
        for widget in picked {
            if self.add_widget(category_id, widget).is_some() {
                added += 1;
            }
        }
        tracing::info!(category_id, added, "selected templates added");
        added
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::model::WidgetKind;

    #[test]
    fn generated_ids_have_expected_shape() {
        let id = generate_id("widget", |_| false);
        let parts: Vec<_> = id.split('-').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "widget");
        assert!(parts[1].parse::<i64>().is_ok());
        assert_eq!(parts[2].len(), ID_SUFFIX_LEN);
        assert!(parts[2].bytes().all(|b| ID_ALPHABET.contains(&b)));
    }

    #[test]
    fn generation_retries_on_collision() {
        let first = generate_id("widget", |_| false);
        let second = generate_id("widget", |id| id == first);
        assert_ne!(first, second);
    }

    #[test]
    fn add_widget_appends_in_order() {
        let mut store = DashboardStore::default();
        let a = store
            .add_widget("cwpp-dashboard", NewWidget::new("A", WidgetKind::Metric))
            .unwrap();
        let b = store
            .add_widget("cwpp-dashboard", NewWidget::new("B", WidgetKind::Metric))
            .unwrap();
        let ids: Vec<_> = store
            .category("cwpp-dashboard")
            .unwrap()
            .widgets
            .iter()
            .map(|w| w.id.clone())
            .collect();
        assert_eq!(ids[ids.len() - 2..], [a, b]);
    }

    #[test]
    fn toggle_twice_restores_selection() {
        let mut store = DashboardStore::default();
        assert!(store.toggle_widget_template("workload-alerts"));
        assert_eq!(store.selected_template_count(), 1);
        assert!(store.toggle_widget_template("workload-alerts"));
        assert_eq!(store.selected_template_count(), 0);
        assert!(!store.toggle_widget_template("missing"));
    }
}
