//! In-memory persistence gateway (development and testing)

use std::cmp::Ordering;
use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;

use crate::application::query::SanitizedQuery;
use crate::domain::form::{FormFieldDefinition, FormListItem, PersistedFormField};
use crate::domain::services::assembler::FormHeaderRow;
use crate::domain::value_objects::{FieldOption, FormId, SortDirection};
use crate::ports::outbound::{FormGateway, FormRecord, FormsPage, GatewayError};

/// Option catalog used when none is supplied
pub fn default_field_options() -> Vec<FieldOption> {
    vec![
        FieldOption::new(1, "Option 1", "Option1"),
        FieldOption::new(2, "Option 2", "Option2"),
        FieldOption::new(3, "Option 3", "Option3"),
        FieldOption::new(4, "Option 4", "Option4"),
        FieldOption::new(5, "Option 5", "Option5"),
    ]
}

#[derive(Clone, Copy)]
enum ListColumn {
    Id,
    Title,
    CreatedAt,
    ModifiedAt,
    FieldCount,
}

impl ListColumn {
    fn from_logical(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "formtitle" | "title" => Self::Title,
            "createddate" | "createdat" => Self::CreatedAt,
            "modifieddate" | "modifiedat" => Self::ModifiedAt,
            "fieldcount" => Self::FieldCount,
            _ => Self::Id,
        }
    }

    fn compare(&self, a: &FormListItem, b: &FormListItem) -> Ordering {
        match self {
            Self::Id => a.id.cmp(&b.id),
            Self::Title => a.title.cmp(&b.title),
            Self::CreatedAt => a.created_at.cmp(&b.created_at),
            Self::ModifiedAt => a.modified_at.cmp(&b.modified_at),
            Self::FieldCount => a.field_count.cmp(&b.field_count),
        }
    }
}

struct StoredForm {
    header: FormHeaderRow,
    fields: Vec<PersistedFormField>,
}

impl StoredForm {
    fn list_item(&self) -> FormListItem {
        FormListItem {
            id: self.header.form_id,
            title: self.header.title.clone(),
            created_at: self.header.created_at,
            modified_at: self.header.modified_at,
            field_count: self.fields.len() as i64,
        }
    }
}

#[derive(Default)]
struct State {
    last_form_id: i32,
    last_field_id: i32,
    forms: BTreeMap<i32, StoredForm>,
}

/// In-memory form gateway
pub struct InMemoryFormGateway {
    options: Vec<FieldOption>,
    state: RwLock<State>,
}

impl InMemoryFormGateway {
    /// Gateway seeded with [`default_field_options`]
    pub fn new() -> Self {
        Self::with_options(default_field_options())
    }

    /// Gateway with a custom option catalog
    pub fn with_options(options: Vec<FieldOption>) -> Self {
        Self {
            options,
            state: RwLock::new(State::default()),
        }
    }

    /// Number of stored forms
    pub fn len(&self) -> usize {
        self.state.read().forms.len()
    }

    /// True when nothing is stored
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryFormGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FormGateway for InMemoryFormGateway {
    async fn get_field_options(&self) -> Result<Vec<FieldOption>, GatewayError> {
        Ok(self.options.clone())
    }

    async fn insert_form(
        &self,
        title: &str,
        fields: &[FormFieldDefinition],
    ) -> Result<i32, GatewayError> {
        let mut state = self.state.write();
        let now = Utc::now();

        state.last_form_id += 1;
        let form_id = state.last_form_id;

        let mut stored = Vec::with_capacity(fields.len());
        for field in fields {
            state.last_field_id += 1;
            stored.push(PersistedFormField {
                field_id: state.last_field_id,
                form_id,
                label: field.label.clone(),
                level: field.level,
                required: field.required,
                selected_option: field.selected_option_value.clone(),
                display_order: field.display_order,
            });
        }

        state.forms.insert(
            form_id,
            StoredForm {
                header: FormHeaderRow {
                    form_id,
                    title: title.to_string(),
                    created_at: now,
                    modified_at: now,
                },
                fields: stored,
            },
        );
        Ok(form_id)
    }

    async fn query_forms_page(&self, query: &SanitizedQuery) -> Result<FormsPage, GatewayError> {
        let state = self.state.read();
        let needle = query.search_text.to_lowercase();

        let mut rows: Vec<FormListItem> = state
            .forms
            .values()
            .filter(|form| needle.is_empty() || form.header.title.to_lowercase().contains(&needle))
            .map(StoredForm::list_item)
            .collect();
        let filtered_count = rows.len() as i64;

        let column = ListColumn::from_logical(&query.sort_column);
        rows.sort_by(|a, b| {
            let ordering = column.compare(a, b).then_with(|| a.id.cmp(&b.id));
            match query.sort_direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });

        let offset = usize::try_from(query.offset()).unwrap_or(usize::MAX);
        let page_size = usize::try_from(query.page_size).unwrap_or(0);
        let rows = rows.into_iter().skip(offset).take(page_size).collect();

        Ok(FormsPage {
            rows,
            total_count: state.forms.len() as i64,
            filtered_count,
        })
    }

    async fn get_form_with_fields(&self, id: FormId) -> Result<FormRecord, GatewayError> {
        let state = self.state.read();
        Ok(match state.forms.get(&id.get()) {
            Some(form) => FormRecord {
                header: Some(form.header.clone()),
                fields: form.fields.clone(),
            },
            None => FormRecord::default(),
        })
    }

    async fn delete_form(&self, id: FormId) -> Result<(), GatewayError> {
        self.state.write().forms.remove(&id.get());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(search: &str, column: &str, direction: SortDirection, page: i32, size: i32) -> SanitizedQuery {
        SanitizedQuery {
            draw: 1,
            page_number: page,
            page_size: size,
            search_text: search.into(),
            sort_column: column.into(),
            sort_direction: direction,
        }
    }

    async fn seeded() -> InMemoryFormGateway {
        let gateway = InMemoryFormGateway::new();
        for (title, count) in [("Customer survey", 3), ("Bug report", 1), ("Event survey", 2)] {
            let fields: Vec<FormFieldDefinition> =
                (0..count).map(|i| FormFieldDefinition::labeled(format!("Q{i}"))).collect();
            gateway.insert_form(title, &fields).await.unwrap();
        }
        gateway
    }

    fn titles(page: &FormsPage) -> Vec<&str> {
        page.rows.iter().map(|r| r.title.as_str()).collect()
    }

    #[tokio::test]
    async fn test_insert_assigns_increasing_ids() {
        let gateway = InMemoryFormGateway::new();
        let a = gateway.insert_form("A", &[FormFieldDefinition::labeled("x")]).await.unwrap();
        let b = gateway.insert_form("B", &[FormFieldDefinition::labeled("y")]).await.unwrap();
        assert!(b > a);
        assert_eq!(gateway.len(), 2);
    }

    #[tokio::test]
    async fn test_default_listing_is_id_descending() {
        let gateway = seeded().await;
        let page = gateway
            .query_forms_page(&query("", "formId", SortDirection::Desc, 1, 10))
            .await
            .unwrap();
        assert_eq!(titles(&page), vec!["Event survey", "Bug report", "Customer survey"]);
        assert_eq!(page.total_count, 3);
        assert_eq!(page.filtered_count, 3);
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive() {
        let gateway = seeded().await;
        let page = gateway
            .query_forms_page(&query("SURVEY", "formTitle", SortDirection::Asc, 1, 10))
            .await
            .unwrap();
        assert_eq!(titles(&page), vec!["Customer survey", "Event survey"]);
        assert_eq!(page.total_count, 3);
        assert_eq!(page.filtered_count, 2);
    }

    #[tokio::test]
    async fn test_sort_by_field_count() {
        let gateway = seeded().await;
        let page = gateway
            .query_forms_page(&query("", "FieldCount", SortDirection::Asc, 1, 10))
            .await
            .unwrap();
        assert_eq!(titles(&page), vec!["Bug report", "Event survey", "Customer survey"]);
    }

    #[tokio::test]
    async fn test_unknown_column_falls_back_to_id() {
        let gateway = seeded().await;
        let page = gateway
            .query_forms_page(&query("", "1; DROP TABLE forms", SortDirection::Asc, 1, 10))
            .await
            .unwrap();
        assert_eq!(titles(&page), vec!["Customer survey", "Bug report", "Event survey"]);
    }

    #[tokio::test]
    async fn test_paging() {
        let gateway = seeded().await;
        let page = gateway
            .query_forms_page(&query("", "formId", SortDirection::Asc, 2, 2))
            .await
            .unwrap();
        assert_eq!(titles(&page), vec!["Event survey"]);
        assert_eq!(page.filtered_count, 3);
    }

    #[tokio::test]
    async fn test_delete_removes_form_and_fields() {
        let gateway = seeded().await;
        let id = FormId::new(1).unwrap();
        assert!(gateway.get_form_with_fields(id).await.unwrap().header.is_some());

        gateway.delete_form(id).await.unwrap();

        let record = gateway.get_form_with_fields(id).await.unwrap();
        assert!(record.header.is_none());
        assert!(record.fields.is_empty());
        assert_eq!(gateway.len(), 2);
    }
}
