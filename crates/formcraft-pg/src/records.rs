//! Row shapes returned by the stored procedures, and their domain mappings.

use chrono::{DateTime, Utc};
use formcraft_core::{FieldOption, FormFieldDefinition, FormHeaderRow, FormListItem, PersistedFormField};
use serde::Serialize;

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct FieldOptionRecord {
    pub option_id: i32,
    pub option_text: String,
    pub option_value: String,
}

impl From<FieldOptionRecord> for FieldOption {
    fn from(row: FieldOptionRecord) -> Self {
        FieldOption::new(row.option_id, row.option_text, row.option_value)
    }
}

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct FormListRecord {
    pub form_id: i32,
    pub form_title: String,
    pub created_date: DateTime<Utc>,
    pub modified_date: DateTime<Utc>,
    pub field_count: i64,
}

impl From<FormListRecord> for FormListItem {
    fn from(row: FormListRecord) -> Self {
        FormListItem {
            id: row.form_id,
            title: row.form_title,
            created_at: row.created_date,
            modified_at: row.modified_date,
            field_count: row.field_count,
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct FormCountsRecord {
    pub total_records: i64,
    pub filtered_records: i64,
}

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct FormHeaderRecord {
    pub form_id: i32,
    pub form_title: String,
    pub created_date: DateTime<Utc>,
    pub modified_date: DateTime<Utc>,
}

impl From<FormHeaderRecord> for FormHeaderRow {
    fn from(row: FormHeaderRecord) -> Self {
        FormHeaderRow {
            form_id: row.form_id,
            title: row.form_title,
            created_at: row.created_date,
            modified_at: row.modified_date,
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct FormFieldRecord {
    pub field_id: i32,
    pub form_id: i32,
    pub field_label: String,
    pub field_level: i32,
    pub is_required: bool,
    pub selected_option: Option<String>,
    pub display_order: i32,
}

impl From<FormFieldRecord> for PersistedFormField {
    fn from(row: FormFieldRecord) -> Self {
        PersistedFormField {
            field_id: row.field_id,
            form_id: row.form_id,
            label: row.field_label,
            level: row.field_level,
            required: row.is_required,
            selected_option: row.selected_option,
            display_order: row.display_order,
        }
    }
}

/// Element of the JSON array `sp_save_form` unpacks with `jsonb_to_recordset`
#[derive(Debug, Serialize)]
pub(crate) struct FieldPayload<'a> {
    pub field_label: &'a str,
    pub field_level: i32,
    pub is_required: bool,
    pub selected_option: Option<&'a str>,
    pub display_order: i32,
}

impl<'a> From<&'a FormFieldDefinition> for FieldPayload<'a> {
    fn from(field: &'a FormFieldDefinition) -> Self {
        FieldPayload {
            field_label: &field.label,
            field_level: field.level,
            is_required: field.required,
            selected_option: field.selected_option_value.as_deref(),
            display_order: field.display_order,
        }
    }
}
