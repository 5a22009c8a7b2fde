//! API Models

use chrono::{DateTime, Utc};
use formcraft_core::{
    FieldOption, FormDefinition, FormFieldDefinition, FormListItem, PagedQueryResult,
    PersistedForm, PersistedFormField,
};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// Timestamp format used by the listing grid
pub const LIST_DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Standard API response
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<ErrorResponse>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self { success: true, data: Some(data), error: None }
    }

    pub fn error(code: &str, message: &str) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ErrorResponse {
                code: code.to_string(),
                message: message.to_string(),
            }),
        }
    }
}

/// Error response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

/// Read an explicit JSON `null` as the type's default, so blank input
/// reaches the validator instead of failing extraction
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ============ Field options ============

/// Dropdown option
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FieldOptionView {
    pub option_id: i32,
    pub option_text: String,
    pub option_value: String,
}

impl From<FieldOption> for FieldOptionView {
    fn from(option: FieldOption) -> Self {
        Self {
            option_id: option.id,
            option_text: option.text,
            option_value: option.value,
        }
    }
}

// ============ Forms ============

/// Field as submitted by the builder
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct FieldInput {
    #[serde(deserialize_with = "null_as_default")]
    pub label: String,
    pub level: i32,
    pub required: bool,
    pub selected_option: Option<String>,
    /// Zero means "use submission position"
    pub display_order: i32,
}

/// Form creation request
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct FormCreate {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub fields: Vec<FieldInput>,
}

impl From<FormCreate> for FormDefinition {
    fn from(req: FormCreate) -> Self {
        let fields = req
            .fields
            .into_iter()
            .map(|f| FormFieldDefinition {
                label: f.label,
                level: f.level,
                required: f.required,
                selected_option_value: f.selected_option,
                display_order: f.display_order,
            })
            .collect();
        FormDefinition::new(req.title, fields)
    }
}

/// Identifier of a newly created form
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FormCreated {
    pub form_id: i32,
}

/// Identifier of a deleted form
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FormDeleted {
    pub deleted: i32,
}

/// Stored field
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FieldView {
    pub field_id: i32,
    pub label: String,
    pub level: i32,
    pub required: bool,
    pub selected_option: Option<String>,
    pub display_order: i32,
}

impl From<PersistedFormField> for FieldView {
    fn from(field: PersistedFormField) -> Self {
        Self {
            field_id: field.field_id,
            label: field.label,
            level: field.level,
            required: field.required,
            selected_option: field.selected_option,
            display_order: field.display_order,
        }
    }
}

/// Stored form with fields in display order
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FormView {
    pub form_id: i32,
    pub title: String,
    pub created_date: DateTime<Utc>,
    pub modified_date: DateTime<Utc>,
    pub fields: Vec<FieldView>,
}

impl From<PersistedForm> for FormView {
    fn from(form: PersistedForm) -> Self {
        Self {
            form_id: form.id.get(),
            title: form.title,
            created_date: form.created_at,
            modified_date: form.modified_at,
            fields: form.fields.into_iter().map(FieldView::from).collect(),
        }
    }
}

// ============ Listing grid ============

/// One grid row
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DataTableRow {
    pub form_id: i32,
    pub form_title: String,
    /// `yyyy-MM-dd HH:mm`
    pub created_date: String,
    pub modified_date: String,
    pub field_count: i64,
    pub preview_url: String,
}

impl From<FormListItem> for DataTableRow {
    fn from(item: FormListItem) -> Self {
        Self {
            preview_url: format!("/forms/{}/preview", item.id),
            form_id: item.id,
            form_title: item.title,
            created_date: item.created_at.format(LIST_DATE_FORMAT).to_string(),
            modified_date: item.modified_at.format(LIST_DATE_FORMAT).to_string(),
            field_count: item.field_count,
        }
    }
}

/// Grid response in the shape DataTables expects
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DataTableResponse {
    pub draw: i32,
    pub records_total: i64,
    pub records_filtered: i64,
    pub data: Vec<DataTableRow>,
}

impl From<PagedQueryResult<FormListItem>> for DataTableResponse {
    fn from(page: PagedQueryResult<FormListItem>) -> Self {
        Self {
            draw: page.draw,
            records_total: page.total_count,
            records_filtered: page.filtered_count,
            data: page.rows.into_iter().map(DataTableRow::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_create_request_defaults_missing_fields() {
        let req: FormCreate =
            serde_json::from_str(r#"{"title":"T","fields":[{"label":"A"}]}"#).unwrap();
        let def = FormDefinition::from(req);
        assert_eq!(def.fields[0].label, "A");
        assert_eq!(def.fields[0].display_order, 0);
        assert!(!def.fields[0].required);
        assert!(def.fields[0].selected_option_value.is_none());
    }

    #[test]
    fn test_create_request_reads_null_as_blank() {
        let req: FormCreate = serde_json::from_str(
            r#"{"title":null,"fields":[{"label":null,"selectedOption":null}]}"#,
        )
        .unwrap();
        assert_eq!(req.title, "");
        assert_eq!(req.fields[0].label, "");

        let req: FormCreate = serde_json::from_str(r#"{"title":"T","fields":null}"#).unwrap();
        assert!(req.fields.is_empty());
    }

    #[test]
    fn test_grid_row_formats_dates() {
        let at = Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 59).unwrap();
        let row = DataTableRow::from(FormListItem {
            id: 12,
            title: "Intake".into(),
            created_at: at,
            modified_at: at,
            field_count: 4,
        });
        assert_eq!(row.created_date, "2024-03-09 14:05");
        assert_eq!(row.preview_url, "/forms/12/preview");

        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["formTitle"], "Intake");
        assert_eq!(json["fieldCount"], 4);
    }
}
