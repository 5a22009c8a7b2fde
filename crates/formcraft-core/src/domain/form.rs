//! Form model
//!
//! Input side (`FormDefinition`) lives only for the duration of a request.
//! Read side (`PersistedForm`, `FormListItem`) is what the gateway hands back.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::value_objects::FormId;

/// One field of a form being authored
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormFieldDefinition {
    /// Field label, must be non-blank
    #[serde(default)]
    pub label: String,
    /// Nesting level
    #[serde(default)]
    pub level: i32,
    /// Whether an answer is mandatory
    #[serde(default)]
    pub required: bool,
    /// Pre-selected option value
    #[serde(default)]
    pub selected_option_value: Option<String>,
    /// Render position, `0` means "derive from input order"
    #[serde(default)]
    pub display_order: i32,
}

impl FormFieldDefinition {
    /// Field with a label and every other attribute defaulted
    pub fn labeled(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }
}

/// A user-authored form prior to persistence
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormDefinition {
    /// Form title
    #[serde(default)]
    pub title: String,
    /// Ordered field list
    #[serde(default)]
    pub fields: Vec<FormFieldDefinition>,
}

impl FormDefinition {
    /// Build a definition from a title and fields
    pub fn new(title: impl Into<String>, fields: Vec<FormFieldDefinition>) -> Self {
        Self {
            title: title.into(),
            fields,
        }
    }
}

/// A stored field
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedFormField {
    /// Storage-assigned field id
    pub field_id: i32,
    /// Owning form
    pub form_id: i32,
    /// Field label
    pub label: String,
    /// Nesting level
    pub level: i32,
    /// Whether an answer is mandatory
    pub required: bool,
    /// Pre-selected option value
    pub selected_option: Option<String>,
    /// Render position
    pub display_order: i32,
}

/// A stored form with its fields
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedForm {
    /// Form id
    pub id: FormId,
    /// Form title
    pub title: String,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Last modification time
    pub modified_at: DateTime<Utc>,
    /// Fields, in display order once [`PersistedForm::sort_fields`] ran
    pub fields: Vec<PersistedFormField>,
}

impl PersistedForm {
    /// Re-order fields ascending by display order. Ties keep arrival order.
    pub fn sort_fields(&mut self) {
        self.fields.sort_by_key(|field| field.display_order);
    }

    /// Number of fields
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }
}

/// Summary row of the paged form listing
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormListItem {
    /// Form id
    pub id: i32,
    /// Form title
    pub title: String,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Last modification time
    pub modified_at: DateTime<Utc>,
    /// Number of fields on the form
    pub field_count: i64,
}
