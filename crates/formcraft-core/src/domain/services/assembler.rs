//! Rebuilds a form from the header and field row-sets returned by the gateway.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::form::PersistedForm;
use crate::domain::value_objects::FormId;
use crate::error::{FormError, FormResult};
use crate::ports::outbound::FormRecord;

/// Header row of a stored form
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormHeaderRow {
    /// Form id
    pub form_id: i32,
    /// Form title
    pub title: String,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Last modification time
    pub modified_at: DateTime<Utc>,
}

/// Form assembler
pub struct FormAssembler;

impl FormAssembler {
    /// Combine header and fields. Fields keep arrival order; sorting for
    /// presentation happens at read time in the lifecycle service.
    pub fn assemble(id: FormId, record: FormRecord) -> FormResult<PersistedForm> {
        let header = record.header.ok_or(FormError::NotFound(id.get()))?;

        Ok(PersistedForm {
            id,
            title: header.title,
            created_at: header.created_at,
            modified_at: header.modified_at,
            fields: record.fields,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::form::PersistedFormField;

    fn record(header: Option<FormHeaderRow>, fields: Vec<PersistedFormField>) -> FormRecord {
        FormRecord { header, fields }
    }

    fn header(id: i32) -> FormHeaderRow {
        let now = Utc::now();
        FormHeaderRow {
            form_id: id,
            title: "Onboarding".into(),
            created_at: now,
            modified_at: now,
        }
    }

    fn field(field_id: i32, display_order: i32) -> PersistedFormField {
        PersistedFormField {
            field_id,
            form_id: 4,
            label: format!("F{field_id}"),
            level: 1,
            required: true,
            selected_option: Some("opt".into()),
            display_order,
        }
    }

    #[test]
    fn test_missing_header_is_not_found() {
        let id = FormId::new(4).unwrap();
        let result = FormAssembler::assemble(id, record(None, vec![field(1, 1)]));
        assert!(matches!(result, Err(FormError::NotFound(4))));
    }

    #[test]
    fn test_fields_keep_arrival_order() {
        let id = FormId::new(4).unwrap();
        let fields = vec![field(9, 3), field(2, 1)];
        let form = FormAssembler::assemble(id, record(Some(header(4)), fields)).unwrap();

        assert_eq!(form.title, "Onboarding");
        let ids: Vec<i32> = form.fields.iter().map(|f| f.field_id).collect();
        assert_eq!(ids, vec![9, 2]);
    }

    #[test]
    fn test_header_without_fields() {
        let id = FormId::new(4).unwrap();
        let form = FormAssembler::assemble(id, record(Some(header(4)), Vec::new())).unwrap();
        assert_eq!(form.field_count(), 0);
    }
}
