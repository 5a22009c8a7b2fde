//! Structural rules a form definition must pass before it is persisted.

use thiserror::Error;

use crate::domain::form::FormDefinition;

/// Maximum title length, in characters
pub const MAX_TITLE_LENGTH: usize = 200;

/// Rejected form definition. One variant per rule.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Title absent or blank
    #[error("title required")]
    TitleRequired,

    /// Title longer than [`MAX_TITLE_LENGTH`] characters
    #[error("title too long")]
    TitleTooLong,

    /// Empty field list
    #[error("at least one field required")]
    NoFields,

    /// Some field has a blank label
    #[error("all fields must have a label")]
    MissingFieldLabel,
}

/// Form definition validator
pub struct FormValidator;

impl FormValidator {
    /// Check the rules in order; the first failure wins.
    pub fn validate(definition: &FormDefinition) -> Result<(), ValidationError> {
        if definition.title.trim().is_empty() {
            return Err(ValidationError::TitleRequired);
        }
        if definition.title.chars().count() > MAX_TITLE_LENGTH {
            return Err(ValidationError::TitleTooLong);
        }
        if definition.fields.is_empty() {
            return Err(ValidationError::NoFields);
        }
        if definition
            .fields
            .iter()
            .any(|field| field.label.trim().is_empty())
        {
            return Err(ValidationError::MissingFieldLabel);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::form::FormFieldDefinition;

    fn definition(title: &str, labels: &[&str]) -> FormDefinition {
        FormDefinition::new(
            title,
            labels.iter().map(|l| FormFieldDefinition::labeled(*l)).collect(),
        )
    }

    #[test]
    fn test_valid_definition() {
        assert_eq!(FormValidator::validate(&definition("Contact", &["Name"])), Ok(()));
    }

    #[test]
    fn test_blank_title() {
        assert_eq!(
            FormValidator::validate(&definition("", &["Name"])),
            Err(ValidationError::TitleRequired)
        );
        assert_eq!(
            FormValidator::validate(&definition(" \t\n", &["Name"])),
            Err(ValidationError::TitleRequired)
        );
    }

    #[test]
    fn test_title_length_boundary() {
        let exact = "x".repeat(MAX_TITLE_LENGTH);
        assert_eq!(FormValidator::validate(&definition(&exact, &["A"])), Ok(()));

        let over = "x".repeat(MAX_TITLE_LENGTH + 1);
        assert_eq!(
            FormValidator::validate(&definition(&over, &["A"])),
            Err(ValidationError::TitleTooLong)
        );
    }

    #[test]
    fn test_title_length_counts_characters() {
        // 200 two-byte characters is still within the limit
        let title = "é".repeat(MAX_TITLE_LENGTH);
        assert_eq!(FormValidator::validate(&definition(&title, &["A"])), Ok(()));
    }

    #[test]
    fn test_no_fields() {
        assert_eq!(
            FormValidator::validate(&definition("Contact", &[])),
            Err(ValidationError::NoFields)
        );
    }

    #[test]
    fn test_blank_label() {
        assert_eq!(
            FormValidator::validate(&definition("Contact", &["Name", "  "])),
            Err(ValidationError::MissingFieldLabel)
        );
    }

    #[test]
    fn test_first_failure_wins() {
        let over = "x".repeat(MAX_TITLE_LENGTH + 1);
        assert_eq!(
            FormValidator::validate(&definition(&over, &[])),
            Err(ValidationError::TitleTooLong)
        );
        assert_eq!(
            FormValidator::validate(&definition("", &[""])),
            Err(ValidationError::TitleRequired)
        );
    }
}
