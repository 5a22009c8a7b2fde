//! Inbound ports (Use case traits)
//!
//! Hexagonal architecture: application service interfaces.

use async_trait::async_trait;

use crate::application::query::{PagedQueryRequest, PagedQueryResult};
use crate::domain::form::{FormDefinition, FormListItem, PersistedForm};
use crate::domain::value_objects::FieldOption;
use crate::error::FormResult;

/// Form lifecycle use cases
#[async_trait]
pub trait FormUseCases: Send + Sync {
    /// Option catalog for dropdown fields
    async fn list_field_options(&self) -> FormResult<Vec<FieldOption>>;

    /// Validate, normalize and persist a new form
    async fn create_form(&self, definition: FormDefinition) -> FormResult<i32>;

    /// Paged, sorted, searched form listing
    async fn list_forms(
        &self,
        request: PagedQueryRequest,
    ) -> FormResult<PagedQueryResult<FormListItem>>;

    /// Full form with fields in display order
    async fn get_form(&self, id: i32) -> FormResult<PersistedForm>;

    /// Delete an existing form
    async fn delete_form(&self, id: i32) -> FormResult<()>;
}
