//! Form Lifecycle Service
//!
//! Create, read, list and delete. Domain checks run before any gateway call;
//! gateway failures are passed through unchanged.

use std::sync::Arc;

use async_trait::async_trait;

use crate::application::query::{PagedQueryRequest, PagedQueryResult, QueryPlanner};
use crate::domain::form::{FormDefinition, FormListItem, PersistedForm};
use crate::domain::services::assembler::FormAssembler;
use crate::domain::services::normalizer::normalize_display_order;
use crate::domain::services::validator::FormValidator;
use crate::domain::value_objects::{FieldOption, FormId};
use crate::error::{FormError, FormResult};
use crate::ports::inbound::FormUseCases;
use crate::ports::outbound::FormGateway;

/// Form application service
#[derive(Clone)]
pub struct FormService {
    gateway: Arc<dyn FormGateway>,
}

impl FormService {
    /// Service over the given persistence gateway
    pub fn new(gateway: Arc<dyn FormGateway>) -> Self {
        Self { gateway }
    }

    async fn load(&self, id: FormId) -> FormResult<PersistedForm> {
        let record = self.gateway.get_form_with_fields(id).await?;
        FormAssembler::assemble(id, record)
    }
}

#[async_trait]
impl FormUseCases for FormService {
    #[tracing::instrument(skip(self))]
    async fn list_field_options(&self) -> FormResult<Vec<FieldOption>> {
        Ok(self.gateway.get_field_options().await?)
    }

    #[tracing::instrument(
        skip(self, definition),
        fields(title = %definition.title, fields = definition.fields.len())
    )]
    async fn create_form(&self, mut definition: FormDefinition) -> FormResult<i32> {
        if let Err(reason) = FormValidator::validate(&definition) {
            tracing::warn!(%reason, "form definition rejected");
            return Err(reason.into());
        }

        normalize_display_order(&mut definition.fields);

        let id = self
            .gateway
            .insert_form(&definition.title, &definition.fields)
            .await?;

        tracing::info!(form_id = id, "form created");
        Ok(id)
    }

    #[tracing::instrument(skip(self, request), fields(draw = request.draw))]
    async fn list_forms(
        &self,
        request: PagedQueryRequest,
    ) -> FormResult<PagedQueryResult<FormListItem>> {
        let query = QueryPlanner::plan(&request);
        tracing::debug!(?query, "planned form listing");

        let page = self.gateway.query_forms_page(&query).await?;
        Ok(QueryPlanner::assemble_page(page, query.draw))
    }

    #[tracing::instrument(skip(self))]
    async fn get_form(&self, id: i32) -> FormResult<PersistedForm> {
        let id = FormId::new(id)?;
        let mut form = self.load(id).await?;
        form.sort_fields();
        Ok(form)
    }

    #[tracing::instrument(skip(self))]
    async fn delete_form(&self, id: i32) -> FormResult<()> {
        let id = FormId::new(id)?;

        // Existence check and delete are separate gateway calls; the gateway
        // owns atomicity against concurrent deletes.
        match self.load(id).await {
            Ok(_) => {}
            Err(FormError::NotFound(missing)) => {
                tracing::warn!(form_id = missing, "delete of unknown form");
                return Err(FormError::NotFound(missing));
            }
            Err(other) => return Err(other),
        }

        self.gateway.delete_form(id).await?;
        tracing::info!(form_id = id.get(), "form deleted");
        Ok(())
    }
}
