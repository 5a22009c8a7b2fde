//! Outbound ports (Persistence Gateway)
//!
//! Every operation is a fixed, named, parameterized call. Implementations
//! must never splice caller-supplied text into query strings.

use async_trait::async_trait;
use thiserror::Error;

use crate::application::query::SanitizedQuery;
use crate::domain::form::{FormFieldDefinition, FormListItem, PersistedFormField};
use crate::domain::services::assembler::FormHeaderRow;
use crate::domain::value_objects::{FieldOption, FormId};

/// Persistence gateway port
#[async_trait]
pub trait FormGateway: Send + Sync {
    /// Full option catalog
    async fn get_field_options(&self) -> Result<Vec<FieldOption>, GatewayError>;

    /// Store a form with its already-normalized fields, returning the new id
    async fn insert_form(
        &self,
        title: &str,
        fields: &[FormFieldDefinition],
    ) -> Result<i32, GatewayError>;

    /// One page of the form listing plus total and filtered counts
    async fn query_forms_page(&self, query: &SanitizedQuery) -> Result<FormsPage, GatewayError>;

    /// Header (if any) and field rows of one form
    async fn get_form_with_fields(&self, id: FormId) -> Result<FormRecord, GatewayError>;

    /// Remove a form and its fields
    async fn delete_form(&self, id: FormId) -> Result<(), GatewayError>;
}

/// Page of list rows as returned by the gateway
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormsPage {
    /// Rows in gateway order
    pub rows: Vec<FormListItem>,
    /// Every stored form
    pub total_count: i64,
    /// Forms matching the search text
    pub filtered_count: i64,
}

/// Raw result of a single-form lookup
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormRecord {
    /// `None` when no such form exists
    pub header: Option<FormHeaderRow>,
    /// Field rows in storage order
    pub fields: Vec<PersistedFormField>,
}

/// Gateway errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GatewayError {
    /// Storage unreachable or the connection dropped
    #[error("connection error: {0}")]
    Connection(String),

    /// The named call failed
    #[error("query error: {0}")]
    Query(String),

    /// Values could not be encoded or decoded
    #[error("serialization error: {0}")]
    Serialization(String),

    /// No connection became available in time
    #[error("gateway call timed out")]
    Timeout,
}
