//! FormCraft Core
//!
//! Dynamic form definitions: validation, display-order normalization,
//! lifecycle orchestration and server-side paged listing.
//!
//! ## Architecture
//!
//! - **Domain Layer**: form model, value objects, validator, normalizer, assembler
//! - **Application Layer**: lifecycle service and query planner
//! - **Ports Layer**: use case trait (inbound), persistence gateway trait (outbound)
//! - **Infrastructure Layer**: in-memory gateway for development and tests
//!
//! The core never renders markup and never builds query text. Everything it
//! hands to the persistence gateway is plain data, bound as parameters by
//! the gateway implementation.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ports;

pub use application::query::{
    ColumnSpec, PagedQueryRequest, PagedQueryResult, QueryPlanner, SanitizedQuery, SearchSpec,
    SortOrder, DEFAULT_PAGE_SIZE, DEFAULT_SORT_COLUMN,
};
pub use application::service::FormService;
pub use domain::form::{
    FormDefinition, FormFieldDefinition, FormListItem, PersistedForm, PersistedFormField,
};
pub use domain::services::assembler::{FormAssembler, FormHeaderRow};
pub use domain::services::normalizer::normalize_display_order;
pub use domain::services::validator::{FormValidator, ValidationError, MAX_TITLE_LENGTH};
pub use domain::value_objects::{FieldOption, FormId, SortDirection};
pub use error::{FormError, FormResult};
pub use infrastructure::memory::{default_field_options, InMemoryFormGateway};
pub use ports::inbound::FormUseCases;
pub use ports::outbound::{FormGateway, FormRecord, FormsPage, GatewayError};
