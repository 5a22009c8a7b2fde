//! PostgreSQL implementation of the persistence gateway.
//!
//! Each operation invokes exactly one named procedure from the embedded
//! migration, with every value bound as a parameter.

use std::time::Duration;

use async_trait::async_trait;
use formcraft_core::{
    FieldOption, FormFieldDefinition, FormGateway, FormId, FormRecord, FormsPage, GatewayError,
    SanitizedQuery,
};
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use sqlx::types::Json;

use crate::config::PgGatewayConfig;
use crate::records::{
    FieldOptionRecord, FieldPayload, FormCountsRecord, FormFieldRecord, FormHeaderRecord,
    FormListRecord,
};

/// Embedded schema and procedures
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

/// Map a driver error onto the gateway taxonomy
pub(crate) fn gateway_error(err: sqlx::Error) -> GatewayError {
    match err {
        sqlx::Error::PoolTimedOut => GatewayError::Timeout,
        sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed => GatewayError::Connection(err.to_string()),
        sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) | sqlx::Error::Encode(_) => {
            GatewayError::Serialization(err.to_string())
        }
        other => GatewayError::Query(other.to_string()),
    }
}

/// PostgreSQL form gateway
#[derive(Clone)]
pub struct PgFormGateway {
    pool: PgPool,
}

impl PgFormGateway {
    /// Open a pool from explicit configuration
    #[tracing::instrument(skip(config), fields(max_connections = config.max_connections))]
    pub async fn connect(config: &PgGatewayConfig) -> Result<Self, GatewayError> {
        let mut options: PgConnectOptions =
            config.database_url.parse().map_err(gateway_error)?;
        if let Some(secs) = config.statement_timeout_secs {
            options = options.options([("statement_timeout", format!("{}s", secs))]);
        }

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
            .connect_with(options)
            .await
            .map_err(gateway_error)?;

        tracing::info!("connected to postgres");
        Ok(Self { pool })
    }

    /// Wrap an existing pool
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Apply pending migrations
    pub async fn migrate(&self) -> Result<(), GatewayError> {
        MIGRATOR
            .run(&self.pool)
            .await
            .map_err(|e| GatewayError::Query(e.to_string()))
    }
}

#[async_trait]
impl FormGateway for PgFormGateway {
    #[tracing::instrument(skip(self))]
    async fn get_field_options(&self) -> Result<Vec<FieldOption>, GatewayError> {
        let rows = sqlx::query_as::<_, FieldOptionRecord>(
            "SELECT option_id, option_text, option_value FROM sp_get_all_field_options()",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(gateway_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    #[tracing::instrument(skip(self, fields), fields(fields = fields.len()))]
    async fn insert_form(
        &self,
        title: &str,
        fields: &[FormFieldDefinition],
    ) -> Result<i32, GatewayError> {
        let payload: Vec<FieldPayload<'_>> = fields.iter().map(FieldPayload::from).collect();

        sqlx::query_scalar::<_, i32>("SELECT sp_save_form($1, $2)")
            .bind(title)
            .bind(Json(&payload))
            .fetch_one(&self.pool)
            .await
            .map_err(gateway_error)
    }

    #[tracing::instrument(skip(self))]
    async fn query_forms_page(&self, query: &SanitizedQuery) -> Result<FormsPage, GatewayError> {
        // Rows and counts must come from one snapshot.
        let mut tx = self.pool.begin().await.map_err(gateway_error)?;
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ READ ONLY")
            .execute(&mut *tx)
            .await
            .map_err(gateway_error)?;

        let rows = sqlx::query_as::<_, FormListRecord>(
            r#"
            SELECT form_id, form_title, created_date, modified_date, field_count
            FROM sp_get_all_forms($1, $2, $3, $4, $5)
            "#,
        )
        .bind(query.page_number)
        .bind(query.page_size)
        .bind(&query.search_text)
        .bind(&query.sort_column)
        .bind(query.sort_direction.as_str())
        .fetch_all(&mut *tx)
        .await
        .map_err(gateway_error)?;

        let counts = sqlx::query_as::<_, FormCountsRecord>(
            "SELECT total_records, filtered_records FROM sp_count_forms($1)",
        )
        .bind(&query.search_text)
        .fetch_one(&mut *tx)
        .await
        .map_err(gateway_error)?;

        tx.commit().await.map_err(gateway_error)?;

        Ok(FormsPage {
            rows: rows.into_iter().map(Into::into).collect(),
            total_count: counts.total_records,
            filtered_count: counts.filtered_records,
        })
    }

    #[tracing::instrument(skip(self))]
    async fn get_form_with_fields(&self, id: FormId) -> Result<FormRecord, GatewayError> {
        let header = sqlx::query_as::<_, FormHeaderRecord>(
            "SELECT form_id, form_title, created_date, modified_date FROM sp_get_form_by_id($1)",
        )
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await
        .map_err(gateway_error)?;

        let Some(header) = header else {
            return Ok(FormRecord::default());
        };

        let fields = sqlx::query_as::<_, FormFieldRecord>(
            r#"
            SELECT field_id, form_id, field_label, field_level, is_required, selected_option, display_order
            FROM sp_get_form_fields($1)
            "#,
        )
        .bind(id.get())
        .fetch_all(&self.pool)
        .await
        .map_err(gateway_error)?;

        Ok(FormRecord {
            header: Some(header.into()),
            fields: fields.into_iter().map(Into::into).collect(),
        })
    }

    #[tracing::instrument(skip(self))]
    async fn delete_form(&self, id: FormId) -> Result<(), GatewayError> {
        sqlx::query("SELECT sp_delete_form($1)")
            .bind(id.get())
            .execute(&self.pool)
            .await
            .map_err(gateway_error)?;
        Ok(())
    }
}
