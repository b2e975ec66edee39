use super::prelude::*;
use sqlx_core::from_row::FromRow;
use sqlx_postgres::PgRow;
use tracing::instrument;

/// One in-progress authentication attempt as stored by the auth service.
///
/// Only the columns the sign-in helper reads are mapped; `nonce` holds the
/// one-time code mailed to the user for OTP strategies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowRecord {
    pub id: Uuid,
    pub method: Option<String>,
    pub email: Option<String>,
    pub nonce: Option<String>,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl FlowRecord {
    /// The stored code, if the row carries a non-empty one.
    pub fn code(&self) -> Option<&str> {
        self.nonce
            .as_deref()
            .filter(|nonce| !nonce.trim().is_empty())
    }
}

impl FromRow<'_, PgRow> for FlowRecord {
    fn from_row(row: &PgRow) -> Result<Self, sqlx_core::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            method: row.try_get("method")?,
            email: row.try_get("email")?,
            nonce: row.try_get("nonce")?,
            created_at: row.try_get("created_at")?,
            expires_at: row.try_get("expires_at")?,
        })
    }
}

pub struct FlowRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> FlowRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    #[instrument(
        level = "debug",
        skip(self),
        fields(flow_id = %id, db.system = "postgresql", db.operation = "SELECT", db.query = "flows.get_by_id")
    )]
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<FlowRecord>, sqlx_core::Error> {
        query_as!(
            FlowRecord,
            r#"
            SELECT id, method, email, nonce, created_at, expires_at
            FROM flows
            WHERE id = $1
            "#,
            id
        )
        .fetch_optional(self.pool)
        .await
    }
}
