use async_trait::async_trait;
use frontier_db::repo::FlowRepo;
use frontier_db::{connect_postgres_with, parse_postgres_url, postgres_options, PgConnectOptions};
use tracing::debug;
use uuid::Uuid;

use crate::cli_args::DbArgs;

/// Where the one-time code for a started flow comes from.
#[async_trait]
pub(crate) trait OtpSource: Send + Sync {
    /// Returns the code stored for `flow_id`, or `None` when the flow has no
    /// usable code.
    async fn fetch_code(&self, flow_id: &str) -> anyhow::Result<Option<String>>;
}

/// Reads the code straight from the service's `flows` table.
pub(crate) struct PostgresOtpSource {
    options: PgConnectOptions,
}

impl PostgresOtpSource {
    pub(crate) fn new(options: PgConnectOptions) -> Self {
        Self { options }
    }

    pub(crate) fn from_args(args: &DbArgs) -> anyhow::Result<Self> {
        let options = match args.database_url.as_deref() {
            Some(url) => parse_postgres_url(url)?,
            None => postgres_options(
                &args.db_host,
                args.db_port,
                &args.db_name,
                &args.db_user,
                &args.db_password,
            ),
        };
        Ok(Self::new(options))
    }
}

#[async_trait]
impl OtpSource for PostgresOtpSource {
    async fn fetch_code(&self, flow_id: &str) -> anyhow::Result<Option<String>> {
        let id = Uuid::parse_str(flow_id.trim())
            .map_err(|err| anyhow::anyhow!("flow ID is not a UUID: {flow_id}: {err}"))?;
        let pool = connect_postgres_with(self.options.clone(), 1).await?;
        let record = FlowRepo::new(&pool).get_by_id(id).await;
        pool.close().await;
        let Some(record) = record? else {
            println!("Flow record not found for ID: {flow_id}");
            return Ok(None);
        };

        println!("Found flow record:");
        println!("   Flow ID: {}", record.id);
        println!("   Method: {}", record.method.as_deref().unwrap_or("N/A"));
        println!("   Email: {}", record.email.as_deref().unwrap_or("N/A"));
        println!("   Nonce: {}", record.nonce.as_deref().unwrap_or("N/A"));
        println!("   Created: {}", record.created_at.to_rfc3339());
        match record.expires_at {
            Some(expires_at) => println!("   Expires: {}", expires_at.to_rfc3339()),
            None => println!("   Expires: N/A"),
        }

        let code = record.code().map(str::to_string);
        if code.is_none() {
            println!("No nonce (OTP) found in this flow record");
        }
        debug!(flow_id = %record.id, found = code.is_some(), "flow nonce lookup");
        Ok(code)
    }
}

/// A code supplied by the operator, bypassing storage entirely.
pub(crate) struct StaticOtpSource {
    code: String,
}

impl StaticOtpSource {
    pub(crate) fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }
}

#[async_trait]
impl OtpSource for StaticOtpSource {
    async fn fetch_code(&self, flow_id: &str) -> anyhow::Result<Option<String>> {
        debug!(flow_id = %flow_id, "using operator-supplied OTP");
        let code = self.code.trim();
        Ok((!code.is_empty()).then(|| code.to_string()))
    }
}
