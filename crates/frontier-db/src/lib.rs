#![allow(clippy::pedantic)]
#![allow(clippy::nursery)]
#![deny(clippy::unwrap_used)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::needless_raw_string_hashes)]
#![allow(clippy::uninlined_format_args)]

#[cfg(feature = "postgres")]
use sqlx_core::pool::{Pool, PoolOptions};
#[cfg(feature = "postgres")]
use sqlx_postgres::Postgres;
#[cfg(feature = "postgres")]
use std::str::FromStr;

#[cfg(feature = "postgres")]
pub mod repo;

#[cfg(feature = "postgres")]
pub type PgPool = Pool<Postgres>;

#[cfg(feature = "postgres")]
pub use sqlx_postgres::PgConnectOptions;

/// Parses a `postgres://` URL into connect options.
#[cfg(feature = "postgres")]
pub fn parse_postgres_url(url: &str) -> Result<PgConnectOptions, sqlx_core::Error> {
    PgConnectOptions::from_str(url)
}

/// Builds connect options from discrete host/port/database/user/password parts.
#[cfg(feature = "postgres")]
pub fn postgres_options(
    host: &str,
    port: u16,
    database: &str,
    user: &str,
    password: &str,
) -> PgConnectOptions {
    PgConnectOptions::new()
        .host(host)
        .port(port)
        .database(database)
        .username(user)
        .password(password)
}

#[cfg(feature = "postgres")]
pub async fn connect_postgres(path: &str) -> Result<PgPool, sqlx_core::Error> {
    connect_postgres_with(parse_postgres_url(path)?, 10).await
}

#[cfg(feature = "postgres")]
pub async fn connect_postgres_with(
    options: PgConnectOptions,
    max_connections: u32,
) -> Result<PgPool, sqlx_core::Error> {
    PoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}
