macro_rules! query_as {
    ($ty:ty, $sql:expr $(, $arg:expr)* $(,)?) => {{
        #[allow(unused_mut)]
        let mut q = sqlx_core::query_as::query_as::<sqlx_postgres::Postgres, $ty>($sql);
        $(q = q.bind($arg);)*
        q
    }};
}

pub(crate) mod prelude {
    pub(crate) use crate::PgPool;
    pub(crate) use chrono::{DateTime, Utc};
    pub(crate) use sqlx_core::row::Row;
    pub(crate) use uuid::Uuid;
}

mod flows;

pub use flows::{FlowRecord, FlowRepo};
