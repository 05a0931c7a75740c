//! PostgreSQL-backed `CredentialStore` implementation using Diesel ORM.
//!
//! Read-only adapter over the credentials table; provisioning happens
//! out-of-band, so this adapter only ever looks rows up for the auth gate.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::auth::Credential;
use crate::domain::ports::{CredentialLookupError, CredentialStore};

use super::models::CredentialRow;
use super::pool::{DbPool, PoolError};
use super::schema::credentials;

/// Diesel-backed implementation of the `CredentialStore` port.
#[derive(Clone)]
pub struct DieselCredentialStore {
    pool: DbPool,
}

impl DieselCredentialStore {
    /// Create a new store with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> CredentialLookupError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            CredentialLookupError::connection(message)
        }
    }
}

fn map_diesel_error(error: diesel::result::Error) -> CredentialLookupError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    debug!(error = %error, "credential lookup failed in diesel");

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            CredentialLookupError::connection("database connection error")
        }
        _ => CredentialLookupError::query("database error"),
    }
}

#[async_trait]
impl CredentialStore for DieselCredentialStore {
    async fn find_by_uuid(&self, uuid: &str) -> Result<Option<Credential>, CredentialLookupError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<CredentialRow> = credentials::table
            .find(uuid)
            .select(CredentialRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(|row| Credential::new(row.uuid, row.secret_token)))
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn pool_error_maps_to_connection_error() {
        let err = map_pool_error(PoolError::checkout("timed out"));

        assert!(matches!(err, CredentialLookupError::Connection { .. }));
        assert!(err.to_string().contains("timed out"));
    }

    #[rstest]
    fn diesel_error_maps_to_query_error() {
        let err = map_diesel_error(diesel::result::Error::NotFound);

        assert!(matches!(err, CredentialLookupError::Query { .. }));
    }
}
