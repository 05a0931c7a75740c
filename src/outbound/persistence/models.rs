//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain. They exist solely to satisfy Diesel's
//! type requirements for queries and mutations.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use super::schema::{credentials, users};

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: i32,
    pub name: String,
    pub surname: String,
    pub hobby: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insertable struct for creating new user records.
///
/// `id` and the timestamps are assigned by the database.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub name: &'a str,
    pub surname: &'a str,
    pub hobby: &'a str,
}

/// Changeset for partial updates; `None` fields are left untouched.
///
/// `updated_at` is always set, so the changeset is never empty even when the
/// caller guards against data-free patches.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = users)]
pub(crate) struct UserChangeset<'a> {
    pub name: Option<&'a str>,
    pub surname: Option<&'a str>,
    pub hobby: Option<&'a str>,
    pub updated_at: DateTime<Utc>,
}

/// Row struct for reading from the credentials table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = credentials)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CredentialRow {
    pub uuid: String,
    pub secret_token: String,
    #[expect(dead_code, reason = "schema field; provisioning audit only")]
    pub created_at: DateTime<Utc>,
    #[expect(dead_code, reason = "schema field; provisioning audit only")]
    pub updated_at: DateTime<Utc>,
}
