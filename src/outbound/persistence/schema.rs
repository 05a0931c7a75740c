//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the database migrations exactly. They are
//! used by Diesel for compile-time query validation and type-safe SQL
//! generation.

diesel::table! {
    /// User records managed by the REST surface.
    users (id) {
        /// Primary key: storage-assigned serial.
        id -> Int4,
        name -> Varchar,
        surname -> Varchar,
        hobby -> Varchar,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Credential pairs provisioned out-of-band; read-only to the service.
    credentials (uuid) {
        /// Primary key: the credential identifier.
        #[max_length = 36]
        uuid -> Varchar,
        secret_token -> Varchar,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}
