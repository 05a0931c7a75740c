//! PostgreSQL persistence adapters built on Diesel.

mod diesel_credential_store;
mod diesel_user_repository;
pub(crate) mod models;
mod pool;
pub mod schema;

pub use diesel_credential_store::DieselCredentialStore;
pub use diesel_user_repository::DieselUserRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
