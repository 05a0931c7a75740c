//! Domain ports defining the edges of the hexagon.
//!
//! Ports describe how the domain expects to interact with driven adapters.
//! Each trait exposes strongly typed errors so adapters map their failures
//! into predictable variants instead of returning `anyhow::Result`. The
//! in-memory implementations back tests and database-less dev runs.

use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;
use std::sync::atomic::{AtomicI32, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use thiserror::Error;

use super::auth::Credential;
use super::user::{NewUser, User, UserId, UserPatch};

/// Persistence errors raised by [`UserRepository`] adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserPersistenceError {
    /// Repository connection could not be established.
    #[error("user repository connection failed: {message}")]
    Connection { message: String },
    /// Query or mutation failed during execution.
    #[error("user repository query failed: {message}")]
    Query { message: String },
}

impl UserPersistenceError {
    /// Helper for connection oriented failures.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Helper for query failures.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Lookup errors raised by [`CredentialStore`] adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CredentialLookupError {
    /// Store connection could not be established.
    #[error("credential store connection failed: {message}")]
    Connection { message: String },
    /// Lookup failed during execution.
    #[error("credential store query failed: {message}")]
    Query { message: String },
}

impl CredentialLookupError {
    /// Helper for connection oriented failures.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Helper for query failures.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Persistence port for user records.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch every user in storage-defined order.
    async fn list(&self) -> Result<Vec<User>, UserPersistenceError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError>;

    /// Persist a new user; storage assigns the identifier.
    async fn insert(&self, user: &NewUser) -> Result<User, UserPersistenceError>;

    /// Apply a non-empty patch to an existing user.
    ///
    /// Returns `false` when no record exists at `id`.
    async fn update(&self, id: UserId, patch: &UserPatch) -> Result<bool, UserPersistenceError>;

    /// Delete a user. Returns `false` when no record exists at `id`.
    async fn delete(&self, id: UserId) -> Result<bool, UserPersistenceError>;
}

/// Read-only port for the credential table consulted by the auth gate.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Fetch the credential stored under `uuid`, if any.
    async fn find_by_uuid(&self, uuid: &str) -> Result<Option<Credential>, CredentialLookupError>;
}

/// In-memory [`UserRepository`] used by tests and database-less dev runs.
#[derive(Debug)]
pub struct MemoryUserRepository {
    rows: Mutex<BTreeMap<i32, User>>,
    next_id: AtomicI32,
}

impl Default for MemoryUserRepository {
    fn default() -> Self {
        Self {
            rows: Mutex::new(BTreeMap::new()),
            next_id: AtomicI32::new(1),
        }
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn list(&self) -> Result<Vec<User>, UserPersistenceError> {
        let rows = self.rows.lock().expect("user store poisoned");
        Ok(rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        let rows = self.rows.lock().expect("user store poisoned");
        Ok(rows.get(&id.as_i32()).cloned())
    }

    async fn insert(&self, user: &NewUser) -> Result<User, UserPersistenceError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let now = Utc::now();
        let record = User {
            id: UserId::new(id),
            name: user.name.clone(),
            surname: user.surname.clone(),
            hobby: user.hobby.clone(),
            created_at: now,
            updated_at: now,
        };
        let mut rows = self.rows.lock().expect("user store poisoned");
        rows.insert(id, record.clone());
        Ok(record)
    }

    async fn update(&self, id: UserId, patch: &UserPatch) -> Result<bool, UserPersistenceError> {
        let mut rows = self.rows.lock().expect("user store poisoned");
        match rows.get_mut(&id.as_i32()) {
            Some(user) => {
                patch.apply_to(user);
                user.updated_at = Utc::now();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: UserId) -> Result<bool, UserPersistenceError> {
        let mut rows = self.rows.lock().expect("user store poisoned");
        Ok(rows.remove(&id.as_i32()).is_some())
    }
}

/// In-memory [`CredentialStore`] seeded via [`MemoryCredentialStore::add`].
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    rows: Mutex<HashMap<String, Credential>>,
}

impl MemoryCredentialStore {
    /// Provision a credential pair, mirroring out-of-band setup.
    pub fn add(&self, uuid: &str, secret_token: &str) {
        let mut rows = self.rows.lock().expect("credential store poisoned");
        rows.insert(uuid.to_owned(), Credential::new(uuid, secret_token));
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn find_by_uuid(&self, uuid: &str) -> Result<Option<Credential>, CredentialLookupError> {
        let rows = self.rows.lock().expect("credential store poisoned");
        Ok(rows.get(uuid).cloned())
    }
}
