//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::auth::AuthGate;
use crate::domain::ports::{CredentialStore, UserRepository};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UserRepository>,
    pub auth: AuthGate,
}

impl HttpState {
    /// Wire handler state from a user repository and a credential store.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use hobby_registry::domain::ports::{MemoryCredentialStore, MemoryUserRepository};
    /// use hobby_registry::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::new(
    ///     Arc::new(MemoryUserRepository::default()),
    ///     Arc::new(MemoryCredentialStore::default()),
    /// );
    /// let _users = state.users.clone();
    /// ```
    pub fn new(users: Arc<dyn UserRepository>, credentials: Arc<dyn CredentialStore>) -> Self {
        Self {
            users,
            auth: AuthGate::new(credentials),
        }
    }
}
