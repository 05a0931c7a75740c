//! Credential types and the authorization gate for mutating requests.
//!
//! Keep inbound payload parsing outside the gate: handlers hand over a raw
//! [`CredentialClaim`] and the gate decides completeness first, then validity
//! against the credential store. The gate is a pure read; it never mutates
//! the store and grants nothing beyond a yes/no decision.

use std::sync::Arc;

use tracing::{debug, error};
use zeroize::Zeroizing;

use super::Error;
use super::ports::CredentialStore;

/// Stored credential: a uuid paired with its shared secret.
///
/// Provisioned out-of-band; no endpoint creates or rotates these. The secret
/// is held in zeroising memory so it is wiped on drop.
#[derive(Debug, Clone)]
pub struct Credential {
    uuid: String,
    secret_token: Zeroizing<String>,
}

impl Credential {
    /// Construct a stored credential.
    pub fn new(uuid: impl Into<String>, secret_token: impl Into<String>) -> Self {
        Self {
            uuid: uuid.into(),
            secret_token: Zeroizing::new(secret_token.into()),
        }
    }

    /// Credential identifier.
    pub fn uuid(&self) -> &str {
        self.uuid.as_str()
    }

    /// Shared secret; compared exactly, case-sensitive, never hashed.
    pub fn secret_token(&self) -> &str {
        self.secret_token.as_str()
    }
}

/// Candidate credential pair as supplied by a caller.
///
/// Either field may be absent; a blank field counts as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CredentialClaim {
    pub uuid: Option<String>,
    pub secret_token: Option<String>,
}

/// A claim whose fields are both present and non-blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialPair {
    pub uuid: String,
    pub secret_token: String,
}

impl CredentialClaim {
    /// Completeness check: both fields present and non-blank.
    ///
    /// # Errors
    /// Returns the names of the missing fields.
    pub fn complete(&self) -> Result<CredentialPair, Vec<&'static str>> {
        let present = |v: &Option<String>| {
            v.as_deref()
                .filter(|s| !s.trim().is_empty())
                .map(str::to_owned)
        };

        let uuid = present(&self.uuid);
        let secret_token = present(&self.secret_token);

        let mut missing = Vec::new();
        if uuid.is_none() {
            missing.push("uuid");
        }
        if secret_token.is_none() {
            missing.push("secret_token");
        }
        if !missing.is_empty() {
            return Err(missing);
        }

        Ok(CredentialPair {
            uuid: uuid.unwrap_or_default(),
            secret_token: secret_token.unwrap_or_default(),
        })
    }
}

/// Decides whether a credential claim authorizes a mutating request.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use hobby_registry::domain::auth::{AuthGate, CredentialClaim};
/// use hobby_registry::domain::ports::MemoryCredentialStore;
///
/// # actix_rt::System::new().block_on(async {
/// let store = MemoryCredentialStore::default();
/// store.add("11111111-1111-1111-1111-111111111111", "s3cret");
/// let gate = AuthGate::new(Arc::new(store));
///
/// let claim = CredentialClaim {
///     uuid: Some("11111111-1111-1111-1111-111111111111".into()),
///     secret_token: Some("s3cret".into()),
/// };
/// assert!(gate.authorize(&claim).await.is_ok());
/// # });
/// ```
#[derive(Clone)]
pub struct AuthGate {
    store: Arc<dyn CredentialStore>,
}

impl AuthGate {
    /// Build a gate over the given credential store.
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        Self { store }
    }

    /// Run the two-step check: completeness, then an exact match against
    /// the stored credential for the claimed uuid.
    ///
    /// # Errors
    /// - [`Error::auth_incomplete`] naming the missing fields.
    /// - [`Error::auth_invalid`] when no stored credential matches.
    /// - [`Error::internal`] when the store itself fails.
    pub async fn authorize(&self, claim: &CredentialClaim) -> Result<(), Error> {
        let pair = claim
            .complete()
            .map_err(|missing| Error::auth_incomplete(&missing))?;

        let stored = self.store.find_by_uuid(&pair.uuid).await.map_err(|err| {
            error!(error = %err, "credential lookup failed");
            Error::internal(err.to_string())
        })?;

        match stored {
            Some(credential) if credential.secret_token() == pair.secret_token => Ok(()),
            _ => {
                debug!(uuid = %pair.uuid, "credential pair rejected");
                Err(Error::auth_invalid())
            }
        }
    }
}
