//! Domain primitives and the authorization gate.
//!
//! Purpose: define strongly typed entities used by the HTTP and persistence
//! layers, keep validation next to the types it guards, and expose ports so
//! adapters stay swappable.
//!
//! Public surface:
//! - `Error` / `ErrorKind` — caller-facing error payload and taxonomy.
//! - `User`, `UserId`, `NewUser`, `UserDraft`, `UserPatch` — user aggregate.
//! - `auth::{AuthGate, Credential, CredentialClaim}` — the auth gate.
//! - `ports` — repository traits plus in-memory implementations.

pub mod auth;
pub mod error;
pub mod ports;
pub mod user;

pub use self::error::{Error, ErrorKind};
pub use self::user::{NewUser, User, UserDraft, UserId, UserPatch};

/// Convenient result alias for handlers.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use hobby_registry::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::not_found())
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
