//! Domain-level error payload.
//!
//! These errors are transport agnostic. The HTTP adapter maps them to status
//! codes and serialises them as the JSON body clients receive, so the serde
//! shape here is the wire contract: an `error` message plus an optional
//! `messages` map breaking the failure down per field.

use std::collections::BTreeMap;

use serde::Serialize;
use utoipa::ToSchema;

/// Reason a field is rejected; shared by credential and user validation.
const BLANK_FIELD_REASON: &str = "must not be empty";

/// Stable failure category, used by adapters to pick a status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Credential pair is missing one or both fields.
    AuthIncomplete,
    /// Credential pair is complete but matches no stored credential.
    AuthInvalid,
    /// User payload fails field-presence validation.
    UserInvalid,
    /// No record exists at the given identifier.
    NotFound,
    /// Update called without any recognised field.
    NoDataGiven,
    /// Unexpected failure inside the domain or an adapter.
    Internal,
}

/// Error payload returned to callers.
///
/// ## Invariants
/// - `message` is never empty; constructors only accept fixed phrases or a
///   non-empty description.
///
/// # Examples
/// ```
/// use hobby_registry::domain::{Error, ErrorKind};
///
/// let err = Error::not_found();
/// assert_eq!(err.kind(), ErrorKind::NotFound);
/// assert_eq!(err.message(), "User not found.");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Error {
    #[serde(skip)]
    kind: ErrorKind,
    #[serde(rename = "error")]
    #[schema(example = "User not found.")]
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    messages: Option<BTreeMap<String, Vec<String>>>,
}

fn field_messages(fields: &[&str]) -> BTreeMap<String, Vec<String>> {
    fields
        .iter()
        .map(|field| ((*field).to_owned(), vec![BLANK_FIELD_REASON.to_owned()]))
        .collect()
}

impl Error {
    /// Credential pair was missing the named fields.
    pub fn auth_incomplete(missing: &[&str]) -> Self {
        Self {
            kind: ErrorKind::AuthIncomplete,
            message: "Auth data incomplete.".to_owned(),
            messages: Some(field_messages(missing)),
        }
    }

    /// Credential pair was complete but unrecognised.
    pub fn auth_invalid() -> Self {
        Self {
            kind: ErrorKind::AuthInvalid,
            message: "Auth data invalid.".to_owned(),
            messages: None,
        }
    }

    /// User payload was missing the named fields.
    pub fn user_invalid(missing: &[&str]) -> Self {
        Self {
            kind: ErrorKind::UserInvalid,
            message: "User invalid.".to_owned(),
            messages: Some(field_messages(missing)),
        }
    }

    /// No user exists at the requested identifier.
    pub fn not_found() -> Self {
        Self {
            kind: ErrorKind::NotFound,
            message: "User not found.".to_owned(),
            messages: None,
        }
    }

    /// Update request carried no recognised field.
    pub fn no_data_given() -> Self {
        Self {
            kind: ErrorKind::NoDataGiven,
            message: "User not modified - no data given.".to_owned(),
            messages: None,
        }
    }

    /// Unexpected failure; the HTTP adapter redacts the message before it
    /// reaches a client.
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Internal,
            message: message.into(),
            messages: None,
        }
    }

    /// Failure category.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Human-readable message returned to adapters.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Per-field breakdown, when one exists.
    pub fn messages(&self) -> Option<&BTreeMap<String, Vec<String>>> {
        self.messages.as_ref()
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::{Value, json};

    #[rstest]
    fn auth_incomplete_names_missing_fields() {
        let err = Error::auth_incomplete(&["uuid", "secret_token"]);
        let value = serde_json::to_value(&err).expect("serialises");

        assert_eq!(
            value.get("error").and_then(Value::as_str),
            Some("Auth data incomplete.")
        );
        assert_eq!(
            value.get("messages"),
            Some(&json!({
                "uuid": ["must not be empty"],
                "secret_token": ["must not be empty"],
            }))
        );
    }

    #[rstest]
    fn errors_without_breakdown_omit_messages_key() {
        let value = serde_json::to_value(Error::auth_invalid()).expect("serialises");

        assert_eq!(
            value.get("error").and_then(Value::as_str),
            Some("Auth data invalid.")
        );
        assert!(value.get("messages").is_none());
    }

    #[rstest]
    #[case(Error::not_found(), "User not found.")]
    #[case(Error::no_data_given(), "User not modified - no data given.")]
    #[case(Error::user_invalid(&["surname"]), "User invalid.")]
    fn fixed_phrases_are_stable(#[case] err: Error, #[case] expected: &str) {
        assert_eq!(err.message(), expected);
        assert_eq!(err.to_string(), expected);
    }

    #[rstest]
    fn kind_is_not_serialised() {
        let value = serde_json::to_value(Error::internal("boom")).expect("serialises");
        assert!(value.get("kind").is_none());
    }
}
