//! User aggregate and its validation types.
//!
//! Inbound payload fields arrive as optional strings; `UserDraft` and
//! `UserPatch` normalise them before a handler talks to a port, so the
//! persistence layer only ever sees presence-validated values.

use std::fmt;

use chrono::{DateTime, Utc};

/// Stable user identifier assigned by the storage layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UserId(i32);

impl UserId {
    /// Wrap a raw identifier, typically parsed from a request path.
    pub fn new(id: i32) -> Self {
        Self(id)
    }

    /// Access the raw identifier.
    pub fn as_i32(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for UserId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

/// Persisted user record.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub surname: String,
    pub hobby: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Presence-validated payload for creating a user.
///
/// Construct via [`UserDraft::validate`]; the fields are guaranteed non-blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub surname: String,
    pub hobby: String,
}

/// Keep a value only when it carries something besides whitespace.
fn presence(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Candidate user fields as supplied by a create request.
///
/// Blank fields count as absent, matching the credential edge-case policy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserDraft {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub hobby: Option<String>,
}

impl UserDraft {
    /// Check that all three fields are present and non-blank.
    ///
    /// # Errors
    /// Returns the names of the failing fields, in payload order.
    pub fn validate(self) -> Result<NewUser, Vec<&'static str>> {
        let name = presence(self.name);
        let surname = presence(self.surname);
        let hobby = presence(self.hobby);

        let mut missing = Vec::new();
        if name.is_none() {
            missing.push("name");
        }
        if surname.is_none() {
            missing.push("surname");
        }
        if hobby.is_none() {
            missing.push("hobby");
        }
        if !missing.is_empty() {
            return Err(missing);
        }

        // The is_none checks above guarantee all three are Some.
        Ok(NewUser {
            name: name.unwrap_or_default(),
            surname: surname.unwrap_or_default(),
            hobby: hobby.unwrap_or_default(),
        })
    }
}

/// Partial-patch update: only supplied fields overwrite stored values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub hobby: Option<String>,
}

impl UserPatch {
    /// Drop blank fields so they cannot overwrite stored values with
    /// empty strings.
    pub fn normalise(self) -> Self {
        Self {
            name: presence(self.name),
            surname: presence(self.surname),
            hobby: presence(self.hobby),
        }
    }

    /// True when no recognised field survived normalisation.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.surname.is_none() && self.hobby.is_none()
    }

    /// Overwrite the supplied fields on an existing record.
    pub fn apply_to(&self, user: &mut User) {
        if let Some(name) = &self.name {
            user.name = name.clone();
        }
        if let Some(surname) = &self.surname {
            user.surname = surname.clone();
        }
        if let Some(hobby) = &self.hobby {
            user.hobby = hobby.clone();
        }
    }
}
