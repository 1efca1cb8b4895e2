use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::user::errors::EmailError;
use crate::user::errors::FullNameError;
use crate::user::errors::RoleError;

/// User aggregate entity.
///
/// Represents a registered user. The id, role default and timestamps are
/// assigned by the store on insert; `last_modified_at` is refreshed by the
/// store on any mutation.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub email: EmailAddress,
    pub password_hash: String,
    pub full_name: FullName,
    pub phone: Option<String>,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub last_modified_at: DateTime<Utc>,
}

/// User unique identifier, assigned by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address type
///
/// Validates email syntax using an RFC 5322 compliant parser. Deliverability
/// is not checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        let parsed = email_address::EmailAddress::from_str(&email)
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))?;

        // Dotless domains parse under RFC 5322 but are not deliverable
        // addresses for this service
        if !parsed.domain().contains('.') {
            return Err(EmailError::InvalidFormat(
                "domain must contain at least one label separator".to_string(),
            ));
        }

        Ok(EmailAddress(email))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Full name value type, split into its two parts.
///
/// The trimmed input must contain exactly two whitespace-separated names.
/// Single-word names and names with a middle name are rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullName {
    first: String,
    last: String,
}

impl FullName {
    /// Create a validated full name from raw input.
    ///
    /// # Errors
    /// * `ExpectedTwoNames` - Input did not split into exactly two names
    pub fn new(full_name: &str) -> Result<Self, FullNameError> {
        let parts: Vec<&str> = full_name.split_whitespace().collect();

        match parts.as_slice() {
            [first, last] => Ok(Self {
                first: (*first).to_string(),
                last: (*last).to_string(),
            }),
            _ => Err(FullNameError::ExpectedTwoNames {
                actual: parts.len(),
            }),
        }
    }

    pub fn first(&self) -> &str {
        &self.first
    }

    pub fn last(&self) -> &str {
        &self.last
    }
}

impl fmt::Display for FullName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first, self.last)
    }
}

/// User role, defaulted to `User` by the store on insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    SuperAdmin,
    Admin,
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "super_admin",
            Role::Admin => "admin",
            Role::User => "user",
        }
    }
}

impl FromStr for Role {
    type Err = RoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "super_admin" => Ok(Role::SuperAdmin),
            "admin" => Ok(Role::Admin),
            "user" => Ok(Role::User),
            other => Err(RoleError::Unknown(other.to_string())),
        }
    }
}

/// User record as handed to the store; id, role and timestamps are assigned
/// there.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: EmailAddress,
    pub password_hash: String,
    pub full_name: FullName,
    pub phone: Option<String>,
}

/// Command to register a new user with validated credentials.
#[derive(Debug)]
pub struct RegisterUserCommand {
    pub email: EmailAddress,
    pub full_name: FullName,
    pub password: String,
    pub phone: Option<String>,
}

impl RegisterUserCommand {
    pub fn new(
        email: EmailAddress,
        full_name: FullName,
        password: String,
        phone: Option<String>,
    ) -> Self {
        Self {
            email,
            full_name,
            password,
            phone,
        }
    }
}
