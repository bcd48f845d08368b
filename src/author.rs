//! The author account entity.
//!
//! An [`Author`] is the top-level account record: it holds the keys other
//! entities on the platform hang off of. Fields are private and only change
//! through validated setters, so an `Author` in hand always satisfies the
//! field constraints.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use uuid::Uuid;

use crate::validation::{
    validate_activation_token, validate_author_id, validate_email, validate_password_hash,
    validate_username, ValidationError,
};

/// Primary key for an author.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct AuthorId(Uuid);

impl AuthorId {
    /// Generate a fresh random id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for AuthorId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl FromStr for AuthorId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate_author_id(s).map(Self)
    }
}

impl TryFrom<&str> for AuthorId {
    type Error = ValidationError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for AuthorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Author account record.
///
/// Serialization is for API responses: field names are camelCase and the
/// password hash is never written out. There is no `Deserialize`;
/// reconstruction from stored data goes through [`Author::new`] so every
/// field passes validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    id: AuthorId,
    activation_token: Option<String>,
    username: String,
    email: String,
    #[serde(skip_serializing)]
    password_hash: String,
}

impl Author {
    /// Create an author, validating every field.
    ///
    /// The id is fixed for the lifetime of the record. It can be given as an
    /// [`AuthorId`] or a plain [`Uuid`]; parse the canonical string form with
    /// [`AuthorId::from_str`] first when that is what you hold. The
    /// activation token starts absent and is set separately.
    ///
    /// Returns the first failing field's error unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use byline::{Author, AuthorId};
    ///
    /// let id: AuthorId = "6f2a9fd4-30f1-4f9e-8f1a-3d3545f0b9c2".parse()?;
    /// let hash = format!("$argon2i$v=19$m=65536,t=4,p=1$c2FsdHNhbHRzYWx0c2FsdA${}", "A".repeat(44));
    /// let author = Author::new(id, "bob", "bob@example.com", &hash)?;
    /// assert_eq!(author.username(), "bob");
    /// # Ok::<(), byline::ValidationError>(())
    /// ```
    pub fn new(
        id: impl Into<AuthorId>,
        username: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            id: id.into(),
            activation_token: None,
            username: validate_username(username)?,
            email: validate_email(email)?,
            password_hash: validate_password_hash(password_hash)?,
        })
    }

    /// The author's id.
    pub fn id(&self) -> AuthorId {
        self.id
    }

    /// The pending activation token, if the account is not yet verified.
    pub fn activation_token(&self) -> Option<&str> {
        self.activation_token.as_deref()
    }

    /// The author's username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// The author's email address.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// The stored Argon2i password hash.
    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    /// Whether the account has been verified (no activation token pending).
    pub fn is_activated(&self) -> bool {
        self.activation_token.is_none()
    }

    /// Set or clear the activation token.
    ///
    /// `None` clears the token, marking the account activated. A token is
    /// stored trimmed and lowercased.
    pub fn set_activation_token(&mut self, token: Option<&str>) -> Result<(), ValidationError> {
        self.activation_token = match token {
            Some(token) => Some(validate_activation_token(token)?),
            None => None,
        };
        Ok(())
    }

    /// Set the username. Stored trimmed and sanitized.
    pub fn set_username(&mut self, username: &str) -> Result<(), ValidationError> {
        self.username = validate_username(username)?;
        Ok(())
    }

    /// Set the email address. Stored trimmed.
    pub fn set_email(&mut self, email: &str) -> Result<(), ValidationError> {
        self.email = validate_email(email)?;
        Ok(())
    }

    /// Set the password hash. Only a 97-character Argon2i PHC string is
    /// accepted; plaintext never reaches storage.
    pub fn set_password_hash(&mut self, password_hash: &str) -> Result<(), ValidationError> {
        self.password_hash = validate_password_hash(password_hash)?;
        Ok(())
    }
}
