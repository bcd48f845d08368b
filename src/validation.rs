//! Field validation for author accounts.
//!
//! This module provides pure validation functions for every persisted author
//! field. Each validator returns the normalized value that should be stored,
//! so callers never assign raw input. The same helpers are meant to be shared
//! by any other validated entity type the platform grows.

use argon2::password_hash::PasswordHash;
use argon2::Algorithm;
use thiserror::Error;
use uuid::Uuid;

/// Exact length of an activation token in hex characters.
pub const ACTIVATION_TOKEN_LENGTH: usize = 32;

/// Maximum username length.
pub const MAX_USERNAME_LENGTH: usize = 32;

/// Maximum email length.
pub const MAX_EMAIL_LENGTH: usize = 128;

/// Exact length of a stored password hash.
pub const PASSWORD_HASH_LENGTH: usize = 97;

/// Validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Author id does not parse as a UUID.
    #[error("author id is not a valid UUID")]
    IdInvalid,

    /// Activation token is empty or contains non-hex characters.
    #[error("activation token must be hexadecimal")]
    TokenNotHex,

    /// Activation token has the wrong length.
    #[error("activation token must be exactly {ACTIVATION_TOKEN_LENGTH} characters")]
    TokenLength,

    /// Username is empty after sanitization.
    #[error("username is empty or insecure")]
    UsernameEmpty,

    /// Username is too long.
    #[error("username must be at most {MAX_USERNAME_LENGTH} characters")]
    UsernameTooLong,

    /// Email is empty.
    #[error("email is empty or insecure")]
    EmailEmpty,

    /// Email is too long.
    #[error("email must be at most {MAX_EMAIL_LENGTH} characters")]
    EmailTooLong,

    /// Email format is invalid.
    #[error("invalid email format")]
    EmailInvalidFormat,

    /// Password hash is empty.
    #[error("password hash is empty or insecure")]
    HashEmpty,

    /// Password hash is not a PHC string tagged as Argon2i.
    #[error("password hash is not a valid Argon2i hash")]
    HashNotArgon2i,

    /// Password hash has the wrong length.
    #[error("password hash must be exactly {PASSWORD_HASH_LENGTH} characters")]
    HashLength,
}

/// Coarse classification of a validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationKind {
    /// Input is malformed (bad UUID, non-hex token, bad email syntax, wrong
    /// hash algorithm tag).
    InvalidFormat,
    /// Input violates a length bound.
    OutOfRange,
    /// Input is blank, or sanitization removed all content.
    Empty,
}

impl ValidationError {
    /// Classify this error as format, range, or emptiness failure.
    pub fn kind(&self) -> ValidationKind {
        match self {
            ValidationError::IdInvalid
            | ValidationError::TokenNotHex
            | ValidationError::EmailInvalidFormat
            | ValidationError::HashNotArgon2i => ValidationKind::InvalidFormat,
            ValidationError::TokenLength
            | ValidationError::UsernameTooLong
            | ValidationError::EmailTooLong
            | ValidationError::HashLength => ValidationKind::OutOfRange,
            ValidationError::UsernameEmpty
            | ValidationError::EmailEmpty
            | ValidationError::HashEmpty => ValidationKind::Empty,
        }
    }
}

/// Strip unsafe content from free-form text input.
///
/// Removes control characters and anything inside `<...>` tag sequences
/// (an unterminated `<` drops the rest of the string), then trims
/// surrounding whitespace.
pub fn sanitize_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_tag = false;
    for c in input.chars() {
        if in_tag {
            if c == '>' {
                in_tag = false;
            }
        } else if c == '<' {
            in_tag = true;
        } else if !c.is_control() {
            out.push(c);
        }
    }
    out.trim().to_string()
}

/// Validate an author id given in canonical string form.
///
/// # Examples
///
/// ```
/// use byline::validation::validate_author_id;
///
/// assert!(validate_author_id("6f2a9fd4-30f1-4f9e-8f1a-3d3545f0b9c2").is_ok());
/// assert!(validate_author_id("not-a-uuid").is_err());
/// ```
pub fn validate_author_id(id: &str) -> Result<Uuid, ValidationError> {
    Uuid::try_parse(id.trim()).map_err(|_| ValidationError::IdInvalid)
}

/// Validate an activation token.
///
/// Requirements:
/// - All hexadecimal characters
/// - Exactly 32 characters
///
/// Returns the token trimmed and lowercased.
pub fn validate_activation_token(token: &str) -> Result<String, ValidationError> {
    let token = token.trim().to_lowercase();

    if token.is_empty() || !token.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ValidationError::TokenNotHex);
    }
    if token.len() != ACTIVATION_TOKEN_LENGTH {
        return Err(ValidationError::TokenLength);
    }

    Ok(token)
}

/// Validate a username.
///
/// Requirements:
/// - Non-empty after trimming and sanitization
/// - At most 32 characters
///
/// Returns the sanitized username.
///
/// # Examples
///
/// ```
/// use byline::validation::validate_username;
///
/// assert_eq!(validate_username("  bob  ").unwrap(), "bob");
/// assert!(validate_username("").is_err());
/// ```
pub fn validate_username(username: &str) -> Result<String, ValidationError> {
    let username = sanitize_text(username);

    if username.is_empty() {
        return Err(ValidationError::UsernameEmpty);
    }
    if username.chars().count() > MAX_USERNAME_LENGTH {
        return Err(ValidationError::UsernameTooLong);
    }

    Ok(username)
}

/// Validate an email address.
///
/// Requirements:
/// - Non-empty after trimming
/// - At most 128 characters
/// - Single `@` with a non-empty local part and a dotted domain
///
/// The format check is intentionally simple - we don't try to fully
/// validate email syntax.
///
/// Returns the trimmed email.
pub fn validate_email(email: &str) -> Result<String, ValidationError> {
    let email = email.trim().to_string();

    if email.is_empty() {
        return Err(ValidationError::EmailEmpty);
    }
    if email.chars().count() > MAX_EMAIL_LENGTH {
        return Err(ValidationError::EmailTooLong);
    }

    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 {
        return Err(ValidationError::EmailInvalidFormat);
    }

    let (local, domain) = (parts[0], parts[1]);
    if local.is_empty() {
        return Err(ValidationError::EmailInvalidFormat);
    }
    if !domain.contains('.') {
        return Err(ValidationError::EmailInvalidFormat);
    }
    if domain.split('.').any(|p| p.is_empty()) {
        return Err(ValidationError::EmailInvalidFormat);
    }
    if email.chars().any(|c| c.is_whitespace()) {
        return Err(ValidationError::EmailInvalidFormat);
    }

    Ok(email)
}

/// Validate a stored password hash.
///
/// Requirements:
/// - Non-empty after trimming
/// - Parses as a PHC string whose algorithm tag is `argon2i`
/// - Exactly 97 characters
///
/// A plaintext password can never satisfy the PHC parse, so raw passwords
/// are rejected here before they reach storage.
///
/// Returns the trimmed hash.
pub fn validate_password_hash(hash: &str) -> Result<String, ValidationError> {
    let hash = hash.trim().to_string();

    if hash.is_empty() {
        return Err(ValidationError::HashEmpty);
    }

    let parsed = PasswordHash::new(&hash).map_err(|_| ValidationError::HashNotArgon2i)?;
    if parsed.algorithm.as_str() != Algorithm::Argon2i.as_str() {
        return Err(ValidationError::HashNotArgon2i);
    }

    if hash.len() != PASSWORD_HASH_LENGTH {
        return Err(ValidationError::HashLength);
    }

    Ok(hash)
}
