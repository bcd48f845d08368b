//! Author account registration.
//!
//! Assembles a new [`Author`] from raw signup input: validates the fields,
//! hashes the password, and attaches a fresh activation token. Persisting the
//! result belongs to the caller's storage layer.

use thiserror::Error;
use tracing::info;

use crate::author::{Author, AuthorId};
use crate::password::{hash_password, PasswordError};
use crate::token::generate_activation_token;
use crate::validation::{validate_email, validate_username, ValidationError};

/// Registration-specific errors.
#[derive(Error, Debug)]
pub enum RegistrationError {
    /// Validation failed.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Password hashing failed.
    #[error("password error: {0}")]
    Password(#[from] PasswordError),
}

/// Registration request data.
#[derive(Debug, Clone)]
pub struct RegistrationRequest {
    /// Desired username (1-32 characters after sanitization).
    pub username: String,
    /// Email address.
    pub email: String,
    /// Plaintext password (8-128 characters); never stored.
    pub password: String,
}

impl RegistrationRequest {
    /// Create a new registration request.
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Register a new author account.
///
/// This function:
/// 1. Validates the username and email
/// 2. Hashes the password with Argon2i
/// 3. Assembles an [`Author`] with a fresh id and a pending activation token
///
/// The returned author is not yet activated; the caller emails the token and
/// clears it once the account is verified.
///
/// # Examples
///
/// ```
/// use byline::{register, RegistrationRequest};
///
/// let request = RegistrationRequest::new("bob", "bob@example.com", "password123");
/// let author = register(request).unwrap();
///
/// assert!(!author.is_activated());
/// assert_ne!(author.password_hash(), "password123");
/// ```
pub fn register(request: RegistrationRequest) -> Result<Author, RegistrationError> {
    // 1. Validate the textual fields
    let username = validate_username(&request.username)?;
    let email = validate_email(&request.email)?;

    // 2. Hash the password
    let password_hash = hash_password(&request.password)?;

    // 3. Assemble the account
    let mut author = Author::new(AuthorId::generate(), &username, &email, &password_hash)?;
    author.set_activation_token(Some(&generate_activation_token()))?;

    info!(
        author_id = %author.id(),
        username = %author.username(),
        "New author registered"
    );

    Ok(author)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::password::verify_password;
    use crate::validation::validate_activation_token;

    #[test]
    fn test_register_success() {
        let request = RegistrationRequest::new("bob", "bob@example.com", "password123");
        let author = register(request).unwrap();

        assert_eq!(author.username(), "bob");
        assert_eq!(author.email(), "bob@example.com");
        assert!(!author.is_activated());
    }

    #[test]
    fn test_register_normalizes_input() {
        let request = RegistrationRequest::new("  bob  ", "  bob@example.com ", "password123");
        let author = register(request).unwrap();

        assert_eq!(author.username(), "bob");
        assert_eq!(author.email(), "bob@example.com");
    }

    #[test]
    fn test_register_password_is_hashed() {
        let request = RegistrationRequest::new("bob", "bob@example.com", "password123");
        let author = register(request).unwrap();

        assert_ne!(author.password_hash(), "password123");
        assert!(author.password_hash().starts_with("$argon2i$"));
        assert!(verify_password("password123", author.password_hash()).is_ok());
    }

    #[test]
    fn test_register_token_is_well_formed() {
        let request = RegistrationRequest::new("bob", "bob@example.com", "password123");
        let author = register(request).unwrap();

        let token = author.activation_token().unwrap();
        assert!(validate_activation_token(token).is_ok());
    }

    #[test]
    fn test_register_unique_ids() {
        let a = register(RegistrationRequest::new("a1", "a@b.com", "password123")).unwrap();
        let b = register(RegistrationRequest::new("b1", "b@c.com", "password123")).unwrap();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_register_invalid_username() {
        let request = RegistrationRequest::new("", "bob@example.com", "password123");
        let result = register(request);
        assert!(matches!(
            result,
            Err(RegistrationError::Validation(ValidationError::UsernameEmpty))
        ));
    }

    #[test]
    fn test_register_invalid_email() {
        let request = RegistrationRequest::new("bob", "not-an-email", "password123");
        let result = register(request);
        assert!(matches!(result, Err(RegistrationError::Validation(_))));
    }

    #[test]
    fn test_register_invalid_password() {
        let request = RegistrationRequest::new("bob", "bob@example.com", "short");
        let result = register(request);
        assert!(matches!(
            result,
            Err(RegistrationError::Password(PasswordError::TooShort))
        ));
    }

    #[test]
    fn test_registration_error_display() {
        let err = RegistrationError::Validation(ValidationError::UsernameEmpty);
        assert!(err.to_string().contains("validation"));

        let err = RegistrationError::Password(PasswordError::TooShort);
        assert!(err.to_string().contains("password"));
    }
}
