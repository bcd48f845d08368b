//! Byline - validated author account model.
//!
//! The [`Author`] entity is the top-level account record of the platform:
//! id, optional activation token, username, email, and Argon2i password
//! hash, each guarded by the pure validators in [`validation`]. Persistence
//! and transport are the embedding application's concern; this crate only
//! validates and holds field values in memory.

pub mod author;
pub mod password;
pub mod registration;
pub mod token;
pub mod validation;

pub use author::{Author, AuthorId};
pub use password::{
    hash_password, validate_password, verify_password, PasswordError, MAX_PASSWORD_LENGTH,
    MIN_PASSWORD_LENGTH,
};
pub use registration::{register, RegistrationError, RegistrationRequest};
pub use token::generate_activation_token;
pub use validation::{
    ValidationError, ValidationKind, ACTIVATION_TOKEN_LENGTH, MAX_EMAIL_LENGTH,
    MAX_USERNAME_LENGTH, PASSWORD_HASH_LENGTH,
};
