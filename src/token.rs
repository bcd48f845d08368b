//! Activation token generation.

use rand::Rng;

use crate::validation::ACTIVATION_TOKEN_LENGTH;

/// Random bytes per token; each byte renders as two hex characters.
const TOKEN_BYTES: usize = ACTIVATION_TOKEN_LENGTH / 2;

/// Generate a fresh activation token.
///
/// The token is 32 lowercase hex characters and always satisfies
/// [`crate::validation::validate_activation_token`].
///
/// # Examples
///
/// ```
/// use byline::generate_activation_token;
///
/// let token = generate_activation_token();
/// assert_eq!(token.len(), 32);
/// ```
pub fn generate_activation_token() -> String {
    let mut rng = rand::rng();
    (0..TOKEN_BYTES)
        .map(|_| format!("{:02x}", rng.random::<u8>()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_activation_token;

    #[test]
    fn test_generate_token_shape() {
        let token = generate_activation_token();
        assert_eq!(token.len(), ACTIVATION_TOKEN_LENGTH);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(token, token.to_lowercase());
    }

    #[test]
    fn test_generated_token_passes_validation() {
        let token = generate_activation_token();
        assert_eq!(validate_activation_token(&token).unwrap(), token);
    }

    #[test]
    fn test_generate_token_unique() {
        assert_ne!(generate_activation_token(), generate_activation_token());
    }
}
