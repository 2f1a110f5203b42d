//! Unverified credential decoding.
//!
//! Reads the header and claims of a credential without checking the
//! signature or expiry. Useful for debugging tokens from logs or support
//! tickets. A payload returned from here proves nothing about who issued it
//! and must never be used for access decisions; use
//! [`JwtMaker::verify_token`](crate::Maker::verify_token) for that.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode, decode_header};
use serde::Serialize;

use tokenwright_core::TokenError;

use crate::payload::Payload;

/// Decoded, unverified view of a credential.
#[derive(Debug, Clone, Serialize)]
pub struct Inspection {
    /// Algorithm declared in the header
    pub algorithm: Algorithm,
    pub payload: Payload,
}

/// Decodes `token` without verifying it.
///
/// # Errors
///
/// Returns [`TokenError::InvalidToken`] if the token is not three base64url
/// segments or its claims do not form a [`Payload`].
pub fn inspect_token(token: &str) -> Result<Inspection, TokenError> {
    let header = decode_header(token).map_err(|_| TokenError::InvalidToken)?;

    let mut validation = Validation::new(header.alg);
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.required_spec_claims.clear();

    let data = decode::<Payload>(token, &DecodingKey::from_secret(&[]), &validation)
        .map_err(|_| TokenError::InvalidToken)?;

    Ok(Inspection {
        algorithm: data.header.alg,
        payload: data.claims,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maker::{JwtMaker, Maker};
    use chrono::Duration;

    #[test]
    fn test_inspect_any_secret() {
        let maker = JwtMaker::new("inspect-secret-key-at-least-32-characters").unwrap();
        let (token, issued) = maker
            .create_token_with_payload("carol", Duration::minutes(5))
            .unwrap();

        let inspection = inspect_token(&token).unwrap();
        assert_eq!(inspection.algorithm, Algorithm::HS256);
        assert_eq!(inspection.payload, issued);
    }

    #[test]
    fn test_inspect_expired_token() {
        let maker = JwtMaker::new("inspect-secret-key-at-least-32-characters").unwrap();
        let token = maker.create_token("carol", Duration::minutes(-5)).unwrap();

        let inspection = inspect_token(&token).unwrap();
        assert_eq!(inspection.payload.username, "carol");
        assert!(inspection.payload.valid().is_err());
    }

    #[test]
    fn test_inspect_malformed() {
        assert!(matches!(inspect_token("nope"), Err(TokenError::InvalidToken)));
        assert!(matches!(inspect_token("a.b.c"), Err(TokenError::InvalidToken)));
    }

    #[test]
    fn test_inspection_serializes_as_json() {
        let maker = JwtMaker::new("inspect-secret-key-at-least-32-characters").unwrap();
        let token = maker.create_token("carol", Duration::minutes(5)).unwrap();

        let json = serde_json::to_string(&inspect_token(&token).unwrap()).unwrap();
        assert!(json.contains(r#""algorithm":"HS256""#));
        assert!(json.contains(r#""username":"carol""#));
    }
}
