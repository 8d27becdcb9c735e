use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use rand_core::OsRng;

use crate::types::error::AppError;
use crate::types::token::Claims;

fn hasher(work_factor: u32) -> Result<Argon2<'static>, AppError> {
    let params = Params::new(
        Params::DEFAULT_M_COST,
        work_factor,
        Params::DEFAULT_P_COST,
        None,
    )
    .map_err(|e| AppError::Internal(format!("argon2 params: {e}")))?;
    Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
}

/// Salted argon2id hash of `password` as a PHC string.
pub fn hash_password(password: &str, work_factor: u32) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = hasher(work_factor)?
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(format!("hash password: {e}")))?;
    Ok(hash.to_string())
}

/// Constant-time check of `password` against a stored PHC string.
/// Parameters are read back from the hash, so any work factor verifies.
pub fn verify_password(password: &str, hash: &str) -> bool {
    match PasswordHash::new(hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}

pub fn sign_token(username: &str, secret: &str, ttl_hours: i64) -> Result<String, AppError> {
    let now = Utc::now();
    let exp = Duration::try_hours(ttl_hours)
        .and_then(|ttl| now.checked_add_signed(ttl))
        .ok_or_else(|| AppError::Internal(format!("token lifetime out of range: {ttl_hours}h")))?;
    let claims = Claims {
        username: username.to_owned(),
        iat: now.timestamp(),
        exp: exp.timestamp(),
    };

    encode(&Header::default(), &claims, &EncodingKey::from_secret(secret.as_bytes()))
        .map_err(|e| AppError::Internal(format!("sign token: {e}")))
}

pub fn decode_token(token: &str, secret: &str) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::Unauthorized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_verifies_only_the_same_password() {
        let hash = hash_password("hunter2", 1).unwrap();
        assert_ne!(hash, "hunter2");
        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password("hunter2", &hash));
        assert!(!verify_password("hunter3", &hash));
    }

    #[test]
    fn hashes_are_salted() {
        let a = hash_password("same", 1).unwrap();
        let b = hash_password("same", 1).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn work_factor_is_recorded_in_hash() {
        let hash = hash_password("pw", 3).unwrap();
        assert!(hash.contains("t=3"));
        assert!(verify_password("pw", &hash));
    }

    #[test]
    fn zero_work_factor_is_rejected() {
        assert!(matches!(hash_password("pw", 0), Err(AppError::Internal(_))));
    }

    #[test]
    fn malformed_hash_never_verifies() {
        assert!(!verify_password("pw", "not-a-phc-string"));
        assert!(!verify_password("pw", ""));
    }

    #[test]
    fn token_round_trips_username() {
        let token = sign_token("alice", "secret", 1).unwrap();
        let claims = decode_token(&token, "secret").unwrap();
        assert_eq!(claims.username, "alice");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn token_with_wrong_secret_is_unauthorized() {
        let token = sign_token("alice", "secret", 1).unwrap();
        assert!(matches!(decode_token(&token, "other"), Err(AppError::Unauthorized)));
        assert!(matches!(decode_token("garbage", "secret"), Err(AppError::Unauthorized)));
    }

    #[test]
    fn huge_lifetime_is_an_error_not_a_panic() {
        assert!(matches!(sign_token("alice", "secret", i64::MAX), Err(AppError::Internal(_))));
    }

    #[test]
    fn expired_token_is_unauthorized() {
        let token = sign_token("alice", "secret", -2).unwrap();
        assert!(matches!(decode_token(&token, "secret"), Err(AppError::Unauthorized)));
    }
}
