use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub auth: AuthTokens,
}

/// HS256 token issuer/verifier. The token carries only the subject id; the
/// caller's role is always re-resolved from the live account record.
#[derive(Clone)]
pub struct AuthTokens {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl_secs: u64,
}

#[derive(Serialize, Deserialize)]
struct Claims {
    sub: String,
    exp: u64,
}

impl AuthTokens {
    pub fn new(secret: &[u8], ttl_secs: u64) -> Self {
        AuthTokens {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            ttl_secs,
        }
    }

    pub fn issue(&self, account_id: &str) -> Result<String, jsonwebtoken::errors::Error> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        let claims = Claims {
            sub: account_id.to_string(),
            exp: now + self.ttl_secs,
        };
        encode(&Header::default(), &claims, &self.encoding)
    }

    /// Returns the subject id when the signature checks out and the token is
    /// not expired.
    pub fn verify(&self, token: &str) -> Option<String> {
        decode::<Claims>(token, &self.decoding, &Validation::default())
            .ok()
            .map(|data| data.claims.sub)
    }
}
