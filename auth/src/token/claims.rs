use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Signed claim set carried by a bearer token.
///
/// Deliberately minimal: the subject identifies the user, the expiration
/// bounds the token's life. There is no revocation; a leaked token stays
/// valid until `exp`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject: the user id the token was issued for
    pub sub: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Build claims for a user, expiring `ttl` after `issued_at`.
    pub fn new(user_id: i64, issued_at: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            sub: user_id,
            exp: (issued_at + ttl).timestamp(),
        }
    }
}
