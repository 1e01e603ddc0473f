//! Expiry check for bearer credentials.
//!
//! Credentials are opaque to the dashboard, but the backend issues JWTs. When a
//! credential parses as a JWT with an `exp` claim, that claim is honoured;
//! anything else is treated as non-expiring and left to the server to reject.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::Deserialize;

#[derive(Deserialize)]
struct Claims {
    exp: Option<f64>,
}

/// The `exp` claim of `token` in unix seconds, if it is a JWT that has one.
pub fn expiry(token: &str) -> Option<i64> {
    let mut parts = token.split('.');
    let (_header, payload, _signature) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }

    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    let claims: Claims = serde_json::from_slice(&bytes).ok()?;
    claims.exp.map(|exp| exp as i64)
}

/// Whether `token` carries an expiry at or before `now` (unix seconds).
pub fn is_expired(token: &str, now: i64) -> bool {
    expiry(token).is_some_and(|exp| exp <= now)
}

/// Current unix time in seconds.
pub fn now_unix_secs() -> i64 {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        (js_sys::Date::now() / 1000.0) as i64
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs() as i64)
            .unwrap_or(0)
    }
}
