//! Request-context credential stores
//!
//! Two interchangeable [`CredentialStore`] implementations: the route gate
//! reads straight from the raw header map before any extraction has
//! happened, while handlers read through axum-extra's cookie jar. Both feed
//! the same reader in `common::credentials`.

use axum::http::{HeaderMap, header};
use axum_extra::extract::CookieJar;

use common::credentials::{Credentials, CredentialStore, cookie_value};

use crate::error::{GatewayError, GatewayResult};

/// Credential store over a raw header map.
pub struct HeaderStore<'a>(pub &'a HeaderMap);

impl CredentialStore for HeaderStore<'_> {
    fn authorization(&self) -> Option<String> {
        self.0
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned)
    }

    fn cookie(&self, name: &str) -> Option<String> {
        let header = self.0.get(header::COOKIE)?.to_str().ok()?;
        cookie_value(header, name)
    }
}

/// Credential store over an extracted cookie jar; the `Authorization`
/// header still comes from the header map.
pub struct JarStore<'a> {
    pub jar: &'a CookieJar,
    pub headers: &'a HeaderMap,
}

impl CredentialStore for JarStore<'_> {
    fn authorization(&self) -> Option<String> {
        HeaderStore(self.headers).authorization()
    }

    fn cookie(&self, name: &str) -> Option<String> {
        self.jar.get(name).map(|cookie| cookie.value().to_string())
    }
}

/// Read credentials and require an admin session, the guard every protected
/// endpoint runs before the backend is contacted.
pub fn require_admin(headers: &HeaderMap, jar: &CookieJar) -> GatewayResult<Credentials> {
    let creds = Credentials::read(&JarStore { jar, headers });
    if !creds.is_admin() {
        return Err(GatewayError::Unauthorized);
    }
    Ok(creds)
}
