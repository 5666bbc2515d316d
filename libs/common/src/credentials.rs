//! Session credential extraction
//!
//! A signed-in admin carries an opaque bearer token and a `role` cookie.
//! The token may arrive either as an `Authorization: Bearer` header or as a
//! `token` cookie; the role is only ever read from its cookie, since it is
//! not a secret. Extraction is defined over the [`CredentialStore`]
//! capability so the route gate (raw headers) and the handlers (cookie jar)
//! share one reader.

/// Read-only access to the parts of a request that may carry credentials.
pub trait CredentialStore {
    /// The raw `Authorization` header value, if any.
    fn authorization(&self) -> Option<String>;

    /// The value of a named cookie, if present.
    fn cookie(&self, name: &str) -> Option<String>;
}

/// Credentials read from a request. Absence is `None`, never an error;
/// callers decide what missing values mean.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub token: Option<String>,
    pub role: Option<String>,
}

impl Credentials {
    /// Extract credentials from a request context. An explicit
    /// `Authorization: Bearer` header wins over the `token` cookie.
    pub fn read(store: &dyn CredentialStore) -> Self {
        let token = store
            .authorization()
            .and_then(|value| value.strip_prefix("Bearer ").map(str::to_owned))
            .or_else(|| store.cookie("token"));
        let role = store.cookie("role");

        Self { token, role }
    }

    /// Whether these credentials name an admin session: a token is present
    /// and the role cookie says `admin`.
    pub fn is_admin(&self) -> bool {
        self.token.is_some() && self.role.as_deref() == Some("admin")
    }
}

/// Look up a cookie in a raw `Cookie` header value (`"a=b; c=d"`).
pub fn cookie_value(header: &str, name: &str) -> Option<String> {
    header.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name).then(|| value.to_string())
    })
}
