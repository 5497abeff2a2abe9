use secrecy::{ExposeSecret, Secret};

/// Opaque bearer credential issued by the identity provider.
///
/// The service never inspects the token; it is only forwarded. The inner
/// value is kept secret so it does not end up in logs.
#[derive(Debug, Clone)]
pub struct AccessToken(Secret<String>);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(Secret::new(token.into()))
    }

    /// Placeholder sent when the caller presented no token at all. The
    /// provider rejects it, which keeps it the only judge of authentication.
    pub fn absent() -> Self {
        Self::new(String::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.expose_secret().is_empty()
    }
}

impl AsRef<Secret<String>> for AccessToken {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl From<Option<AccessToken>> for AccessToken {
    fn from(token: Option<AccessToken>) -> Self {
        token.unwrap_or_else(AccessToken::absent)
    }
}
