use std::fmt;

/// Identifier of the application client registered with the identity provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppClientId(String);

impl AppClientId {
    pub fn new(client_id: impl Into<String>) -> Self {
        Self(client_id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for AppClientId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AppClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
