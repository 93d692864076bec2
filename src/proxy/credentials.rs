use std::fmt;

/// Static token/key pair of one ZR Express account
#[derive(Clone, PartialEq, Eq)]
pub struct ProviderCredentials {
    token: String,
    key: String,
}

impl ProviderCredentials {
    pub fn new(token: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            key: key.into(),
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn is_complete(&self) -> bool {
        !self.token.is_empty() && !self.key.is_empty()
    }
}

impl fmt::Debug for ProviderCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderCredentials")
            .field("token", &"***")
            .field("key", &"***")
            .finish()
    }
}
