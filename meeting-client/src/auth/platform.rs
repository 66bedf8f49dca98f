//! Platform key authentication, used only to provision organization keys.

use reqwest::header::{HeaderMap, AUTHORIZATION};
use secrecy::SecretString;

use super::{bearer_value, RequestAuth};
use crate::error::Error;

/// Platform key sent as a bearer token. Never carries an organization scope.
pub struct PlatformKeyAuth {
    platform_key: SecretString,
}

impl PlatformKeyAuth {
    pub fn new(platform_key: SecretString) -> Self {
        Self { platform_key }
    }
}

impl RequestAuth for PlatformKeyAuth {
    fn headers(&self) -> Result<HeaderMap, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, bearer_value(&self.platform_key)?);
        Ok(headers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_key_bearer() {
        let auth = PlatformKeyAuth::new(SecretString::new("platform_secret".to_string()));
        let headers = auth.headers().unwrap();

        assert!(headers.get(crate::auth::ORGANIZATION_HEADER).is_none());
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer platform_secret");
        assert_eq!(headers.len(), 1);
    }
}
