//! Credentials for the meeting API and for platform-level provisioning.

use secrecy::SecretString;

use crate::error::{config_error, ConfigErrorKind, Error};

/// Unvalidated client settings, as read from a config file or environment.
///
/// An empty or whitespace-only value counts as absent.
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub organization_id: Option<String>,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            base_url: Some(base_url.into()),
            organization_id: None,
        }
    }

    pub fn with_organization_id(mut self, organization_id: impl Into<String>) -> Self {
        self.organization_id = Some(organization_id.into());
        self
    }
}

/// Validated, immutable credentials a [`MeetingClient`] is built from.
///
/// [`MeetingClient`]: crate::client::MeetingClient
#[derive(Debug, Clone)]
pub struct ClientCredentials {
    api_key: SecretString,
    base_url: String,
    organization_id: Option<String>,
}

impl ClientCredentials {
    /// Validates `config`. Fails if the API key or base URL is missing.
    pub fn from_config(config: ClientConfig) -> Result<Self, Error> {
        let api_key = present(config.api_key).ok_or_else(|| {
            config_error(ConfigErrorKind::MissingApiKey, "apiKey is required")
        })?;
        let base_url = present(config.base_url).ok_or_else(|| {
            config_error(ConfigErrorKind::MissingBaseUrl, "baseUrl is required")
        })?;

        Ok(Self {
            api_key: SecretString::new(api_key),
            base_url: strip_trailing_slash(&base_url),
            organization_id: present(config.organization_id),
        })
    }

    pub fn api_key(&self) -> &SecretString {
        &self.api_key
    }

    /// Base URL without its trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn organization_id(&self) -> Option<&str> {
        self.organization_id.as_deref()
    }
}

/// Unvalidated settings for minting organization API keys.
#[derive(Debug, Clone, Default)]
pub struct PlatformConfig {
    pub base_url: Option<String>,
    pub platform_key: Option<String>,
}

impl PlatformConfig {
    pub fn new(base_url: impl Into<String>, platform_key: impl Into<String>) -> Self {
        Self {
            base_url: Some(base_url.into()),
            platform_key: Some(platform_key.into()),
        }
    }
}

/// Validated platform credentials.
#[derive(Debug, Clone)]
pub struct PlatformCredentials {
    platform_key: SecretString,
    base_url: String,
}

impl PlatformCredentials {
    pub fn from_config(config: &PlatformConfig) -> Result<Self, Error> {
        let base_url = present(config.base_url.clone()).ok_or_else(|| {
            config_error(ConfigErrorKind::MissingBaseUrl, "baseUrl is required")
        })?;
        let platform_key = present(config.platform_key.clone()).ok_or_else(|| {
            config_error(ConfigErrorKind::MissingPlatformKey, "platformKey is required")
        })?;

        Ok(Self {
            platform_key: SecretString::new(platform_key),
            base_url: strip_trailing_slash(&base_url),
        })
    }

    pub fn platform_key(&self) -> &SecretString {
        &self.platform_key
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Treats empty and whitespace-only values as missing.
fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Removes exactly one trailing slash.
fn strip_trailing_slash(url: &str) -> String {
    url.strip_suffix('/').unwrap_or(url).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use secrecy::ExposeSecret;

    #[test]
    fn test_missing_api_key_fails() {
        let config = ClientConfig {
            api_key: None,
            base_url: Some("https://api.example.com".to_string()),
            organization_id: None,
        };

        let err = ClientCredentials::from_config(config).unwrap_err();
        assert_eq!(
            err.error_kind,
            ErrorKind::Config(ConfigErrorKind::MissingApiKey)
        );
    }

    #[test]
    fn test_empty_base_url_counts_as_missing() {
        let err = ClientCredentials::from_config(ClientConfig::new("key", "  ")).unwrap_err();
        assert_eq!(
            err.error_kind,
            ErrorKind::Config(ConfigErrorKind::MissingBaseUrl)
        );
    }

    #[test]
    fn test_strips_exactly_one_trailing_slash() {
        let credentials =
            ClientCredentials::from_config(ClientConfig::new("key", "https://api.example.com/"))
                .unwrap();
        assert_eq!(credentials.base_url(), "https://api.example.com");

        let credentials =
            ClientCredentials::from_config(ClientConfig::new("key", "https://api.example.com//"))
                .unwrap();
        assert_eq!(credentials.base_url(), "https://api.example.com/");
    }

    #[test]
    fn test_keeps_api_key_and_organization() {
        let credentials = ClientCredentials::from_config(
            ClientConfig::new("boooply_tenant_abc", "https://api.example.com")
                .with_organization_id("org-1"),
        )
        .unwrap();

        assert_eq!(credentials.api_key().expose_secret(), "boooply_tenant_abc");
        assert_eq!(credentials.organization_id(), Some("org-1"));
    }

    #[test]
    fn test_empty_organization_id_is_dropped() {
        let credentials = ClientCredentials::from_config(
            ClientConfig::new("key", "https://api.example.com").with_organization_id(""),
        )
        .unwrap();
        assert_eq!(credentials.organization_id(), None);
    }

    #[test]
    fn test_platform_credentials_require_both_values() {
        let err = PlatformCredentials::from_config(&PlatformConfig {
            base_url: Some("https://api.example.com".to_string()),
            platform_key: None,
        })
        .unwrap_err();
        assert_eq!(
            err.error_kind,
            ErrorKind::Config(ConfigErrorKind::MissingPlatformKey)
        );

        let err = PlatformCredentials::from_config(&PlatformConfig {
            base_url: None,
            platform_key: Some("platform".to_string()),
        })
        .unwrap_err();
        assert_eq!(
            err.error_kind,
            ErrorKind::Config(ConfigErrorKind::MissingBaseUrl)
        );
    }
}
