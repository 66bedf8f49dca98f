//! Organization API key authentication.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION};
use secrecy::SecretString;

use super::bearer_value;
use crate::credentials::ClientCredentials;
use crate::error::{config_error, ConfigErrorKind, Error};

/// Header scoping a request to one organization.
pub const ORGANIZATION_HEADER: &str = "x-organization-id";

/// Produces the authentication headers attached to every request.
pub trait RequestAuth: Send + Sync {
    fn headers(&self) -> Result<HeaderMap, Error>;
}

/// Organization API key sent as a bearer token, plus the optional
/// organization scope header.
pub struct ApiKeyAuth {
    api_key: SecretString,
    organization_id: Option<String>,
}

impl ApiKeyAuth {
    pub fn new(api_key: SecretString, organization_id: Option<String>) -> Self {
        Self {
            api_key,
            organization_id,
        }
    }

    pub fn from_credentials(credentials: &ClientCredentials) -> Self {
        Self::new(
            credentials.api_key().clone(),
            credentials.organization_id().map(str::to_string),
        )
    }
}

impl RequestAuth for ApiKeyAuth {
    fn headers(&self) -> Result<HeaderMap, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, bearer_value(&self.api_key)?);

        if let Some(organization_id) = &self.organization_id {
            let value = HeaderValue::from_str(organization_id).map_err(|_| {
                config_error(
                    ConfigErrorKind::InvalidHeader,
                    "organizationId contains characters not allowed in a header",
                )
            })?;
            headers.insert(HeaderName::from_static(ORGANIZATION_HEADER), value);
        }

        Ok(headers)
    }
}
