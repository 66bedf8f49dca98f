//! Request authentication for the meeting API.
//!
//! Organization calls authenticate with the organization's API key; key
//! provisioning authenticates with the platform key instead.

mod api_key;
mod platform;

pub use api_key::{ApiKeyAuth, RequestAuth, ORGANIZATION_HEADER};
pub use platform::PlatformKeyAuth;

use reqwest::header::HeaderValue;
use secrecy::{ExposeSecret, SecretString};

use crate::error::{config_error, ConfigErrorKind, Error};

/// Builds a sensitive `Bearer <secret>` header value.
fn bearer_value(secret: &SecretString) -> Result<HeaderValue, Error> {
    let mut value = HeaderValue::from_str(&format!("Bearer {}", secret.expose_secret()))
        .map_err(|e| {
            log::warn!("Failed to create authorization header: {:?}", e);
            config_error(
                ConfigErrorKind::InvalidHeader,
                "Credential contains characters not allowed in a header",
            )
        })?;
    value.set_sensitive(true);
    Ok(value)
}
