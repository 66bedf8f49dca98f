//! Provisioning of organization API keys with the platform key.
//!
//! This is a standalone operation: it does not go through a
//! [`MeetingClient`](crate::client::MeetingClient) and never uses an
//! organization's own key.

use log::*;

use crate::auth::PlatformKeyAuth;
use crate::client::{decode, send};
use crate::credentials::{PlatformConfig, PlatformCredentials};
use crate::error::{config_error, ConfigErrorKind, Error};
use crate::http::AuthenticatedClientBuilder;
use crate::types::api_key::{CreateApiKeyRequest, CreatedApiKey};

const CREATE_API_KEY_PATH: &str = "/api/server-auth/create-api-key";

/// Mints a new API key for an organization.
///
/// `baseUrl`, `platformKey`, `userId`, `userEmail` and `organizationId` are
/// all checked before anything is sent.
pub async fn create_organization_api_key(
    config: &PlatformConfig,
    request: &CreateApiKeyRequest,
) -> Result<CreatedApiKey, Error> {
    let credentials = PlatformCredentials::from_config(config)?;
    validate_request(request)?;

    let http = AuthenticatedClientBuilder::new()
        .with_auth(Box::new(PlatformKeyAuth::new(
            credentials.platform_key().clone(),
        )))
        .build()?;

    debug!(
        "Creating API key for organization {}",
        request.organization_id
    );
    let url = format!("{}{}", credentials.base_url(), CREATE_API_KEY_PATH);
    let created: CreatedApiKey = decode(send(http.post(url).json(request)).await?).await?;
    info!(
        "Created API key for organization {}, success: {}",
        request.organization_id, created.success
    );
    Ok(created)
}

fn validate_request(request: &CreateApiKeyRequest) -> Result<(), Error> {
    let required = [
        ("userId", &request.user_id),
        ("userEmail", &request.user_email),
        ("organizationId", &request.organization_id),
    ];

    for (field, value) in required {
        if value.trim().is_empty() {
            warn!("Missing {} in API key request", field);
            return Err(config_error(
                ConfigErrorKind::MissingField(field),
                "userId, userEmail and organizationId are required",
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use mockito::{Matcher, Server};
    use secrecy::ExposeSecret;

    fn api_key_request() -> CreateApiKeyRequest {
        CreateApiKeyRequest {
            user_id: "test-user-1".to_string(),
            user_email: "test@example.com".to_string(),
            user_name: Some("Test User".to_string()),
            organization_id: "test-org-1".to_string(),
            organization_name: Some("Test Organization".to_string()),
        }
    }

    #[tokio::test]
    async fn test_missing_platform_key_fails_before_sending() {
        let config = PlatformConfig {
            base_url: Some("http://127.0.0.1:1".to_string()),
            platform_key: None,
        };

        let err = create_organization_api_key(&config, &api_key_request())
            .await
            .unwrap_err();
        assert_eq!(
            err.error_kind,
            ErrorKind::Config(ConfigErrorKind::MissingPlatformKey)
        );
    }

    #[tokio::test]
    async fn test_missing_payload_fields_fail_before_sending() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", Matcher::Any)
            .expect(0)
            .create_async()
            .await;
        let config = PlatformConfig::new(server.url(), "platform_secret");

        let mut request = api_key_request();
        request.user_email = String::new();
        let err = create_organization_api_key(&config, &request)
            .await
            .unwrap_err();
        assert_eq!(
            err.error_kind,
            ErrorKind::Config(ConfigErrorKind::MissingField("userEmail"))
        );

        let mut request = api_key_request();
        request.organization_id = " ".to_string();
        let err = create_organization_api_key(&config, &request)
            .await
            .unwrap_err();
        assert_eq!(
            err.error_kind,
            ErrorKind::Config(ConfigErrorKind::MissingField("organizationId"))
        );

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_uses_platform_key_and_returns_new_key() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/api/server-auth/create-api-key")
            .match_header("authorization", "Bearer platform_secret")
            .match_header("x-organization-id", Matcher::Missing)
            .match_body(Matcher::Json(serde_json::json!({
                "userId": "test-user-1",
                "userEmail": "test@example.com",
                "userName": "Test User",
                "organizationId": "test-org-1",
                "organizationName": "Test Organization"
            })))
            .with_status(201)
            .with_body(r#"{"success":true,"apiKey":"boooply_tenant_0123456789"}"#)
            .create_async()
            .await;

        let config = PlatformConfig::new(format!("{}/", server.url()), "platform_secret");
        let created = create_organization_api_key(&config, &api_key_request())
            .await
            .unwrap();

        assert!(created.success);
        assert!(created
            .api_key
            .unwrap()
            .expose_secret()
            .starts_with("boooply_tenant_"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_rejected_platform_key_is_response_error() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/api/server-auth/create-api-key")
            .with_status(401)
            .with_body(r#"{"error":"Invalid platform key"}"#)
            .create_async()
            .await;

        let config = PlatformConfig::new(server.url(), "wrong");
        let err = create_organization_api_key(&config, &api_key_request())
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(401));
        assert_eq!(err.to_string(), "Invalid platform key (HTTP 401)");
    }
}
