//! Organization API key provisioning payloads.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Body of `POST /api/server-auth/create-api-key`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateApiKeyRequest {
    pub user_id: String,
    pub user_email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    pub organization_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_name: Option<String>,
}

/// A freshly minted organization API key.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedApiKey {
    #[serde(default)]
    pub success: bool,
    /// Organization key, prefixed `boooply_tenant_`.
    #[serde(default)]
    pub api_key: Option<SecretString>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
