//! Organization feature flags.

use serde::{Deserialize, Serialize};

use super::null_as_default;

/// Capability an organization may have enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeatureType {
    AiInterview,
    LiveTranscription,
    TranscriptionSummary,
    VideoRecording,
    ScreenshotCapture,
    RateCandidates,
    RateInterviewers,
    AiNotes,
    Analytics,
    CustomBranding,
    /// A feature this SDK version does not know yet.
    #[serde(other)]
    Unknown,
}

/// A feature flag and its usage for one organization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationFeature {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    pub feature_type: FeatureType,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<serde_json::Value>,
    /// Usage cap, e.g. AI interviews per month.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage_count: Option<i64>,
    /// Expiry as the server formats it; date-only values occur.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
}

/// Looks up `feature_type` in a feature list. Missing features are disabled.
pub fn is_enabled(features: &[OrganizationFeature], feature_type: FeatureType) -> bool {
    features
        .iter()
        .find(|feature| feature.feature_type == feature_type)
        .map(|feature| feature.is_enabled)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn features() -> Vec<OrganizationFeature> {
        serde_json::from_value(serde_json::json!([
            {
                "id": "f1",
                "featureType": "AI_INTERVIEW",
                "isEnabled": true,
                "limit": 50,
                "usageCount": 12,
                "expiresAt": "2026-01-01T00:00:00.000Z"
            },
            { "id": "f2", "featureType": "VIDEO_RECORDING", "isEnabled": false, "usageCount": 0 },
            { "id": "f3", "featureType": "HOLOGRAMS", "isEnabled": true, "usageCount": 0 }
        ]))
        .unwrap()
    }

    #[test]
    fn test_deserializes_feature_list() {
        let features = features();

        assert_eq!(features.len(), 3);
        assert_eq!(features[0].limit, Some(50));
        assert_eq!(features[0].usage_count, Some(12));
        assert_eq!(
            features[0].expires_at.as_deref(),
            Some("2026-01-01T00:00:00.000Z")
        );
        assert_eq!(features[2].feature_type, FeatureType::Unknown);
    }

    #[test]
    fn test_is_enabled_lookup() {
        let features = features();

        assert!(is_enabled(&features, FeatureType::AiInterview));
        assert!(!is_enabled(&features, FeatureType::VideoRecording));
        assert!(!is_enabled(&features, FeatureType::Analytics));
    }

    #[test]
    fn test_date_only_and_null_expiry_do_not_break_the_list() {
        let features: Vec<OrganizationFeature> = serde_json::from_value(serde_json::json!([
            { "featureType": "AI_INTERVIEW", "isEnabled": true, "expiresAt": "2026-12-31" },
            { "featureType": "ANALYTICS", "isEnabled": true, "expiresAt": null, "limit": null }
        ]))
        .unwrap();

        assert_eq!(features[0].expires_at.as_deref(), Some("2026-12-31"));
        assert_eq!(features[1].expires_at, None);
        assert_eq!(features[1].usage_count, None);
        assert!(is_enabled(&features, FeatureType::AiInterview));
        assert!(is_enabled(&features, FeatureType::Analytics));
    }
}
