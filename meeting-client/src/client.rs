//! Meeting API client.
//!
//! Every method is a single authenticated request. Nothing is retried or
//! cached, so concurrent calls on a cloned client never interfere.

use log::*;
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use participants::ParticipantRecord;

use crate::auth::ApiKeyAuth;
use crate::credentials::{ClientConfig, ClientCredentials};
use crate::error::{decode_error, Error, ResponseError};
use crate::http::{AuthenticatedClientBuilder, HttpClientConfig};
use crate::types::feature::{self, FeatureType, OrganizationFeature};
use crate::types::meeting::{
    AiInterviewCreated, CreateAiInterviewRequest, CreateMeetingRequest,
    CreateTeamMeetingRequest, Meeting, Participant, RescheduleRequest,
};

const CREATE_MEETING_PATH: &str = "/api/meetings/create";
const CREATE_AI_INTERVIEW_PATH: &str = "/api/ai-interview/create";
const CREATE_TEAM_MEETING_PATH: &str = "/api/team-meetings/create";
const ORGANIZATION_FEATURES_PATH: &str = "/api/organization/features";

#[derive(Serialize)]
struct CancelBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<&'a str>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RescheduleBody<'a> {
    scheduled_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<&'a str>,
}

/// Authenticated client for one organization's use of the meeting API.
#[derive(Debug, Clone)]
pub struct MeetingClient {
    http: reqwest::Client,
    base_url: String,
    organization_id: Option<String>,
}

impl MeetingClient {
    /// Creates a client. Fails without touching the network if the API key
    /// or base URL is missing.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        Self::with_http_config(config, HttpClientConfig::default())
    }

    pub(crate) fn with_http_config(
        config: ClientConfig,
        http_config: HttpClientConfig,
    ) -> Result<Self, Error> {
        let credentials = ClientCredentials::from_config(config)?;
        let http = AuthenticatedClientBuilder::new()
            .with_config(http_config)
            .with_auth(Box::new(ApiKeyAuth::from_credentials(&credentials)))
            .build()?;

        Ok(Self {
            http,
            base_url: credentials.base_url().to_string(),
            organization_id: credentials.organization_id().map(str::to_string),
        })
    }

    /// Base URL without its trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn organization_id(&self) -> Option<&str> {
        self.organization_id.as_deref()
    }

    /// Create a new meeting.
    pub async fn create_meeting(&self, request: &CreateMeetingRequest) -> Result<Meeting, Error> {
        debug!("Creating meeting: {}", request.title);
        let meeting: Meeting =
            decode(send(self.http.post(self.url(CREATE_MEETING_PATH)).json(request)).await?)
                .await?;
        info!("Created meeting with code: {}", meeting.meeting_code);
        Ok(meeting)
    }

    /// Create a meeting run by the AI interviewer.
    pub async fn create_ai_interview(
        &self,
        request: &CreateAiInterviewRequest,
    ) -> Result<AiInterviewCreated, Error> {
        debug!("Creating AI interview for role: {}", request.job_role);
        let created: AiInterviewCreated = decode(
            send(
                self.http
                    .post(self.url(CREATE_AI_INTERVIEW_PATH))
                    .json(request),
            )
            .await?,
        )
        .await?;
        info!("Created AI interview, success: {}", created.success);
        Ok(created)
    }

    /// Create an internal team meeting.
    pub async fn create_team_meeting(
        &self,
        request: &CreateTeamMeetingRequest,
    ) -> Result<Meeting, Error> {
        debug!("Creating team meeting: {}", request.title);
        let meeting: Meeting = decode(
            send(
                self.http
                    .post(self.url(CREATE_TEAM_MEETING_PATH))
                    .json(request),
            )
            .await?,
        )
        .await?;
        info!("Created team meeting with code: {}", meeting.meeting_code);
        Ok(meeting)
    }

    /// Get meeting details by meeting code.
    pub async fn get_meeting(&self, meeting_code: &str) -> Result<Meeting, Error> {
        decode(send(self.http.get(self.meeting_url(meeting_code, ""))).await?).await
    }

    /// Add a participant to an existing meeting.
    pub async fn add_participant(
        &self,
        meeting_code: &str,
        participant: &ParticipantRecord,
    ) -> Result<Participant, Error> {
        debug!(
            "Adding {} participant to meeting {}",
            participant.role, meeting_code
        );
        decode(
            send(
                self.http
                    .post(self.meeting_url(meeting_code, "/participants"))
                    .json(participant),
            )
            .await?,
        )
        .await
    }

    /// List the organization's feature flags.
    pub async fn get_organization_features(&self) -> Result<Vec<OrganizationFeature>, Error> {
        decode(send(self.http.get(self.url(ORGANIZATION_FEATURES_PATH))).await?).await
    }

    /// Whether the organization has `feature_type` enabled.
    ///
    /// Never fails: a missing feature and a failed lookup both read as
    /// `false`. Lookup failures are logged.
    pub async fn has_feature(&self, feature_type: FeatureType) -> bool {
        match self.get_organization_features().await {
            Ok(features) => feature::is_enabled(&features, feature_type),
            Err(err) => {
                warn!("Failed to check feature {:?}: {}", feature_type, err);
                false
            }
        }
    }

    /// Update meeting fields. `updates` is sent as given.
    pub async fn update_meeting<U>(&self, meeting_code: &str, updates: &U) -> Result<Meeting, Error>
    where
        U: Serialize + ?Sized,
    {
        decode(
            send(
                self.http
                    .patch(self.meeting_url(meeting_code, ""))
                    .json(updates),
            )
            .await?,
        )
        .await
    }

    /// End a running meeting.
    pub async fn end_meeting(&self, meeting_code: &str) -> Result<(), Error> {
        send(self.http.post(self.meeting_url(meeting_code, "/end"))).await?;
        info!("Ended meeting {}", meeting_code);
        Ok(())
    }

    /// Cancel a scheduled meeting.
    pub async fn cancel_meeting(
        &self,
        meeting_code: &str,
        reason: Option<&str>,
    ) -> Result<Meeting, Error> {
        let meeting = decode(
            send(
                self.http
                    .patch(self.meeting_url(meeting_code, "/cancel"))
                    .json(&CancelBody { reason }),
            )
            .await?,
        )
        .await?;
        info!("Cancelled meeting {}", meeting_code);
        Ok(meeting)
    }

    /// Move a meeting to a new start time. Structured and preformatted times
    /// are both sent in the same normalized format.
    pub async fn reschedule_meeting(
        &self,
        meeting_code: &str,
        request: &RescheduleRequest,
    ) -> Result<Meeting, Error> {
        let body = RescheduleBody {
            scheduled_at: request.scheduled_at.normalize()?,
            duration: request.duration,
            reason: request.reason.as_deref(),
        };
        debug!(
            "Rescheduling meeting {} to {}",
            meeting_code, body.scheduled_at
        );

        let meeting = decode(
            send(
                self.http
                    .patch(self.meeting_url(meeting_code, "/reschedule"))
                    .json(&body),
            )
            .await?,
        )
        .await?;
        info!("Rescheduled meeting {}", meeting_code);
        Ok(meeting)
    }

    /// Permanently delete a meeting.
    pub async fn delete_meeting(&self, meeting_code: &str) -> Result<(), Error> {
        send(self.http.delete(self.meeting_url(meeting_code, ""))).await?;
        info!("Deleted meeting {}", meeting_code);
        Ok(())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn meeting_url(&self, meeting_code: &str, suffix: &str) -> String {
        self.url(&meeting_path(meeting_code, suffix))
    }
}

/// Path of a meeting resource; the code is encoded as one path segment.
fn meeting_path(meeting_code: &str, suffix: &str) -> String {
    format!(
        "/api/meetings/{}{}",
        urlencoding::encode(meeting_code),
        suffix
    )
}

/// Sends a request, turning non-success statuses into response errors.
///
/// Failures before a response arrives come back as transport errors holding
/// the original `reqwest::Error`. Once a status line is in, the error is a
/// response error even if its body cannot be read.
pub(crate) async fn send(request: RequestBuilder) -> Result<Response, Error> {
    let response = request.send().await.map_err(|e| {
        warn!("Meeting API request failed: {:?}", e);
        Error::from(e)
    })?;

    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    // The status arrived even if the body did not; keep it as a response error
    let (text, body_error) = match response.text().await {
        Ok(text) => (text, None),
        Err(e) => {
            warn!("Failed to read meeting API error body: {:?}", e);
            (String::new(), Some(e))
        }
    };
    let response_error = ResponseError::from_body(status.as_u16(), &text);
    warn!("Meeting API error: {} - {}", status, response_error.message);

    let mut err = Error::from(response_error);
    if let Some(body_error) = body_error {
        err.source = Some(Box::new(body_error));
    }
    Err(err)
}

/// Decodes a success body as JSON.
pub(crate) async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, Error> {
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| {
        warn!("Failed to parse meeting API response: {:?}", e);
        decode_error(e)
    })
}
