//! Meeting payloads.

use participants::{ParticipantRecord, Role};
use secrecy::SecretString;
use serde::{Deserialize, Deserializer, Serialize};

use super::null_as_default;
use crate::schedule::ScheduledTime;

/// Kind of meeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MeetingType {
    Human,
    AiOnly,
    Hybrid,
    /// A type this SDK version does not know yet.
    #[serde(other)]
    Unknown,
}

/// Body of `POST /api/meetings/create`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMeetingRequest {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// ISO 8601 start time.
    pub scheduled_at: String,
    pub host_email: String,
    /// Organization identifier in the calling system.
    pub organization_id: String,
    pub participants: Vec<ParticipantRecord>,
    /// Job title given to transcription as context.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    /// The server treats a missing type as `HUMAN`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meeting_type: Option<MeetingType>,
}

/// Body of `POST /api/ai-interview/create`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAiInterviewRequest {
    pub candidate_email: String,
    pub candidate_name: String,
    #[serde(rename = "candidateCV", skip_serializing_if = "Option::is_none")]
    pub candidate_cv: Option<String>,
    pub job_role: String,
    pub company_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_data: Option<serde_json::Value>,
    /// When the AI interviewer joins, ISO 8601.
    pub scheduled_at: String,
    /// Interview configuration and questions.
    pub interview_context: serde_json::Value,
    pub organization_id: String,
}

/// Body of `POST /api/team-meetings/create`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTeamMeetingRequest {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub scheduled_at: String,
    /// Length in minutes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    pub host_email: String,
    pub organization_id: String,
    pub participants: Vec<ParticipantRecord>,
}

/// Arguments of a reschedule call.
#[derive(Debug, Clone)]
pub struct RescheduleRequest {
    pub scheduled_at: ScheduledTime,
    /// New length in minutes.
    pub duration: Option<u32>,
    pub reason: Option<String>,
}

impl RescheduleRequest {
    pub fn new(scheduled_at: impl Into<ScheduledTime>) -> Self {
        Self {
            scheduled_at: scheduled_at.into(),
            duration: None,
            reason: None,
        }
    }

    pub fn with_duration(mut self, minutes: u32) -> Self {
        self.duration = Some(minutes);
        self
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }
}

/// A participant as the server stores it.
///
/// Seats without a person behind them (such as the AI interviewer) may come
/// back without a name or email.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient_role")]
    pub role: Role,
    /// Secret the participant uses to enter the meeting.
    #[serde(default)]
    pub join_token: Option<SecretString>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_active: bool,
}

fn lenient_role<'de, D>(deserializer: D) -> Result<Role, D::Error>
where
    D: Deserializer<'de>,
{
    let label = Option::<String>::deserialize(deserializer)?;
    Ok(Role::parse_lenient(label.as_deref()))
}

/// A meeting as returned by the server.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meeting {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, alias = "code", deserialize_with = "null_as_default")]
    pub meeting_code: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub scheduled_at: Option<String>,
    #[serde(default)]
    pub meeting_type: Option<MeetingType>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_active: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub participants: Vec<Participant>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Response of the AI interview endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct AiInterviewCreated {
    #[serde(default, deserialize_with = "null_as_default")]
    pub success: bool,
    #[serde(default)]
    pub meeting: Option<Meeting>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
