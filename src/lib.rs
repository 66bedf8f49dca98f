//! # boooply_sdk
//!
//! Rust SDK for the Boooply meetings API.
//!
//! - [`participants`]: turns users from TalentFlow, Google, Microsoft or any
//!   other identity source into [`ParticipantRecord`]s
//! - [`meeting_client`]: authenticated calls for meetings, participants,
//!   feature flags and organization key provisioning
//!
//! ## Usage
//!
//! ```rust,ignore
//! use boooply_sdk::{map_google_source, ClientConfig, GoogleUser, MeetingClient};
//!
//! let client = MeetingClient::new(ClientConfig::new(api_key, base_url))?;
//! let interviewer = map_google_source(&google_user);
//! client.add_participant("abc-defg-hij", &interviewer).await?;
//! ```

pub use meeting_client;
pub use participants;

pub use meeting_client::{
    create_organization_api_key, AiInterviewCreated, ClientConfig, CreateAiInterviewRequest,
    CreateApiKeyRequest, CreateMeetingRequest, CreateTeamMeetingRequest, CreatedApiKey, Error,
    ErrorKind, FeatureType, Meeting, MeetingClient, MeetingType, OrganizationFeature,
    Participant, PlatformConfig, RescheduleRequest, ResponseError, ScheduledTime,
};
pub use participants::{
    map_generic_source, map_google_source, map_microsoft_source, map_talentflow_source,
    talentflow_role, AuthProvider, GenericUser, GoogleUser, MicrosoftUser, ParticipantRecord,
    Role, TalentFlowUser,
};
