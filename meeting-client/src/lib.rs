//! # meeting-client
//!
//! Authenticated client for the Boooply meetings API:
//! - [`MeetingClient`] for meeting, participant and feature-flag calls made
//!   with an organization API key
//! - [`create_organization_api_key`] for minting organization keys with the
//!   platform key
//! - One [`Error`] type that tells server error responses apart from
//!   requests that never got an answer
//!
//! ## Usage
//!
//! ```rust,ignore
//! use meeting_client::{ClientConfig, MeetingClient, FeatureType};
//!
//! let client = MeetingClient::new(ClientConfig::new(api_key, "https://api.meetings.boooply.com"))?;
//! if client.has_feature(FeatureType::AiInterview).await {
//!     let created = client.create_ai_interview(&request).await?;
//! }
//! ```

pub mod auth;
pub mod client;
pub mod credentials;
pub mod error;
pub mod http;
pub mod organization;
pub mod schedule;
pub mod types;

// Re-export commonly used types
pub use client::MeetingClient;
pub use credentials::{ClientConfig, ClientCredentials, PlatformConfig};
pub use error::{Error, ErrorKind, ResponseError};
pub use organization::create_organization_api_key;
pub use schedule::ScheduledTime;
pub use types::api_key::{CreateApiKeyRequest, CreatedApiKey};
pub use types::feature::{FeatureType, OrganizationFeature};
pub use types::meeting::{
    AiInterviewCreated, CreateAiInterviewRequest, CreateMeetingRequest,
    CreateTeamMeetingRequest, Meeting, MeetingType, Participant, RescheduleRequest,
};
