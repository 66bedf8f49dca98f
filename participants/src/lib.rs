//! Participant normalization for the Boooply meetings API.
//!
//! Identity sources describe their users in different shapes (TalentFlow
//! accounts, Google and Microsoft profiles, or records that some other system
//! already resolved). This crate reshapes each of them into a single
//! [`ParticipantRecord`] that the meeting API accepts.
//!
//! Every mapper is a pure, total function: it never fails and never performs
//! I/O. Roles that a source does not recognize resolve to
//! [`Role::Interviewer`].

pub mod mappers;
pub mod types;

// Re-export commonly used types
pub use mappers::{
    map_generic_source, map_google_source, map_microsoft_source, map_talentflow_source,
    talentflow_role,
};
pub use types::participant::{AuthProvider, ParticipantRecord, Role};
pub use types::source::{GenericUser, GoogleUser, MicrosoftUser, TalentFlowUser, TalentFlowUserType};
