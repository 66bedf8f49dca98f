//! Mappers from identity-source users to [`ParticipantRecord`]s.
//!
//! [`ParticipantRecord`]: crate::types::participant::ParticipantRecord

mod generic;
mod google;
mod microsoft;
mod talentflow;

pub use generic::map_generic_source;
pub use google::map_google_source;
pub use microsoft::map_microsoft_source;
pub use talentflow::{map_talentflow_source, talentflow_role};
