use crate::types::participant::{AuthProvider, ParticipantRecord, Role};
use crate::types::source::GoogleUser;

/// Label recorded as `external_role` for every Google participant.
pub const GOOGLE_EXTERNAL_ROLE: &str = "GOOGLE_USER";

/// Maps a Google profile to a participant, defaulting the role to
/// `INTERVIEWER`.
pub fn map_google_source(user: &GoogleUser) -> ParticipantRecord {
    ParticipantRecord {
        name: user.name.clone(),
        email: user.email.clone(),
        role: Role::parse_lenient(user.role.as_deref()),
        external_user_id: user.id.clone(),
        auth_provider: AuthProvider::Google,
        external_role: Some(GOOGLE_EXTERNAL_ROLE.to_string()),
        avatar_url: user.picture.clone(),
    }
}
