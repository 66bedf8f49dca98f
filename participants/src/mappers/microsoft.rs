use crate::types::participant::{AuthProvider, ParticipantRecord, Role};
use crate::types::source::MicrosoftUser;

/// Label recorded as `external_role` for every Microsoft participant.
pub const MICROSOFT_EXTERNAL_ROLE: &str = "MS_TEAMS_USER";

/// Maps a Microsoft Graph user to a participant. Graph users carry no avatar
/// URL, so `avatar_url` is always `None`.
pub fn map_microsoft_source(user: &MicrosoftUser) -> ParticipantRecord {
    ParticipantRecord {
        name: user.display_name.clone(),
        email: user.mail.clone(),
        role: Role::parse_lenient(user.role.as_deref()),
        external_user_id: user.id.clone(),
        auth_provider: AuthProvider::Microsoft,
        external_role: Some(MICROSOFT_EXTERNAL_ROLE.to_string()),
        avatar_url: None,
    }
}
