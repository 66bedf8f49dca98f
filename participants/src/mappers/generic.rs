use crate::types::participant::ParticipantRecord;
use crate::types::source::GenericUser;

/// Maps a user that already carries its role and provider. Nothing is
/// defaulted or translated.
pub fn map_generic_source(user: &GenericUser) -> ParticipantRecord {
    ParticipantRecord {
        name: user.name.clone(),
        email: user.email.clone(),
        role: user.role,
        external_user_id: user.external_user_id.clone(),
        auth_provider: user.auth_provider,
        external_role: user.external_role.clone(),
        avatar_url: user.avatar_url.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::participant::{AuthProvider, Role};

    #[test]
    fn test_passes_every_field_through() {
        let user = GenericUser {
            name: "Lin Wei".to_string(),
            email: "lin@example.com".to_string(),
            external_user_id: "gh-99".to_string(),
            auth_provider: AuthProvider::GitHub,
            role: Role::Observer,
            external_role: Some("maintainer".to_string()),
            avatar_url: Some("https://avatars.example.com/99".to_string()),
        };

        let record = map_generic_source(&user);

        assert_eq!(record.role, Role::Observer);
        assert_eq!(record.auth_provider, AuthProvider::GitHub);
        assert_eq!(record.external_user_id, "gh-99");
        assert_eq!(record.external_role.as_deref(), Some("maintainer"));
        assert_eq!(
            record.avatar_url.as_deref(),
            Some("https://avatars.example.com/99")
        );
    }

    #[test]
    fn test_absent_optionals_stay_absent() {
        let user = GenericUser {
            name: "Native User".to_string(),
            email: "native@example.com".to_string(),
            external_user_id: "n-1".to_string(),
            auth_provider: AuthProvider::Native,
            role: Role::Host,
            external_role: None,
            avatar_url: None,
        };

        let record = map_generic_source(&user);
        assert_eq!(record.external_role, None);
        assert_eq!(record.avatar_url, None);
    }
}
