use crate::types::participant::{AuthProvider, ParticipantRecord, Role};
use crate::types::source::{TalentFlowUser, TalentFlowUserType};

/// Looks up the meeting role for a TalentFlow account type label.
///
/// | type               | role          |
/// |--------------------|---------------|
/// | `JOBSEEKER`        | `CANDIDATE`   |
/// | `INTERVIEWER`      | `INTERVIEWER` |
/// | `COMPANY_OWNER`    | `HOST`        |
/// | `SENIOR_RECRUITER` | `CO_HOST`     |
/// | `RECRUITER`        | `INTERVIEWER` |
/// | anything else      | `INTERVIEWER` |
pub fn talentflow_role(user_type: &str) -> Role {
    let parsed: TalentFlowUserType = match user_type.parse() {
        Ok(parsed) => parsed,
        Err(never) => match never {},
    };
    if let TalentFlowUserType::Other(label) = &parsed {
        log::debug!("Unrecognized TalentFlow user type {label:?}, using default role");
    }
    parsed.meeting_role()
}

/// Maps a TalentFlow account to a participant.
///
/// The raw account type is kept as `external_role` so the original label
/// survives the role translation.
pub fn map_talentflow_source(user: &TalentFlowUser) -> ParticipantRecord {
    ParticipantRecord {
        name: user.name.clone(),
        email: user.email.clone(),
        role: talentflow_role(&user.user_type),
        external_user_id: user.user_id.clone(),
        auth_provider: AuthProvider::TalentFlow,
        external_role: Some(user.user_type.clone()),
        avatar_url: user.avatar_url.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn talentflow_user(user_type: &str) -> TalentFlowUser {
        TalentFlowUser {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            user_type: user_type.to_string(),
            user_id: "7301920554".to_string(),
            avatar_url: None,
        }
    }

    #[test]
    fn test_role_table_is_exact() {
        assert_eq!(talentflow_role("JOBSEEKER"), Role::Candidate);
        assert_eq!(talentflow_role("INTERVIEWER"), Role::Interviewer);
        assert_eq!(talentflow_role("COMPANY_OWNER"), Role::Host);
        assert_eq!(talentflow_role("SENIOR_RECRUITER"), Role::CoHost);
        assert_eq!(talentflow_role("RECRUITER"), Role::Interviewer);
    }

    #[test]
    fn test_unknown_type_falls_back_to_interviewer() {
        assert_eq!(talentflow_role("ADMIN"), Role::Interviewer);
        assert_eq!(talentflow_role(""), Role::Interviewer);
        // labels are matched exactly as TalentFlow sends them
        assert_eq!(talentflow_role("jobseeker"), Role::Interviewer);
    }

    #[test]
    fn test_maps_all_fields() {
        let mut user = talentflow_user("JOBSEEKER");
        user.avatar_url = Some("https://cdn.example.com/jane.png".to_string());

        let record = map_talentflow_source(&user);

        assert_eq!(record.name, "Jane Doe");
        assert_eq!(record.email, "jane@example.com");
        assert_eq!(record.role, Role::Candidate);
        assert_eq!(record.external_user_id, "7301920554");
        assert_eq!(record.auth_provider, AuthProvider::TalentFlow);
        assert_eq!(record.external_role.as_deref(), Some("JOBSEEKER"));
        assert_eq!(
            record.avatar_url.as_deref(),
            Some("https://cdn.example.com/jane.png")
        );
    }

    #[test]
    fn test_external_role_preserves_unknown_type() {
        let record = map_talentflow_source(&talentflow_user("HIRING_MANAGER"));

        assert_eq!(record.role, Role::Interviewer);
        assert_eq!(record.external_role.as_deref(), Some("HIRING_MANAGER"));
        assert_eq!(record.avatar_url, None);
    }
}
