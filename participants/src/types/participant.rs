//! The canonical participant record sent to the meeting API.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Role a participant holds inside a meeting.
///
/// `Interviewer` is the default: it is what every mapper falls back to when
/// the source role is absent or unrecognized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Host,
    CoHost,
    #[default]
    Interviewer,
    Candidate,
    Observer,
}

/// Returned when a string does not name one of the five meeting roles.
#[derive(Debug, PartialEq, Eq)]
pub struct RoleParseError;

impl Role {
    /// Wire representation of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Host => "HOST",
            Role::CoHost => "CO_HOST",
            Role::Interviewer => "INTERVIEWER",
            Role::Candidate => "CANDIDATE",
            Role::Observer => "OBSERVER",
        }
    }

    /// Parses an optional role label, resolving anything missing or unknown
    /// to the default role.
    pub fn parse_lenient(role: Option<&str>) -> Role {
        match role {
            Some(label) => label.parse().unwrap_or_else(|_| {
                log::debug!("Unrecognized participant role {label:?}, using default");
                Role::default()
            }),
            None => Role::default(),
        }
    }
}

impl FromStr for Role {
    type Err = RoleParseError;

    fn from_str(role: &str) -> Result<Role, Self::Err> {
        match role.trim().to_uppercase().as_str() {
            "HOST" => Ok(Role::Host),
            "CO_HOST" => Ok(Role::CoHost),
            "INTERVIEWER" => Ok(Role::Interviewer),
            "CANDIDATE" => Ok(Role::Candidate),
            "OBSERVER" => Ok(Role::Observer),
            _ => Err(RoleParseError),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity provider a participant authenticated with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AuthProvider {
    TalentFlow,
    Google,
    Microsoft,
    GitHub,
    Native,
}

impl AuthProvider {
    /// Wire representation of the provider.
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthProvider::TalentFlow => "TALENTFLOW",
            AuthProvider::Google => "GOOGLE",
            AuthProvider::Microsoft => "MICROSOFT",
            AuthProvider::GitHub => "GITHUB",
            AuthProvider::Native => "NATIVE",
        }
    }
}

impl fmt::Display for AuthProvider {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A participant in the shape the meeting API expects.
///
/// Built once by one of the mappers and then handed to the client. Optional
/// fields that are `None` are left out of the JSON body entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantRecord {
    pub name: String,
    pub email: String,
    pub role: Role,
    /// Identifier of the user in the source system (e.g. a Google `sub`).
    pub external_user_id: String,
    pub auth_provider: AuthProvider,
    /// Role label as the source system spelled it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_wire_names_match_serde() {
        for role in [
            Role::Host,
            Role::CoHost,
            Role::Interviewer,
            Role::Candidate,
            Role::Observer,
        ] {
            let json = serde_json::to_value(role).unwrap();
            assert_eq!(json, serde_json::Value::String(role.as_str().to_string()));
        }
    }

    #[test]
    fn test_auth_provider_wire_names_match_serde() {
        for provider in [
            AuthProvider::TalentFlow,
            AuthProvider::Google,
            AuthProvider::Microsoft,
            AuthProvider::GitHub,
            AuthProvider::Native,
        ] {
            let json = serde_json::to_value(provider).unwrap();
            assert_eq!(
                json,
                serde_json::Value::String(provider.as_str().to_string())
            );
        }
    }

    #[test]
    fn test_role_parse_is_case_insensitive() {
        assert_eq!("co_host".parse::<Role>(), Ok(Role::CoHost));
        assert_eq!(" Host ".parse::<Role>(), Ok(Role::Host));
        assert_eq!("ADMIN".parse::<Role>(), Err(RoleParseError));
    }

    #[test]
    fn test_parse_lenient_defaults_to_interviewer() {
        assert_eq!(Role::parse_lenient(None), Role::Interviewer);
        assert_eq!(Role::parse_lenient(Some("")), Role::Interviewer);
        assert_eq!(Role::parse_lenient(Some("SUPERVISOR")), Role::Interviewer);
        assert_eq!(Role::parse_lenient(Some("CANDIDATE")), Role::Candidate);
    }

    #[test]
    fn test_record_omits_absent_optionals() {
        let record = ParticipantRecord {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            role: Role::Host,
            external_user_id: "u-1".to_string(),
            auth_provider: AuthProvider::Native,
            external_role: None,
            avatar_url: None,
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Ada Lovelace",
                "email": "ada@example.com",
                "role": "HOST",
                "externalUserId": "u-1",
                "authProvider": "NATIVE"
            })
        );
    }
}
