//! User shapes as the external identity sources deliver them.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::str::FromStr;

use super::participant::{AuthProvider, Role};

/// Account type of a TalentFlow user.
///
/// Parsing never fails: labels TalentFlow may add later land in `Other`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TalentFlowUserType {
    Jobseeker,
    Interviewer,
    CompanyOwner,
    SeniorRecruiter,
    Recruiter,
    Other(String),
}

impl TalentFlowUserType {
    /// Meeting role a TalentFlow account type is given.
    pub fn meeting_role(&self) -> Role {
        match self {
            TalentFlowUserType::Jobseeker => Role::Candidate,
            TalentFlowUserType::Interviewer => Role::Interviewer,
            TalentFlowUserType::CompanyOwner => Role::Host,
            TalentFlowUserType::SeniorRecruiter => Role::CoHost,
            TalentFlowUserType::Recruiter => Role::Interviewer,
            TalentFlowUserType::Other(_) => Role::default(),
        }
    }
}

impl FromStr for TalentFlowUserType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "JOBSEEKER" => TalentFlowUserType::Jobseeker,
            "INTERVIEWER" => TalentFlowUserType::Interviewer,
            "COMPANY_OWNER" => TalentFlowUserType::CompanyOwner,
            "SENIOR_RECRUITER" => TalentFlowUserType::SeniorRecruiter,
            "RECRUITER" => TalentFlowUserType::Recruiter,
            other => TalentFlowUserType::Other(other.to_string()),
        })
    }
}

/// A TalentFlow account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TalentFlowUser {
    pub name: String,
    pub email: String,
    /// Raw account type label, e.g. `JOBSEEKER` or `COMPANY_OWNER`.
    #[serde(rename = "type")]
    pub user_type: String,
    pub user_id: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// A Google account profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoogleUser {
    pub name: String,
    pub email: String,
    /// Google `sub` claim.
    pub id: String,
    #[serde(default)]
    pub picture: Option<String>,
    /// Meeting role assigned by the caller.
    #[serde(default)]
    pub role: Option<String>,
}

/// A Microsoft Graph user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MicrosoftUser {
    pub display_name: String,
    pub mail: String,
    pub id: String,
    #[serde(default)]
    pub role: Option<String>,
}

/// A user from any other system, already resolved to a role and provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenericUser {
    pub name: String,
    pub email: String,
    pub external_user_id: String,
    pub auth_provider: AuthProvider,
    pub role: Role,
    #[serde(default)]
    pub external_role: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}
