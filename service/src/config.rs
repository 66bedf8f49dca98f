use clap::builder::TypedValueParser as _;
use clap::Parser;
use dotenvy::dotenv;
use log::LevelFilter;
use meeting_client::{ClientConfig, PlatformConfig};
use std::fmt;
use std::str::FromStr;

/// Base URL used when `BOOOPLY_BASE_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "https://localhost:5001";

/// Which credential set a run exercises.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TestMode {
    /// Calls made with an organization API key.
    Organization,
    /// Key provisioning with the platform key.
    Platform,
}

#[derive(Debug, PartialEq, Eq)]
pub struct TestModeParseError;

impl FromStr for TestMode {
    type Err = TestModeParseError;
    fn from_str(mode: &str) -> Result<TestMode, Self::Err> {
        match mode.to_lowercase().as_str() {
            "organization" => Ok(TestMode::Organization),
            "platform" => Ok(TestMode::Platform),
            _ => Err(TestModeParseError),
        }
    }
}

impl fmt::Display for TestMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TestMode::Organization => write!(f, "organization"),
            TestMode::Platform => write!(f, "platform"),
        }
    }
}

#[derive(Clone, Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// The organization API key used to authenticate meeting calls.
    #[arg(long, env = "BOOOPLY_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// The base URL of the Boooply meetings API.
    #[arg(long, env = "BOOOPLY_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Optional organization to scope requests to. When unset the server
    /// derives the organization from the API key.
    #[arg(long, env = "BOOOPLY_ORG_ID")]
    organization_id: Option<String>,

    /// The platform key used to provision organization API keys.
    #[arg(long, env = "BOOOPLY_PLATFORM_KEY", hide_env_values = true)]
    platform_key: Option<String>,

    /// Which credential set to exercise.
    #[arg(
        long,
        env,
        default_value_t = TestMode::Organization,
        value_parser = clap::builder::PossibleValuesParser::new([
            "ORGANIZATION", "PLATFORM", "organization", "platform"
        ])
            .map(|s| s.parse::<TestMode>().unwrap()),
    )]
    pub test_mode: TestMode,

    /// Set the log level verbosity threshold (level) to control what gets displayed on console output
    #[arg(
        short,
        long,
        env,
        default_value_t = LevelFilter::Info,
        value_parser = clap::builder::PossibleValuesParser::new(["OFF", "ERROR", "WARN", "INFO", "DEBUG", "TRACE"])
            .map(|s| s.parse::<LevelFilter>().unwrap()),
        )]
    pub log_level_filter: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub fn new() -> Self {
        // Load .env file first
        dotenv().ok();
        // Then parse the command line parameters and flags
        Config::parse()
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn organization_id(&self) -> Option<&str> {
        self.organization_id.as_deref()
    }

    pub fn platform_key(&self) -> Option<&str> {
        self.platform_key.as_deref()
    }

    /// Settings for a `MeetingClient`. Validation happens when the client is
    /// built.
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            api_key: self.api_key.clone(),
            base_url: Some(self.base_url.clone()),
            organization_id: self.organization_id.clone(),
        }
    }

    /// Settings for organization key provisioning.
    pub fn platform_config(&self) -> PlatformConfig {
        PlatformConfig {
            base_url: Some(self.base_url.clone()),
            platform_key: self.platform_key.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_flags() {
        let config = Config::try_parse_from([
            "smoke-test",
            "--api-key",
            "boooply_tenant_abc",
            "--base-url",
            "https://api.example.com/",
            "--organization-id",
            "org-1",
            "--test-mode",
            "PLATFORM",
            "--platform-key",
            "platform_secret",
            "--log-level-filter",
            "DEBUG",
        ])
        .unwrap();

        assert_eq!(config.api_key(), Some("boooply_tenant_abc"));
        assert_eq!(config.base_url(), "https://api.example.com/");
        assert_eq!(config.organization_id(), Some("org-1"));
        assert_eq!(config.platform_key(), Some("platform_secret"));
        assert_eq!(config.test_mode, TestMode::Platform);
        assert_eq!(config.log_level_filter, LevelFilter::Debug);
    }

    #[test]
    fn test_rejects_unknown_test_mode() {
        let result = Config::try_parse_from(["smoke-test", "--test-mode", "galaxy"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_client_config_carries_values() {
        let config = Config::try_parse_from([
            "smoke-test",
            "--api-key",
            "key",
            "--base-url",
            "https://api.example.com",
        ])
        .unwrap();

        let client_config = config.client_config();
        assert_eq!(client_config.api_key.as_deref(), Some("key"));
        assert_eq!(
            client_config.base_url.as_deref(),
            Some("https://api.example.com")
        );

        let platform_config = config.platform_config();
        assert_eq!(
            platform_config.base_url.as_deref(),
            Some("https://api.example.com")
        );
    }

    #[test]
    fn test_test_mode_round_trips_through_display() {
        for mode in [TestMode::Organization, TestMode::Platform] {
            assert_eq!(mode.to_string().parse::<TestMode>(), Ok(mode));
        }
        assert_eq!("Galaxy".parse::<TestMode>(), Err(TestModeParseError));
    }
}
