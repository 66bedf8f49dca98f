use crate::config::Config;
use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

/// Targets of the HTTP client stack. Their debug output drowns out the SDK's
/// own request logging, so they only show up at Trace.
const HTTP_STACK_TARGETS: &[&str] = &["reqwest", "hyper", "hyper_util", "rustls", "h2"];

pub struct Logger {}

impl Logger {
    /// Installs the global terminal logger at the configured level.
    ///
    /// Fails only if another logger was already installed.
    pub fn init_logger(config: &Config) -> Result<(), log::SetLoggerError> {
        let level = config.log_level_filter;
        TermLogger::init(
            level,
            Self::log_config(Self::hides_http_stack(level)),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        )
    }

    fn hides_http_stack(level: LevelFilter) -> bool {
        level < LevelFilter::Trace
    }

    fn log_config(hide_http_stack: bool) -> simplelog::Config {
        let mut builder = ConfigBuilder::new();
        builder.set_time_format_rfc3339();

        if hide_http_stack {
            for target in HTTP_STACK_TARGETS {
                builder.add_filter_ignore_str(target);
            }
        }

        builder.build()
    }
}
