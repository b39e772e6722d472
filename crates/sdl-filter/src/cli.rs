use crate::filter_cmd::FilterCmd;

#[derive(clap::Parser, Debug)]
#[command(name = "sdl-filter", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) cmd: Option<Command>,

    #[arg(
        global=true,
        help="Enable verbose output.",
        long,
        short='v',
    )]
    pub verbose: bool,
}
impl Cli {
    /// The level to log at, from `-v` first and the `LOG_LEVEL` environment
    /// variable second, along with a warning when `LOG_LEVEL` is invalid.
    pub(crate) fn log_level(&self) -> (tracing::Level, Option<String>) {
        if self.verbose {
            return (tracing::Level::DEBUG, None);
        }

        let Ok(env_val) = std::env::var("LOG_LEVEL") else {
            return (DEFAULT_LOG_LEVEL, None);
        };
        match env_val.trim() {
            "DEBUG" | "debug" | "VERBOSE" | "verbose" => (tracing::Level::DEBUG, None),
            "INFO" | "info" => (tracing::Level::INFO, None),
            "TRACE" | "trace" => (tracing::Level::TRACE, None),
            "WARN" | "warn" => (tracing::Level::WARN, None),
            other => (DEFAULT_LOG_LEVEL, Some(format!(
                "Invalid `LOG_LEVEL` environment variable value: `{other}`",
            ))),
        }
    }
}

const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;

#[derive(Debug, clap::Subcommand)]
pub(crate) enum Command {
    /// Filter a schema file into a destination file.
    Filter(Box<FilterCmd>),
}
