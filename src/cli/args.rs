use crate::constants::verbosity;
use clap::Parser;
use log::LevelFilter;

/// CLI arguments for pds-skeleton.
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Name of the project; the skeleton is created in a directory of that name.
    #[arg(value_name = "PROJECT_NAME")]
    pub project_name: Option<String>,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Parse command line arguments, exiting on malformed input or `--help`/`--version`.
///
/// A missing project name is not a parse error; it is reported when the project is
/// resolved from the returned arguments.
pub fn get_args() -> Args {
    Args::try_parse().unwrap_or_else(|e| e.exit())
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_verbose_flags_to_log_filters() {
        assert_eq!(get_log_level_from_verbose(verbosity::OFF), LevelFilter::Error);
        assert_eq!(get_log_level_from_verbose(verbosity::INFO), LevelFilter::Info);
        assert_eq!(get_log_level_from_verbose(verbosity::DEBUG), LevelFilter::Debug);
        assert_eq!(get_log_level_from_verbose(verbosity::TRACE), LevelFilter::Trace);
        assert_eq!(get_log_level_from_verbose(verbosity::TRACE + 1), LevelFilter::Trace);
    }

    #[test]
    fn parses_project_name() {
        let args = Args::parse_from(["pds-skeleton", "test_project"]);
        assert_eq!(args.project_name.as_deref(), Some("test_project"));
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn project_name_is_optional_at_parse_time() {
        let args = Args::try_parse_from(["pds-skeleton"]).unwrap();
        assert!(args.project_name.is_none());
    }

    #[test]
    fn parses_verbose_count() {
        let args = Args::parse_from(["pds-skeleton", "-vv", "test_project"]);
        assert_eq!(args.verbose, 2);
        assert_eq!(args.project_name.as_deref(), Some("test_project"));
    }

    #[test]
    fn rejects_extra_positionals() {
        assert!(Args::try_parse_from(["pds-skeleton", "one", "two"]).is_err());
    }
}
