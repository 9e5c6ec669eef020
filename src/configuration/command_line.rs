use crate::configuration::constants::cargo_env::CARGO_PKG_NAME;
use crate::time::timeunit::parse_delay;
use clap::arg_enum;
use log::LevelFilter;
use std::path::PathBuf;
use std::time::Duration;
use structopt::StructOpt;

arg_enum! {
    #[derive(Debug)]
    pub enum LogLevel {
        Off, Error, Warn, Info, Debug, Trace,
    }
}

/// Publish Robot Framework results in TestRail
#[derive(StructOpt, Debug)]
#[structopt(name = CARGO_PKG_NAME)]
pub struct Opt {
    /// XML output results of Robot Framework
    #[structopt(parse(from_os_str))]
    pub report: PathBuf,

    /// TestRail configuration file
    #[structopt(long = "tr-config", parse(from_os_str))]
    pub config: Option<PathBuf>,

    /// API key of TestRail account with write access
    #[structopt(long = "tr-password", env = "TESTRAIL_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Indicate a version in Test Case result
    #[structopt(long = "tr-version")]
    pub version: Option<String>,

    /// Identifier of Test Run, that appears in TestRail
    #[structopt(name = "tr-run-id", long = "tr-run-id", conflicts_with = "tr-plan-id")]
    pub run_id: Option<u64>,

    /// Identifier of Test Plan, that appears in TestRail
    #[structopt(name = "tr-plan-id", long = "tr-plan-id")]
    pub plan_id: Option<u64>,

    /// Run script but don't publish results
    #[structopt(long)]
    pub dryrun: bool,

    /// Do not publish results of "blocked" testcases in TestRail
    #[structopt(long = "tr-dont-publish-blocked")]
    pub dont_publish_blocked: bool,

    /// Only publish results of testcases that are part of the Test Run
    #[structopt(long = "tr-check-membership")]
    pub check_membership: bool,

    /// Send all results of a Test Run in a single request
    #[structopt(long = "tr-bulk")]
    pub bulk: bool,

    /// Pause between two TestRail requests, e.g. 250ms or 1s
    #[structopt(long = "tr-delay", default_value = "250ms", parse(try_from_str = parse_delay))]
    pub delay: Duration,

    /// Sets a logging level
    #[structopt(case_insensitive = true, long, short = "L", possible_values = &LogLevel::variants(), env = "LOG_LEVEL")]
    pub logging: Option<LogLevel>,

    /// File to which application will write logs
    #[structopt(long, short = "O", env = "LOG_OUTPUT_FILE")]
    pub log_output_file: Option<PathBuf>,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_options() {
        let opt = Opt::from_iter_safe(&[
            "robot2testrail",
            "output.xml",
            "--tr-config",
            "testrail.cfg",
            "--tr-run-id",
            "12",
            "--tr-version",
            "1.0.2",
            "--tr-dont-publish-blocked",
        ])
        .unwrap();

        assert_eq!(opt.report, PathBuf::from("output.xml"));
        assert_eq!(opt.config, Some(PathBuf::from("testrail.cfg")));
        assert_eq!(opt.run_id, Some(12));
        assert_eq!(opt.plan_id, None);
        assert_eq!(opt.version.as_deref(), Some("1.0.2"));
        assert!(opt.dont_publish_blocked);
        assert!(!opt.dryrun);
        assert_eq!(opt.delay, Duration::from_millis(250));
    }

    #[test]
    fn test_run_and_plan_are_exclusive() {
        let opt = Opt::from_iter_safe(&[
            "robot2testrail",
            "output.xml",
            "--tr-run-id",
            "12",
            "--tr-plan-id",
            "3",
        ]);

        assert!(opt.is_err());
    }

    #[test]
    fn test_delay_option() {
        let opt = Opt::from_iter_safe(&["robot2testrail", "output.xml", "--dryrun", "--tr-delay", "1s"])
            .unwrap();

        assert!(opt.dryrun);
        assert_eq!(opt.delay, Duration::from_secs(1));

        let opt = Opt::from_iter_safe(&["robot2testrail", "output.xml", "--tr-delay", "soon"]);
        assert!(opt.is_err());
    }
}
