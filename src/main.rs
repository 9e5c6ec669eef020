#[macro_use]
extern crate log;

#[macro_use]
extern crate derive_builder;

#[macro_use]
extern crate lazy_static;

mod app;
mod configuration;
mod connection;
mod model;
mod reporter;
mod robot;
mod testrail;
mod time;

use colored::Colorize;
use log::LevelFilter;
use signal_hook::{iterator::Signals, SIGINT};
use std::{path::PathBuf, process::exit, thread};
use structopt::StructOpt;

use self::app::{PublishError, PublishOptions, Publisher, Target};
use self::configuration::deserialize::secret::masked;
use self::configuration::{command_line::Opt, settings::Settings};
use self::connection::http::HttpTransport;
use self::reporter::{console::ConsoleReporter, Outcome, Reporter};
use self::testrail::TestRailApi;

fn main() {
    let mut options = Opt::from_args();

    let level = options
        .logging
        .take()
        .map(LevelFilter::from)
        .unwrap_or(LevelFilter::Info);
    if let Err(e) = init_logging(level, &options.log_output_file) {
        eprintln!("Failed to initialize logging: {}", e);
        exit(1);
    }

    match Signals::new(&[SIGINT]) {
        Ok(signals) => {
            thread::spawn(move || {
                for sig in signals.forever() {
                    info!("Received signal {:?}, stopping", sig);
                    exit(130);
                }
            });
        }
        Err(e) => warn!("Cannot listen for interruption: {}", e),
    }

    if run(options) {
        println!("{}", "OK".green());
    } else {
        println!("{}", "ERROR".bright_red());
        exit(1);
    }
}

/// Target and configuration file of a publication, `None` for a dry run.
fn destination(options: &Opt) -> Result<Option<(Target, PathBuf)>, PublishError> {
    if options.dryrun {
        return Ok(None);
    }
    let target = Target::from_ids(options.run_id, options.plan_id)?;
    let config = options.config.clone().ok_or(PublishError::MissingConfig)?;
    Ok(Some((target, config)))
}

fn run(options: Opt) -> bool {
    let destination = match destination(&options) {
        Ok(destination) => destination,
        Err(e) => {
            error!("{}", e);
            return false;
        }
    };

    let results = match robot::extract_file(&options.report) {
        Ok(results) => results,
        Err(e) => {
            error!(
                "Failed to read Robot Framework results from {}: {}",
                options.report.display(),
                e
            );
            return false;
        }
    };
    info!("{} result(s) found in {}", results.len(), options.report.display());

    let reporter = ConsoleReporter::default();
    let (target, config) = match destination {
        Some(destination) => destination,
        None => {
            for result in &results {
                reporter.report(result, Outcome::Extracted);
            }
            return true;
        }
    };

    let settings = match Settings::from(config) {
        Ok(settings) => settings,
        Err(e) => {
            error!("Failed to load TestRail configuration {}", e);
            return false;
        }
    };
    let credentials = match settings.api.credentials(options.password) {
        Ok(credentials) => credentials,
        Err(e) => {
            error!("Failed to load TestRail configuration {}", e);
            return false;
        }
    };
    debug!(
        "Connection info: URL={}, EMAIL={}, PASSWORD={}",
        settings.api.url,
        credentials.user,
        masked(&credentials.password)
    );

    let transport = match HttpTransport::new(&settings.api.url, credentials) {
        Ok(transport) => transport,
        Err(e) => {
            error!("Cannot create TestRail client: {}", e);
            return false;
        }
    };
    let api = TestRailApi::new(transport);
    let publish_options = PublishOptions {
        version: options.version,
        exclude_blocked: options.dont_publish_blocked,
        check_membership: options.check_membership,
        bulk: options.bulk,
        delay: options.delay,
    };

    match Publisher::new(&api, &reporter, publish_options).publish(target, &results) {
        Ok(summary) => {
            info!(
                "{} result(s) published in {}, {} failure(s)",
                summary.published(),
                target,
                summary.failures()
            );
            true
        }
        Err(e) => {
            error!("{}", e);
            false
        }
    }
}

fn init_logging(level: LevelFilter, output: &Option<PathBuf>) -> Result<(), fern::InitError> {
    let mut dispatcher = fern::Dispatch::new()
        // Perform allocation-free log formatting
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}:{}][{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.target(),
                record
                    .line()
                    .map(|v| v.to_string())
                    .unwrap_or_else(|| "".to_owned()),
                record.level(),
                message
            ))
        })
        .chain(fern::Dispatch::new().level(level).chain(std::io::stdout()));

    if let Some(log_file) = output {
        dispatcher = dispatcher.chain(
            fern::Dispatch::new()
                .level(LevelFilter::Debug.max(level))
                .chain(fern::log_file(log_file)?),
        );
    }
    dispatcher.apply()?;
    info!("Logging level {} enabled", level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(args: &[&str]) -> Opt {
        let mut argv = vec!["robot2testrail", "missing-output.xml"];
        argv.extend_from_slice(args);
        Opt::from_iter_safe(argv).unwrap()
    }

    #[test]
    fn test_missing_config_is_rejected_before_reading_the_report() {
        assert!(matches!(
            destination(&options(&["--tr-run-id", "1"])),
            Err(PublishError::MissingConfig)
        ));
        assert!(!run(options(&["--tr-run-id", "1"])));
    }

    #[test]
    fn test_missing_target_is_rejected() {
        assert!(matches!(
            destination(&options(&["--tr-config", "testrail.cfg"])),
            Err(PublishError::MissingTarget)
        ));
    }

    #[test]
    fn test_dry_run_needs_no_destination() {
        assert!(matches!(destination(&options(&["--dryrun"])), Ok(None)));
    }

    #[test]
    fn test_destination() {
        let destination =
            destination(&options(&["--tr-plan-id", "58", "--tr-config", "testrail.cfg"])).unwrap();
        assert_eq!(
            destination,
            Some((Target::Plan(58), PathBuf::from("testrail.cfg")))
        );
    }
}
