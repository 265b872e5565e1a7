// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use std::convert::TryFrom;
use std::env;

use anyhow::{Context, Result};
use clap::ArgMatches;
use tracing::{debug, error, info};

use dns_lookup::app::logging::Logging;
use dns_lookup::app::{cli_parser, run, AppConfig, ExitStatus};
use dns_lookup::output::styles;

#[tokio::main]
async fn main() {
    let args = match cli_parser::create_parser().try_get_matches() {
        Ok(args) => args,
        Err(err) => {
            // Help and version requests are reported as errors by clap, but are not failures
            let status = if err.use_stderr() {
                ExitStatus::CliParsingFailed
            } else {
                ExitStatus::Ok
            };
            let _ = err.print();
            std::process::exit(status as i32);
        }
    };

    setup_terminal(&args);

    if let Err(err) = start_logging_for(&args) {
        eprintln!("{} Failed to initialize logging: {:#}", styles::error_prefix(), err);
        std::process::exit(ExitStatus::UnrecoverableError as i32);
    }
    debug!("Parsed args and set up logging.");

    let res = do_main(&args).await;
    let exit_status = match res {
        Ok(exit_status) => exit_status,
        Err(err) => {
            error!("Failed: {:#}", err);
            eprintln!("{} Error: {:#}", styles::error_prefix(), err);
            ExitStatus::UnrecoverableError
        }
    };
    info!("Exiting with status {:?}.", exit_status);

    std::process::exit(exit_status as i32);
}

fn setup_terminal(args: &ArgMatches) {
    if args.get_flag("no-color") {
        styles::no_color_mode();
    }
    if args.get_flag("ascii") {
        styles::ascii_mode();
    }
}

fn start_logging_for(args: &ArgMatches) -> Result<()> {
    let logging = Logging::new(
        args.get_count("v"),
        env::var_os("RUST_LOG"),
        !args.get_flag("no-color"),
    );
    logging.start()
}

async fn do_main(args: &ArgMatches) -> Result<ExitStatus> {
    let app_config = match AppConfig::try_from(args).context("Failed to parse configuration") {
        Ok(app_config) => app_config,
        Err(err) => {
            eprintln!("{} {:#}", styles::error_prefix(), err);
            return Ok(ExitStatus::ConfigParsingFailed);
        }
    };
    debug!("Parsed app config: {:?}", app_config);

    run::run(&app_config).await
}
