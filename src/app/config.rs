// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use std::convert::TryFrom;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::ArgMatches;

use crate::nameserver::NameServerConfig;
use crate::output::json::JsonOptions;
use crate::output::table::TableOptions;
use crate::output::{OutputConfig, OutputType};
use crate::RecordType;

#[derive(Debug)]
pub struct AppConfig {
    pub domains: Vec<String>,
    pub record_types: Vec<RecordType>,
    pub server: Option<NameServerConfig>,
    pub timeout: Option<Duration>,
    pub domains_file_path: Option<PathBuf>,
    pub output: OutputType,
    pub output_config: OutputConfig,
    pub output_file_path: Option<PathBuf>,
    pub quiet: bool,
}

impl TryFrom<&ArgMatches> for AppConfig {
    type Error = anyhow::Error;

    fn try_from(args: &ArgMatches) -> std::result::Result<Self, Self::Error> {
        let output = args
            .get_one::<String>("output")
            .map(|x| OutputType::from_str(x).context("failed to parse output type"))
            .unwrap_or(Ok(OutputType::Table))?;
        let config = AppConfig {
            domains: args
                .get_many::<String>("domains")
                .map(|xs| xs.cloned().collect())
                .unwrap_or_default(),
            record_types: record_types(args)?,
            server: args
                .get_one::<String>("server")
                .map(|x| NameServerConfig::from_str(x).context("failed to parse DNS server"))
                .transpose()?,
            timeout: args.get_one::<u64>("timeout").map(|x| Duration::from_secs(*x)),
            domains_file_path: args.get_one::<String>("file").map(PathBuf::from),
            output_config: output_config(output, args)?,
            output,
            output_file_path: args.get_one::<String>("output-file").map(PathBuf::from),
            quiet: args.get_flag("quiet"),
        };

        Ok(config)
    }
}

fn record_types(args: &ArgMatches) -> Result<Vec<RecordType>> {
    if args.get_flag("all-types") {
        return Ok(RecordType::all());
    }
    let record_types = args
        .get_many::<String>("record-types")
        .context("No record types for name lookup specified")?;
    parse_record_types(record_types.map(String::as_str))
}

fn parse_record_types<'a, I: Iterator<Item = &'a str>>(record_types: I) -> Result<Vec<RecordType>> {
    let record_types: Vec<_> = record_types.map(RecordType::from_str).collect();
    let record_types: std::result::Result<Vec<_>, _> = record_types.into_iter().collect();
    record_types.context("Failed to parse record type")
}

fn output_config(output_type: OutputType, args: &ArgMatches) -> Result<OutputConfig> {
    let options: Vec<&str> = args
        .get_many::<String>("output-options")
        .map(|xs| xs.map(String::as_str).collect())
        .unwrap_or_default();
    parse_output_options(output_type, options)
}

fn parse_output_options(output_type: OutputType, options: Vec<&str>) -> Result<OutputConfig> {
    match output_type {
        OutputType::Json => {
            let options = JsonOptions::try_from(options).context("failed to parse json options")?;
            Ok(OutputConfig::json(options))
        }
        OutputType::Table => {
            let options = TableOptions::try_from(options).context("failed to parse table options")?;
            Ok(OutputConfig::table(options))
        }
    }
}
