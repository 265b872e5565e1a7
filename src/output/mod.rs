// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use std::convert::TryFrom;
use std::fmt;
use std::io::Write;
use std::str::FromStr;

use crate::resolver::Lookups;
use crate::{Error, Result};

pub mod json;
pub mod styles;
pub mod table;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputType {
    Json,
    Table,
}

impl FromStr for OutputType {
    type Err = Error;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value {
            "json" => Ok(OutputType::Json),
            "table" => Ok(OutputType::Table),
            _ => Err(Error::ParserError {
                what: value.to_string(),
                to: "OutputType",
                why: "invalid output type".to_string(),
            }),
        }
    }
}

impl TryFrom<&str> for OutputType {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        OutputType::from_str(value)
    }
}

impl fmt::Display for OutputType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            OutputType::Json => f.write_str("json"),
            OutputType::Table => f.write_str("table"),
        }
    }
}

pub trait OutputFormat<T> {
    fn output<W: Write>(&self, writer: &mut W, data: &T) -> Result<()>;
}

#[derive(Debug)]
pub enum OutputConfig {
    Json { format: json::JsonFormat },
    Table { format: table::TableFormat },
}

impl OutputConfig {
    pub fn json(opts: json::JsonOptions) -> Self {
        OutputConfig::Json {
            format: json::JsonFormat::new(opts),
        }
    }

    pub fn table(opts: table::TableOptions) -> Self {
        OutputConfig::Table {
            format: table::TableFormat::new(opts),
        }
    }

    pub fn output_type(&self) -> OutputType {
        match self {
            OutputConfig::Json { .. } => OutputType::Json,
            OutputConfig::Table { .. } => OutputType::Table,
        }
    }
}

#[derive(Debug)]
pub struct Output<'a> {
    config: &'a OutputConfig,
}

impl Output<'_> {
    pub fn new(config: &OutputConfig) -> Output<'_> {
        Output { config }
    }
}

impl OutputFormat<Lookups> for Output<'_> {
    fn output<W: Write>(&self, writer: &mut W, data: &Lookups) -> Result<()> {
        match self.config {
            OutputConfig::Json { format } => format.output(writer, data),
            OutputConfig::Table { format } => format.output(writer, data),
        }
    }
}
