// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use std::fmt;
use std::time::Duration;

use crate::app::AppConfig;
use crate::output::styles;
use crate::output::OutputType;
use crate::resolver::{DnsResolver, MultiQuery};
use crate::statistics::Statistics;

#[derive(Debug, Default)]
pub struct ConsoleOpts {
    quiet: bool,
}

impl From<&AppConfig> for ConsoleOpts {
    fn from(app_config: &AppConfig) -> Self {
        // Informational lines would corrupt machine readable output on stdout
        ConsoleOpts {
            quiet: app_config.quiet || app_config.output == OutputType::Json,
        }
    }
}

#[derive(Debug)]
pub struct Console {
    opts: ConsoleOpts,
}

impl Console {
    pub fn new(opts: ConsoleOpts) -> Console {
        Console { opts }
    }

    pub fn print_resolver_opts(&self, resolver: &DnsResolver) {
        if self.not_quiet() {
            let opts = resolver.opts();
            self.caption(format!(
                "{}: nameserver={}, retries={}, timeout={}",
                Fmt::emph("Options"),
                resolver.name(),
                opts.retries,
                opts.timeout
                    .map(|x| humantime::format_duration(x).to_string())
                    .unwrap_or_else(|| "default".to_string()),
            ));
        }
    }

    pub fn print_lookup_estimates(&self, query: &MultiQuery) {
        if self.not_quiet() {
            let num_names = query.num_names();
            let num_record_types = query.num_record_types();
            let num_requests = num_names * num_record_types;

            self.info(format!(
                "Sending {} {} for {} {} of {} {}.",
                num_requests,
                plural(num_requests, "request", "requests"),
                num_record_types,
                plural(num_record_types, "record type", "record types"),
                num_names,
                plural(num_names, "name", "names"),
            ));
        }
    }

    pub fn print_statistics<'a, T: Statistics<'a>>(&self, data: &'a T, total_run_time: Duration)
    where
        <T as Statistics<'a>>::StatsOut: fmt::Display,
    {
        if self.not_quiet() {
            let statistics = data.statistics();
            // Sub-millisecond precision is noise for a run time
            let total_run_time = Duration::from_millis(total_run_time.as_millis() as u64);
            println!("{}", statistics);
            self.info(format!(
                "Finished within {} of total run time.",
                humantime::format_duration(total_run_time)
            ));
        }
    }

    pub fn info<T: AsRef<str>>(&self, str: T) {
        println!("{} {}", styles::info_prefix(), str.as_ref());
    }

    pub fn attention<T: AsRef<str>>(&self, str: T) {
        println!("{} {}", Fmt::attention(styles::attention_prefix()), str.as_ref());
    }

    pub fn caption<T: AsRef<str>>(&self, str: T) {
        println!("{}", Fmt::emph(format!("{} {}", styles::caption_prefix(), str.as_ref())));
    }

    /// Errors are always printed to stderr, even in quiet mode.
    pub fn error<T: AsRef<str>>(&self, str: T) {
        eprintln!("{} {}", Fmt::error(styles::error_prefix()), str.as_ref());
    }

    pub fn ok<T: AsRef<str>>(&self, str: T) {
        println!("{} {}", Fmt::ok(styles::ok_prefix()), str.as_ref());
    }

    pub fn not_quiet(&self) -> bool {
        !self.opts.quiet
    }
}

fn plural<'a>(count: usize, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 {
        singular
    } else {
        plural
    }
}

pub struct Fmt {}

impl Fmt {
    pub fn emph<T: fmt::Display>(item: T) -> yansi::Painted<T> {
        yansi::Painted {
            value: item,
            style: styles::EMPH,
        }
    }

    pub fn attention<T: fmt::Display>(item: T) -> yansi::Painted<T> {
        yansi::Painted {
            value: item,
            style: styles::ATTENTION,
        }
    }

    pub fn error<T: fmt::Display>(item: T) -> yansi::Painted<T> {
        yansi::Painted {
            value: item,
            style: styles::ERROR,
        }
    }

    pub fn ok<T: fmt::Display>(item: T) -> yansi::Painted<T> {
        yansi::Painted {
            value: item,
            style: styles::OK,
        }
    }
}
