// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use clap::builder::PossibleValuesParser;
use clap::{crate_name, value_parser, Arg, ArgAction, Command};

pub static SUPPORTED_RECORD_TYPES: &[&str] = &["A", "AAAA", "MX", "CNAME", "NS", "TXT", "SOA"];

pub static SUPPORTED_OUTPUT_FORMATS: &[&str] = &["table", "json"];

static EXAMPLES: &str = "Examples:
  dns_lookup google.com                    # Basic A record lookup
  dns_lookup google.com --type MX          # MX record lookup
  dns_lookup google.com facebook.com       # Multiple domains
  dns_lookup --file domains.txt            # Bulk processing
  dns_lookup google.com --all-types        # All record types
  dns_lookup google.com --server 8.8.8.8   # Custom DNS server
  dns_lookup google.com --timeout 2        # Gives up on a query after 2 seconds
  dns_lookup google.com --output json      # JSON output format";

pub fn create_parser() -> Command {
    Command::new(crate_name!())
        .version(env!("CARGO_PKG_VERSION"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .after_help(EXAMPLES)
        .arg(
            Arg::new("domains")
                .index(1)
                .value_name("DOMAIN")
                .num_args(0..)
                .action(ArgAction::Append)
                .help("Domain names to query"),
        )
        .arg(
            Arg::new("record-types")
                .short('t')
                .long("type")
                .value_name("RECORD TYPE")
                .action(ArgAction::Append)
                .value_delimiter(',')
                .default_value("A")
                .value_parser(PossibleValuesParser::new(SUPPORTED_RECORD_TYPES.iter().copied()))
                .ignore_case(true)
                .conflicts_with("all-types")
                .help("Sets record types to query"),
        )
        .arg(
            Arg::new("all-types")
                .long("all-types")
                .action(ArgAction::SetTrue)
                .help("Queries all supported record types"),
        )
        .arg(
            Arg::new("server")
                .short('s')
                .long("server")
                .value_name("IP ADDR[:PORT]")
                .help("Uses this DNS server instead of the system's nameservers")
                .long_help(
                    "Uses this DNS server instead of the system's nameservers. The port defaults to 53.
Examples:
* 8.8.8.8
* 127.0.0.1:5353
* [::1]:53",
                ),
        )
        .arg(
            Arg::new("timeout")
                .long("timeout")
                .value_name("SECONDS")
                .value_parser(value_parser!(u64).range(1..))
                .help("Sets timeout in seconds for responses; defaults to the resolver library's timeout"),
        )
        .arg(
            Arg::new("file")
                .short('f')
                .long("file")
                .value_name("FILE")
                .help("Adds domains from file, one domain per line; empty lines and lines starting with '#' are ignored"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FORMAT")
                .default_value("table")
                .value_parser(PossibleValuesParser::new(SUPPORTED_OUTPUT_FORMATS.iter().copied()))
                .help("Sets the output format for result presentation"),
        )
        .arg(
            Arg::new("output-options")
                .long("output-options")
                .value_name("OPTIONS")
                .action(ArgAction::Append)
                .value_delimiter(',')
                .help("Sets output options")
                .long_help(
                    "* Json: 'pretty': Prettifies output
* Table: 'condensed': Omits the header line",
                ),
        )
        .arg(
            Arg::new("output-file")
                .long("output-file")
                .value_name("FILE")
                .help("Writes results to file instead of stdout"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .help("Does not print anything but results"),
        )
        // This is a special option that is not reflected in AppConfig, but is checked during
        // setup in `dns_lookup.rs`.
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .action(ArgAction::SetTrue)
                .help("Disables colorful output"),
        )
        // This is a special option that is not reflected in AppConfig, but is checked during
        // setup in `dns_lookup.rs` and sets the global AtomicBool `dns_lookup::output::styles::ASCII_MODE`.
        .arg(
            Arg::new("ascii")
                .long("ascii")
                .action(ArgAction::SetTrue)
                .help("Uses only ASCII compatible characters for output"),
        )
        .arg(
            Arg::new("v")
                .short('v')
                .action(ArgAction::Count)
                .help("Sets the level of verbosity"),
        )
}

#[cfg(test)]
mod tests {
    use spectral::prelude::*;

    use super::*;

    #[test]
    fn parser_is_consistent() {
        create_parser().debug_assert();
    }

    #[test]
    fn record_types_are_comma_separated() {
        let args = create_parser().try_get_matches_from(["dns_lookup", "example.com", "-t", "A,mx"]);

        let types: Vec<String> = args
            .unwrap()
            .get_many::<String>("record-types")
            .unwrap()
            .cloned()
            .collect();

        assert_that(&types).is_equal_to(vec!["A".to_string(), "mx".to_string()]);
    }

    #[test]
    fn unsupported_record_type_is_rejected() {
        let args = create_parser().try_get_matches_from(["dns_lookup", "example.com", "--type", "SRV"]);

        assert_that(&args.is_err()).is_true();
    }

    #[test]
    fn all_types_conflicts_with_explicit_type() {
        let args = create_parser().try_get_matches_from(["dns_lookup", "example.com", "--type", "MX", "--all-types"]);

        assert_that(&args.is_err()).is_true();
    }
}
