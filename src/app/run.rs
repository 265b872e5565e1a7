// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use std::io::{self, Write};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;

use crate::app::console::{Console, ConsoleOpts};
use crate::app::{AppConfig, ExitStatus};
use crate::domains::{read_domains, write_output};
use crate::output::{Output, OutputFormat, OutputType};
use crate::resolver::{self, DnsResolver, Lookups, MultiQuery, Resolve, ResolverConfig, ResolverOpts};

pub async fn run(config: &AppConfig) -> Result<ExitStatus> {
    let console = Console::new(ConsoleOpts::from(config));

    let domains = match load_domains(config) {
        Ok(domains) => domains,
        Err(err) => {
            console.error(format!("{:#}", err));
            return Ok(ExitStatus::ConfigParsingFailed);
        }
    };
    if domains.is_empty() {
        console.error("No domains to look up; pass domain names as arguments or use --file.");
        return Ok(ExitStatus::CliParsingFailed);
    }

    let resolver_config = config
        .server
        .clone()
        .map(ResolverConfig::from)
        .unwrap_or_else(ResolverConfig::system);
    let resolver_opts = ResolverOpts {
        timeout: config.timeout,
        ..Default::default()
    };
    let resolver = match DnsResolver::new(resolver_config, resolver_opts) {
        Ok(resolver) => resolver,
        Err(err) => {
            console.error(format!("Failed to create resolver: {}", err));
            return Ok(ExitStatus::ConfigParsingFailed);
        }
    };
    console.print_resolver_opts(&resolver);

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    lookup_and_output(config, &console, &resolver, domains, &mut handle).await
}

/// Positional domains first, followed by the domains read from the domains file.
fn load_domains(config: &AppConfig) -> Result<Vec<String>> {
    let mut domains = config.domains.clone();
    if let Some(path) = &config.domains_file_path {
        let from_file = read_domains(path).context("Failed to load domains")?;
        info!("Read {} domains from '{}'.", from_file.len(), path.display());
        domains.extend(from_file);
    }

    Ok(domains)
}

pub async fn lookup_and_output<R: Resolve, W: Write>(
    config: &AppConfig,
    console: &Console,
    resolver: &R,
    domains: Vec<String>,
    writer: &mut W,
) -> Result<ExitStatus> {
    let query = MultiQuery::new(domains, config.record_types.clone());
    console.print_lookup_estimates(&query);

    info!("Running lookups.");
    let start_time = Instant::now();
    let lookups: Lookups = resolver::lookup(resolver, query).await;
    let total_run_time = start_time.elapsed();
    info!("Finished lookups.");

    output(config, &lookups, writer)?;

    if config.output == OutputType::Table {
        console.print_statistics(&lookups, total_run_time);
    }

    if lookups.has_errors() {
        if console.not_quiet() {
            console.attention(format!("{} of {} lookups failed.", lookups.num_err(), lookups.len()));
        }
        Ok(ExitStatus::Failed)
    } else {
        if console.not_quiet() {
            console.ok("All lookups succeeded.");
        }
        Ok(ExitStatus::Ok)
    }
}

fn output<W: Write>(config: &AppConfig, lookups: &Lookups, writer: &mut W) -> Result<()> {
    let output = Output::new(&config.output_config);
    let mut buf = Vec::new();
    output
        .output(&mut buf, lookups)
        .context("Failed to render lookup results")?;

    match &config.output_file_path {
        Some(path) => {
            write_output(path, &buf).context("Failed to write results")?;
            info!("Wrote results to '{}'.", path.display());
        }
        None => {
            writer.write_all(&buf).context("Failed to print results")?;
            writer.flush()?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::convert::TryFrom;

    use serde_json::Value;
    use spectral::prelude::*;

    use super::*;
    use crate::app::cli_parser::create_parser;
    use crate::resolver::{Error as LookupError, StaticResolver};
    use crate::RecordType;

    fn config_from(args: &[&str]) -> AppConfig {
        let mut all_args = vec!["dns_lookup", "--quiet"];
        all_args.extend_from_slice(args);
        let matches = create_parser().try_get_matches_from(all_args).unwrap();
        AppConfig::try_from(&matches).unwrap()
    }

    fn resolver() -> StaticResolver {
        StaticResolver::new()
            .with_response("example.com", RecordType::A, vec!["93.184.216.34"])
            .with_response("example.com", RecordType::MX, vec!["0 ."])
            .with_error("broken.example", RecordType::A, LookupError::ServerFailure)
    }

    async fn run_with(config: &AppConfig, domains: Vec<String>) -> (ExitStatus, String) {
        crate::utils::tests::logging::init();
        let console = Console::new(ConsoleOpts::from(config));
        let mut buf = Vec::new();
        let status = lookup_and_output(config, &console, &resolver(), domains, &mut buf)
            .await
            .unwrap();
        (status, String::from_utf8(buf).unwrap())
    }

    #[tokio::test]
    async fn all_lookups_succeed() {
        let config = config_from(&["example.com", "-t", "A,MX"]);
        let domains = load_domains(&config).unwrap();

        let (status, out) = run_with(&config, domains).await;

        assert_that(&status).is_equal_to(ExitStatus::Ok);
        assert_that(&out.lines().count()).is_equal_to(3);
        assert_that(&out).contains("93.184.216.34");
    }

    #[tokio::test]
    async fn partial_failure_prints_all_rows() {
        let config = config_from(&["-o", "json", "broken.example", "example.com"]);
        let domains = load_domains(&config).unwrap();

        let (status, out) = run_with(&config, domains).await;
        let parsed: Vec<Value> = serde_json::from_str(&out).unwrap();

        assert_that(&status).is_equal_to(ExitStatus::Failed);
        assert_that(&parsed).has_length(2);
        assert_that(&parsed[0]["domain"].as_str()).is_some().is_equal_to("broken.example");
        assert_that(&parsed[0]["result"].as_array().map(Vec::len)).is_some().is_equal_to(0);
        assert_that(&parsed[0]["error"].as_str()).is_some().is_equal_to("nameserver responded with server failure");
        assert_that(&parsed[1]["error"].is_null()).is_true();
    }

    #[test]
    fn file_domains_follow_positional_domains() {
        let path = std::env::temp_dir().join(format!("dns_lookup-run-{}.txt", std::process::id()));
        std::fs::write(&path, "# comment\nexample.org\n\nexample.com\n").unwrap();
        let config = config_from(&["example.net", "-f", path.to_str().unwrap()]);

        let domains = load_domains(&config);
        let _ = std::fs::remove_file(&path);

        assert_that(&domains)
            .is_ok()
            .is_equal_to(vec!["example.net".to_string(), "example.org".to_string(), "example.com".to_string()]);
    }

    #[tokio::test]
    async fn missing_domains_file_aborts_before_lookups() {
        let config = config_from(&["example.com", "-f", "/nonexistent/dns_lookup/domains.txt"]);

        let status = run(&config).await.unwrap();

        assert_that(&status).is_equal_to(ExitStatus::ConfigParsingFailed);
    }

    #[tokio::test]
    async fn output_file_receives_results() {
        let path = std::env::temp_dir()
            .join(format!("dns_lookup-out-{}", std::process::id()))
            .join("results.txt");
        let config = config_from(&["example.com", "--output-file", path.to_str().unwrap()]);

        let (status, out) = run_with(&config, vec!["example.com".to_string()]).await;
        let written = std::fs::read_to_string(&path);
        let _ = std::fs::remove_dir_all(path.parent().unwrap());

        assert_that(&status).is_equal_to(ExitStatus::Ok);
        assert_that(&out.is_empty()).is_true();
        assert_that(&written).is_ok().contains("93.184.216.34");
    }
}
