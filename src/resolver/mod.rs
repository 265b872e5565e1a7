// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

use hickory_resolver::config::NameServerConfigGroup;
use hickory_resolver::name_server::TokioConnectionProvider;
use hickory_resolver::TokioResolver;
use tracing::{debug, trace};

pub use error::Error;
pub use lookup::{lookup, Lookup, Lookups};
pub use query::{MultiQuery, UniQuery};

use crate::nameserver::NameServerConfig;
use crate::resources::rdata;
use crate::{RecordType, Result};

pub mod error;
pub mod lookup;
pub mod query;

pub type ResolverResult<T> = std::result::Result<T, Error>;

/// Answers single queries.
///
/// Implementations must not fail as a whole; errors of a query are reported inside its `Lookup`.
pub trait Resolve {
    fn resolve(&self, query: UniQuery) -> impl Future<Output = Lookup> + Send;
}

/// Selects the name server a `DnsResolver` sends its queries to.
#[derive(Debug, Clone, Default)]
pub struct ResolverConfig {
    name_server: Option<NameServerConfig>,
}

impl ResolverConfig {
    /// Uses the name servers of the local system configuration.
    ///
    /// Unix: Parses `/etc/resolv.conf`.
    pub fn system() -> Self {
        ResolverConfig { name_server: None }
    }

    /// Uses exclusively `name_server`.
    pub fn with_name_server(name_server: NameServerConfig) -> Self {
        ResolverConfig {
            name_server: Some(name_server),
        }
    }

    pub fn name_server(&self) -> Option<&NameServerConfig> {
        self.name_server.as_ref()
    }
}

impl From<NameServerConfig> for ResolverConfig {
    fn from(ns_config: NameServerConfig) -> Self {
        ResolverConfig::with_name_server(ns_config)
    }
}

#[derive(Debug, Clone)]
pub struct ResolverOpts {
    /// Number of retries after a failed request; queries are not retried by default.
    pub retries: usize,
    /// Overrides the resolver library's default timeout if set.
    pub timeout: Option<Duration>,
}

impl Default for ResolverOpts {
    fn default() -> Self {
        ResolverOpts {
            retries: 0,
            timeout: None,
        }
    }
}

impl ResolverOpts {
    fn apply(&self, opts: &mut hickory_resolver::config::ResolverOpts) {
        opts.attempts = self.retries;
        if let Some(timeout) = self.timeout {
            opts.timeout = timeout;
        }
    }
}

/// Resolver backed by `hickory-resolver`.
#[derive(Clone)]
pub struct DnsResolver {
    inner: Arc<TokioResolver>,
    opts: Arc<ResolverOpts>,
    name_server: Option<Arc<NameServerConfig>>,
}

impl DnsResolver {
    pub fn new(config: ResolverConfig, opts: ResolverOpts) -> Result<Self> {
        let (hickory_config, mut hickory_opts) = match config.name_server() {
            Some(name_server) => (
                hickory_resolver::config::ResolverConfig::from_parts(
                    None,
                    Vec::new(),
                    NameServerConfigGroup::from(name_server),
                ),
                hickory_resolver::config::ResolverOpts::default(),
            ),
            None => hickory_resolver::system_conf::read_system_conf().map_err(|e| Error::ConfigError {
                reason: e.to_string(),
            })?,
        };
        opts.apply(&mut hickory_opts);
        debug!(
            "Creating resolver for {} with {:?}.",
            config.name_server().map(ToString::to_string).unwrap_or_else(|| "system name servers".to_string()),
            hickory_opts
        );

        let inner = TokioResolver::builder_with_config(hickory_config, TokioConnectionProvider::default())
            .with_options(hickory_opts)
            .build();

        Ok(DnsResolver {
            inner: Arc::new(inner),
            opts: Arc::new(opts),
            name_server: config.name_server.map(Arc::new),
        })
    }

    pub fn opts(&self) -> &ResolverOpts {
        &self.opts
    }

    pub fn name(&self) -> String {
        match &self.name_server {
            Some(name_server) => name_server.to_string(),
            None => "system".to_string(),
        }
    }

    async fn single_lookup(&self, query: UniQuery) -> Lookup {
        let record_type: hickory_resolver::proto::rr::RecordType = query.record_type.into();
        let start_time = Instant::now();
        trace!(
            "Sending Query for '{}', record type {} to {}.",
            &query.name,
            &query.record_type,
            self.name()
        );
        let result = self.inner.lookup(query.name.as_str(), record_type).await;
        let response_time = start_time.elapsed();

        let lookup = match result {
            Ok(lookup) => {
                let values: Vec<String> = lookup
                    .iter()
                    .filter(|rdata| rdata.record_type() == record_type)
                    .map(rdata::render)
                    .collect();
                if values.is_empty() {
                    let err = Error::NoRecords {
                        record_type: query.record_type,
                    };
                    Lookup::error(query, err, response_time)
                } else {
                    Lookup::response(query, values, response_time)
                }
            }
            Err(err) => {
                let err = Error::from_resolve_error(&err, query.record_type);
                Lookup::error(query, err, response_time)
            }
        };
        debug!(
            "Lookup returned for {} from {}: {}",
            lookup.query(),
            self.name(),
            if lookup.is_err() { "error" } else { "ok" },
        );

        lookup
    }
}

impl fmt::Debug for DnsResolver {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("DnsResolver")
            .field("opts", &self.opts)
            .field("name_server", &self.name_server)
            .finish()
    }
}

impl Resolve for DnsResolver {
    fn resolve(&self, query: UniQuery) -> impl Future<Output = Lookup> + Send {
        self.single_lookup(query)
    }
}

/// Resolver answering from a fixed table without any network access.
///
/// Queries missing from the table are answered with `Error::NxDomain`.
#[derive(Debug, Clone, Default)]
pub struct StaticResolver {
    answers: HashMap<(String, RecordType), ResolverResult<Vec<String>>>,
}

impl StaticResolver {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_response<N: Into<String>, V: ToString>(
        mut self,
        name: N,
        record_type: RecordType,
        values: Vec<V>,
    ) -> Self {
        let values = values.iter().map(ToString::to_string).collect();
        self.answers.insert((name.into(), record_type), Ok(values));
        self
    }

    pub fn with_error<N: Into<String>>(mut self, name: N, record_type: RecordType, error: Error) -> Self {
        self.answers.insert((name.into(), record_type), Err(error));
        self
    }
}

impl Resolve for StaticResolver {
    fn resolve(&self, query: UniQuery) -> impl Future<Output = Lookup> + Send {
        let answer = self
            .answers
            .get(&(query.name.clone(), query.record_type))
            .cloned()
            .unwrap_or(Err(Error::NxDomain));
        async move {
            match answer {
                Ok(values) => Lookup::response(query, values, Duration::ZERO),
                Err(err) => Lookup::error(query, err, Duration::ZERO),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use spectral::prelude::*;

    use super::*;

    #[tokio::test]
    async fn static_resolver_answers_from_table() {
        let resolver = StaticResolver::new().with_response("example.com", RecordType::A, vec!["93.184.216.34"]);

        let lookup = resolver.resolve(UniQuery::new("example.com", RecordType::A)).await;

        assert_that(&lookup.values()).is_equal_to(&["93.184.216.34".to_string()][..]);
        assert_that(&lookup.err()).is_none();
    }

    #[tokio::test]
    async fn static_resolver_unknown_name_is_nxdomain() {
        let resolver = StaticResolver::new();

        let lookup = resolver.resolve(UniQuery::new("missing.example", RecordType::A)).await;

        assert_that(&lookup.err()).is_some().is_equal_to(&Error::NxDomain);
    }

    #[test]
    fn default_opts_do_not_retry() {
        let mut hickory_opts = hickory_resolver::config::ResolverOpts::default();
        let default_timeout = hickory_opts.timeout;

        ResolverOpts::default().apply(&mut hickory_opts);

        assert_that(&hickory_opts.attempts).is_equal_to(0);
        assert_that(&hickory_opts.timeout).is_equal_to(default_timeout);
    }

    #[tokio::test]
    async fn dns_resolver_with_name_server_names_it() {
        let name_server: NameServerConfig = "127.0.0.1:5353".parse().unwrap();

        let resolver = DnsResolver::new(name_server.into(), ResolverOpts::default());

        assert_that(&resolver.map(|x| x.name())).is_ok().is_equal_to("127.0.0.1:5353".to_string());
    }
}
