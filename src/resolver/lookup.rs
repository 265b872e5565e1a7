// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use std::slice::Iter;
use std::time::Duration;

use futures::stream::{self, StreamExt};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use tracing::trace;

use crate::resolver::{Error, MultiQuery, Resolve, UniQuery};

/// Ordered results of a batch of lookups; the order is the order of the queries.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct Lookups {
    inner: Vec<Lookup>,
}

impl Lookups {
    pub fn new(inner: Vec<Lookup>) -> Lookups {
        Lookups { inner }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, Lookup> {
        self.inner.iter()
    }

    pub fn has_errors(&self) -> bool {
        self.inner.iter().any(Lookup::is_err)
    }

    pub fn num_ok(&self) -> usize {
        self.inner.iter().filter(|x| !x.is_err()).count()
    }

    pub fn num_err(&self) -> usize {
        self.inner.iter().filter(|x| x.is_err()).count()
    }
}

impl IntoIterator for Lookups {
    type Item = Lookup;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl From<Vec<Lookup>> for Lookups {
    fn from(lookups: Vec<Lookup>) -> Self {
        Lookups { inner: lookups }
    }
}

/// Result of a single query.
///
/// `values` is empty if `error` is set.
#[derive(Debug, Clone, PartialEq)]
pub struct Lookup {
    query: UniQuery,
    values: Vec<String>,
    response_time: Duration,
    error: Option<Error>,
}

impl Lookup {
    pub fn response(query: UniQuery, values: Vec<String>, response_time: Duration) -> Lookup {
        Lookup {
            query,
            values,
            response_time,
            error: None,
        }
    }

    pub fn error(query: UniQuery, error: Error, response_time: Duration) -> Lookup {
        Lookup {
            query,
            values: Vec::new(),
            response_time,
            error: Some(error),
        }
    }

    pub fn query(&self) -> &UniQuery {
        &self.query
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn response_time(&self) -> &Duration {
        &self.response_time
    }

    /// Response time in milliseconds, rounded to two decimal places.
    pub fn response_time_ms(&self) -> f64 {
        (self.response_time.as_secs_f64() * 100_000.0).round() / 100.0
    }

    pub fn err(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    pub fn is_err(&self) -> bool {
        self.error.is_some()
    }
}

impl Serialize for Lookup {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Lookup", 5)?;
        state.serialize_field("domain", &self.query.name)?;
        state.serialize_field("type", &self.query.record_type)?;
        state.serialize_field("result", &self.values)?;
        state.serialize_field("time_ms", &self.response_time_ms())?;
        state.serialize_field("error", &self.error.as_ref().map(ToString::to_string))?;
        state.end()
    }
}

/// Runs all queries of `query` one after another and collects their lookups in query order.
pub async fn lookup<R: Resolve, T: Into<MultiQuery>>(resolver: &R, query: T) -> Lookups {
    let queries = query.into().into_uni_queries();

    stream::iter(queries)
        .then(|q| resolver.resolve(q))
        .inspect(|lookup| trace!("Received lookup {:?}", lookup))
        .collect::<Vec<_>>()
        .await
        .into()
}

#[cfg(test)]
mod tests {
    use spectral::prelude::*;

    use super::*;
    use crate::resolver::StaticResolver;
    use crate::RecordType;

    fn example_resolver() -> StaticResolver {
        StaticResolver::new()
            .with_response("example.com", RecordType::A, vec!["93.184.216.34"])
            .with_response("example.com", RecordType::MX, vec!["0 ."])
            .with_error("missing.example", RecordType::A, Error::NxDomain)
    }

    #[tokio::test]
    async fn lookups_are_ordered_by_query() {
        crate::utils::tests::logging::init();
        let resolver = example_resolver();
        let query = MultiQuery::new(
            vec!["example.com", "missing.example"],
            vec![RecordType::A, RecordType::MX],
        );

        let lookups = lookup(&resolver, query).await;

        let queries: Vec<_> = lookups.iter().map(|x| x.query().to_string()).collect();
        assert_that(&queries).is_equal_to(vec![
            "example.com (A)".to_string(),
            "example.com (MX)".to_string(),
            "missing.example (A)".to_string(),
            "missing.example (MX)".to_string(),
        ]);
    }

    #[tokio::test]
    async fn failed_lookup_does_not_stop_others() {
        crate::utils::tests::logging::init();
        let resolver = example_resolver();
        let query = MultiQuery::multi_name(vec!["missing.example", "example.com"], RecordType::A);

        let lookups = lookup(&resolver, query).await;

        assert_that(&lookups.len()).is_equal_to(2);
        assert_that(&lookups.has_errors()).is_true();
        assert_that(&lookups.num_ok()).is_equal_to(1);
        assert_that(&lookups.iter().nth(1).map(|x| x.values().to_vec()))
            .is_some()
            .is_equal_to(vec!["93.184.216.34".to_string()]);
    }

    #[test]
    fn response_time_is_rounded_to_two_decimals() {
        let lookup = Lookup::response(
            UniQuery::new("example.com", RecordType::A),
            vec![],
            Duration::from_micros(45_216),
        );

        assert_that(&lookup.response_time_ms()).is_equal_to(45.22);
    }

    #[test]
    fn serialize_error_as_message() {
        let lookup = Lookup::error(
            UniQuery::new("missing.example", RecordType::A),
            Error::NxDomain,
            Duration::from_millis(3),
        );

        let json = serde_json::to_value(&lookup).unwrap();

        assert_that(&json["error"].as_str()).is_some().is_equal_to("domain not found");
        assert_that(&json["result"].as_array().map(Vec::len)).is_some().is_equal_to(0);
    }
}
