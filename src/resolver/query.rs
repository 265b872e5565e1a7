// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use std::fmt;

use serde::Serialize;

use crate::RecordType;

/// UniQuery is a single name looked up for a single record type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UniQuery {
    pub(crate) name: String,
    pub(crate) record_type: RecordType,
}

impl UniQuery {
    pub fn new<N: Into<String>>(name: N, record_type: RecordType) -> UniQuery {
        UniQuery {
            name: name.into(),
            record_type,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn record_type(&self) -> RecordType {
        self.record_type
    }
}

impl fmt::Display for UniQuery {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.record_type)
    }
}

impl From<UniQuery> for MultiQuery {
    fn from(query: UniQuery) -> MultiQuery {
        MultiQuery {
            names: vec![query.name],
            record_types: vec![query.record_type],
        }
    }
}

/// MultiQuery allows to lookup multiple names for multiple record types
///
/// It can be easily constructed from a simple `UniQuery`
///
/// # Example
/// ```
/// # use dns_lookup::resolver::{UniQuery, MultiQuery};
/// # use dns_lookup::RecordType;
/// let query = UniQuery::new("www.example.com", RecordType::A);
/// let multi_query: MultiQuery = query.into();
/// assert_eq!(multi_query.num_names(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct MultiQuery {
    pub(crate) names: Vec<String>,
    pub(crate) record_types: Vec<RecordType>,
}

impl MultiQuery {
    pub fn new<N: Into<String>, S: IntoIterator<Item = N>, T: Into<Vec<RecordType>>>(
        names: S,
        record_types: T,
    ) -> MultiQuery {
        MultiQuery {
            names: names.into_iter().map(Into::into).collect(),
            record_types: record_types.into(),
        }
    }

    pub fn multi_name<N: Into<String>, S: IntoIterator<Item = N>>(names: S, record_type: RecordType) -> MultiQuery {
        MultiQuery::new(names, vec![record_type])
    }

    pub fn multi_record<N: Into<String>, T: Into<Vec<RecordType>>>(name: N, record_types: T) -> MultiQuery {
        MultiQuery::new([name], record_types)
    }

    pub fn num_names(&self) -> usize {
        self.names.len()
    }

    pub fn num_record_types(&self) -> usize {
        self.record_types.len()
    }

    /// Expands into single queries: names in their given order, and for each name all record types in their given
    /// order.
    pub fn into_uni_queries(self) -> Vec<UniQuery> {
        let mut queries = Vec::with_capacity(self.names.len() * self.record_types.len());
        for name in self.names.iter() {
            for record_type in self.record_types.iter() {
                queries.push(UniQuery {
                    name: name.clone(),
                    record_type: *record_type,
                });
            }
        }

        queries
    }
}

#[cfg(test)]
mod tests {
    use spectral::prelude::*;

    use super::*;

    #[test]
    fn into_uni_queries_is_names_times_record_types_in_order() {
        let query = MultiQuery::new(vec!["a.example", "b.example"], vec![RecordType::A, RecordType::MX]);

        let queries = query.into_uni_queries();

        assert_that(&queries).is_equal_to(vec![
            UniQuery::new("a.example", RecordType::A),
            UniQuery::new("a.example", RecordType::MX),
            UniQuery::new("b.example", RecordType::A),
            UniQuery::new("b.example", RecordType::MX),
        ]);
    }

    #[test]
    fn empty_names_yield_no_queries() {
        let query = MultiQuery::multi_name(Vec::<String>::new(), RecordType::A);

        assert_that(&query.into_uni_queries()).is_empty();
    }
}
