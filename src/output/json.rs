// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use std::collections::HashSet;

use serde::Serialize;

use super::*;

#[derive(Debug, Default)]
pub struct JsonOptions {
    /// Pretty formatting
    pretty: bool,
}

impl JsonOptions {
    pub fn pretty() -> Self {
        JsonOptions { pretty: true }
    }
}

#[derive(Debug, Default)]
pub struct JsonFormat {
    opts: JsonOptions,
}

impl JsonFormat {
    pub fn new(opts: JsonOptions) -> JsonFormat {
        JsonFormat { opts }
    }
}

impl<'a> TryFrom<Vec<&'a str>> for JsonOptions {
    type Error = Error;

    fn try_from(values: Vec<&'a str>) -> std::result::Result<Self, Self::Error> {
        let options: HashSet<&str> = values.into_iter().collect();
        if let Some(unknown) = options.iter().find(|x| **x != "pretty") {
            return Err(Error::ParserError {
                what: unknown.to_string(),
                to: "JsonOptions",
                why: "unsupported json option".to_string(),
            });
        }
        Ok(JsonOptions {
            pretty: options.contains("pretty"),
        })
    }
}

impl<T: Serialize> OutputFormat<T> for JsonFormat {
    fn output<W: Write>(&self, writer: &mut W, data: &T) -> Result<()> {
        if self.opts.pretty {
            serde_json::to_writer_pretty(&mut *writer, data)?;
        } else {
            serde_json::to_writer(&mut *writer, data)?;
        }
        writeln!(writer)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use serde_json::{json, Value};
    use spectral::prelude::*;

    use super::*;
    use crate::resolver::{lookup, Error as LookupError, Lookup, MultiQuery, StaticResolver, UniQuery};
    use crate::RecordType;

    #[test]
    fn json_serialization() {
        crate::utils::tests::logging::init();
        let opts = JsonOptions::default();
        let config = OutputConfig::json(opts);
        let output = Output::new(&config);
        let lookups = Lookups::new(Vec::new());

        let mut buf = Vec::new();
        let res = output.output(&mut buf, &lookups);

        assert_that(&res).is_ok();
        assert_that(&String::from_utf8(buf).unwrap().as_str()).is_equal_to("[]\n");
    }

    #[tokio::test]
    async fn json_contains_one_object_per_lookup() {
        crate::utils::tests::logging::init();
        let resolver = StaticResolver::new().with_response("example.com", RecordType::A, vec!["93.184.216.34"]);
        let lookups = lookup(&resolver, UniQuery::new("example.com", RecordType::A)).await;
        let format = JsonFormat::default();

        let mut buf = Vec::new();
        format.output(&mut buf, &lookups).unwrap();
        let parsed: Value = serde_json::from_slice(&buf).unwrap();

        assert_that(&parsed).is_equal_to(json!([{
            "domain": "example.com",
            "type": "A",
            "result": ["93.184.216.34"],
            "time_ms": 0.0,
            "error": null,
        }]));
    }

    #[tokio::test]
    async fn json_fields_equal_lookup_fields() {
        crate::utils::tests::logging::init();
        let lookups: Lookups = vec![
            Lookup::response(
                UniQuery::new("example.com", RecordType::MX),
                vec!["10 mail.example.com.".to_string(), "20 mx2.example.com.".to_string()],
                Duration::from_micros(45_200),
            ),
            Lookup::error(
                UniQuery::new("nonexistent.com", RecordType::A),
                LookupError::NxDomain,
                Duration::from_millis(12),
            ),
        ]
        .into();
        let format = JsonFormat::new(JsonOptions::pretty());

        let mut buf = Vec::new();
        format.output(&mut buf, &lookups).unwrap();
        let parsed: Vec<Value> = serde_json::from_slice(&buf).unwrap();

        assert_that(&parsed).has_length(lookups.len());
        for (value, lookup) in parsed.iter().zip(lookups.iter()) {
            assert_that(&value["domain"].as_str()).is_some().is_equal_to(lookup.query().name());
            assert_that(&value["type"].as_str())
                .is_some()
                .is_equal_to(lookup.query().record_type().to_string().as_str());
            let result: Vec<String> = serde_json::from_value(value["result"].clone()).unwrap();
            assert_that(&result.as_slice()).is_equal_to(lookup.values());
            assert_that(&value["time_ms"].as_f64()).is_some().is_equal_to(lookup.response_time_ms());
            assert_that(&value["error"].as_str().map(ToString::to_string))
                .is_equal_to(lookup.err().map(ToString::to_string));
        }
    }

    #[tokio::test]
    async fn json_row_count_is_domains_times_record_types() {
        let resolver = StaticResolver::new();
        let query = MultiQuery::new(vec!["a.example", "b.example", "c.example"], RecordType::all());
        let lookups = lookup(&resolver, query).await;
        let format = JsonFormat::default();

        let mut buf = Vec::new();
        format.output(&mut buf, &lookups).unwrap();
        let parsed: Vec<Value> = serde_json::from_slice(&buf).unwrap();

        assert_that(&parsed).has_length(3 * 7);
    }

    #[test]
    fn unknown_option_is_rejected() {
        let res = JsonOptions::try_from(vec!["pretty", "condensed"]);

        assert_that(&res).is_err();
    }
}
