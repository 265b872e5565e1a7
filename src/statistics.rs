// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use std::fmt;

use serde::Serialize;

use crate::resolver::Lookups;

pub trait Statistics<'a> {
    type StatsOut;

    fn statistics(&'a self) -> Self::StatsOut;
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LookupsStats {
    pub total: usize,
    pub ok: usize,
    pub failed: usize,
    /// Sum of all response times in milliseconds.
    pub total_time_ms: f64,
    /// Average response time in milliseconds; 0 if there are no lookups.
    pub avg_time_ms: f64,
}

impl fmt::Display for LookupsStats {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Summary: {}/{} successful | Failed: {} | Average query time: {}ms | Total time: {}ms",
            self.ok, self.total, self.failed, self.avg_time_ms, self.total_time_ms
        )
    }
}

impl<'a> Statistics<'a> for Lookups {
    type StatsOut = LookupsStats;

    fn statistics(&'a self) -> Self::StatsOut {
        let total = self.len();
        let ok = self.num_ok();
        let total_time_ms = round2(self.iter().map(|x| x.response_time_ms()).sum());
        let avg_time_ms = if total > 0 {
            round2(total_time_ms / total as f64)
        } else {
            0.0
        };

        LookupsStats {
            total,
            ok,
            failed: total - ok,
            total_time_ms,
            avg_time_ms,
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use spectral::prelude::*;

    use super::*;
    use crate::resolver::{Error, Lookup, UniQuery};
    use crate::RecordType;

    #[test]
    fn statistics_count_ok_and_failed() {
        let lookups: Lookups = vec![
            Lookup::response(
                UniQuery::new("example.com", RecordType::A),
                vec!["192.168.1.1".to_string()],
                Duration::from_millis(40),
            ),
            Lookup::error(
                UniQuery::new("nonexistent.com", RecordType::A),
                Error::NxDomain,
                Duration::from_millis(20),
            ),
        ]
        .into();

        let stats = lookups.statistics();

        assert_that(&stats).is_equal_to(LookupsStats {
            total: 2,
            ok: 1,
            failed: 1,
            total_time_ms: 60.0,
            avg_time_ms: 30.0,
        });
        assert_that(&stats.to_string()).contains("1/2 successful");
        assert_that(&stats.to_string()).contains("Failed: 1");
    }

    #[test]
    fn statistics_of_no_lookups() {
        let lookups = Lookups::new(Vec::new());

        let stats = lookups.statistics();

        assert_that(&stats.avg_time_ms).is_equal_to(0.0);
    }
}
