// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use hickory_resolver::proto::rr::rdata::{MX, SOA, TXT};
use hickory_resolver::proto::rr::RData;

/// Renders record data into the textual representation used in results.
///
/// MX and SOA records are shortened to their essential fields; TXT character strings are joined into one string.
pub fn render(rdata: &RData) -> String {
    match rdata {
        RData::MX(mx) => render_mx(mx),
        RData::SOA(soa) => render_soa(soa),
        RData::TXT(txt) => render_txt(txt),
        other => other.to_string(),
    }
}

fn render_mx(mx: &MX) -> String {
    format!("{} {}", mx.preference(), mx.exchange())
}

fn render_soa(soa: &SOA) -> String {
    format!("{} {} {}", soa.mname(), soa.rname(), soa.serial())
}

fn render_txt(txt: &TXT) -> String {
    txt.iter().map(|bytes| String::from_utf8_lossy(bytes)).collect()
}
