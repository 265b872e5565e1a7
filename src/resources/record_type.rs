// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, Serialize, Deserialize)]
pub enum RecordType {
    A,
    AAAA,
    MX,
    CNAME,
    NS,
    TXT,
    SOA,
}

impl RecordType {
    /// All supported record types in the order they are queried by `--all-types`.
    pub fn all() -> Vec<RecordType> {
        vec![
            RecordType::A,
            RecordType::AAAA,
            RecordType::MX,
            RecordType::CNAME,
            RecordType::NS,
            RecordType::TXT,
            RecordType::SOA,
        ]
    }
}

impl From<RecordType> for hickory_resolver::proto::rr::RecordType {
    fn from(rt: RecordType) -> Self {
        use hickory_resolver::proto::rr::RecordType as Hrt;

        match rt {
            RecordType::A => Hrt::A,
            RecordType::AAAA => Hrt::AAAA,
            RecordType::MX => Hrt::MX,
            RecordType::CNAME => Hrt::CNAME,
            RecordType::NS => Hrt::NS,
            RecordType::TXT => Hrt::TXT,
            RecordType::SOA => Hrt::SOA,
        }
    }
}

impl FromStr for RecordType {
    type Err = Error;

    fn from_str(str: &str) -> Result<Self> {
        match str.to_uppercase().as_str() {
            "A" => Ok(RecordType::A),
            "AAAA" => Ok(RecordType::AAAA),
            "MX" => Ok(RecordType::MX),
            "CNAME" => Ok(RecordType::CNAME),
            "NS" => Ok(RecordType::NS),
            "TXT" => Ok(RecordType::TXT),
            "SOA" => Ok(RecordType::SOA),
            _ => Err(Error::ParserError {
                what: str.to_string(),
                to: "RecordType",
                why: "unsupported record type".to_string(),
            }),
        }
    }
}

impl From<RecordType> for &'static str {
    fn from(rt: RecordType) -> &'static str {
        match rt {
            RecordType::A => "A",
            RecordType::AAAA => "AAAA",
            RecordType::MX => "MX",
            RecordType::CNAME => "CNAME",
            RecordType::NS => "NS",
            RecordType::TXT => "TXT",
            RecordType::SOA => "SOA",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(Into::<&str>::into(*self))
    }
}

#[cfg(test)]
mod tests {
    use spectral::prelude::*;

    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_that(&RecordType::from_str("mx")).is_ok().is_equal_to(RecordType::MX);
        assert_that(&RecordType::from_str("Aaaa")).is_ok().is_equal_to(RecordType::AAAA);
    }

    #[test]
    fn parse_unsupported_type() {
        let res = RecordType::from_str("SRV");

        assert_that(&res).is_err();
    }

    #[test]
    fn display_upper_case_mnemonic() {
        assert_that(&RecordType::SOA.to_string().as_str()).is_equal_to("SOA");
    }
}
