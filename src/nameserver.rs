// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use serde::Serialize;

use crate::Error;

pub const DEFAULT_PORT: u16 = 53;

/// A single name server, reachable via UDP and TCP.
///
/// Parses from `IP`, `IP:PORT`, or `[IPv6]:PORT`; the port defaults to 53.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Serialize)]
pub struct NameServerConfig {
    ip_addr: IpAddr,
    port: u16,
}

impl NameServerConfig {
    pub fn new(ip_addr: IpAddr, port: u16) -> Self {
        NameServerConfig { ip_addr, port }
    }

    pub fn ip_addr(&self) -> IpAddr {
        self.ip_addr
    }

    pub fn port(&self) -> u16 {
        self.port
    }
}

impl From<IpAddr> for NameServerConfig {
    fn from(ip_addr: IpAddr) -> Self {
        NameServerConfig::new(ip_addr, DEFAULT_PORT)
    }
}

impl From<SocketAddr> for NameServerConfig {
    fn from(socket_addr: SocketAddr) -> Self {
        NameServerConfig::new(socket_addr.ip(), socket_addr.port())
    }
}

impl FromStr for NameServerConfig {
    type Err = Error;

    fn from_str(str: &str) -> std::result::Result<Self, Self::Err> {
        let str = str.trim();
        if let Ok(ip_addr) = IpAddr::from_str(str) {
            return Ok(ip_addr.into());
        }
        SocketAddr::from_str(str).map(Into::into).map_err(|_| Error::ParserError {
            what: str.to_string(),
            to: "NameServerConfig",
            why: "expected IP address with optional port".to_string(),
        })
    }
}

impl fmt::Display for NameServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.ip_addr {
            IpAddr::V4(ip) => write!(f, "{}:{}", ip, self.port),
            IpAddr::V6(ip) => write!(f, "[{}]:{}", ip, self.port),
        }
    }
}

#[doc(hidden)]
impl From<&NameServerConfig> for hickory_resolver::config::NameServerConfigGroup {
    fn from(config: &NameServerConfig) -> Self {
        hickory_resolver::config::NameServerConfigGroup::from_ips_clear(&[config.ip_addr], config.port, true)
    }
}
