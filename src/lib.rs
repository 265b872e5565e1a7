// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! dns_lookup queries DNS records for one or many domains and presents the results as table or JSON.
//!
//! Queries are sent one after another, in input order, through a [`resolver::Resolve`] implementation. The default
//! implementation [`resolver::DnsResolver`] uses `hickory-resolver` and either the system's name servers or a single
//! name server given by the user.
//!
//! # Example
//! ```no_run
//! # use dns_lookup::resolver::{DnsResolver, MultiQuery, ResolverConfig, ResolverOpts};
//! # use dns_lookup::RecordType;
//! # #[tokio::main]
//! # async fn main() -> dns_lookup::Result<()> {
//! let resolver = DnsResolver::new(ResolverConfig::system(), ResolverOpts::default())?;
//! let query = MultiQuery::multi_record("example.com", vec![RecordType::A, RecordType::MX]);
//! let lookups = dns_lookup::resolver::lookup(&resolver, query).await;
//! for lookup in lookups.iter() {
//!     println!("{}: {:?}", lookup.query(), lookup.values());
//! }
//! # Ok(())
//! # }
//! ```

#[cfg(feature = "app-cli")]
pub mod app;
pub mod domains;
pub mod error;
pub mod nameserver;
pub mod output;
pub mod resolver;
pub mod resources;
pub mod statistics;
#[cfg(test)]
mod utils;

pub use error::Error;
pub use resources::RecordType;

pub type Result<T> = std::result::Result<T, Error>;
