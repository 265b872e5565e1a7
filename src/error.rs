// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
/// Main Error type of this crate.
///
/// Errors of single lookups are not represented here, but are kept per lookup as [`crate::resolver::Error`].
pub enum Error {
    #[error("internal error: {msg}")]
    InternalError { msg: &'static str },
    #[error("failed to access file '{}'", path.display())]
    FileError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("resolver failed: {source}")]
    ResolverError {
        #[from]
        source: crate::resolver::Error,
    },
    #[error("failed to parse '{what}' to {to} because {why}")]
    ParserError {
        what: String,
        to: &'static str,
        why: String,
    },
    #[error("failed to execute IO operation")]
    IoError {
        #[from]
        source: std::io::Error,
    },
    #[error("failed to serialize to JSON")]
    SerJsonError {
        #[from]
        source: serde_json::Error,
    },
}
