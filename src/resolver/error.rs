// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use hickory_resolver::proto::op::ResponseCode;
use hickory_resolver::proto::ProtoErrorKind;
use hickory_resolver::{ResolveError, ResolveErrorKind};
use thiserror::Error;

use crate::RecordType;

/// Error of a single lookup.
///
/// A lookup error is recorded with its lookup and never aborts the remaining lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("domain not found")]
    NxDomain,
    #[error("no {record_type} records found")]
    NoRecords { record_type: RecordType },
    #[error("query timeout")]
    Timeout,
    #[error("nameserver refused query")]
    QueryRefused,
    #[error("nameserver responded with server failure")]
    ServerFailure,
    #[error("nameserver unreachable: {reason}")]
    Unreachable { reason: String },
    #[error("query failed: {reason}")]
    ResolveError { reason: String },
    #[error("failed to load resolver configuration: {reason}")]
    ConfigError { reason: String },
}

impl Error {
    /// Classifies an error returned by the resolver for a lookup of `record_type`.
    pub fn from_resolve_error(error: &ResolveError, record_type: RecordType) -> Self {
        let ResolveErrorKind::Proto(proto_error) = error.kind() else {
            return Error::ResolveError {
                reason: error.to_string(),
            };
        };
        match proto_error.kind() {
            ProtoErrorKind::NoRecordsFound { response_code, .. } => match *response_code {
                ResponseCode::NXDomain => Error::NxDomain,
                ResponseCode::Refused => Error::QueryRefused,
                ResponseCode::ServFail => Error::ServerFailure,
                _ => Error::NoRecords { record_type },
            },
            ProtoErrorKind::Timeout => Error::Timeout,
            ProtoErrorKind::Io(_) => Error::Unreachable {
                reason: proto_error.to_string(),
            },
            _ => Error::ResolveError {
                reason: error.to_string(),
            },
        }
    }
}
