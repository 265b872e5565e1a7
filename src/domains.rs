// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Reading domain lists and writing output files.

use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::{Error, Result};

/// Reads domain names from a text file, one domain per line.
///
/// Surrounding whitespace is stripped; blank lines and lines starting with `#` are skipped. The order of the file is
/// preserved.
pub fn read_domains<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Error::FileError {
        path: path.to_path_buf(),
        source,
    })?;
    let domains = parse_domains(BufReader::new(file)).map_err(|e| match e {
        Error::IoError { source } => Error::FileError {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })?;
    debug!("Read {} domains from '{}'.", domains.len(), path.display());

    Ok(domains)
}

pub fn parse_domains<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut domains = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let domain = line.trim();
        if domain.is_empty() || domain.starts_with('#') {
            continue;
        }
        domains.push(domain.to_string());
    }

    Ok(domains)
}

/// Writes `content` to `path`, creating missing parent directories.
pub fn write_output<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let path = path.as_ref();
    let to_file_error = |source| Error::FileError {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|x| !x.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(to_file_error)?;
    }
    fs::write(path, content).map_err(to_file_error)?;
    debug!("Wrote {} bytes to '{}'.", content.len(), path.display());

    Ok(())
}
