// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use std::collections::HashSet;

use tabwriter::TabWriter;

use super::*;
use crate::output::styles;
use crate::resolver::Lookup;

#[derive(Debug)]
pub struct TableOptions {
    /// Prints the column header line
    header: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        TableOptions { header: true }
    }
}

impl TableOptions {
    pub fn condensed() -> Self {
        TableOptions { header: false }
    }
}

impl<'a> TryFrom<Vec<&'a str>> for TableOptions {
    type Error = Error;

    fn try_from(values: Vec<&'a str>) -> std::result::Result<Self, Self::Error> {
        let options: HashSet<&str> = values.into_iter().collect();
        if let Some(unknown) = options.iter().find(|x| **x != "condensed") {
            return Err(Error::ParserError {
                what: unknown.to_string(),
                to: "TableOptions",
                why: "unsupported table option".to_string(),
            });
        }
        Ok(TableOptions {
            header: !options.contains("condensed"),
        })
    }
}

#[derive(Debug, Default)]
pub struct TableFormat {
    opts: TableOptions,
}

impl TableFormat {
    pub fn new(opts: TableOptions) -> TableFormat {
        TableFormat { opts }
    }
}

impl OutputFormat<Lookups> for TableFormat {
    fn output<W: Write>(&self, writer: &mut W, lookups: &Lookups) -> Result<()> {
        let mut tw = TabWriter::new(vec![]).padding(2);

        if self.opts.header {
            writeln!(tw, "Domain\tType\tResult\tTime")?;
        }
        for lookup in lookups.iter() {
            output_lookup(&mut tw, lookup)?;
        }

        let text_buffer = tw.into_inner().map_err(|_| Error::InternalError {
            msg: "finish TabWriter buffer",
        })?;
        let out = String::from_utf8(text_buffer).map_err(|_| Error::InternalError {
            msg: "convert TabWriter buffer to output",
        })?;
        write!(writer, "{}", out)?;

        Ok(())
    }
}

fn output_lookup<W: Write>(writer: &mut W, lookup: &Lookup) -> Result<()> {
    let result = match lookup.err() {
        Some(err) => format!("{} {}", styles::error_prefix(), err),
        None => lookup.values().join(", "),
    };
    writeln!(
        writer,
        "{}\t{}\t{}\t{}ms",
        escape_control(lookup.query().name()),
        lookup.query().record_type(),
        escape_control(&result),
        lookup.response_time_ms()
    )?;

    Ok(())
}

/// Tabs and line breaks inside a cell would split the row, e.g., in TXT records.
fn escape_control(cell: &str) -> String {
    cell.chars()
        .map(|c| {
            if c.is_control() {
                c.escape_default().to_string()
            } else {
                c.to_string()
            }
        })
        .collect()
}
