use std::fmt::Display;
use std::hash::Hash;
use std::io::{self, Write};

use crate::aggregate::{FrequencyTable, Tally};

pub const URL_HEADER: &str = "--- Top URL Contexts ---";
pub const TYPE_HEADER: &str = "--- Event Types ---";

pub struct Reporter {
    pub top_urls: usize,
    pub top_types: usize,
}

impl Reporter {
    pub fn new(top_urls: usize, top_types: usize) -> Self {
        Reporter {
            top_urls,
            top_types,
        }
    }

    pub fn write_report<W: Write>(&self, out: &mut W, total: usize, tally: &Tally) -> io::Result<()> {
        writeln!(out, "Total Today: {}", total)?;
        write_section(out, URL_HEADER, &tally.urls, self.top_urls)?;
        write_section(out, TYPE_HEADER, &tally.types, self.top_types)?;
        out.flush()
    }
}

fn write_section<W, K>(out: &mut W, header: &str, table: &FrequencyTable<K>, limit: usize) -> io::Result<()>
where
    W: Write,
    K: Eq + Hash + Clone + Display,
{
    writeln!(out)?;
    writeln!(out, "{}", header)?;
    for (key, count) in table.most_common(limit) {
        writeln!(out, "{}: {}", count, key)?;
    }
    Ok(())
}
