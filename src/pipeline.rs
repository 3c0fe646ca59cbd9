use std::io::Write;
use std::path::PathBuf;

use crate::aggregate::tally;
use crate::config::Config;
use crate::error::{DigestError, Result};
use crate::filter::filter_by_date;
use crate::normalizer::UrlNormalizer;
use crate::parser::load_log_file;
use crate::report::Reporter;
use crate::writer::write_recent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub target_date: String,
    pub matched: usize,
    pub written: usize,
    pub output_path: PathBuf,
}

/// Load, filter, tally, report to `out`, then persist the recent entries.
///
/// Nothing is printed or written until loading and tallying have succeeded.
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<RunSummary> {
    let target_date = config.resolved_target_date();

    let entries = load_log_file(&config.input_path)?;
    let loaded = entries.len();
    let today = filter_by_date(entries, &target_date);
    tracing::info!(
        "{} of {} entries match {}",
        today.len(),
        loaded,
        target_date
    );

    let normalizer = UrlNormalizer::new(config.host_aliases.clone());
    let tally = tally(&today, &normalizer);

    Reporter::new(config.top_urls, config.top_types)
        .write_report(out, today.len(), &tally)
        .map_err(|source| DigestError::Io {
            path: PathBuf::from("<stdout>"),
            source,
        })?;

    let written = write_recent(&config.output_path, &today, config.recent_limit)?;

    Ok(RunSummary {
        target_date,
        matched: today.len(),
        written,
        output_path: config.output_path.clone(),
    })
}
