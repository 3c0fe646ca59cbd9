use crate::models::LogEntry;

pub fn matches_date(entry: &LogEntry, date_prefix: &str) -> bool {
    entry.timestamp().starts_with(date_prefix)
}

/// Keeps entries whose timestamp starts with `date_prefix`, in input order.
pub fn filter_by_date(entries: Vec<LogEntry>, date_prefix: &str) -> Vec<LogEntry> {
    entries
        .into_iter()
        .filter(|entry| matches_date(entry, date_prefix))
        .collect()
}
