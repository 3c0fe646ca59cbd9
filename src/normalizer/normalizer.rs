use crate::config::HostAlias;
use crate::models::LogEntry;

const SCHEME_PREFIXES: [&str; 2] = ["https://", "http://"];

/// Rewrites raw URLs into report keys.
#[derive(Debug, Clone)]
pub struct UrlNormalizer {
    aliases: Vec<HostAlias>,
}

impl UrlNormalizer {
    pub fn new(aliases: Vec<HostAlias>) -> Self {
        UrlNormalizer { aliases }
    }

    /// Drops the query string, strips one `https://` then one `http://`
    /// prefix, and applies the host aliases in order.
    pub fn normalize(&self, url: &str) -> String {
        let mut base = url.split('?').next().unwrap_or_default();

        for scheme in SCHEME_PREFIXES {
            base = base.strip_prefix(scheme).unwrap_or(base);
        }

        self.aliases
            .iter()
            .fold(base.to_string(), |acc, alias| acc.replace(&alias.from, &alias.to))
    }

    pub fn normalize_entry(&self, entry: &LogEntry) -> Option<String> {
        entry.raw_url().map(|url| self.normalize(url))
    }
}
