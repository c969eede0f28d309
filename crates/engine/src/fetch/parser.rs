use focusgate_domain::domain_name::{is_hosts_sentinel, normalize_domain};
use std::collections::BTreeSet;
use tracing::debug;

/// Line shape of a downloaded blocklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListFormat {
    /// `0.0.0.0 domain` hosts-file entries.
    Hosts,
    /// One domain per line.
    Domains,
    /// Adblock Plus filter syntax; only `||domain^` entries are taken.
    Adblock,
}

#[derive(Debug, Default)]
pub struct ParsedList {
    /// Deduplicated, validated, lexicographically ordered.
    pub domains: Vec<String>,
    pub skipped: usize,
}

const HOSTS_SENTINEL_IPS: &[&str] = &["0.0.0.0", "127.0.0.1", "::", "::1"];

/// Sniffs the format from the first non-comment lines. Mixed files are
/// fine; classification only picks the primary extraction rule.
pub fn detect_format(content: &str) -> ListFormat {
    for line in content.lines().take(200) {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            if line.starts_with('!') {
                return ListFormat::Adblock;
            }
            continue;
        }
        if line.starts_with("||") {
            return ListFormat::Adblock;
        }
        if let Some(first) = line.split_whitespace().next() {
            if HOSTS_SENTINEL_IPS.contains(&first) {
                return ListFormat::Hosts;
            }
        }
        return ListFormat::Domains;
    }
    ListFormat::Domains
}

/// Parses a raw blocklist of any supported format into a validated,
/// deduplicated domain set. Unparseable lines are counted, never fatal.
pub fn parse_blocklist(content: &str) -> ParsedList {
    let format = detect_format(content);
    let mut set: BTreeSet<String> = BTreeSet::new();
    let mut skipped = 0usize;

    for line in content.lines() {
        let line = match line.split(['#', '!']).next() {
            Some(l) => l.split("//").next().unwrap_or("").trim(),
            None => continue,
        };
        if line.is_empty() {
            continue;
        }

        let candidate = match format {
            ListFormat::Hosts => extract_hosts_entry(line),
            ListFormat::Domains => Some(line),
            ListFormat::Adblock => extract_adblock_entry(line),
        };

        match candidate {
            Some(name) if !is_hosts_sentinel(name) => match normalize_domain(name) {
                Ok(normalized) => {
                    set.insert(normalized);
                }
                Err(_) => skipped += 1,
            },
            Some(_) => {}
            None => skipped += 1,
        }
    }

    debug!(domains = set.len(), skipped, ?format, "Parsed blocklist");
    ParsedList {
        domains: set.into_iter().collect(),
        skipped,
    }
}

fn extract_hosts_entry(line: &str) -> Option<&str> {
    let mut parts = line.split_whitespace();
    let ip = parts.next()?;
    if !HOSTS_SENTINEL_IPS.contains(&ip) {
        return None;
    }
    parts.next()
}

fn extract_adblock_entry(line: &str) -> Option<&str> {
    let rest = line.strip_prefix("||")?;
    let end = rest.find(['^', '/', '$'])?;
    Some(&rest[..end])
}
