use regex::Regex;
use std::sync::OnceLock;

/// Maximum length of a fully-qualified domain name.
pub const MAX_DOMAIN_LEN: usize = 253;
pub const MIN_DOMAIN_LEN: usize = 4;

/// Hostnames that appear in hosts files as loopback boilerplate, never
/// as real block targets. Applied by the list parser only; a user is
/// still free to block any of these explicitly.
const HOSTS_SENTINELS: &[&str] = &[
    "localhost",
    "localhost.localdomain",
    "local",
    "broadcasthost",
    "ip6-localhost",
    "ip6-loopback",
    "ip6-allnodes",
    "ip6-allrouters",
    "0.0.0.0",
];

/// True for hosts-file boilerplate names the parser must skip.
pub fn is_hosts_sentinel(name: &str) -> bool {
    HOSTS_SENTINELS.contains(&name)
}

fn label_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?:[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?\.)+[a-z][a-z0-9-]{1,23}$")
            .unwrap()
    })
}

/// Normalizes a candidate block entry to a lowercase domain.
///
/// Accepts an optional leading `*.` wildcard sentinel, which is preserved
/// in the returned string, and the FQDN form with a trailing root dot,
/// which is dropped. Rejects anything carrying a protocol, path,
/// whitespace, or that fails the conservative label/TLD shape.
pub fn normalize_domain(input: &str) -> Result<String, String> {
    let mut trimmed = input.trim().to_ascii_lowercase();
    if let Some(fqdn) = trimmed.strip_suffix('.') {
        trimmed = fqdn.to_string();
    }
    if trimmed.is_empty() {
        return Err("domain is empty".to_string());
    }
    if trimmed.contains("//") || trimmed.contains(char::is_whitespace) {
        return Err(format!("domain contains protocol or spaces: {trimmed}"));
    }

    let (wildcard, bare) = match trimmed.strip_prefix("*.") {
        Some(rest) => (true, rest),
        None => (false, trimmed.as_str()),
    };

    if bare.len() < MIN_DOMAIN_LEN || bare.len() > MAX_DOMAIN_LEN {
        return Err(format!("domain length out of range: {bare}"));
    }
    if !bare.contains('.') {
        return Err(format!("domain has no dot: {bare}"));
    }
    if bare.starts_with('.') || bare.ends_with('.') || bare.starts_with('-') || bare.ends_with('-')
    {
        return Err(format!("domain has a leading/trailing separator: {bare}"));
    }
    if !label_regex().is_match(bare) {
        return Err(format!("domain has an invalid label or TLD: {bare}"));
    }

    Ok(if wildcard {
        format!("*.{bare}")
    } else {
        bare.to_string()
    })
}

/// True when `candidate` would be accepted by [`normalize_domain`].
pub fn is_valid_domain(candidate: &str) -> bool {
    normalize_domain(candidate).is_ok()
}
