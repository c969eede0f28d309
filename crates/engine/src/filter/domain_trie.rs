use compact_str::CompactString;
use rustc_hash::FxBuildHasher;
use smallvec::SmallVec;
use std::collections::HashMap;

#[derive(Default)]
struct TrieNode {
    children: HashMap<CompactString, TrieNode, FxBuildHasher>,
    /// Set for `a.b.com`: blocks the domain and everything below it.
    terminal: bool,
    /// Set for `*.b.com`: blocks strict subdomains only.
    wildcard: bool,
}

impl TrieNode {
    fn new() -> Self {
        Self {
            children: HashMap::with_hasher(FxBuildHasher),
            terminal: false,
            wildcard: false,
        }
    }
}

/// Reversed-label domain index: inserting `a.b.com` creates the path
/// `com → b → a` with `a` terminal, so a lookup for `x.a.b.com`
/// matches the moment traversal reaches `a`. Lookup cost is bounded by
/// label count, independent of set size.
#[derive(Default)]
pub struct DomainTrie {
    root: TrieNode,
    len: usize,
}

impl DomainTrie {
    pub fn new() -> Self {
        Self {
            root: TrieNode::new(),
            len: 0,
        }
    }

    pub fn from_domains<S: AsRef<str>>(domains: impl IntoIterator<Item = S>) -> Self {
        let mut trie = Self::new();
        for domain in domains {
            trie.add(domain.as_ref());
        }
        trie
    }

    /// Inserts a domain; a leading `*.` marks the wildcard sentinel.
    /// Empty input is a no-op; re-adding leaves `len()` unchanged.
    pub fn add(&mut self, domain: &str) {
        let domain = domain.trim().to_ascii_lowercase();
        let (wildcard, bare) = match domain.strip_prefix("*.") {
            Some(rest) => (true, rest),
            None => (false, domain.as_str()),
        };
        let bare = bare.trim_end_matches('.');
        if bare.is_empty() {
            return;
        }

        let mut node = &mut self.root;
        for label in bare.split('.').rev() {
            node = node.children.entry(CompactString::new(label)).or_default();
        }
        let flag = if wildcard {
            &mut node.wildcard
        } else {
            &mut node.terminal
        };
        if !*flag {
            *flag = true;
            self.len += 1;
        }
    }

    /// True when the hostname or any of its ancestor domains is in the
    /// set, or a wildcard entry covers it. Empty input is false.
    ///
    /// A trailing root dot (FQDN form, `adult-site.com.`) is stripped
    /// before the walk; otherwise the empty final label would miss at
    /// the root and the hostname would evade every entry.
    #[inline]
    pub fn check(&self, hostname: &str) -> bool {
        let hostname = hostname.trim_end_matches('.');
        if hostname.is_empty() {
            return false;
        }
        let lowered;
        let hostname = if hostname.bytes().any(|b| b.is_ascii_uppercase()) {
            lowered = hostname.to_ascii_lowercase();
            lowered.as_str()
        } else {
            hostname
        };

        let labels: SmallVec<[&str; 8]> = hostname.split('.').rev().collect();
        let n = labels.len();
        let mut node = &self.root;

        for (i, label) in labels.iter().enumerate() {
            match node.children.get(*label) {
                Some(child) => {
                    if child.terminal {
                        return true;
                    }
                    if child.wildcard && i + 1 < n {
                        return true;
                    }
                    node = child;
                }
                None => return false,
            }
        }

        false
    }

    pub fn clear(&mut self) {
        self.root = TrieNode::new();
        self.len = 0;
    }

    /// Number of distinct entries inserted.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
