//! Suffix trie.
//!
//! Rules from the Public Suffix List are stored as reversed label paths:
//! `co.uk` is inserted as root → "uk" → "co", `*.ck` as root → "ck" → "*",
//! and `!www.ck` as root → "ck" → "www" with the exception flag set. A
//! lookup walks a hostname's labels TLD-first down the trie and keeps the
//! deepest node that terminates a rule, which is exactly the PSL
//! longest-match requirement.

use std::collections::HashMap;

/// One node per label. The literal `"*"` key holds the wildcard child.
#[derive(Debug, Default)]
struct TrieNode {
    children: HashMap<String, TrieNode>,
    /// A plain or wildcard rule ends at this node
    is_rule: bool,
    /// An exception rule (`!`-prefixed) ends at this node
    is_exception: bool,
}

/// Outcome of matching a hostname's labels against the trie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuffixMatch {
    /// Depth of the deepest rule terminator reached, in labels.
    /// 1 when no explicit rule matched (the PSL default rule).
    pub matched_labels: usize,
    /// The terminating rule was an exception rule
    pub is_exception: bool,
    /// An explicit rule terminator was reached (false means default fallback)
    pub matched: bool,
}

impl SuffixMatch {
    /// Number of hostname labels the suffix actually covers.
    ///
    /// Exception rules exclude their own last label: `!www.ck` matching at
    /// depth 2 yields a one-label suffix ("ck").
    pub fn suffix_len(&self) -> usize {
        if self.is_exception {
            self.matched_labels - 1
        } else {
            self.matched_labels
        }
    }
}

/// Immutable suffix rule index, built once and shared read-only.
#[derive(Debug, Default)]
pub struct SuffixTrie {
    root: TrieNode,
}

impl SuffixTrie {
    /// Build a trie from rule strings (`"co.uk"`, `"*.ck"`, `"!www.ck"`).
    pub fn from_rules<I, S>(rules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::default();
        for rule in rules {
            trie.insert(rule.as_ref());
        }
        trie
    }

    fn insert(&mut self, rule: &str) {
        let (rule, is_exception) = match rule.strip_prefix('!') {
            Some(stripped) => (stripped, true),
            None => (rule, false),
        };
        if rule.is_empty() {
            return;
        }

        let mut node = &mut self.root;
        for label in rule.split('.').rev() {
            node = node.children.entry(label.to_string()).or_default();
        }
        node.is_rule = true;
        if is_exception {
            node.is_exception = true;
        }
    }

    /// Longest-match lookup.
    ///
    /// `labels` are the hostname's labels in original left-to-right order;
    /// the walk consumes them from the right (TLD first). At each step an
    /// exact-label child is preferred over the `*` child. The deepest node
    /// flagged as a rule terminator wins; with no terminator on the path,
    /// the default rule applies (last label only).
    pub fn longest_match(&self, labels: &[&str]) -> SuffixMatch {
        let mut node = &self.root;
        let mut best = SuffixMatch {
            matched_labels: 1,
            is_exception: false,
            matched: false,
        };

        for (depth, label) in labels.iter().rev().enumerate() {
            let child = match node.children.get(*label) {
                Some(exact) => exact,
                None => match node.children.get("*") {
                    Some(wildcard) => wildcard,
                    None => break,
                },
            };
            if child.is_rule {
                best = SuffixMatch {
                    matched_labels: depth + 1,
                    is_exception: child.is_exception,
                    matched: true,
                };
            }
            node = child;
        }

        best
    }

    /// Check if the trie holds no rules.
    pub fn is_empty(&self) -> bool {
        self.root.children.is_empty()
    }
}
