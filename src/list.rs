//! Suffix rule lists.
//!
//! A [`SuffixList`] holds the two rule partitions of the upstream list
//! (ICANN and PRIVATE) together with the tries built from them: one over
//! the merged set and one over the ICANN subset only. Built once, then
//! shared read-only; a refresh builds a new list and republishes the `Arc`
//! through [`SharedSuffixList`] instead of mutating in place.

use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::parser::parse_psl_sections;
use crate::trie::SuffixTrie;

/// The serializable partition of a suffix list, as written by the updater.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleSnapshot {
    /// Rules from the ICANN section
    pub icann: Vec<String>,
    /// Rules from the PRIVATE section
    pub private: Vec<String>,
}

/// Immutable rule set: partitioned rule strings plus their tries.
#[derive(Debug)]
pub struct SuffixList {
    icann: Vec<String>,
    private: Vec<String>,
    all_trie: SuffixTrie,
    icann_trie: SuffixTrie,
}

impl SuffixList {
    /// Build a list from pre-partitioned rule strings.
    pub fn new(icann: Vec<String>, private: Vec<String>) -> Self {
        let all_trie = SuffixTrie::from_rules(icann.iter().chain(private.iter()));
        let icann_trie = SuffixTrie::from_rules(icann.iter());
        Self {
            icann,
            private,
            all_trie,
            icann_trie,
        }
    }

    /// Build a list from raw upstream list text with section markers.
    pub fn from_psl_text(text: &str) -> Result<Self> {
        let (icann, private) = parse_psl_sections(text)?;
        Ok(Self::new(icann, private))
    }

    /// Build a list from a JSON snapshot (see [`RuleSnapshot`]).
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self> {
        let snapshot: RuleSnapshot = serde_json::from_slice(bytes)?;
        Ok(Self::from(snapshot))
    }

    /// Snapshot the rule partition for persistence.
    pub fn snapshot(&self) -> RuleSnapshot {
        RuleSnapshot {
            icann: self.icann.clone(),
            private: self.private.clone(),
        }
    }

    /// Trie over the merged ICANN + PRIVATE rules.
    pub fn all_trie(&self) -> &SuffixTrie {
        &self.all_trie
    }

    /// Trie over the ICANN rules only.
    pub fn icann_trie(&self) -> &SuffixTrie {
        &self.icann_trie
    }

    /// Rules from the ICANN section.
    pub fn icann_rules(&self) -> &[String] {
        &self.icann
    }

    /// Rules from the PRIVATE section.
    pub fn private_rules(&self) -> &[String] {
        &self.private
    }

    /// Check if the list holds no rules at all.
    pub fn is_empty(&self) -> bool {
        self.icann.is_empty() && self.private.is_empty()
    }
}

impl From<RuleSnapshot> for SuffixList {
    fn from(snapshot: RuleSnapshot) -> Self {
        Self::new(snapshot.icann, snapshot.private)
    }
}

/// Republish point for rule-set refreshes.
///
/// Lookups grab the current `Arc` and keep using it for their whole
/// computation; a refresh swaps the reference. The lock is held only for
/// the pointer copy, never across a lookup.
#[derive(Debug)]
pub struct SharedSuffixList {
    inner: RwLock<Arc<SuffixList>>,
}

impl SharedSuffixList {
    /// Wrap an initial list.
    pub fn new(list: Arc<SuffixList>) -> Self {
        Self {
            inner: RwLock::new(list),
        }
    }

    /// Get the currently published list.
    pub fn load(&self) -> Arc<SuffixList> {
        Arc::clone(&self.inner.read())
    }

    /// Atomically publish a replacement list.
    pub fn store(&self, list: Arc<SuffixList>) {
        *self.inner.write() = list;
    }
}
