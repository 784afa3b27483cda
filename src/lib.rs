//! TLD Engine - A fast Public Suffix List engine for hostname decomposition
//!
//! This library breaks an internet hostname into its three tiers:
//! - **Public suffix** - the registry-controlled part (`co.uk`, `github.io`)
//! - **Registrable domain** - the suffix plus the one label an organization
//!   registers (`example.co.uk`)
//! - **Subdomain** - everything below the registrable domain (`www`)
//!
//! Matching follows the Public Suffix List algorithm: rules (plain,
//! wildcard `*.ck`, exception `!www.ck`) are indexed in a reversed-label
//! trie and the longest matching rule governs the decomposition. Lookups
//! are pure computations over an immutable rule set built once at startup.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use tld_engine::{ParseStep, SuffixList, TldExtractor, TldOptions};
//!
//! let list = SuffixList::new(
//!     vec!["com".into(), "uk".into(), "co.uk".into()],
//!     vec!["github.io".into()],
//! );
//! let tld = TldExtractor::new(Arc::new(list), TldOptions::new());
//!
//! assert_eq!(
//!     tld.domain("https://www.example.co.uk/page", false).as_deref(),
//!     Some("example.co.uk")
//! );
//! assert_eq!(
//!     tld.subdomain("https://www.example.co.uk/page", false).as_deref(),
//!     Some("www")
//! );
//!
//! let parsed = tld.parse("https://user.github.io", ParseStep::All);
//! assert_eq!(parsed.tld.public_suffix.as_deref(), Some("github.io"));
//! assert_eq!(parsed.icann.public_suffix.as_deref(), Some("io"));
//! ```
//!
//! # Rule sources
//!
//! A [`SuffixList`] can be built from explicit rule strings, from raw list
//! text with ICANN/PRIVATE section markers
//! ([`SuffixList::from_psl_text`]), or from a JSON snapshot previously
//! written by the [`updater`] (enabled by the default `updater` feature).
//! Refreshing a running process is an `Arc` swap through
//! [`SharedSuffixList`], never an in-place edit.

pub mod error;
pub mod extractor;
pub mod hostname;
pub mod list;
pub mod parser;
pub mod resolve;
pub mod trie;
pub mod types;
#[cfg(feature = "updater")]
pub mod updater;
pub mod validate;

// Re-export commonly used items
pub use error::{ListErrorKind, Result, TldError};
pub use extractor::{
    HostnameExtractor, TldExtractor, TldOptions, DEFAULT_CACHE_SIZE, RFC6761_HOSTS,
};
pub use hostname::extract_hostname;
pub use list::{RuleSnapshot, SharedSuffixList, SuffixList};
pub use parser::{parse_psl_sections, parse_psl_text};
pub use trie::{SuffixMatch, SuffixTrie};
pub use types::{ParseResult, ParseStep, TldSection};
#[cfg(feature = "updater")]
pub use updater::{ListUpdater, DEFAULT_PROVIDER_URL};
pub use validate::{is_ip, is_valid_hostname};

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_full_workflow() {
        let psl_text = "\
// ===BEGIN ICANN DOMAINS===
com
uk
co.uk
ck
*.ck
!www.ck
// ===END ICANN DOMAINS===
// ===BEGIN PRIVATE DOMAINS===
github.io
// ===END PRIVATE DOMAINS===
";

        // Parse list text
        let list = SuffixList::from_psl_text(psl_text).unwrap();
        assert_eq!(list.icann_rules().len(), 6);
        assert_eq!(list.private_rules().len(), 1);

        // Publish the list and build an extractor over it
        let shared = SharedSuffixList::new(Arc::new(list));
        let tld = TldExtractor::new(shared.load(), TldOptions::new().with_rfc6761(true));

        // Plain rule
        let result = tld.parse("https://www.example.co.uk", ParseStep::All);
        assert_eq!(result.tld.public_suffix.as_deref(), Some("co.uk"));
        assert_eq!(result.tld.domain.as_deref(), Some("example.co.uk"));
        assert_eq!(result.tld.site_domain.as_deref(), Some("example"));
        assert_eq!(result.tld.subdomain.as_deref(), Some("www"));

        // Wildcard rule: the matched label counts toward the suffix
        assert_eq!(
            tld.public_suffix("https://www.foo.ck", false).as_deref(),
            Some("foo.ck")
        );

        // Exception rule: www.ck is registrable, not a suffix
        assert_eq!(
            tld.domain("https://sub.www.ck", false).as_deref(),
            Some("www.ck")
        );

        // Private rules only affect the default variant
        assert_eq!(
            tld.domain("https://user.github.io", true).as_deref(),
            Some("github.io")
        );

        // Gates
        assert!(!tld.tld_exists("https://127.0.0.1"));
        let result = tld.parse("http://localhost", ParseStep::All);
        assert_eq!(result.is_host, Some(true));
        assert_eq!(result.tld.domain.as_deref(), Some("localhost"));

        // Refresh is a reference swap
        shared.store(Arc::new(SuffixList::new(vec!["org".into()], vec![])));
        assert_eq!(shared.load().icann_rules(), ["org"]);
    }
}
