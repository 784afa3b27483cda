//! Pure resolvers deriving the three hostname tiers from a trie match.
//!
//! Each function is a deterministic computation over its arguments; the
//! orchestrator in [`extractor`](crate::extractor) chains them and decides
//! how far to go.

use std::collections::HashSet;

use crate::trie::SuffixTrie;

/// Did any explicit rule match the hostname (not the default fallback)?
pub fn tld_exists(trie: &SuffixTrie, hostname: &str) -> bool {
    let labels: Vec<&str> = hostname.split('.').collect();
    trie.longest_match(&labels).matched
}

/// Compute the public suffix of a validated hostname.
///
/// Falls back to the hostname itself if it has fewer labels than the match
/// claims; that cannot happen with a correctly built trie and is kept as a
/// defensive bound only.
pub fn public_suffix(trie: &SuffixTrie, hostname: &str) -> String {
    let labels: Vec<&str> = hostname.split('.').collect();
    let suffix_len = trie.longest_match(&labels).suffix_len();

    if labels.len() < suffix_len {
        return hostname.to_string();
    }
    labels[labels.len() - suffix_len..].join(".")
}

/// Compute the registrable domain: the public suffix plus one label.
///
/// Allowlisted hosts are their own domain; a hostname that is itself a
/// public suffix has no registrable domain.
pub fn registrable_domain(
    valid_hosts: &HashSet<String>,
    public_suffix: &str,
    hostname: &str,
) -> Option<String> {
    if valid_hosts.contains(hostname) {
        return Some(hostname.to_string());
    }
    if public_suffix == hostname {
        return None;
    }

    // A suffix that is not a dotted suffix of its own hostname means the
    // suffix computation is broken; fail loudly instead of mismatching.
    let prefix = hostname
        .strip_suffix(public_suffix)
        .and_then(|rest| rest.strip_suffix('.'));
    assert!(
        prefix.is_some(),
        "public suffix {public_suffix:?} does not terminate hostname {hostname:?}"
    );

    let label = prefix
        .unwrap()
        .rsplit('.')
        .next()
        .filter(|label| !label.is_empty())?;
    Some(format!("{label}.{public_suffix}"))
}

/// Compute the site domain: the registrable domain minus the suffix.
pub fn site_domain(domain: &str, public_suffix: &str) -> String {
    domain
        .strip_suffix(public_suffix)
        .and_then(|rest| rest.strip_suffix('.'))
        .unwrap_or(domain)
        .to_string()
}

/// Compute the subdomain: everything in the hostname below the domain.
pub fn subdomain(hostname: &str, domain: Option<&str>) -> String {
    let Some(domain) = domain else {
        return String::new();
    };
    if hostname == domain {
        return String::new();
    }
    hostname
        .strip_suffix(domain)
        .and_then(|rest| rest.strip_suffix('.'))
        .unwrap_or("")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trie() -> SuffixTrie {
        SuffixTrie::from_rules(["com", "uk", "co.uk", "ck", "*.ck", "!www.ck"])
    }

    fn no_hosts() -> HashSet<String> {
        HashSet::new()
    }

    #[test]
    fn test_public_suffix_plain_and_nested() {
        let trie = trie();
        assert_eq!(public_suffix(&trie, "example.com"), "com");
        assert_eq!(public_suffix(&trie, "www.example.co.uk"), "co.uk");
        assert_eq!(public_suffix(&trie, "example.uk"), "uk");
    }

    #[test]
    fn test_public_suffix_unmatched_falls_back_to_last_label() {
        let trie = trie();
        assert_eq!(public_suffix(&trie, "example.nothere"), "nothere");
        assert!(!tld_exists(&trie, "example.nothere"));
    }

    #[test]
    fn test_public_suffix_wildcard_and_exception() {
        let trie = trie();
        assert_eq!(public_suffix(&trie, "www.foo.ck"), "foo.ck");
        assert_eq!(public_suffix(&trie, "www.ck"), "ck");
        assert_eq!(public_suffix(&trie, "sub.www.ck"), "ck");
    }

    #[test]
    fn test_tld_exists() {
        let trie = trie();
        assert!(tld_exists(&trie, "example.com"));
        assert!(tld_exists(&trie, "foo.ck"));
        assert!(!tld_exists(&trie, "localhost"));
    }

    #[test]
    fn test_domain_is_suffix_plus_one_label() {
        assert_eq!(
            registrable_domain(&no_hosts(), "co.uk", "www.example.co.uk"),
            Some("example.co.uk".to_string())
        );
        assert_eq!(
            registrable_domain(&no_hosts(), "com", "example.com"),
            Some("example.com".to_string())
        );
    }

    #[test]
    fn test_domain_is_none_when_hostname_is_the_suffix() {
        assert_eq!(registrable_domain(&no_hosts(), "co.uk", "co.uk"), None);
        assert_eq!(registrable_domain(&no_hosts(), "foo.ck", "foo.ck"), None);
    }

    #[test]
    fn test_allowlisted_host_is_its_own_domain() {
        let hosts: HashSet<String> = ["localhost".to_string()].into();
        assert_eq!(
            registrable_domain(&hosts, "localhost", "localhost"),
            Some("localhost".to_string())
        );
    }

    #[test]
    #[should_panic(expected = "does not terminate hostname")]
    fn test_suffix_mismatch_panics() {
        registrable_domain(&no_hosts(), "co.uk", "example.com");
    }

    #[test]
    fn test_site_domain_strips_suffix() {
        assert_eq!(site_domain("example.co.uk", "co.uk"), "example");
        assert_eq!(site_domain("example.com", "com"), "example");
    }

    #[test]
    fn test_subdomain() {
        assert_eq!(
            subdomain("www.example.co.uk", Some("example.co.uk")),
            "www"
        );
        assert_eq!(
            subdomain("a.b.example.com", Some("example.com")),
            "a.b"
        );
        assert_eq!(subdomain("example.com", Some("example.com")), "");
        assert_eq!(subdomain("example.com", None), "");
    }

    #[test]
    fn test_subdomain_rejoins_into_hostname() {
        let hostname = "a.b.example.com";
        let domain = "example.com";
        let sub = subdomain(hostname, Some(domain));
        assert_eq!(format!("{sub}.{domain}"), hostname);
    }
}
