//! Gate predicates consulted before any suffix matching happens.

use std::net::IpAddr;

use once_cell::sync::Lazy;
use regex::Regex;

/// Maximum hostname length on the wire, minus the trailing dot.
const MAX_HOSTNAME_LEN: usize = 253;

/// Host syntax per RFC 1123: 1-63 char labels of letters, digits and
/// hyphens, no leading or trailing hyphen, dot-separated, no empty labels.
static HOSTNAME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?(?:\.[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?)*$")
        .expect("HOSTNAME_PATTERN: hardcoded regex is invalid")
});

/// Pure syntactic hostname check. Does not detect IP literals; see [`is_ip`].
pub fn is_valid_hostname(hostname: &str) -> bool {
    if hostname.is_empty() || hostname.len() > MAX_HOSTNAME_LEN {
        return false;
    }
    HOSTNAME_PATTERN.is_match(hostname)
}

/// Check whether the hostname is an IPv4 or IPv6 literal.
///
/// Bracketed IPv6 forms (`[::1]`) are recognized in case the upstream
/// hostname extractor preserves the brackets.
pub fn is_ip(hostname: &str) -> bool {
    let candidate = hostname
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .unwrap_or(hostname);
    candidate.parse::<IpAddr>().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_common_hostnames() {
        assert!(is_valid_hostname("example.com"));
        assert!(is_valid_hostname("www.example.co.uk"));
        assert!(is_valid_hostname("localhost"));
        assert!(is_valid_hostname("xn--85x722f.xn--55qx5d.cn"));
        assert!(is_valid_hostname("a.b-c.d"));
        assert!(is_valid_hostname("WWW.Example.COM"));
    }

    #[test]
    fn test_rejects_bad_syntax() {
        assert!(!is_valid_hostname(""));
        assert!(!is_valid_hostname("example..com"));
        assert!(!is_valid_hostname(".example.com"));
        assert!(!is_valid_hostname("example.com."));
        assert!(!is_valid_hostname("-example.com"));
        assert!(!is_valid_hostname("example-.com"));
        assert!(!is_valid_hostname("exa_mple.com"));
        assert!(!is_valid_hostname("exam ple.com"));
    }

    #[test]
    fn test_rejects_oversized_names() {
        let label = "a".repeat(63);
        let host = [label.as_str(); 4].join(".");
        assert_eq!(host.len(), 255);
        assert!(!is_valid_hostname(&host));

        let label = "a".repeat(64);
        assert!(!is_valid_hostname(&label));

        assert!(is_valid_hostname(&"a".repeat(63)));
    }

    #[test]
    fn test_detects_ipv4() {
        assert!(is_ip("127.0.0.1"));
        assert!(is_ip("8.8.8.8"));
        assert!(!is_ip("999.0.0.1"));
        assert!(!is_ip("1.2.3"));
        assert!(!is_ip("example.com"));
    }

    #[test]
    fn test_detects_ipv6() {
        assert!(is_ip("::1"));
        assert!(is_ip("2001:db8::8a2e:370:7334"));
        assert!(is_ip("[::1]"));
        assert!(is_ip("[2001:db8::1]"));
        assert!(!is_ip("[::1"));
        assert!(!is_ip("not:an:ip"));
    }
}
