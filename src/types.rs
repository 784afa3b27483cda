use serde::Serialize;

/// How far `TldExtractor::parse` should go before returning.
///
/// Each stage includes the work of the gate checks (hostname extraction,
/// IP detection, allowlist, syntax validation); later stages build on the
/// suffix lookup. Callers that only need one tier pick the matching stage
/// and never pay for the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ParseStep {
    /// Stop after the gate predicates (validity, IP, allowlist)
    Validate,
    /// Stop after checking whether any explicit rule matched
    TldExists,
    /// Stop after computing the public suffix
    PublicSuffix,
    /// Stop after computing the registrable domain
    Domain,
    /// Stop after computing the site domain (domain minus suffix)
    SiteDomain,
    /// Stop after computing the subdomain
    SubDomain,
    /// Compute everything
    All,
}

/// Per-rule-set-variant decomposition of a hostname.
///
/// Produced twice per parse: once against the full rule set and once against
/// the ICANN-only subset. Fields stay at their defaults for every stage the
/// parse did not reach.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TldSection {
    /// Did any explicit rule match (not the single-label default fallback)?
    pub tld_exists: bool,
    /// Longest matching suffix, e.g. "co.uk"
    pub public_suffix: Option<String>,
    /// Public suffix plus one label, e.g. "example.co.uk"
    pub domain: Option<String>,
    /// Domain minus the suffix, e.g. "example"
    pub site_domain: Option<String>,
    /// Labels below the domain, e.g. "www"
    pub subdomain: Option<String>,
}

/// Full result of decomposing one URL or hostname.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseResult {
    /// Hostname extracted from the input, lowercased; `None` if extraction failed
    pub hostname: Option<String>,
    /// Did the hostname pass syntax validation?
    pub is_valid: Option<bool>,
    /// Is the hostname an IP literal?
    pub is_ip: Option<bool>,
    /// Is the hostname on the configured valid-host allowlist?
    pub is_host: Option<bool>,
    /// Decomposition against the full (ICANN + PRIVATE) rule set
    #[serde(flatten)]
    pub tld: TldSection,
    /// Decomposition against the ICANN-only rule set
    pub icann: TldSection,
}

impl ParseResult {
    /// Result for input where no hostname could be extracted.
    pub(crate) fn no_hostname() -> Self {
        Self {
            hostname: None,
            is_valid: Some(false),
            is_ip: Some(false),
            is_host: Some(false),
            ..Self::default()
        }
    }
}
