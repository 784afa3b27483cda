//! The orchestrating entry point.
//!
//! [`TldExtractor`] chains the gate predicates, the suffix trie lookup and
//! the tier resolvers into one `parse` call with an early-stop stage, so a
//! caller that only needs the public suffix never pays for domain and
//! subdomain derivation.

use std::collections::HashSet;
use std::num::NonZeroUsize;
use std::sync::Arc;

use lru::LruCache;
use parking_lot::Mutex;

use crate::hostname::extract_hostname;
use crate::list::SuffixList;
use crate::resolve;
use crate::types::{ParseResult, ParseStep};
use crate::validate::{is_ip, is_valid_hostname};

/// Default LRU cache size for suffix lookups
pub const DEFAULT_CACHE_SIZE: usize = 1024;

/// Reserved names from RFC 6761, injected into the allowlist on request.
pub const RFC6761_HOSTS: [&str; 5] = ["localhost", "local", "example", "invalid", "test"];

/// Pluggable hostname extraction function.
pub type HostnameExtractor = Box<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Cached per-hostname suffix computation: (full rule set, ICANN-only).
type SuffixPair = (String, String);

/// Construction-time options for [`TldExtractor`].
pub struct TldOptions {
    valid_hosts: Vec<String>,
    rfc6761: bool,
    cache_size: usize,
    extractor: Option<HostnameExtractor>,
}

impl Default for TldOptions {
    fn default() -> Self {
        Self {
            valid_hosts: Vec::new(),
            rfc6761: false,
            cache_size: DEFAULT_CACHE_SIZE,
            extractor: None,
        }
    }
}

impl TldOptions {
    /// Create default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add caller-supplied hosts to the valid-host allowlist.
    pub fn with_valid_hosts<I, S>(mut self, hosts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.valid_hosts.extend(hosts.into_iter().map(Into::into));
        self
    }

    /// Inject the RFC 6761 reserved names into the allowlist.
    pub fn with_rfc6761(mut self, enabled: bool) -> Self {
        self.rfc6761 = enabled;
        self
    }

    /// Set the suffix-lookup LRU cache size; 0 disables caching.
    pub fn with_cache_size(mut self, size: usize) -> Self {
        self.cache_size = size;
        self
    }

    /// Override the default hostname extractor.
    pub fn with_extractor<F>(mut self, extractor: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        self.extractor = Some(Box::new(extractor));
        self
    }
}

/// Hostname decomposition engine over an immutable [`SuffixList`].
///
/// Cheap to share behind an `Arc`; all lookups are read-only apart from the
/// internal LRU cache, which sits behind a `Mutex`.
pub struct TldExtractor {
    list: Arc<SuffixList>,
    valid_hosts: HashSet<String>,
    extractor: HostnameExtractor,
    cache: Option<Mutex<LruCache<String, SuffixPair>>>,
}

impl TldExtractor {
    /// Create an extractor over a rule list.
    pub fn new(list: Arc<SuffixList>, options: TldOptions) -> Self {
        let mut valid_hosts: HashSet<String> = options
            .valid_hosts
            .into_iter()
            .map(|h| h.to_lowercase())
            .collect();
        if options.rfc6761 {
            valid_hosts.extend(RFC6761_HOSTS.iter().map(|h| h.to_string()));
        }

        let cache = NonZeroUsize::new(options.cache_size)
            .map(|size| Mutex::new(LruCache::new(size)));

        Self {
            list,
            valid_hosts,
            extractor: options
                .extractor
                .unwrap_or_else(|| Box::new(|url| extract_hostname(url))),
            cache,
        }
    }

    /// The rule list this extractor matches against.
    pub fn list(&self) -> &Arc<SuffixList> {
        &self.list
    }

    /// Decompose a URL or hostname, stopping at the requested stage.
    ///
    /// Every field of the result that belongs to a stage beyond `stop`
    /// keeps its default value.
    pub fn parse(&self, url: &str, stop: ParseStep) -> ParseResult {
        let Some(hostname) = (self.extractor)(url) else {
            return ParseResult::no_hostname();
        };

        let mut result = ParseResult {
            hostname: Some(hostname.clone()),
            ..ParseResult::default()
        };

        // Gate predicates: IP literal, allowlist, syntax. Each positive
        // check fully resolves the input and stops the pipeline.
        result.is_ip = Some(is_ip(&hostname));
        if result.is_ip == Some(true) {
            result.is_host = Some(false);
            result.is_valid = Some(true);
            return result;
        }

        result.is_host = Some(self.valid_hosts.contains(&hostname));
        if result.is_host == Some(true) {
            result.is_valid = Some(true);
            // An allowlisted host is its own complete domain
            result.tld.domain = Some(hostname.clone());
            result.icann.domain = Some(hostname);
            return result;
        }

        result.is_valid = Some(is_valid_hostname(&hostname));
        if result.is_valid == Some(false) || stop == ParseStep::Validate {
            return result;
        }

        if stop == ParseStep::TldExists || stop == ParseStep::All {
            result.tld.tld_exists = resolve::tld_exists(self.list.all_trie(), &hostname);
            result.icann.tld_exists = resolve::tld_exists(self.list.icann_trie(), &hostname);
        }
        if stop == ParseStep::TldExists {
            return result;
        }

        let (suffix, icann_suffix) = self.suffix_pair(&hostname);
        result.tld.public_suffix = Some(suffix.clone());
        result.icann.public_suffix = Some(icann_suffix.clone());
        if stop == ParseStep::PublicSuffix {
            return result;
        }

        result.tld.domain = resolve::registrable_domain(&self.valid_hosts, &suffix, &hostname);
        result.icann.domain =
            resolve::registrable_domain(&self.valid_hosts, &icann_suffix, &hostname);
        if stop == ParseStep::Domain {
            return result;
        }

        result.tld.site_domain = result
            .tld
            .domain
            .as_deref()
            .map(|domain| resolve::site_domain(domain, &suffix));
        result.icann.site_domain = result
            .icann
            .domain
            .as_deref()
            .map(|domain| resolve::site_domain(domain, &icann_suffix));
        if stop == ParseStep::SiteDomain {
            return result;
        }

        result.tld.subdomain = Some(resolve::subdomain(&hostname, result.tld.domain.as_deref()));
        result.icann.subdomain = Some(resolve::subdomain(
            &hostname,
            result.icann.domain.as_deref(),
        ));

        result
    }

    /// Check whether any explicit rule matches the URL's hostname.
    pub fn tld_exists(&self, url: &str) -> bool {
        self.parse(url, ParseStep::TldExists).tld.tld_exists
    }

    /// Public suffix of the URL's hostname.
    pub fn public_suffix(&self, url: &str, icann: bool) -> Option<String> {
        let parsed = self.parse(url, ParseStep::PublicSuffix);
        if icann {
            parsed.icann.public_suffix
        } else {
            parsed.tld.public_suffix
        }
    }

    /// Registrable domain of the URL's hostname.
    pub fn domain(&self, url: &str, icann: bool) -> Option<String> {
        let parsed = self.parse(url, ParseStep::Domain);
        if icann {
            parsed.icann.domain
        } else {
            parsed.tld.domain
        }
    }

    /// Site domain (registrable domain minus suffix) of the URL's hostname.
    pub fn site_domain(&self, url: &str, icann: bool) -> Option<String> {
        let parsed = self.parse(url, ParseStep::SiteDomain);
        if icann {
            parsed.icann.site_domain
        } else {
            parsed.tld.site_domain
        }
    }

    /// Subdomain of the URL's hostname.
    pub fn subdomain(&self, url: &str, icann: bool) -> Option<String> {
        let parsed = self.parse(url, ParseStep::SubDomain);
        if icann {
            parsed.icann.subdomain
        } else {
            parsed.tld.subdomain
        }
    }

    /// Suffix lookup for both rule-set variants, LRU-cached per hostname.
    fn suffix_pair(&self, hostname: &str) -> SuffixPair {
        let Some(cache) = &self.cache else {
            return self.compute_suffix_pair(hostname);
        };

        let mut cache = cache.lock();
        if let Some(cached) = cache.get(hostname) {
            return cached.clone();
        }

        // Cache miss — compute while holding the lock. The lookup is
        // CPU-only (no I/O), so holding the lock is acceptable and avoids
        // multiple threads computing the same key.
        let pair = self.compute_suffix_pair(hostname);
        cache.put(hostname.to_string(), pair.clone());
        pair
    }

    fn compute_suffix_pair(&self, hostname: &str) -> SuffixPair {
        (
            resolve::public_suffix(self.list.all_trie(), hostname),
            resolve::public_suffix(self.list.icann_trie(), hostname),
        )
    }
}
