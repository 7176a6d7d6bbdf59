//! Host-based tenancy: subdomain extraction, normalization, and syntax rules.
//!
//! The pure half of the subdomain resolver. Mapping a candidate label to an
//! actual tenant row is the database layer's job; everything here operates on
//! strings only so it can be unit-tested without a database.

use std::sync::OnceLock;

use regex::Regex;

/// Labels that never identify a tenant, even when they appear as the
/// leftmost host label.
pub const RESERVED_SUBDOMAINS: &[&str] = &["www", "api", "app", "admin", "mail", "ftp"];

/// DNS labels are capped at 63 octets.
const MAX_SUBDOMAIN_LEN: usize = 63;

/// Outcome of classifying a request `Host` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostTenancy {
    /// Bare apex domain, a reserved label, or a malformed host: no tenant.
    MainDomain,
    /// The leftmost label is a candidate tenant subdomain (lowercased).
    /// Whether an active tenant actually owns it is decided by a lookup.
    Candidate(String),
}

/// Classify a request host against the configured base domain.
///
/// Strips any port, lowercases, and takes the leftmost `.`-separated label.
/// Hosts equal to the bare apex, hosts whose leftmost label is reserved
/// (e.g. `www`), and hosts that cannot carry a subdomain at all (empty,
/// single-label, IPv6 literals) all resolve to [`HostTenancy::MainDomain`].
pub fn parse_host(host: &str, base_domain: &str) -> HostTenancy {
    let host = host.trim().to_ascii_lowercase();
    // Empty hosts and IP literals cannot carry a tenant label.
    if host.is_empty() || host.starts_with('[') {
        return HostTenancy::MainDomain;
    }

    let host = match host.split(':').next() {
        Some(h) if !h.is_empty() => h,
        _ => return HostTenancy::MainDomain,
    };

    let base = base_domain.trim().to_ascii_lowercase();
    if host == base {
        return HostTenancy::MainDomain;
    }

    // A host without a dot has no subdomain label to speak of.
    let mut labels = host.split('.');
    let leftmost = labels.next().unwrap_or("");
    if labels.next().is_none() {
        return HostTenancy::MainDomain;
    }

    if leftmost.is_empty() || leftmost == base || RESERVED_SUBDOMAINS.contains(&leftmost) {
        return HostTenancy::MainDomain;
    }

    HostTenancy::Candidate(leftmost.to_string())
}

/// Normalize a user-supplied subdomain: lowercase and drop any character
/// outside `[a-z0-9-]`. Used by the signup availability check before
/// validation, so `"My Room!"` becomes `"myroom"`.
pub fn normalize_subdomain(raw: &str) -> String {
    raw.trim()
        .to_ascii_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
        .collect()
}

fn subdomain_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[a-z0-9](?:[a-z0-9-]*[a-z0-9])?$").expect("subdomain pattern is valid")
    })
}

/// Whether a subdomain is syntactically acceptable for a new tenant.
///
/// Requires lowercase alphanumerics and hyphens, no leading or trailing
/// hyphen, at most 63 characters, and rejects reserved labels.
pub fn is_valid_subdomain(subdomain: &str) -> bool {
    !subdomain.is_empty()
        && subdomain.len() <= MAX_SUBDOMAIN_LEN
        && !RESERVED_SUBDOMAINS.contains(&subdomain)
        && subdomain_pattern().is_match(subdomain)
}
