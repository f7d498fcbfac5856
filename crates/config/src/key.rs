//! Accessor-name to environment-key derivation.
//!
//! Responsibilities:
//! - Split a camel-case accessor name into segments and derive the
//!   `SCREAMING_SNAKE_CASE` environment key for it.
//!
//! Does NOT handle:
//! - Environment lookups (see `resolver.rs`).
//!
//! Invariants:
//! - Derivation is a pure function: same input, same key, no environment
//!   access, no failure path.
//! - An uppercase run of 2+ letters is one acronym segment unless its tail
//!   starts a new capitalized word (`vpcCIDRBlock` segments as
//!   `vpc`/`CIDR`/`Block`, not `vpc`/`CIDRB`/`lock`).
//! - Digits attach to the preceding lowercase run (`az3Count` segments as
//!   `az3`/`Count`).

use fancy_regex::Regex;
use once_cell::sync::Lazy;

// The alternation needs lookahead for the acronym rule, which the plain
// `regex` engine does not support.
static SEGMENTS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[A-Z]{2,}(?=[A-Z][a-z]+[0-9]*|\b)|[A-Z]?[a-z]+[0-9]*|[A-Z]|[0-9]+")
        .expect("valid segment regex")
});

/// Derive the environment-variable key for an accessor name.
///
/// Segments the name at camel-case word boundaries (acronyms stay whole,
/// trailing digits stay attached to their word), joins the segments with
/// `_`, and uppercases the result.
///
/// ```
/// use apprunner_config::env_key;
///
/// assert_eq!(env_key("apprunnerServiceName"), "APPRUNNER_SERVICE_NAME");
/// assert_eq!(env_key("vpcCIDRBlock"), "VPC_CIDR_BLOCK");
/// assert_eq!(env_key("az3Count"), "AZ3_COUNT");
/// ```
///
/// Characters outside the identifier grammar are skipped; the key is the
/// join of whatever segments matched, possibly the empty string. Such keys
/// are deterministic but will not correspond to any set variable.
pub fn env_key(accessor: &str) -> String {
    let segments: Vec<&str> = SEGMENTS
        .find_iter(accessor)
        .filter_map(Result::ok)
        .map(|m| m.as_str())
        .collect();

    segments.join("_").to_uppercase()
}
