// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Bucket Candidate Generator
 * Derives plausible container names from a target domain: the normalized
 * domain itself, its TLD-stripped form, its longer labels, and the common
 * naming-pattern permutations of the first two.
 *
 * @copyright 2026 Bountyy Oy
 * @license Proprietary
 */

use crate::config::{BUCKET_PATTERNS, MAX_CANDIDATES};
use std::collections::BTreeSet;
use tracing::debug;

/// Minimum label length to be taken as a standalone candidate. Short labels
/// ("io", "com", "www") produce nothing but noise.
const MIN_LABEL_LEN: usize = 4;

/// Normalize a domain into a single hyphenated fragment: lowercased, with
/// dots and underscores replaced by hyphens.
pub fn normalize_domain(domain: &str) -> String {
    domain.trim().to_lowercase().replace(['.', '_'], "-")
}

/// Lowercased dot-separated labels of a domain, in order.
pub fn domain_labels(domain: &str) -> Vec<String> {
    let trimmed = domain.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    trimmed.to_lowercase().split('.').map(str::to_string).collect()
}

/// Generate the candidate bucket-name set for one domain.
///
/// The union is collected into a `BTreeSet` so that deduplication and the
/// truncation to `MAX_CANDIDATES` are deterministic (lexicographic): the
/// same domain always yields the same candidate set.
pub fn generate_candidates(domain: &str) -> Vec<String> {
    let trimmed = domain.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    let normalized = normalize_domain(trimmed);
    let labels = domain_labels(trimmed);

    let mut names: BTreeSet<String> = BTreeSet::new();

    // Full domain
    names.insert(normalized.clone());

    // Without TLD
    let stripped = if labels.len() > 1 {
        let s = labels[..labels.len() - 1].join("-");
        names.insert(s.clone());
        Some(s)
    } else {
        None
    };

    // Standalone labels
    for label in &labels {
        if label.len() >= MIN_LABEL_LEN {
            names.insert(label.clone());
        }
    }

    // Pattern permutations of the full and TLD-stripped forms
    for pattern in BUCKET_PATTERNS {
        names.insert(pattern.replacen("{}", &normalized, 1));
        if let Some(ref stripped) = stripped {
            names.insert(pattern.replacen("{}", stripped, 1));
        }
    }

    let total = names.len();
    let candidates: Vec<String> = names.into_iter().take(MAX_CANDIDATES).collect();
    debug!(
        "Generated {} candidates for {} ({} before truncation)",
        candidates.len(),
        trimmed,
        total
    );

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_domain() {
        assert_eq!(normalize_domain("acme.io"), "acme-io");
        assert_eq!(normalize_domain("My_Site.Example.COM"), "my-site-example-com");
        assert_eq!(normalize_domain("  acme.io  "), "acme-io");
    }

    #[test]
    fn test_domain_labels() {
        assert_eq!(domain_labels("acme.io"), vec!["acme", "io"]);
        assert_eq!(domain_labels("Sub.Acme.IO"), vec!["sub", "acme", "io"]);
        assert!(domain_labels("").is_empty());
        assert!(domain_labels("   ").is_empty());
    }

    #[test]
    fn test_candidates_for_acme_io() {
        let candidates = generate_candidates("acme.io");

        // Full normalized domain and TLD-stripped form
        assert!(candidates.contains(&"acme-io".to_string()));
        assert!(candidates.contains(&"acme".to_string()));

        // "acme" is a long-enough label; "io" is not
        assert!(!candidates.contains(&"io".to_string()));

        // Pattern permutations of both forms
        assert!(candidates.contains(&"acme-io-assets".to_string()));
        assert!(candidates.contains(&"assets-acme".to_string()));
        assert!(candidates.contains(&"s3-acme-io".to_string()));

        assert!(candidates.len() <= MAX_CANDIDATES);
    }

    #[test]
    fn test_no_duplicates() {
        let candidates = generate_candidates("example.com");
        let mut deduped = candidates.clone();
        deduped.dedup();
        assert_eq!(candidates, deduped);

        // Sorted output implies global uniqueness after dedup
        let mut sorted = candidates.clone();
        sorted.sort();
        assert_eq!(candidates, sorted);
    }

    #[test]
    fn test_single_label_domain() {
        let candidates = generate_candidates("localhost");
        assert!(candidates.contains(&"localhost".to_string()));
        assert!(candidates.contains(&"localhost-backup".to_string()));
        // No TLD-stripped form exists
        assert!(!candidates.contains(&"".to_string()));
    }

    #[test]
    fn test_empty_input() {
        assert!(generate_candidates("").is_empty());
        assert!(generate_candidates("   ").is_empty());
    }

    #[test]
    fn test_truncation_is_deterministic() {
        // 50 long labels push the union well past the cap
        let domain = (0..50)
            .map(|i| format!("label{:02}", i))
            .collect::<Vec<_>>()
            .join(".");

        let first = generate_candidates(&domain);
        let second = generate_candidates(&domain);

        assert_eq!(first.len(), MAX_CANDIDATES);
        assert_eq!(first, second);

        // Lexicographic selection
        let mut sorted = first.clone();
        sorted.sort();
        assert_eq!(first, sorted);
    }

    #[test]
    fn test_determinism_small_domain() {
        assert_eq!(generate_candidates("acme.io"), generate_candidates("acme.io"));
    }
}
