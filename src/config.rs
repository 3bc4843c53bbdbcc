// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Bountyy Oy - Scanner Configuration
 * Provider URL conventions, bucket naming patterns and engine tunables.
 * All tables are read-only and fixed at process start.
 *
 * @copyright 2026 Bountyy Oy
 * @license Proprietary
 */

/// One cloud storage provider's public-access URL convention.
/// The `{}` slot in the template receives the candidate bucket name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderTemplate {
    pub id: &'static str,
    pub url_template: &'static str,
}

/// Public endpoint conventions for the supported storage providers.
pub const PROVIDER_TEMPLATES: &[ProviderTemplate] = &[
    ProviderTemplate { id: "aws_s3", url_template: "http://{}.s3.amazonaws.com" },
    ProviderTemplate { id: "aws_s3_https", url_template: "https://{}.s3.amazonaws.com" },
    ProviderTemplate { id: "aws_s3_website", url_template: "http://{}.s3-website-us-east-1.amazonaws.com" },
    ProviderTemplate { id: "aws_s3_website_eu", url_template: "http://{}.s3-website-eu-west-1.amazonaws.com" },
    ProviderTemplate { id: "digitalocean", url_template: "https://{}.digitaloceanspaces.com" },
    ProviderTemplate { id: "google", url_template: "https://storage.googleapis.com/{}" },
    ProviderTemplate { id: "azure", url_template: "https://{}.blob.core.windows.net" },
    ProviderTemplate { id: "backblaze", url_template: "https://{}.s3.us-west-004.backblazeb2.com" },
    ProviderTemplate { id: "oracle", url_template: "https://{}.objectstorage.us-ashburn-1.oci.customer-oci.com" },
    ProviderTemplate { id: "linode", url_template: "https://{}.us-east-1.linodeobjects.com" },
];

/// Common bucket naming permutations. The `{}` slot receives a normalized
/// domain fragment.
pub const BUCKET_PATTERNS: &[&str] = &[
    "{}",
    "{}-assets",
    "{}-backup",
    "{}-data",
    "{}-dev",
    "{}-staging",
    "{}-prod",
    "{}-test",
    "{}-uploads",
    "{}-media",
    "{}-static",
    "{}-cdn",
    "{}-storage",
    "assets-{}",
    "data-{}",
    "dev-{}",
    "prod-{}",
    "staging-{}",
    "{}-bucket",
    "bucket-{}",
    "{}-s3",
    "s3-{}",
    "{}-blob",
    "blob-{}",
    "{}-gcs",
    "gcs-{}",
    "{}-azure",
    "azure-{}",
];

/// Upper bound on the candidate set generated for one domain.
pub const MAX_CANDIDATES: usize = 100;

/// Upper bound on domains read from a fallback input file.
pub const MAX_DOMAINS_FROM_FILE: usize = 50;

/// Engine tunables.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Maximum in-flight probes per domain
    pub max_concurrency: usize,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_concurrency: 10,
            timeout_secs: 5,
        }
    }
}
