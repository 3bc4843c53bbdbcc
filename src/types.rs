// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

use serde::{Deserialize, Serialize};

/// One (candidate, provider) pairing to be checked over the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeTask {
    /// Provider identifier from the template table
    pub provider: &'static str,
    /// Hypothetical bucket name derived from the domain
    pub candidate: String,
    /// Fully resolved probe URL
    pub url: String,
    /// Composite label, `"{provider}:{candidate}"`
    pub label: String,
}

/// Selected fields of one HTTP response to a probe.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProbeResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub location: Option<String>,
    pub server: Option<String>,
    /// Provider-specific error-code header (e.g. `x-amz-error-code`)
    pub error_code: Option<String>,
    /// Body text, fetched only for 200 responses
    pub body: Option<String>,
}

/// Result of executing one probe task. Transport failures are a value,
/// not an exception: the classifier stays total over this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    Response(ProbeResponse),
    TransportFailure {
        /// Error description, truncated to 50 characters
        error: String,
    },
}

impl ProbeOutcome {
    pub fn status(&self) -> Option<u16> {
        match self {
            ProbeOutcome::Response(resp) => Some(resp.status),
            ProbeOutcome::TransportFailure { .. } => None,
        }
    }
}

/// Exposure category assigned to a probe outcome.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Classification {
    PublicListing,
    PublicAccess,
    Private,
    Redirect,
    Error,
    Discard,
}

impl Classification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::PublicListing => "PUBLIC_LISTING",
            Classification::PublicAccess => "PUBLIC_ACCESS",
            Classification::Private => "PRIVATE",
            Classification::Redirect => "REDIRECT",
            Classification::Error => "ERROR",
            Classification::Discard => "DISCARD",
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One classified finding, produced only for non-DISCARD outcomes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReportEntry {
    pub label: String,
    pub url: String,
    /// HTTP status; absent for transport failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    pub classification: Classification,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    pub discovered_at: String,
}
