// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Outcome Classifier
 * Deterministic, total mapping from probe outcomes to exposure categories.
 *
 * @copyright 2026 Bountyy Oy
 * @license Proprietary
 */

use crate::types::{Classification, ProbeOutcome, ProbeTask, ReportEntry};

/// Literal substrings in a 200 body that indicate the storage service
/// returned a directory/object listing rather than an error page.
pub const LISTING_MARKERS: &[&str] = &["ListBucketResult", "Contents"];

const REDIRECT_STATUSES: &[u16] = &[301, 302, 307, 308];
const ERROR_STATUSES: &[u16] = &[400, 401, 500, 503];

pub fn has_listing_marker(body: &str) -> bool {
    LISTING_MARKERS.iter().any(|marker| body.contains(marker))
}

/// Map a probe outcome to its exposure category.
pub fn classify(outcome: &ProbeOutcome) -> Classification {
    match outcome {
        ProbeOutcome::TransportFailure { .. } => Classification::Error,
        ProbeOutcome::Response(resp) => match resp.status {
            200 => {
                if resp.body.as_deref().is_some_and(has_listing_marker) {
                    Classification::PublicListing
                } else {
                    Classification::PublicAccess
                }
            }
            403 => Classification::Private,
            404 => Classification::Discard,
            status if REDIRECT_STATUSES.contains(&status) => Classification::Redirect,
            status if ERROR_STATUSES.contains(&status) => Classification::Error,
            _ => Classification::Discard,
        },
    }
}

/// Detail string captured alongside a classification: content type for
/// public hits, the provider error code for private buckets, the Location
/// target for redirects, the Server header for HTTP errors, and the
/// truncated message for transport failures.
pub fn classification_detail(outcome: &ProbeOutcome) -> Option<String> {
    match outcome {
        ProbeOutcome::TransportFailure { error } => Some(error.clone()),
        ProbeOutcome::Response(resp) => match classify(outcome) {
            Classification::PublicListing | Classification::PublicAccess => {
                resp.content_type.clone()
            }
            Classification::Private => resp.error_code.clone(),
            Classification::Redirect => resp.location.clone(),
            Classification::Error => resp.server.clone(),
            Classification::Discard => None,
        },
    }
}

/// Build the report entry for one completed task. DISCARD outcomes are
/// dropped here and never reach the aggregator.
pub fn classify_task(task: &ProbeTask, outcome: &ProbeOutcome) -> Option<ReportEntry> {
    let classification = classify(outcome);
    if classification == Classification::Discard {
        return None;
    }

    Some(ReportEntry {
        label: task.label.clone(),
        url: task.url.clone(),
        status: outcome.status(),
        classification,
        detail: classification_detail(outcome),
        discovered_at: chrono::Utc::now().to_rfc3339(),
    })
}
