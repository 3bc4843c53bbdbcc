// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * HTTP Prober
 * Executes probe tasks over the network. One lightweight HEAD per task,
 * followed by a body-fetching GET only when the HEAD came back 200 and the
 * body is needed for listing-marker inspection. The overwhelming majority
 * of probes answer 403/404 and never pay for a body download.
 *
 * @copyright 2026 Bountyy Oy
 * @license Proprietary
 */

use crate::types::{ProbeOutcome, ProbeResponse, ProbeTask};
use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Maximum length of a transport-failure description carried in an outcome.
const MAX_ERROR_LEN: usize = 50;

/// Provider-specific error-code header captured for PRIVATE findings.
const PROVIDER_ERROR_HEADER: &str = "x-amz-error-code";

/// Executes one probe task. Implemented over reqwest for production and by
/// scripted probers in tests.
#[async_trait::async_trait]
pub trait Prober: Send + Sync {
    async fn probe(&self, task: &ProbeTask) -> ProbeOutcome;
}

/// Unauthenticated HTTP prober over a pooled reqwest client.
pub struct HttpProber {
    client: Client,
}

impl HttpProber {
    pub fn new(timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .redirect(reqwest::redirect::Policy::limited(5))
            .tcp_nodelay(true)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }

    fn header(response: &reqwest::Response, name: &str) -> Option<String> {
        response
            .headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    }
}

#[async_trait::async_trait]
impl Prober for HttpProber {
    async fn probe(&self, task: &ProbeTask) -> ProbeOutcome {
        // Tier 1: HEAD. Timeouts, refused connections, DNS and TLS failures
        // all become a transport-failure outcome; no retries.
        let head = match self.client.head(&task.url).send().await {
            Ok(response) => response,
            Err(e) => {
                debug!("Probe failed for {}: {}", task.label, e);
                return ProbeOutcome::TransportFailure {
                    error: truncate_error(&e.to_string()),
                };
            }
        };

        let status = head.status().as_u16();
        let mut response = ProbeResponse {
            status,
            content_type: Self::header(&head, "content-type"),
            location: Self::header(&head, "location"),
            server: Self::header(&head, "server"),
            error_code: Self::header(&head, PROVIDER_ERROR_HEADER),
            body: None,
        };

        // Tier 2: only a 200 warrants fetching the body, to check for a
        // public listing. A failed body fetch leaves the 200 outcome intact.
        if status == 200 {
            match self.client.get(&task.url).send().await {
                Ok(get_response) => {
                    if let Some(ct) = Self::header(&get_response, "content-type") {
                        response.content_type = Some(ct);
                    }
                    response.body = get_response.text().await.ok();
                }
                Err(e) => {
                    debug!("Body fetch failed for {}: {}", task.label, e);
                }
            }
        }

        ProbeOutcome::Response(response)
    }
}

/// Truncate an error description to `MAX_ERROR_LEN` characters, respecting
/// char boundaries.
pub fn truncate_error(message: &str) -> String {
    message.chars().take(MAX_ERROR_LEN).collect()
}
