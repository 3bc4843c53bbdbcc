// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Discovery Engine
 * Drives the pipeline per domain: candidate generation, endpoint
 * expansion, bounded-concurrency probing, classification, collection.
 *
 * @copyright 2026 Bountyy Oy
 * @license Proprietary
 */

use crate::classifier::classify_task;
use crate::config::EngineConfig;
use crate::expander::expand_candidates;
use crate::generator::generate_candidates;
use crate::prober::Prober;
use crate::reporting::DiscoveryReport;
use crate::types::ReportEntry;
use futures::stream::{self, StreamExt};
use std::sync::Arc;
use tracing::{debug, info};

pub struct DiscoveryEngine {
    prober: Arc<dyn Prober>,
    config: EngineConfig,
}

impl DiscoveryEngine {
    pub fn new(prober: Arc<dyn Prober>, config: EngineConfig) -> Self {
        Self { prober, config }
    }

    /// Probe every (candidate, provider) combination for one domain.
    ///
    /// All tasks for the domain flow through one bounded stream: at most
    /// `max_concurrency` probes are in flight at a time, and the collecting
    /// end is the single writer of the result list. Results arrive in
    /// completion order; no ordering is guaranteed.
    pub async fn process_domain(&self, domain: &str) -> Vec<ReportEntry> {
        info!("Processing domain: {}", domain);

        let candidates = generate_candidates(domain);
        let tasks = expand_candidates(&candidates);
        debug!(
            "{}: {} candidates expanded into {} probe tasks",
            domain,
            candidates.len(),
            tasks.len()
        );

        let entries: Vec<ReportEntry> = stream::iter(tasks)
            .map(|task| {
                let prober = Arc::clone(&self.prober);
                async move {
                    let outcome = prober.probe(&task).await;
                    classify_task(&task, &outcome)
                }
            })
            .buffer_unordered(self.config.max_concurrency)
            .filter_map(|entry| async move { entry })
            .collect()
            .await;

        info!("{}: {} reportable findings", domain, entries.len());
        entries
    }

    /// Process domains strictly one at a time, accumulating every
    /// non-discarded finding into one report. Peak outbound connection
    /// count stays bounded by `max_concurrency` regardless of how many
    /// domains or candidates are in play.
    pub async fn run(&self, domains: &[String]) -> DiscoveryReport {
        info!("Starting cloud storage discovery for {} domains", domains.len());

        let mut report = DiscoveryReport::new();
        for domain in domains {
            let entries = self.process_domain(domain).await;
            report.record_domain(entries);
        }

        info!(
            "Discovery complete: {} findings across {} domains",
            report.entries().len(),
            report.domains_scanned()
        );
        report
    }
}
