// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Discovery Report
 * Accumulates classified findings across domains and renders them.
 *
 * The text renderer only prints entries whose HTTP status is in
 * PRINTABLE_STATUSES; ERROR findings (transport failures and the
 * 400/401/500/503 family) are kept in the full classified set but not
 * printed. Consumers that want everything read `entries()` or the JSON
 * output.
 *
 * @copyright 2026 Bountyy Oy
 * @license Proprietary
 */

use crate::types::ReportEntry;
use anyhow::Result;
use serde_json::json;
use std::collections::HashMap;
use std::fmt::Write as _;

/// Statuses included in the rendered text report.
pub const PRINTABLE_STATUSES: &[u16] = &[200, 301, 302, 307, 308, 403];

/// The print-filter boundary: an entry is rendered only when it carries a
/// numeric status from `PRINTABLE_STATUSES`. Transport failures carry no
/// status and are never printed.
pub fn is_printable(entry: &ReportEntry) -> bool {
    entry.status.is_some_and(|status| PRINTABLE_STATUSES.contains(&status))
}

#[derive(Debug, Clone, Default)]
pub struct DiscoveryReport {
    entries: Vec<ReportEntry>,
    domains_scanned: usize,
}

impl DiscoveryReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one domain's findings into the report.
    pub fn record_domain(&mut self, entries: Vec<ReportEntry>) {
        self.domains_scanned += 1;
        self.entries.extend(entries);
    }

    /// Every non-discarded finding, including unprinted ERROR entries.
    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    pub fn domains_scanned(&self) -> usize {
        self.domains_scanned
    }

    /// The subset of findings that pass the print filter.
    pub fn printable_entries(&self) -> Vec<&ReportEntry> {
        self.entries.iter().filter(|e| is_printable(e)).collect()
    }

    /// Finding counts per classification, over the full set.
    pub fn summary(&self) -> HashMap<String, usize> {
        let mut summary = HashMap::new();
        for entry in &self.entries {
            *summary.entry(entry.classification.as_str().to_string()).or_insert(0) += 1;
        }
        summary
    }

    /// Plain-text report: banner plus one block per printable finding.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "\n{}", "=".repeat(80));
        let _ = writeln!(out, "CLOUD ASSET DISCOVERY RESULTS");
        let _ = writeln!(out, "{}", "=".repeat(80));
        let _ = writeln!(out);

        for entry in self.printable_entries() {
            let _ = writeln!(out, "[+] {}", entry.label);
            let _ = writeln!(out, "    URL: {}", entry.url);
            // printable entries always carry a numeric status
            let _ = writeln!(
                out,
                "    Status: {} - {}",
                entry.status.unwrap_or_default(),
                entry.classification
            );
            if let Some(ref detail) = entry.detail {
                if !detail.is_empty() {
                    let _ = writeln!(out, "    Details: {}", detail);
                }
            }
            let _ = writeln!(out);
        }

        out
    }

    /// JSON report carrying the full classified set, so consumers can apply
    /// their own filtering.
    pub fn render_json(&self) -> Result<String> {
        let report = json!({
            "scanType": "cloud-storage-discovery",
            "domainsScanned": self.domains_scanned,
            "findings": self.entries,
            "findingsSummary": self.summary(),
            "generatedAt": chrono::Utc::now().to_rfc3339(),
        });
        Ok(serde_json::to_string_pretty(&report)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Classification;

    fn entry(status: Option<u16>, classification: Classification) -> ReportEntry {
        ReportEntry {
            label: "aws_s3:acme".to_string(),
            url: "http://acme.s3.amazonaws.com".to_string(),
            status,
            classification,
            detail: None,
            discovered_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    #[test]
    fn test_printable_statuses() {
        for status in [200, 301, 302, 307, 308, 403] {
            assert!(is_printable(&entry(Some(status), Classification::Private)));
        }
    }

    #[test]
    fn test_error_statuses_not_printable() {
        for status in [400, 401, 500, 503] {
            assert!(!is_printable(&entry(Some(status), Classification::Error)));
        }
    }

    #[test]
    fn test_transport_failures_not_printable() {
        assert!(!is_printable(&entry(None, Classification::Error)));
    }

    #[test]
    fn test_error_entries_kept_but_not_rendered() {
        let mut report = DiscoveryReport::new();
        report.record_domain(vec![
            entry(Some(403), Classification::Private),
            entry(Some(500), Classification::Error),
            entry(None, Classification::Error),
        ]);

        // Full set keeps everything the classifier produced
        assert_eq!(report.entries().len(), 3);
        // Only the 403 passes the print filter
        assert_eq!(report.printable_entries().len(), 1);

        let text = report.render_text();
        assert!(text.contains("Status: 403 - PRIVATE"));
        assert!(!text.contains("500"));
    }

    #[test]
    fn test_summary_counts() {
        let mut report = DiscoveryReport::new();
        report.record_domain(vec![
            entry(Some(403), Classification::Private),
            entry(Some(403), Classification::Private),
            entry(Some(200), Classification::PublicListing),
        ]);

        let summary = report.summary();
        assert_eq!(summary.get("PRIVATE"), Some(&2));
        assert_eq!(summary.get("PUBLIC_LISTING"), Some(&1));
    }

    #[test]
    fn test_multi_domain_accumulation() {
        let mut report = DiscoveryReport::new();
        report.record_domain(vec![entry(Some(403), Classification::Private)]);
        report.record_domain(vec![entry(Some(200), Classification::PublicAccess)]);
        report.record_domain(Vec::new());

        assert_eq!(report.domains_scanned(), 3);
        assert_eq!(report.entries().len(), 2);
    }

    #[test]
    fn test_json_rendering() {
        let mut report = DiscoveryReport::new();
        report.record_domain(vec![entry(Some(500), Classification::Error)]);

        let rendered = report.render_json().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        // JSON carries the full set, including unprinted ERROR entries
        assert_eq!(parsed["findings"].as_array().unwrap().len(), 1);
        assert_eq!(parsed["findingsSummary"]["ERROR"], 1);
        assert_eq!(parsed["domainsScanned"], 1);
    }

    #[test]
    fn test_detail_rendered_when_present() {
        let mut report = DiscoveryReport::new();
        let mut e = entry(Some(403), Classification::Private);
        e.detail = Some("AccessDenied".to_string());
        report.record_domain(vec![e]);

        let text = report.render_text();
        assert!(text.contains("Details: AccessDenied"));
    }
}
