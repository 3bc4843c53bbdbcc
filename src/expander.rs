// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

use crate::config::PROVIDER_TEMPLATES;
use crate::types::ProbeTask;

/// Cross-multiply candidates against the provider template table.
///
/// Pure expansion, no deduplication: provider identity differentiates
/// otherwise-identical candidates, so the output is exactly
/// |candidates| x |providers| tasks.
pub fn expand_candidates(candidates: &[String]) -> Vec<ProbeTask> {
    let mut tasks = Vec::with_capacity(candidates.len() * PROVIDER_TEMPLATES.len());

    for candidate in candidates {
        for provider in PROVIDER_TEMPLATES {
            tasks.push(ProbeTask {
                provider: provider.id,
                candidate: candidate.clone(),
                url: provider.url_template.replacen("{}", candidate, 1),
                label: format!("{}:{}", provider.id, candidate),
            });
        }
    }

    tasks
}
