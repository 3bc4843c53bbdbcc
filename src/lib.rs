// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Pilvi - Cloud Storage Exposure Scanner
 * Discovers publicly accessible object-storage containers by deriving
 * candidate bucket names from target domains and probing provider URL
 * conventions over unauthenticated HTTP.
 *
 * @copyright 2026 Bountyy Oy
 * @license Proprietary
 */

// Immutable startup configuration (provider templates, naming patterns)
pub mod config;

// Core data model
pub mod types;

// Error taxonomy
pub mod errors;

// Candidate generation from domain names
pub mod generator;

// Candidate x provider cross-product expansion
pub mod expander;

// Network probing
pub mod prober;

// Outcome classification
pub mod classifier;

// Per-domain orchestration
pub mod engine;

// Aggregation and report rendering
pub mod reporting;
