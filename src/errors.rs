// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Bountyy Oy - Discovery Error Types
 * Error handling with thiserror
 *
 * @copyright 2026 Bountyy Oy
 * @license Proprietary
 */

use thiserror::Error;

/// Fatal errors surfaced to the user. Transport failures during probing are
/// deliberately not represented here: they are recovered locally as a
/// `ProbeOutcome::TransportFailure` value and never abort a scan.
#[derive(Error, Debug)]
pub enum DiscoveryError {
    /// No domains on the command line and no readable fallback file
    #[error("No domains provided and fallback file {path} is not readable: {source}")]
    MissingInput {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Fallback file exists but contains no usable domains
    #[error("Domain list {path} contains no domains")]
    EmptyInput { path: String },

    #[error("Configuration error: {0}")]
    Configuration(String),
}
