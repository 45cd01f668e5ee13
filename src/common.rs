// Common traits and types
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod bucket;
mod bucket_auditor;
mod client_config;
mod public_access;
mod region;
mod remediation;

/// Credential resolution from the environment with a prompt fallback.
pub mod credentials;

pub use bucket::*;
pub use bucket_auditor::*;
pub use client_config::*;
pub use public_access::*;
pub use region::*;
pub use remediation::*;

/// Convenience type for a list of bucket names as returned by enumeration.
pub type BucketNames = Vec<String>;
