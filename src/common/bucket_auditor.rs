// BucketAuditor trait
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use anyhow::Result;
use async_trait::async_trait;
use super::{
    Bucket,
    Buckets,
    RemediationSummary,
};

/// `BucketAuditor` represents the required methods to find S3 buckets that
/// allow public access and to reconfigure them.
///
/// This trait should be implemented by all `Client`s performing these tasks.
#[async_trait]
pub trait BucketAuditor {
    /// Returns the buckets whose public access block configuration leaves
    /// some form of public access open, in discovery order.
    ///
    /// An `Err` here means bucket enumeration itself failed. Failures
    /// against individual buckets are logged and the bucket skipped.
    async fn discover_vulnerable(&self) -> Result<Buckets>;

    /// Applies the block-everything configuration to each given bucket and
    /// verifies it took effect.
    ///
    /// Individual bucket failures are recorded in the summary, never
    /// propagated, so this always returns a summary covering every input.
    async fn remediate(&self, buckets: &[Bucket]) -> RemediationSummary;
}
