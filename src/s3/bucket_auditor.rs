// Implement the BucketAuditor trait for the s3::Client
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use anyhow::Result;
use async_trait::async_trait;
use crate::common::{
    Bucket,
    BucketAuditor,
    Buckets,
    RemediationOutcome,
    RemediationSummary,
};
use super::client::Client;
use tracing::{
    debug,
    warn,
};

#[async_trait]
impl BucketAuditor for Client {
    /// Return `Buckets` discovered in S3 that allow public access.
    ///
    /// The returned buckets are in enumeration order and filtered by the
    /// following:
    ///   - The `--region` filter provided on the command line, if any
    ///   - Their public access block configuration, keeping only buckets
    ///     where at least one protection is disabled or no configuration
    ///     exists at all
    async fn discover_vulnerable(&self) -> Result<Buckets> {
        debug!("discover_vulnerable: Listing...");

        let bucket_names = self.list_buckets().await?;

        let mut vulnerable = Buckets::new();

        for name in &bucket_names {
            debug!("Retrieving location for '{}'", name);

            // One bucket failing never aborts the scan. It is named in a
            // diagnostic and skipped.
            let location = match self.get_bucket_location(name).await {
                Ok(location) => location,
                Err(err)     => {
                    warn!(
                        "Unable to resolve location for bucket '{}': {}",
                        name,
                        err,
                    );

                    continue;
                },
            };

            // Buckets outside the region filter are expected, not errors,
            // so no diagnostic here.
            if let Some(filter) = self.region_filter.as_deref() {
                if filter != location {
                    debug!(
                        "'{}' is in '{}', outside the region filter",
                        name,
                        location,
                    );

                    continue;
                }
            }

            let config = match self.get_public_access_block(name).await {
                Ok(config) => config,
                Err(err)   => {
                    warn!(
                        "Unable to get public access block for bucket '{}': {}",
                        name,
                        err,
                    );

                    continue;
                },
            };

            // A bucket with no configuration at all blocks nothing.
            let protected = config.map_or(false, |config| {
                config.is_fully_blocked()
            });

            if !protected {
                let bucket = Bucket {
                    name:   name.into(),
                    region: location,
                };

                vulnerable.push(bucket);
            }
        }

        Ok(vulnerable)
    }

    /// Apply the block-everything configuration to each of `buckets` and
    /// verify each write by reading the configuration back.
    ///
    /// Every bucket is attempted. A failed write or verification is
    /// recorded against that bucket alone and the loop moves on.
    async fn remediate(&self, buckets: &[Bucket]) -> RemediationSummary {
        let mut outcomes = Vec::with_capacity(buckets.len());

        for bucket in buckets {
            debug!("remediate: Reconfiguring '{}'", bucket.name);

            let succeeded = match self.block_all_public_access(&bucket.name).await {
                Ok(verified) => verified,
                Err(err)     => {
                    warn!(
                        "Failed to reconfigure bucket '{}': {}",
                        bucket.name,
                        err,
                    );

                    false
                },
            };

            outcomes.push(RemediationOutcome::new(bucket, succeeded));
        }

        RemediationSummary::new(outcomes)
    }
}
