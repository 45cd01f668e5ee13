// Implements the S3 Client
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use anyhow::Result;
use aws_sdk_s3::client::Client as S3Client;
use aws_sdk_s3::error::ProvideErrorMetadata;
use crate::common::{
    BucketNames,
    ClientConfig,
    PublicAccessConfig,
};
use tracing::debug;

/// Region a bucket resolves to when S3 reports a null location constraint.
pub const FALLBACK_REGION: &str = "us-east-1";

// Error code S3 returns when a bucket has no public access block
// configuration at all.
const NO_SUCH_CONFIGURATION: &str = "NoSuchPublicAccessBlockConfiguration";

/// The S3 `Client`.
pub struct Client {
    /// The AWS SDK `S3Client`.
    pub client: S3Client,

    /// Region to restrict the audit to, if any.
    pub region_filter: Option<String>,
}

impl Client {
    /// Return a new S3 `Client` with the given `ClientConfig`.
    pub async fn new(config: ClientConfig) -> Self {
        let region        = config.region;
        let region_filter = config.region_filter;

        debug!("new: Creating S3Client in region '{}'", region.name());

        let loader = aws_config::from_env()
            .region(region);

        let loader = match config.credentials {
            Some(credentials) => loader.credentials_provider(credentials),
            None              => loader,
        };

        let shared_config = loader.load().await;
        let client        = S3Client::new(&shared_config);

        Self {
            client,
            region_filter,
        }
    }

    /// Returns a list of bucket names.
    pub async fn list_buckets(&self) -> Result<BucketNames> {
        let output = self.client.list_buckets()
            .send()
            .await?;

        let bucket_names = output.buckets()
            .unwrap_or_default()
            .iter()
            .filter_map(|bucket| bucket.name().map(String::from))
            .collect();

        Ok(bucket_names)
    }

    /// Return the normalized bucket location for the given `bucket`.
    ///
    /// This method will properly handle the case of the `null` (empty) and
    /// `EU` location constraints, by replacing them with `us-east-1` and
    /// `eu-west-1` respectively.
    pub async fn get_bucket_location(&self, bucket: &str) -> Result<String> {
        debug!("get_bucket_location for '{}'", bucket);

        let output = self.client.get_bucket_location()
            .bucket(bucket)
            .send()
            .await?;

        let constraint = output.location_constraint()
            .map(|constraint| constraint.as_str())
            .unwrap_or_default();

        debug!("GetBucketLocation API returned '{}'", constraint);

        // Location constraints for sufficiently old buckets in S3 may not
        // quite meet expectations. These returns are badly documented and the
        // assumptions here are based on what the web console does.
        let location = match constraint {
            ""    => FALLBACK_REGION,
            "EU"  => "eu-west-1",
            other => other,
        };

        Ok(location.to_string())
    }

    /// Return the public access block configuration of the given `bucket`,
    /// if it has one.
    ///
    /// A bucket with no configuration at all comes back from the API as an
    /// error. That case is `Ok(None)` here, it means nothing is blocked.
    /// Any other error is propagated.
    pub async fn get_public_access_block(
        &self,
        bucket: &str,
    ) -> Result<Option<PublicAccessConfig>> {
        debug!("get_public_access_block for '{}'", bucket);

        let output = self.client.get_public_access_block()
            .bucket(bucket)
            .send()
            .await;

        match output {
            Ok(output) => {
                let config = output.public_access_block_configuration()
                    .map(PublicAccessConfig::from);

                Ok(config)
            },
            Err(err) => {
                let err = err.into_service_error();

                if err.code() == Some(NO_SUCH_CONFIGURATION) {
                    debug!("'{}' has no public access block", bucket);

                    Ok(None)
                }
                else {
                    Err(err.into())
                }
            },
        }
    }

    /// Apply the given public access block configuration to `bucket`.
    pub async fn put_public_access_block(
        &self,
        bucket: &str,
        config: PublicAccessConfig,
    ) -> Result<()> {
        debug!("put_public_access_block for '{}': {:?}", bucket, config);

        self.client.put_public_access_block()
            .bucket(bucket)
            .public_access_block_configuration(config.into())
            .send()
            .await?;

        Ok(())
    }

    /// Block all public access on the given `bucket` and verify the change
    /// took effect.
    ///
    /// The configuration is read back and compared field-by-field against
    /// the target rather than trusting the write call's return status.
    pub async fn block_all_public_access(&self, bucket: &str) -> Result<bool> {
        self.put_public_access_block(bucket, PublicAccessConfig::BLOCK_ALL)
            .await?;

        let updated = self.get_public_access_block(bucket).await?;

        Ok(updated == Some(PublicAccessConfig::BLOCK_ALL))
    }
}
