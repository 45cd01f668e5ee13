// Public access block configuration handling
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use aws_sdk_s3::types::PublicAccessBlockConfiguration;

/// The four S3 Block Public Access settings for a bucket.
///
/// A bucket only counts as protected when every flag is enabled. Any flag
/// that is disabled leaves some route to public access open.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PublicAccessConfig {
    /// Block public access granted through new ACLs.
    pub block_public_acls: bool,

    /// Ignore public access granted through existing ACLs.
    pub ignore_public_acls: bool,

    /// Block public access granted through new bucket policies.
    pub block_public_policy: bool,

    /// Restrict access to principals within the bucket owner's account.
    pub restrict_public_buckets: bool,
}

impl PublicAccessConfig {
    /// The remediation target: every protection enabled.
    pub const BLOCK_ALL: Self = Self {
        block_public_acls:       true,
        ignore_public_acls:      true,
        block_public_policy:     true,
        restrict_public_buckets: true,
    };

    /// Returns `true` if all four protections are enabled.
    pub fn is_fully_blocked(&self) -> bool {
        *self == Self::BLOCK_ALL
    }
}

/// Conversion from the SDK configuration type.
///
/// Only the four modeled flags are read. Anything else the API model grows
/// in future is ignored rather than treated as an error.
impl From<&PublicAccessBlockConfiguration> for PublicAccessConfig {
    fn from(config: &PublicAccessBlockConfiguration) -> Self {
        Self {
            block_public_acls:       config.block_public_acls(),
            ignore_public_acls:      config.ignore_public_acls(),
            block_public_policy:     config.block_public_policy(),
            restrict_public_buckets: config.restrict_public_buckets(),
        }
    }
}

/// Conversion into the SDK configuration type, for `PutPublicAccessBlock`.
impl From<PublicAccessConfig> for PublicAccessBlockConfiguration {
    fn from(config: PublicAccessConfig) -> Self {
        PublicAccessBlockConfiguration::builder()
            .block_public_acls(config.block_public_acls)
            .ignore_public_acls(config.ignore_public_acls)
            .block_public_policy(config.block_public_policy)
            .restrict_public_buckets(config.restrict_public_buckets)
            .build()
    }
}
