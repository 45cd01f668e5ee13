// ClientConfig
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use aws_credential_types::Credentials;
use super::Region;

/// Client configuration.
#[derive(Debug, Default)]
pub struct ClientConfig {
    /// Explicit credentials to create the client with.
    ///
    /// If this isn't given, the SDK's default credential chain is used.
    pub credentials: Option<Credentials>,

    /// The region that our AWS client should be created in.
    ///
    /// This is the signing region only, it does not restrict which buckets
    /// are audited.
    pub region: Region,

    /// Region to restrict the audit to.
    ///
    /// Buckets located elsewhere are skipped. If this isn't given, buckets
    /// in all regions are audited.
    pub region_filter: Option<String>,
}
