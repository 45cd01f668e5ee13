// Definition of a bucket
#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// Represents an S3 bucket that was found to allow public access.
///
/// The `region` is the normalized bucket location, never the raw
/// `LocationConstraint` string the API returned.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Bucket {
    /// Name of the bucket.
    pub name: String,

    /// Region the bucket lives in.
    pub region: String,
}

/// Convenience type for a list of `Bucket`.
pub type Buckets = Vec<Bucket>;
