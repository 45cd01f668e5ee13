// s3block: A tool for finding and fixing AWS S3 buckets that allow public
// access.
#![forbid(unsafe_code)]
use anyhow::{
    Context,
    Result,
};
use std::process;
use tracing_subscriber::EnvFilter;

mod cli;
mod common;
mod s3;

use common::{
    BucketAuditor,
    Buckets,
    ClientConfig,
    Region,
    RemediationSummary,
    credentials,
};

// Signing region used when the environment doesn't provide one.
const DEFAULT_REGION: &str = "us-east-1";

// Exit code when vulnerable buckets were found and remediation wasn't
// requested.
const EXIT_VULNERABLE: i32 = 2;

// Exit code when remediation was requested but didn't succeed everywhere.
const EXIT_INCOMPLETE: i32 = 1;

// Print the discovered vulnerable buckets.
fn print_vulnerable(buckets: &Buckets) {
    println!("{} vulnerable buckets:", buckets.len());

    for bucket in buckets {
        println!("{} ({})", bucket.name, bucket.region);
    }

    println!();
}

// Print the per-bucket remediation outcomes and the final tally.
fn print_summary(summary: &RemediationSummary) {
    for outcome in summary.outcomes() {
        let status = if outcome.succeeded {
            "Success"
        }
        else {
            "FAILURE"
        };

        println!("[{}] {}, {}.", status, outcome.name, outcome.region);
    }

    println!(
        "\n{} of {} vulnerable buckets reconfigured.",
        summary.succeeded(),
        summary.attempted(),
    );
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let matches = cli::parse_args();

    let region_filter  = matches.get_one::<String>("REGION").cloned();
    let auto_configure = matches.get_flag("AUTO_CONFIGURE");

    let credentials = credentials::from_env_or_prompt()
        .context("Failed to resolve AWS credentials")?;

    let mut region = Region::new();
    if !region.is_set() {
        region = region.set_region(DEFAULT_REGION);
    }

    let config = ClientConfig {
        credentials: Some(credentials),
        region:      region,
        region_filter,
    };

    let client = s3::Client::new(config).await;

    println!("Scanning S3 buckets for settings that allow public access...\n");

    let vulnerable = client.discover_vulnerable()
        .await
        .context("Failed to list S3 buckets")?;

    if vulnerable.is_empty() {
        println!("No vulnerable buckets detected.");

        return Ok(());
    }

    print_vulnerable(&vulnerable);

    if !auto_configure {
        process::exit(EXIT_VULNERABLE);
    }

    println!("Automatically reconfiguring S3 buckets to block public access...");

    let summary = client.remediate(&vulnerable).await;

    print_summary(&summary);

    if !summary.is_complete() {
        process::exit(EXIT_INCOMPLETE);
    }

    Ok(())
}
