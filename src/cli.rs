// Command line interface parsing
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use clap::{
    crate_authors,
    crate_description,
    crate_name,
    crate_version,
    Arg,
    ArgAction,
    ArgMatches,
    Command,
};
use tracing::debug;

// Create clap app
fn create_app() -> Command {
    debug!("Creating CLI app");

    Command::new(crate_name!())
        .version(crate_version!())
        .author(crate_authors!())
        .about(crate_description!())
        .arg(
            Arg::new("REGION")
                .long("region")
                .short('r')
                .value_name("REGION")
                .help("Only audit buckets located in the given AWS region")
                .long_help(
                    "Only audit buckets located in the given AWS region. \
                    Buckets in other regions are skipped. When not given, \
                    buckets in all regions are audited."
                )
                .action(ArgAction::Set)
        )
        .arg(
            Arg::new("AUTO_CONFIGURE")
                .long("auto-configure")
                .help("Automatically reconfigure vulnerable buckets to block public access")
                .long_help(
                    "Automatically reconfigure vulnerable buckets to block \
                    public access. This writes to every vulnerable bucket \
                    and verifies each change by reading the configuration \
                    back. Off by default, in which case buckets are only \
                    reported."
                )
                .action(ArgAction::SetTrue)
        )
}

/// Parse the command line arguments.
pub fn parse_args() -> ArgMatches {
    debug!("Parsing command line arguments");

    create_app().get_matches()
}
