// Credential resolution
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use anyhow::Result;
use aws_credential_types::Credentials;
use std::env;
use std::io::{
    self,
    BufRead,
    Write,
};
use tracing::debug;

/// Environment variable holding the AWS access key ID.
const ACCESS_KEY_ID: &str = "AWS_ACCESS_KEY_ID";

/// Environment variable holding the AWS secret access key.
const SECRET_ACCESS_KEY: &str = "AWS_SECRET_ACCESS_KEY";

/// Resolve credentials from the environment, prompting on the terminal for
/// any part of the key pair that is missing.
pub fn from_env_or_prompt() -> Result<Credentials> {
    from_sources(
        |var| env::var(var).ok().filter(|value| !value.is_empty()),
        prompt,
    )
}

/// Resolve credentials from the given environment lookup, falling back to
/// the given prompt for anything the environment doesn't supply.
///
/// Both sources are injected so tests can resolve credentials without
/// touching the process environment or a terminal.
pub fn from_sources<E, P>(env: E, mut prompt: P) -> Result<Credentials>
where
    E: Fn(&str) -> Option<String>,
    P: FnMut(&str) -> Result<String>,
{
    let access_key_id = match env(ACCESS_KEY_ID) {
        Some(key) => key,
        None      => prompt("Enter AWS access key ID: ")?,
    };

    let secret_access_key = match env(SECRET_ACCESS_KEY) {
        Some(key) => key,
        None      => prompt("Enter AWS secret access key: ")?,
    };

    debug!("Resolved AWS credentials");

    Ok(Credentials::from_keys(access_key_id, secret_access_key, None))
}

// Write the message to stdout and read one trimmed line back.
fn prompt(message: &str) -> Result<String> {
    print!("{message}");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;

    Ok(line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_environment_wins() {
        let credentials = from_sources(
            |var| Some(format!("env-{}", var.to_lowercase())),
            |_message| -> Result<String> {
                panic!("prompt should not be used");
            },
        ).unwrap();

        assert_eq!(credentials.access_key_id(), "env-aws_access_key_id");
        assert_eq!(credentials.secret_access_key(), "env-aws_secret_access_key");
    }

    #[test]
    fn test_prompt_fallback() {
        let mut prompts = Vec::new();

        let credentials = from_sources(
            |_var| None,
            |message| {
                prompts.push(message.to_string());
                Ok(format!("prompted-{}", prompts.len()))
            },
        ).unwrap();

        assert_eq!(credentials.access_key_id(), "prompted-1");
        assert_eq!(credentials.secret_access_key(), "prompted-2");
        assert_eq!(prompts.len(), 2);
    }

    #[test]
    fn test_partial_environment() {
        let credentials = from_sources(
            |var| {
                if var == ACCESS_KEY_ID {
                    Some("ATESTCLIENT".to_string())
                }
                else {
                    None
                }
            },
            |_message| Ok("atestsecretkey".to_string()),
        ).unwrap();

        assert_eq!(credentials.access_key_id(), "ATESTCLIENT");
        assert_eq!(credentials.secret_access_key(), "atestsecretkey");
    }
}
