//! Broker credential loading.
//!
//! Credentials come from the environment (after `dotenvy` has loaded any
//! `.env` file). The secret key is held in a `Zeroizing<String>` so it is
//! wiped from memory when dropped. A missing variable is fatal at startup:
//! no trading happens without credentials.

use std::env;
use zeroize::Zeroizing;

pub const KEY_ID_VAR: &str = "APCA_API_KEY_ID";
pub const SECRET_KEY_VAR: &str = "APCA_API_SECRET_KEY";

#[derive(Debug, thiserror::Error)]
pub enum SecretError {
    #[error("environment variable not set: {0}")]
    EnvVarNotSet(String),

    #[error("environment variable is empty: {0}")]
    EmptyValue(String),
}

/// Alpaca API key pair.
pub struct Credentials {
    pub key_id: String,
    pub secret_key: Zeroizing<String>,
}

impl Credentials {
    pub fn from_env() -> Result<Self, SecretError> {
        let key_id = required_var(KEY_ID_VAR)?;
        let secret_key = required_var(SECRET_KEY_VAR)?;
        Ok(Credentials {
            key_id: key_id.to_string(),
            secret_key,
        })
    }
}

fn required_var(name: &str) -> Result<Zeroizing<String>, SecretError> {
    let value = env::var(name).map_err(|_| SecretError::EnvVarNotSet(name.to_string()))?;
    if value.trim().is_empty() {
        return Err(SecretError::EmptyValue(name.to_string()));
    }
    Ok(Zeroizing::new(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_var_present() {
        env::set_var("DAYSWEEP_TEST_SECRET", "some-key-material");
        let result = required_var("DAYSWEEP_TEST_SECRET");
        assert!(result.is_ok());
        assert_eq!(*result.unwrap(), "some-key-material");
        env::remove_var("DAYSWEEP_TEST_SECRET");
    }

    #[test]
    fn test_required_var_missing() {
        let result = required_var("DAYSWEEP_TEST_NONEXISTENT");
        assert!(matches!(result, Err(SecretError::EnvVarNotSet(_))));
    }

    #[test]
    fn test_required_var_empty() {
        env::set_var("DAYSWEEP_TEST_EMPTY", "   ");
        let result = required_var("DAYSWEEP_TEST_EMPTY");
        assert!(matches!(result, Err(SecretError::EmptyValue(_))));
        env::remove_var("DAYSWEEP_TEST_EMPTY");
    }
}
