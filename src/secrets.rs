use std::{env, fs};

use crate::errors::Error;

/// Environment variable holding the service account key JSON inline.
pub const SERVICE_ACCOUNT_JSON_VAR: &str = "GOOGLE_PLAY_SERVICE_ACCOUNT_JSON";
/// Environment variable holding a path to the service account key file.
pub const SERVICE_ACCOUNT_PATH_VAR: &str = "GOOGLE_PLAY_SERVICE_ACCOUNT_PATH";

/// Loads the Google Play service account key from the environment. An inline
/// key takes precedence over a key file path.
pub fn load_service_account_json() -> Result<Vec<u8>, Error> {
    if let Ok(json) = env::var(SERVICE_ACCOUNT_JSON_VAR) {
        return Ok(json.into_bytes());
    }
    match env::var(SERVICE_ACCOUNT_PATH_VAR) {
        Ok(path) => fs::read(&path).map_err(|e| {
            Error::Initialization(format!(
                "service account key could not be read from {path}: {e}"
            ))
        }),
        Err(_) => Err(Error::Initialization(format!(
            "neither {SERVICE_ACCOUNT_JSON_VAR} nor {SERVICE_ACCOUNT_PATH_VAR} is set"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Env vars are process-global, so all scenarios share one test to avoid
    // races between parallel test threads.
    #[test]
    fn loads_key_from_environment() {
        env::remove_var(SERVICE_ACCOUNT_JSON_VAR);
        env::remove_var(SERVICE_ACCOUNT_PATH_VAR);
        assert!(load_service_account_json().is_err());

        env::set_var(SERVICE_ACCOUNT_JSON_VAR, r#"{"type":"service_account"}"#);
        env::set_var(SERVICE_ACCOUNT_PATH_VAR, "/definitely/missing/key.json");
        assert_eq!(
            load_service_account_json().unwrap(),
            br#"{"type":"service_account"}"#.to_vec()
        );

        env::remove_var(SERVICE_ACCOUNT_JSON_VAR);
        let err = load_service_account_json().unwrap_err();
        assert!(matches!(err, Error::Initialization(_)));

        env::remove_var(SERVICE_ACCOUNT_PATH_VAR);
    }
}
