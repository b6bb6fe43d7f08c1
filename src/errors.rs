use thiserror::Error;

/// Errors surfaced by purchase verification.
///
/// Nothing is recovered locally: failures from the remote API and from the
/// caller-supplied confirmation callback are passed through to the immediate
/// caller. A purchase that is merely not payable yet (pending, canceled, or
/// an inactive subscription) is NOT an error; see
/// [`Verification::NotEntitled`](crate::domain::entities::verification::Verification).
#[derive(Debug, Error)]
pub enum Error {
    /// The verifier could not be constructed: the service-account key did not
    /// parse, the OAuth token exchange failed, the HTTP client could not be
    /// built, or credential material is missing from the environment.
    ///
    /// At the [`PlayVerifier`](crate::util::PlayVerifier) boundary this
    /// condition is fatal: its constructors panic instead of returning it.
    #[error("Google Play verifier could not be initialized: {0}")]
    Initialization(String),

    /// The Google Play Developer API call failed to send or answered with a
    /// non-success status code. Never retried by this crate.
    #[error("Google Play Developer API call failed ({endpoint}): {reason}")]
    RemoteVerification {
        endpoint: &'static str,
        reason: String,
    },

    /// The Google Play Developer API answered 2xx but the payload did not
    /// match the documented resource shape.
    #[error("unexpected Google Play Developer API response ({endpoint}): {reason}")]
    InvalidResponse {
        endpoint: &'static str,
        reason: String,
    },

    /// The caller-supplied confirmation callback failed after the purchase
    /// was determined valid. The purchase is verified but not yet credited;
    /// callers should retry confirmation alone, not re-verification.
    #[error("purchase confirmation failed for order {order_id:?}")]
    Confirmation {
        order_id: String,
        #[source]
        source: anyhow::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_verification_display_names_endpoint() {
        let err = Error::RemoteVerification {
            endpoint: "purchases.products.get",
            reason: "callout returned with 403 Forbidden status code".to_string(),
        };
        assert!(err.to_string().contains("purchases.products.get"));
        assert!(err.to_string().contains("403"));
    }

    #[test]
    fn confirmation_keeps_callback_error_as_source() {
        let err = Error::Confirmation {
            order_id: "GPA.1234".to_string(),
            source: anyhow::anyhow!("ledger write refused"),
        };
        assert!(err.to_string().contains("GPA.1234"));
        let source = std::error::Error::source(&err).expect("source should be set");
        assert!(source.to_string().contains("ledger write refused"));
    }

    #[test]
    fn initialization_display_carries_reason() {
        let err = Error::Initialization("service-account key could not be parsed".to_string());
        assert!(err.to_string().contains("could not be initialized"));
        assert!(err.to_string().contains("service-account key"));
    }
}
