use crate::{
    data::{
        datasources::google_play_developer_api_datasource::GooglePlayDeveloperApiDatasourceImpl,
        repositories::verification_repository_impl::VerificationRepositoryImpl,
    },
    domain::{
        confirm::ConfirmPurchase,
        entities::{
            product_type::ProductType, subscription_status::SubscriptionStatus,
            verification::Verification,
        },
        repositories::verification_repository::VerificationRepository,
    },
    errors::Error,
    secrets,
};

/// Entry point for verifying Google Play purchases server-side.
///
/// Holds no durable state beyond the authenticated API client, so one
/// instance can be shared freely across concurrent requests.
pub struct PlayVerifier<R: VerificationRepository> {
    verification_repository: R,
}

impl<R: VerificationRepository> PlayVerifier<R> {
    /// Verifies a purchase token and runs `confirm` with the catalog id and
    /// store order id if the purchase is valid. See
    /// [`VerificationRepository::verify_purchase`] for the exact validity
    /// rules per product type.
    pub async fn verify_purchase<C: ConfirmPurchase + ?Sized>(
        &self,
        product_type: ProductType,
        package_name: &str,
        catalog_id: &str,
        token: &str,
        confirm: &C,
    ) -> Result<Verification, Error> {
        self.verification_repository
            .verify_purchase(product_type, package_name, catalog_id, token, confirm)
            .await
    }

    /// Fetches the current state of a subscription without confirming
    /// anything.
    pub async fn check_subscription(
        &self,
        package_name: &str,
        subscription_id: &str,
        token: &str,
    ) -> Result<SubscriptionStatus, Error> {
        self.verification_repository
            .check_subscription(package_name, subscription_id, token)
            .await
    }
}

impl PlayVerifier<VerificationRepositoryImpl<GooglePlayDeveloperApiDatasourceImpl>> {
    /// Builds a verifier from raw service account key JSON, exchanging the
    /// key for an access token up front.
    ///
    /// # Panics
    ///
    /// Panics if the key cannot be parsed or exchanged for an access token.
    /// A verifier with bad credentials can never verify anything, so this is
    /// treated as a deployment error to be caught at startup rather than a
    /// recoverable condition.
    pub async fn init(service_account_json: &[u8]) -> Self {
        match VerificationRepositoryImpl::new(service_account_json).await {
            Ok(verification_repository) => Self {
                verification_repository,
            },
            Err(e) => panic!("{e}"),
        }
    }

    /// Builds a verifier from the service account key configured in the
    /// environment (see [`crate::secrets`]).
    ///
    /// # Panics
    ///
    /// Panics if no key is configured or the key is rejected, like
    /// [`PlayVerifier::init`].
    pub async fn init_from_env() -> Self {
        match secrets::load_service_account_json() {
            Ok(service_account_json) => Self::init(&service_account_json).await,
            Err(e) => panic!("{e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use chrono::DateTime;

    use super::*;

    #[tokio::test]
    #[should_panic(expected = "could not be initialized")]
    async fn init_panics_on_malformed_key() {
        PlayVerifier::init(b"not a service account key").await;
    }

    struct StubRepository;

    #[async_trait]
    impl VerificationRepository for StubRepository {
        async fn verify_purchase<C: ConfirmPurchase + ?Sized>(
            &self,
            _product_type: ProductType,
            _package_name: &str,
            catalog_id: &str,
            _token: &str,
            confirm: &C,
        ) -> Result<Verification, Error> {
            confirm.confirm(catalog_id, "GPA.42").await.map_err(|source| {
                Error::Confirmation {
                    order_id: "GPA.42".to_string(),
                    source,
                }
            })?;
            Ok(Verification::Confirmed {
                order_id: "GPA.42".to_string(),
            })
        }

        async fn check_subscription(
            &self,
            _package_name: &str,
            _subscription_id: &str,
            _token: &str,
        ) -> Result<SubscriptionStatus, Error> {
            Ok(SubscriptionStatus {
                order_id: Some("GPA.42".to_string()),
                expiry_time: DateTime::from_timestamp_millis(1632678400000).unwrap(),
                auto_renewing: true,
            })
        }
    }

    #[tokio::test]
    async fn delegates_to_repository() {
        let verifier = PlayVerifier {
            verification_repository: StubRepository,
        };

        let confirm = |_: &str, _: &str| -> anyhow::Result<()> { Ok(()) };
        let result = verifier
            .verify_purchase(
                ProductType::Subscription,
                "com.app.x",
                "sub_gold",
                "tok123",
                &confirm,
            )
            .await
            .unwrap();
        assert_eq!(result.order_id(), Some("GPA.42"));

        let status = verifier
            .check_subscription("com.app.x", "sub_gold", "tok123")
            .await
            .unwrap();
        assert!(status.is_active());
    }
}
