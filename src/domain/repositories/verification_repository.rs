use async_trait::async_trait;

use crate::{
    domain::{
        confirm::ConfirmPurchase,
        entities::{
            product_type::ProductType, subscription_status::SubscriptionStatus,
            verification::Verification,
        },
    },
    errors::Error,
};

#[async_trait]
pub trait VerificationRepository: Send + Sync {
    /// Verifies a purchase token with Google Play and, if the purchase is
    /// valid, runs the confirmation callback with the catalog id and the
    /// store-assigned order id.
    ///
    /// A one-time product is valid when its purchase state is purchased; a
    /// subscription is valid when the store reports a non-empty order id.
    /// The callback runs at most once, and only after the purchase has been
    /// determined valid. Any failure (remote call, response decoding, or the
    /// callback itself) is returned to the caller and means the purchase was
    /// not confirmed.
    ///
    /// Identifiers and the token are forwarded to the store unvalidated;
    /// empty or malformed values come back as remote errors rather than
    /// being rejected locally.
    async fn verify_purchase<C: ConfirmPurchase + ?Sized>(
        &self,
        product_type: ProductType,
        package_name: &str,
        catalog_id: &str,
        token: &str,
        confirm: &C,
    ) -> Result<Verification, Error>;

    /// Fetches the current state of a subscription without confirming
    /// anything. Useful for entitlement rechecks after the initial purchase
    /// has already been processed.
    async fn check_subscription(
        &self,
        package_name: &str,
        subscription_id: &str,
        token: &str,
    ) -> Result<SubscriptionStatus, Error>;
}
