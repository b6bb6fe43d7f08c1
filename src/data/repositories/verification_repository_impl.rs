use async_trait::async_trait;
use tracing::{debug, info};

use crate::{
    data::{
        datasources::google_play_developer_api_datasource::{
            GooglePlayDeveloperApiDatasource, GooglePlayDeveloperApiDatasourceImpl,
        },
        models::google_play_developer_api::{
            product_purchase_model as gp, subscription_purchase_model as gs,
        },
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
};

pub(crate) struct VerificationRepositoryImpl<G: GooglePlayDeveloperApiDatasource> {
    google_play_developer_api_datasource: G,
}

#[async_trait]
impl<G: GooglePlayDeveloperApiDatasource> VerificationRepository for VerificationRepositoryImpl<G> {
    async fn verify_purchase<C: ConfirmPurchase + ?Sized>(
        &self,
        product_type: ProductType,
        package_name: &str,
        catalog_id: &str,
        token: &str,
        confirm: &C,
    ) -> Result<Verification, Error> {
        info!(package_name, catalog_id, ?product_type, "verifying purchase");
        debug!(token, "purchase token");
        match product_type {
            ProductType::OneTimeProduct => {
                let m = self
                    .google_play_developer_api_datasource
                    .get_product_purchase(package_name, catalog_id, token)
                    .await?;
                if m.purchase_state != gp::PurchaseState::Purchased {
                    info!(catalog_id, state = ?m.purchase_state, "product not in purchased state");
                    return Ok(Verification::NotEntitled);
                }
                // The store does not always return an order id for one-time
                // products; entitlement does not depend on it.
                let order_id = m.order_id.unwrap_or_default();
                self.run_confirmation(confirm, catalog_id, &order_id)
                    .await?;
                info!(catalog_id, %order_id, "product purchase confirmed");
                Ok(Verification::Confirmed { order_id })
            }
            ProductType::Subscription => {
                let m = self
                    .google_play_developer_api_datasource
                    .get_subscription_purchase(package_name, catalog_id, token)
                    .await?;
                let Some(order_id) = active_order_id(&m) else {
                    info!(catalog_id, "subscription has no active order");
                    return Ok(Verification::NotEntitled);
                };
                let order_id = order_id.to_string();
                self.run_confirmation(confirm, catalog_id, &order_id)
                    .await?;
                info!(catalog_id, %order_id, "subscription purchase confirmed");
                Ok(Verification::Confirmed { order_id })
            }
        }
    }

    async fn check_subscription(
        &self,
        package_name: &str,
        subscription_id: &str,
        token: &str,
    ) -> Result<SubscriptionStatus, Error> {
        debug!(package_name, subscription_id, "checking subscription state");
        let m = self
            .google_play_developer_api_datasource
            .get_subscription_purchase(package_name, subscription_id, token)
            .await?;
        SubscriptionStatus::from_subscription_purchase(m)
    }
}

impl<G: GooglePlayDeveloperApiDatasource> VerificationRepositoryImpl<G> {
    async fn run_confirmation<C: ConfirmPurchase + ?Sized>(
        &self,
        confirm: &C,
        catalog_id: &str,
        order_id: &str,
    ) -> Result<(), Error> {
        confirm
            .confirm(catalog_id, order_id)
            .await
            .map_err(|source| Error::Confirmation {
                order_id: order_id.to_string(),
                source,
            })
    }
}

impl VerificationRepositoryImpl<GooglePlayDeveloperApiDatasourceImpl> {
    pub(crate) async fn new(service_account_json: &[u8]) -> Result<Self, Error> {
        Ok(Self {
            google_play_developer_api_datasource: GooglePlayDeveloperApiDatasourceImpl::new(
                service_account_json,
            )
            .await?,
        })
    }
}

/// A subscription purchase counts as paid only if the store reported a
/// non-empty order id for it.
fn active_order_id(m: &gs::SubscriptionPurchaseModel) -> Option<&str> {
    m.order_id.as_deref().filter(|id| !id.is_empty())
}

impl SubscriptionStatus {
    fn from_subscription_purchase(m: gs::SubscriptionPurchaseModel) -> Result<Self, Error> {
        Ok(SubscriptionStatus {
            order_id: active_order_id(&m).map(str::to_string),
            expiry_time: m.expiry_time_millis.ok_or_else(|| Error::InvalidResponse {
                endpoint: "purchases.subscriptions.get",
                reason: "subscription did not have an expiry time".to_string(),
            })?,
            auto_renewing: m.auto_renewing,
        })
    }
}
