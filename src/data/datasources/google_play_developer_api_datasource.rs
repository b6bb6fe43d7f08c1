use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use serde::de::DeserializeOwned;
use yup_oauth2::{parse_service_account_key, ServiceAccountAuthenticator};

use crate::{
    data::models::google_play_developer_api::{
        product_purchase_model::ProductPurchaseModel,
        subscription_purchase_model::SubscriptionPurchaseModel,
    },
    errors::Error,
};

/// Hard cap on a single verification callout, so a stalled connection cannot
/// hold a request open indefinitely.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[async_trait]
pub(crate) trait GooglePlayDeveloperApiDatasource: Send + Sync {
    /// purchases.products.get:
    /// https://developers.google.com/android-publisher/api-ref/rest/v3/purchases.products/get
    ///
    /// packageName:
    ///   The package name of the application the inapp product was sold in (for
    ///   example, 'com.some.thing').
    /// productId:
    ///   The inapp product SKU (for example, 'com.some.thing.inapp1').
    /// token:
    ///   The token provided to the user's device when the inapp product was
    ///   purchased.
    async fn get_product_purchase(
        &self,
        package_name: &str,
        product_id: &str,
        token: &str,
    ) -> Result<ProductPurchaseModel, Error>;

    /// purchases.subscriptions.get:
    /// https://developers.google.com/android-publisher/api-ref/rest/v3/purchases.subscriptions/get
    ///
    /// packageName:
    ///   The package name of the application for which this subscription was
    ///   purchased (for example, 'com.some.thing').
    /// subscriptionId:
    ///   The purchased subscription ID (for example, 'monthly001').
    /// token:
    ///   The token provided to the user's device when the subscription was
    ///   purchased.
    async fn get_subscription_purchase(
        &self,
        package_name: &str,
        subscription_id: &str,
        token: &str,
    ) -> Result<SubscriptionPurchaseModel, Error>;
}

pub(crate) struct GooglePlayDeveloperApiDatasourceImpl {
    http: reqwest::Client,
    access_token: String,
}

#[async_trait]
impl GooglePlayDeveloperApiDatasource for GooglePlayDeveloperApiDatasourceImpl {
    async fn get_product_purchase(
        &self,
        package_name: &str,
        product_id: &str,
        token: &str,
    ) -> Result<ProductPurchaseModel, Error> {
        let url = format!("https://androidpublisher.googleapis.com/androidpublisher/v3/applications/{package_name}/purchases/products/{product_id}/tokens/{token}");
        self.callout(&url, "purchases.products.get").await
    }

    async fn get_subscription_purchase(
        &self,
        package_name: &str,
        subscription_id: &str,
        token: &str,
    ) -> Result<SubscriptionPurchaseModel, Error> {
        let url = format!("https://androidpublisher.googleapis.com/androidpublisher/v3/applications/{package_name}/purchases/subscriptions/{subscription_id}/tokens/{token}");
        self.callout(&url, "purchases.subscriptions.get").await
    }
}

impl GooglePlayDeveloperApiDatasourceImpl {
    /// Exchanges the service account key for an androidpublisher-scoped
    /// access token once, up front. The token is not refreshed; processes
    /// that outlive its validity must construct a new datasource.
    pub(crate) async fn new(service_account_json: &[u8]) -> Result<Self, Error> {
        Ok(Self {
            http: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .map_err(|e| {
                    Error::Initialization(format!("HTTP client could not be built: {e}"))
                })?,
            access_token: Self::build_access_token(service_account_json).await?,
        })
    }

    async fn build_access_token(service_account_json: &[u8]) -> Result<String, Error> {
        let key = parse_service_account_key(service_account_json).map_err(|e| {
            Error::Initialization(format!("service account key could not be parsed: {e}"))
        })?;
        let authenticator = ServiceAccountAuthenticator::builder(key)
            .build()
            .await
            .map_err(|e| {
                Error::Initialization(format!(
                    "service account authenticator could not be built: {e}"
                ))
            })?;

        let scopes = &["https://www.googleapis.com/auth/androidpublisher"];
        Ok(authenticator
            .token(scopes)
            .await
            .map_err(|e| {
                Error::Initialization(format!(
                    "service account access token could not be fetched: {e}"
                ))
            })?
            .token()
            .ok_or_else(|| {
                Error::Initialization("service account access token is empty".to_string())
            })?
            .to_string())
    }

    async fn callout<T: DeserializeOwned>(
        &self,
        url: &str,
        endpoint: &'static str,
    ) -> Result<T, Error> {
        let response = self
            .http
            .get(url)
            .header(AUTHORIZATION, format!("Bearer {}", self.access_token))
            .send()
            .await
            .map_err(|e| Error::RemoteVerification {
                endpoint,
                reason: format!("request failed to send: {e}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::RemoteVerification {
                endpoint,
                reason: format!(
                    "returned {} status: {}",
                    status,
                    response.text().await.unwrap_or_default()
                ),
            });
        }

        let body = response.text().await.map_err(|e| Error::RemoteVerification {
            endpoint,
            reason: format!("response body could not be read: {e}"),
        })?;
        serde_json::from_str(&body).map_err(|e| Error::InvalidResponse {
            endpoint,
            reason: e.to_string(),
        })
    }
}
