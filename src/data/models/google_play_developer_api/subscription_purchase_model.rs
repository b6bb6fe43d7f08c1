#![allow(dead_code)]

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_repr::Deserialize_repr;
use serde_with::{formats::Flexible, serde_as, TimestampMilliSeconds};

/// Data structure returned by the Google Play Developer API when querying for a
/// subscription purchase.
///
/// https://developers.google.com/android-publisher/api-ref/rest/v3/purchases.subscriptions#SubscriptionPurchase
///
/// Whether fields are nullable is not documented explicitly in the API
/// reference, so reasonable assumptions are made. Int64 values are transmitted
/// as JSON strings, so timestamps are parsed flexibly from either encoding.
#[serde_as]
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionPurchaseModel {
    /// This kind represents a subscriptionPurchase object in the
    /// androidpublisher service.
    pub(crate) kind: Option<String>,
    /// Time at which the subscription was granted, in milliseconds since the
    /// epoch.
    #[serde(default)]
    #[serde_as(as = "Option<TimestampMilliSeconds<String, Flexible>>")]
    pub(crate) start_time_millis: Option<DateTime<Utc>>,
    /// Time at which the subscription will expire, in milliseconds since the
    /// epoch.
    #[serde(default)]
    #[serde_as(as = "Option<TimestampMilliSeconds<String, Flexible>>")]
    pub(crate) expiry_time_millis: Option<DateTime<Utc>>,
    /// Time at which the subscription will be automatically resumed, in
    /// milliseconds since the epoch. Only present if the user has requested to
    /// pause the subscription.
    #[serde(default)]
    #[serde_as(as = "Option<TimestampMilliSeconds<String, Flexible>>")]
    pub(crate) auto_resume_time_millis: Option<DateTime<Utc>>,
    /// Whether the subscription will automatically be renewed when it reaches
    /// its current expiry time.
    #[serde(default)]
    pub(crate) auto_renewing: bool,
    /// ISO 4217 currency code for the subscription price.
    pub(crate) price_currency_code: Option<String>,
    /// Price of the subscription, in micro-units of the currency. For example,
    /// if the subscription price is EUR 1.99, price_amount_micros is 1990000.
    pub(crate) price_amount_micros: Option<String>,
    /// Introductory price information of the subscription. This is only
    /// present when the subscription was purchased with an introductory price.
    pub(crate) introductory_price_info: Option<IntroductoryPriceInfo>,
    /// ISO 3166-1 alpha-2 billing country/region code of the user at the time
    /// the subscription was granted.
    pub(crate) country_code: Option<String>,
    /// A developer-specified string that contains supplemental information
    /// about an order.
    pub(crate) developer_payload: Option<String>,
    /// The payment state of the subscription. Not present for canceled,
    /// expired subscriptions.
    pub(crate) payment_state: Option<PaymentState>,
    /// The reason why a subscription was canceled or is not auto-renewing.
    pub(crate) cancel_reason: Option<CancelReason>,
    /// The time at which the subscription was canceled by the user, in
    /// milliseconds since the epoch. Only present if cancelReason is 0.
    #[serde(default)]
    #[serde_as(as = "Option<TimestampMilliSeconds<String, Flexible>>")]
    pub(crate) user_cancellation_time_millis: Option<DateTime<Utc>>,
    /// Information provided by the user when they complete the subscription
    /// cancellation flow (cancellation reason survey).
    pub(crate) cancel_survey_result: Option<SubscriptionCancelSurveyResult>,
    /// The order id of the latest recurring order associated with the purchase
    /// of the subscription. If the subscription was canceled because payment
    /// was declined, this will be the order id from the payment declined
    /// order.
    pub(crate) order_id: Option<String>,
    /// The purchase token of the originating purchase if this subscription is
    /// one of the following:
    /// * Re-signup of a canceled but non-lapsed subscription.
    /// * Upgrade/downgrade from a previous subscription.
    pub(crate) linked_purchase_token: Option<String>,
    /// The type of purchase of the subscription. This field is only set if
    /// this purchase was not made using the standard in-app billing flow.
    pub(crate) purchase_type: Option<PurchaseType>,
    /// The latest price change information available. This is present only
    /// when there is an upcoming price change for the subscription yet to be
    /// applied.
    pub(crate) price_change: Option<SubscriptionPriceChange>,
    /// The profile name of the user when the subscription was purchased. Only
    /// present for purchases made with 'Subscribe with Google'.
    pub(crate) profile_name: Option<String>,
    /// The email address of the user when the subscription was purchased. Only
    /// present for purchases made with 'Subscribe with Google'.
    pub(crate) email_address: Option<String>,
    /// The given name of the user when the subscription was purchased. Only
    /// present for purchases made with 'Subscribe with Google'.
    pub(crate) given_name: Option<String>,
    /// The family name of the user when the subscription was purchased. Only
    /// present for purchases made with 'Subscribe with Google'.
    pub(crate) family_name: Option<String>,
    /// The Google profile id of the user when the subscription was purchased.
    /// Only present for purchases made with 'Subscribe with Google'.
    pub(crate) profile_id: Option<String>,
    /// The acknowledgement state of the subscription product.
    pub(crate) acknowledgement_state: Option<AcknowledgementState>,
    /// User account identifier in the third-party service. Only present if
    /// account linking happened as part of the subscription purchase flow.
    pub(crate) external_account_id: Option<String>,
    /// The type of promotion applied on this purchase. This field is only set
    /// if a vanity code was applied when the subscription was purchased.
    pub(crate) promotion_type: Option<PromotionType>,
    /// The promotion code applied on this purchase. This field is only set if
    /// a vanity code promotion was applied when the subscription was
    /// purchased.
    pub(crate) promotion_code: Option<String>,
    /// An obfuscated version of the id that is uniquely associated with the
    /// user's account in your app. Only present if specified using
    /// https://developer.android.com/reference/com/android/billingclient/api/BillingFlowParams.Builder#setobfuscatedaccountid
    /// when the purchase was made.
    pub(crate) obfuscated_external_account_id: Option<String>,
    /// An obfuscated version of the id that is uniquely associated with the
    /// user's profile in your app. Only present if specified using
    /// https://developer.android.com/reference/com/android/billingclient/api/BillingFlowParams.Builder#setobfuscatedprofileid
    /// when the purchase was made.
    pub(crate) obfuscated_external_profile_id: Option<String>,
}

#[derive(Debug, Deserialize_repr, PartialEq)]
#[repr(u8)]
pub(crate) enum PaymentState {
    PaymentPending = 0,
    PaymentReceived = 1,
    FreeTrial = 2,
    PendingDeferredUpgradeDowngrade = 3,
}

#[derive(Debug, Deserialize_repr, PartialEq)]
#[repr(u8)]
pub(crate) enum CancelReason {
    CanceledByUser = 0,
    CanceledBySystem = 1,
    Replaced = 2,
    CanceledByDeveloper = 3,
}

#[derive(Debug, Deserialize_repr, PartialEq)]
#[repr(u8)]
pub(crate) enum PurchaseType {
    Test = 0,
    Promo = 1,
}

#[derive(Debug, Deserialize_repr, PartialEq)]
#[repr(u8)]
pub(crate) enum AcknowledgementState {
    YetToBeAcknowledged = 0,
    Acknowledged = 1,
}

#[derive(Debug, Deserialize_repr, PartialEq)]
#[repr(u8)]
pub(crate) enum PromotionType {
    OneTimeCode = 0,
    VanityCode = 1,
}

/// Information specific to a subscription purchased with an introductory
/// price.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct IntroductoryPriceInfo {
    /// ISO 4217 currency code for the introductory subscription price.
    pub(crate) introductory_price_currency_code: Option<String>,
    /// Introductory price of the subscription, not including tax, in
    /// micro-units of the currency.
    pub(crate) introductory_price_amount_micros: Option<String>,
    /// Introductory price period, specified in ISO 8601 format.
    pub(crate) introductory_price_period: Option<String>,
    /// The number of billing periods to offer introductory pricing.
    pub(crate) introductory_price_cycles: Option<i32>,
}

/// Information provided by the user when they complete the subscription
/// cancellation flow (cancellation reason survey).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SubscriptionCancelSurveyResult {
    /// The cancellation reason the user chose in the survey.
    pub(crate) cancel_survey_reason: Option<CancelSurveyReason>,
    /// The customized input cancel reason from the user. Only present when
    /// cancelSurveyReason is 0.
    pub(crate) user_input_cancel_reason: Option<String>,
}

#[derive(Debug, Deserialize_repr, PartialEq)]
#[repr(u8)]
pub(crate) enum CancelSurveyReason {
    Other = 0,
    NotEnoughUsage = 1,
    TechnicalIssues = 2,
    CostRelated = 3,
    FoundBetterApp = 4,
}

/// Contains the price change information for a subscription that can be used
/// to control the user journey for the price change in the app.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SubscriptionPriceChange {
    /// The new price the subscription will renew with if the price change is
    /// accepted by the user.
    pub(crate) new_price: Option<Price>,
    /// The current state of the price change.
    pub(crate) state: Option<PriceChangeState>,
}

#[derive(Debug, Deserialize_repr, PartialEq)]
#[repr(u8)]
pub(crate) enum PriceChangeState {
    Outstanding = 0,
    Accepted = 1,
}

/// Definition of a price, i.e. currency and units.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Price {
    /// Price in 1/million of the currency base unit, represented as a string.
    pub(crate) price_micros: Option<String>,
    /// 3 letter currency code, as defined by ISO 4217.
    pub(crate) currency: Option<String>,
}
