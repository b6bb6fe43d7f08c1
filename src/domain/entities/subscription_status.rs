use chrono::{DateTime, Utc};

/// Standing of a subscription purchase, as reported by the store.
///
/// Returned by the callback-free subscription query. The order id doubles as
/// the validity signal: the store returns a non-empty order id exactly when
/// the subscription is currently active, so `order_id` is `Some` iff the
/// caller may treat the subscription as paid.
#[derive(Debug, Clone)]
pub struct SubscriptionStatus {
    /// Order id of the latest recurrence, present iff the subscription is
    /// active.
    pub order_id: Option<String>,
    /// Time at which the subscription expired or will expire unless renewed.
    pub expiry_time: DateTime<Utc>,
    /// Whether the subscription renews automatically at `expiry_time`.
    pub auto_renewing: bool,
}

impl SubscriptionStatus {
    pub fn is_active(&self) -> bool {
        self.order_id.is_some()
    }
}
