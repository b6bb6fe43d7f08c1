/// Selector deciding which remote check runs and how its result is read.
///
/// Exactly one remote call is made per verification; the two variants are a
/// hard branch, never a fallback chain. There is deliberately no catch-all
/// variant: a request either concerns a one-time product or a subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductType {
    /// A one-time (consumable or non-consumable) product. Valid iff the store
    /// reports purchase state 0 ("purchased").
    OneTimeProduct,
    /// An auto-renewing or prepaid subscription. Valid iff the store reports
    /// a non-empty order id for the purchase token.
    Subscription,
}
