use async_trait::async_trait;

/// Caller-supplied hook that credits the user/business system once a purchase
/// is proven paid.
///
/// Invoked with the catalog id the verification was requested for and the
/// store-assigned order id, at most once per verification call and only after
/// a valid/paid determination. The dispatcher performs no deduplication of
/// its own: the same order id may be delivered again if the caller retries a
/// whole verification, so implementations are expected to be idempotent
/// (typically keyed on the order id). Any error returned here aborts the
/// verification flow and reaches the caller as
/// [`Error::Confirmation`](crate::errors::Error).
#[async_trait]
pub trait ConfirmPurchase: Send + Sync {
    async fn confirm(&self, catalog_id: &str, order_id: &str) -> anyhow::Result<()>;
}

/// Plain synchronous closures work as confirmation callbacks.
#[async_trait]
impl<F> ConfirmPurchase for F
where
    F: Fn(&str, &str) -> anyhow::Result<()> + Send + Sync,
{
    async fn confirm(&self, catalog_id: &str, order_id: &str) -> anyhow::Result<()> {
        self(catalog_id, order_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn closures_act_as_confirmation_callbacks() {
        let confirm = |catalog_id: &str, order_id: &str| -> anyhow::Result<()> {
            assert_eq!(catalog_id, "coins_100");
            assert_eq!(order_id, "GPA.5555");
            Ok(())
        };
        confirm.confirm("coins_100", "GPA.5555").await.unwrap();
    }

    #[tokio::test]
    async fn closure_errors_propagate() {
        let confirm =
            |_catalog_id: &str, _order_id: &str| -> anyhow::Result<()> { anyhow::bail!("nope") };
        let err = confirm.confirm("coins_100", "GPA.5555").await.unwrap_err();
        assert_eq!(err.to_string(), "nope");
    }
}
