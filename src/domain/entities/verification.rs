/// Outcome of a single verification call.
///
/// `NotEntitled` is an expected business state, not a failure: the token was
/// checked successfully but the purchase is not in a payable/active state
/// (e.g. still pending, canceled, or a lapsed subscription), so the
/// confirmation callback was skipped. Callers must treat it as "no
/// entitlement yet", not as an error and not as a grant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verification {
    /// The purchase is paid/active and the confirmation callback completed.
    Confirmed {
        /// Store-assigned order id the callback was invoked with.
        order_id: String,
    },
    /// The purchase exists but is not payable/active; no callback was run.
    NotEntitled,
}

impl Verification {
    pub fn is_confirmed(&self) -> bool {
        matches!(self, Verification::Confirmed { .. })
    }

    /// Order id of the confirmed purchase, if any.
    pub fn order_id(&self) -> Option<&str> {
        match self {
            Verification::Confirmed { order_id } => Some(order_id),
            Verification::NotEntitled => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirmed_exposes_order_id() {
        let outcome = Verification::Confirmed {
            order_id: "GPA.1234".to_string(),
        };
        assert!(outcome.is_confirmed());
        assert_eq!(outcome.order_id(), Some("GPA.1234"));
    }

    #[test]
    fn not_entitled_has_no_order_id() {
        assert!(!Verification::NotEntitled.is_confirmed());
        assert_eq!(Verification::NotEntitled.order_id(), None);
    }
}
