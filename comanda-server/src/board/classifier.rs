//! Status classifier
//!
//! Pure function mapping an order and the current wall-clock time to
//! its lifecycle bucket and an advisory needs-attention flag. The
//! bucket is always the stored status; nothing is inferred from order
//! content. The flag only affects sorting and styling, never status.

use shared::{Order, OrderStatus};

use crate::utils::time::minutes_to_millis;

/// Age after which an unserved order demands attention
pub const ATTENTION_AGE_MINUTES: i64 = 15;

/// Classification result for one order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub bucket: OrderStatus,
    pub needs_attention: bool,
}

/// Whether an order has waited too long in the kitchen-facing statuses
pub fn needs_attention(order: &Order, now_millis: i64) -> bool {
    matches!(order.status, OrderStatus::New | OrderStatus::InProgress)
        && order.age_millis(now_millis) > minutes_to_millis(ATTENTION_AGE_MINUTES)
}

/// Classify one order at the given wall-clock time (Unix millis)
pub fn classify(order: &Order, now_millis: i64) -> Classification {
    Classification {
        bucket: order.status,
        needs_attention: needs_attention(order, now_millis),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_order(status: OrderStatus, created_at: i64) -> Order {
        Order {
            order_id: "o-1".to_string(),
            tenant_id: "t-1".to_string(),
            items: vec![],
            status,
            plate_number: None,
            store_id: None,
            subtotal: 0.0,
            tip: 0.0,
            platform_fee: 0.0,
            total: 0.0,
            applied_discounts: vec![],
            created_at,
            is_urgent: false,
            customer_phone_number: None,
        }
    }

    const NOW: i64 = 10_000_000_000;

    #[test]
    fn test_under_threshold_is_calm() {
        // 14m59s old
        let order = make_order(OrderStatus::New, NOW - (14 * 60 + 59) * 1000);
        assert!(!needs_attention(&order, NOW));
    }

    #[test]
    fn test_over_threshold_needs_attention() {
        // 15m01s old
        let order = make_order(OrderStatus::New, NOW - (15 * 60 + 1) * 1000);
        assert!(needs_attention(&order, NOW));
    }

    #[test]
    fn test_exactly_at_threshold_is_calm() {
        let order = make_order(OrderStatus::InProgress, NOW - 15 * 60 * 1000);
        assert!(!needs_attention(&order, NOW));
    }

    #[test]
    fn test_only_new_and_in_progress_age() {
        let stale = NOW - 60 * 60 * 1000;
        assert!(needs_attention(&make_order(OrderStatus::New, stale), NOW));
        assert!(needs_attention(&make_order(OrderStatus::InProgress, stale), NOW));
        assert!(!needs_attention(&make_order(OrderStatus::Pending, stale), NOW));
        assert!(!needs_attention(&make_order(OrderStatus::Ready, stale), NOW));
        assert!(!needs_attention(&make_order(OrderStatus::Completed, stale), NOW));
    }

    #[test]
    fn test_bucket_is_the_stored_status() {
        let order = make_order(OrderStatus::Ready, NOW);
        let c = classify(&order, NOW);
        assert_eq!(c.bucket, OrderStatus::Ready);
        assert!(!c.needs_attention);
    }
}
