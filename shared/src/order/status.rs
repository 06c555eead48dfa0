//! Order lifecycle status
//!
//! The status is an explicit field mutated by staff and customer
//! actions only; nothing is ever inferred from order content. The
//! lifecycle is forward-only with a single permitted backward edge,
//! `Completed -> Ready` (recall), used to correct a premature
//! completion. `Pending` orders are never transitioned backward:
//! rejection deletes the order instead.

use serde::{Deserialize, Serialize};

/// Coarse order lifecycle bucket
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Awaiting staff approval (table orders start here)
    Pending,
    /// Approved / incoming (takeaway and online orders start here)
    #[default]
    New,
    /// Being prepared
    InProgress,
    /// Ready for pickup or delivery to the table
    Ready,
    /// Terminal; excluded from the active set
    Completed,
}

impl OrderStatus {
    /// Board columns, in lifecycle order (Completed is not a column)
    pub const ACTIVE_COLUMNS: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::New,
        OrderStatus::InProgress,
        OrderStatus::Ready,
    ];

    /// Whether an order in this status belongs to the active set
    pub fn is_active(&self) -> bool {
        !matches!(self, OrderStatus::Completed)
    }

    /// Legal transitions. Everything not listed here is rejected.
    pub fn can_transition_to(&self, next: OrderStatus) -> bool {
        matches!(
            (self, next),
            (OrderStatus::Pending, OrderStatus::New)
                | (OrderStatus::New, OrderStatus::InProgress)
                | (OrderStatus::InProgress, OrderStatus::Ready)
                | (OrderStatus::Ready, OrderStatus::Completed)
                | (OrderStatus::Completed, OrderStatus::Ready)
        )
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::Pending => write!(f, "PENDING"),
            OrderStatus::New => write!(f, "NEW"),
            OrderStatus::InProgress => write!(f, "IN_PROGRESS"),
            OrderStatus::Ready => write!(f, "READY"),
            OrderStatus::Completed => write!(f, "COMPLETED"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use OrderStatus::*;

    #[test]
    fn test_forward_path_is_legal() {
        assert!(Pending.can_transition_to(New));
        assert!(New.can_transition_to(InProgress));
        assert!(InProgress.can_transition_to(Ready));
        assert!(Ready.can_transition_to(Completed));
    }

    #[test]
    fn test_recall_is_the_only_backward_edge() {
        assert!(Completed.can_transition_to(Ready));

        for from in [New, InProgress, Ready, Completed] {
            assert!(!from.can_transition_to(Pending));
        }
        assert!(!InProgress.can_transition_to(New));
        assert!(!Ready.can_transition_to(InProgress));
        assert!(!Completed.can_transition_to(InProgress));
    }

    #[test]
    fn test_no_skipping_forward() {
        assert!(!Pending.can_transition_to(InProgress));
        assert!(!Pending.can_transition_to(Ready));
        assert!(!Pending.can_transition_to(Completed));
        assert!(!New.can_transition_to(Ready));
        assert!(!New.can_transition_to(Completed));
        assert!(!InProgress.can_transition_to(Completed));
    }

    #[test]
    fn test_self_transition_rejected() {
        for status in [Pending, New, InProgress, Ready, Completed] {
            assert!(!status.can_transition_to(status));
        }
    }

    #[test]
    fn test_completed_is_not_active() {
        assert!(!Completed.is_active());
        for status in OrderStatus::ACTIVE_COLUMNS {
            assert!(status.is_active());
        }
    }

    #[test]
    fn test_serde_wire_format() {
        assert_eq!(serde_json::to_string(&InProgress).unwrap(), "\"IN_PROGRESS\"");
        let parsed: OrderStatus = serde_json::from_str("\"READY\"").unwrap();
        assert_eq!(parsed, Ready);
    }
}
