//! Staff roles and the board-move gate
//!
//! Role checks run server-side: a client that skips its own UI gating
//! still cannot write an illegal move.

use serde::{Deserialize, Serialize};
use shared::OrderStatus;

use crate::utils::AppError;

/// Staff role carried in the JWT `role` claim
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Manager,
    FloorStaff,
    KitchenStaff,
}

impl Role {
    /// Whether this role may manage catalog/tables/promotions
    pub fn can_manage(&self) -> bool {
        matches!(self, Role::Admin | Role::Manager)
    }

    /// Board card movement gate: kitchen staff may not move cards at
    /// all, and moving a card out of Pending (approve/reject) is
    /// restricted to admin and manager.
    pub fn can_move_card(&self, from: OrderStatus) -> bool {
        match self {
            Role::KitchenStaff => false,
            Role::Admin | Role::Manager => true,
            Role::FloorStaff => from != OrderStatus::Pending,
        }
    }

    /// Guard helper producing the uniform forbidden error
    pub fn require_manage(&self) -> Result<(), AppError> {
        if self.can_manage() {
            Ok(())
        } else {
            Err(AppError::forbidden("Admin or manager role required"))
        }
    }
}

impl std::str::FromStr for Role {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "manager" => Ok(Role::Manager),
            "floor_staff" => Ok(Role::FloorStaff),
            "kitchen_staff" => Ok(Role::KitchenStaff),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Admin => write!(f, "admin"),
            Role::Manager => write!(f, "manager"),
            Role::FloorStaff => write!(f, "floor_staff"),
            Role::KitchenStaff => write!(f, "kitchen_staff"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kitchen_staff_cannot_move_cards() {
        for from in OrderStatus::ACTIVE_COLUMNS {
            assert!(!Role::KitchenStaff.can_move_card(from));
        }
    }

    #[test]
    fn test_pending_moves_require_admin_or_manager() {
        assert!(Role::Admin.can_move_card(OrderStatus::Pending));
        assert!(Role::Manager.can_move_card(OrderStatus::Pending));
        assert!(!Role::FloorStaff.can_move_card(OrderStatus::Pending));
    }

    #[test]
    fn test_floor_staff_moves_non_pending() {
        assert!(Role::FloorStaff.can_move_card(OrderStatus::New));
        assert!(Role::FloorStaff.can_move_card(OrderStatus::Ready));
    }

    #[test]
    fn test_role_parse_roundtrip() {
        for role in [Role::Admin, Role::Manager, Role::FloorStaff, Role::KitchenStaff] {
            assert_eq!(role.to_string().parse::<Role>().unwrap(), role);
        }
        assert!("chef".parse::<Role>().is_err());
    }
}
