//! Status move validation
//!
//! Combines the lifecycle machine with the role gate. Both checks run
//! server-side: a client that bypasses its own UI still cannot write
//! an illegal transition.

use shared::{Order, OrderStatus};

use crate::auth::Role;
use crate::utils::AppError;

/// Validate a board move before it is written
pub fn validate_move(order: &Order, next: OrderStatus, role: Role) -> Result<(), AppError> {
    if !role.can_move_card(order.status) {
        return Err(AppError::forbidden(format!(
            "Role {} may not move orders out of {}",
            role, order.status
        )));
    }
    if !order.status.can_transition_to(next) {
        return Err(AppError::business_rule(format!(
            "Illegal status transition {} -> {}",
            order.status, next
        )));
    }
    Ok(())
}
