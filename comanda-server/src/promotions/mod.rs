//! Promotion evaluation - checkout discounts and loyalty accrual

pub mod evaluator;
pub mod loyalty;

pub use evaluator::best_special_offer;
pub use loyalty::{LoyaltyAccrual, apply_redemption, compute_accrual};
