//! Promotion Models
//!
//! A promotion is a named rule controlling discounts or loyalty
//! accrual. The `kind` field is a tagged union matching the stored
//! `type`/`details` document shape; evaluation sites match it
//! exhaustively so adding a promotion kind is a compile-time exercise.

use serde::{Deserialize, Serialize};

/// Discount amount expression for a special offer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum DiscountValue {
    /// Fraction of the applicable subtotal, 0.0..=1.0
    Percentage(f64),
    /// Flat amount, capped at the applicable subtotal
    FixedAmount(f64),
}

/// Spend-based reward tier (display/redemption metadata)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RewardTier {
    pub points_required: i64,
    pub reward_name: String,
}

/// Loyalty program rules
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum LoyaltyProgram {
    /// Goal count of qualifying visits earns one free reward item
    VisitBased {
        goal: i32,
        qualifying_item_ids: Vec<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        reward_item_id: Option<String>,
    },
    /// Points accrued per currency unit spent, redeemable by tier
    SpendBased {
        earn_rate: f64,
        #[serde(default)]
        reward_tiers: Vec<RewardTier>,
    },
}

/// Checkout-time discount offer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpecialOffer {
    pub discount: DiscountValue,
    /// None means the offer applies to the whole cart
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applicable_item_ids: Option<Vec<String>>,
}

/// Buy-N-get-M offer. Priced into the cart at line level by the
/// ordering client; carries no checkout-time discount.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MultiBuyOffer {
    pub buy_quantity: i32,
    pub free_quantity: i32,
    pub item_ids: Vec<String>,
}

/// Promotion rule variants, discriminated by `type`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details", rename_all = "snake_case")]
pub enum PromotionKind {
    Loyalty(LoyaltyProgram),
    SpecialOffer(SpecialOffer),
    MultiBuy(MultiBuyOffer),
}

/// A named promotion rule
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Promotion {
    pub promotion_id: String,
    pub tenant_id: String,
    pub name: String,
    /// Inactive promotions are excluded from all evaluation
    pub is_active: bool,
    #[serde(flatten)]
    pub kind: PromotionKind,
}

/// Create promotion payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromotionCreate {
    pub name: String,
    #[serde(flatten)]
    pub kind: PromotionKind,
}

/// Update promotion payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromotionUpdate {
    pub name: Option<String>,
    #[serde(flatten)]
    pub kind: Option<PromotionKind>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_special_offer_wire_shape() {
        let json = r#"{
            "promotion_id": "promo-1",
            "tenant_id": "t-1",
            "name": "Happy hour",
            "is_active": true,
            "type": "special_offer",
            "details": {
                "discount": { "kind": "percentage", "value": 0.10 },
                "applicable_item_ids": ["mi-1", "mi-2"]
            }
        }"#;
        let promo: Promotion = serde_json::from_str(json).unwrap();
        match promo.kind {
            PromotionKind::SpecialOffer(offer) => {
                assert_eq!(offer.discount, DiscountValue::Percentage(0.10));
                assert_eq!(offer.applicable_item_ids.unwrap().len(), 2);
            }
            _ => panic!("expected special_offer"),
        }
    }

    #[test]
    fn test_visit_based_loyalty_wire_shape() {
        let json = r#"{
            "promotion_id": "promo-2",
            "tenant_id": "t-1",
            "name": "Coffee card",
            "is_active": true,
            "type": "loyalty",
            "details": {
                "mode": "visit_based",
                "goal": 5,
                "qualifying_item_ids": ["mi-coffee"]
            }
        }"#;
        let promo: Promotion = serde_json::from_str(json).unwrap();
        match promo.kind {
            PromotionKind::Loyalty(LoyaltyProgram::VisitBased { goal, .. }) => {
                assert_eq!(goal, 5)
            }
            _ => panic!("expected visit_based loyalty"),
        }
    }
}
