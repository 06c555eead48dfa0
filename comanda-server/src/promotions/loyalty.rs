//! Loyalty accrual and redemption rules
//!
//! Accrual is evaluated at checkout, independently of any discount:
//! spend-based points come from the cart subtotal, visit-based counters
//! advance when the cart contains a qualifying item. Both are keyed by
//! customer phone number; the repository applies the result as one
//! atomic create-or-increment so concurrent orders from the same
//! customer cannot lose updates.

use rust_decimal::prelude::ToPrimitive;
use shared::OrderItem;
use shared::models::{LoyaltyProgram, Promotion, PromotionKind};
use shared::money::to_decimal;

/// Loyalty mutations earned by one checkout
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoyaltyAccrual {
    /// Spend-based points to add
    pub points: i64,
    /// Visit-based promotion ids whose counter advances by one
    pub visit_promotion_ids: Vec<String>,
}

impl LoyaltyAccrual {
    pub fn is_empty(&self) -> bool {
        self.points == 0 && self.visit_promotion_ids.is_empty()
    }
}

/// Evaluate accrual for a finalized cart.
///
/// Points use the first active spend-based program (the promotions
/// collection carries at most one by convention). Every active
/// visit-based program with a qualifying line advances independently.
pub fn compute_accrual(
    items: &[OrderItem],
    subtotal: f64,
    promotions: &[Promotion],
) -> LoyaltyAccrual {
    let mut accrual = LoyaltyAccrual::default();

    for promotion in promotions.iter().filter(|p| p.is_active) {
        let program = match &promotion.kind {
            PromotionKind::Loyalty(program) => program,
            PromotionKind::SpecialOffer(_) => continue,
            PromotionKind::MultiBuy(_) => continue,
        };

        match program {
            LoyaltyProgram::SpendBased { earn_rate, .. } => {
                if accrual.points == 0 {
                    let earned = to_decimal(subtotal) * to_decimal(*earn_rate);
                    accrual.points = earned.floor().to_i64().unwrap_or(0).max(0);
                }
            }
            LoyaltyProgram::VisitBased {
                qualifying_item_ids,
                ..
            } => {
                let qualifies = items
                    .iter()
                    .any(|item| qualifying_item_ids.iter().any(|id| id == &item.menu_item_id));
                if qualifies {
                    accrual.visit_promotion_ids.push(promotion.promotion_id.clone());
                }
            }
        }
    }

    accrual
}

/// Redemption math for visit-based programs: subtract exactly the goal
/// so accrual continues into the next cycle without losing surplus.
/// Returns the new counter, or None when the goal is not yet reached.
pub fn apply_redemption(current_visits: i32, goal: i32) -> Option<i32> {
    if goal <= 0 || current_visits < goal {
        return None;
    }
    Some(current_visits - goal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::DiscountValue;
    use shared::models::SpecialOffer;

    fn make_item(menu_item_id: &str) -> OrderItem {
        OrderItem {
            menu_item_id: menu_item_id.to_string(),
            name: menu_item_id.to_string(),
            quantity: 1,
            price: 5.0,
            selected_modifiers: vec![],
            is_delivered: false,
            notes: None,
        }
    }

    fn spend_based(earn_rate: f64) -> Promotion {
        Promotion {
            promotion_id: "p-spend".to_string(),
            tenant_id: "t-1".to_string(),
            name: "Points".to_string(),
            is_active: true,
            kind: PromotionKind::Loyalty(LoyaltyProgram::SpendBased {
                earn_rate,
                reward_tiers: vec![],
            }),
        }
    }

    fn visit_based(id: &str, qualifying: Vec<&str>) -> Promotion {
        Promotion {
            promotion_id: id.to_string(),
            tenant_id: "t-1".to_string(),
            name: "Coffee card".to_string(),
            is_active: true,
            kind: PromotionKind::Loyalty(LoyaltyProgram::VisitBased {
                goal: 5,
                qualifying_item_ids: qualifying.into_iter().map(String::from).collect(),
                reward_item_id: None,
            }),
        }
    }

    #[test]
    fn test_spend_points_floor() {
        let accrual = compute_accrual(&[], 12.8, &[spend_based(1.5)]);
        // floor(12.8 * 1.5) = floor(19.2) = 19
        assert_eq!(accrual.points, 19);
    }

    #[test]
    fn test_visit_counter_advances_on_qualifying_item() {
        let items = vec![make_item("mi-coffee")];
        let accrual = compute_accrual(&items, 5.0, &[visit_based("p-v", vec!["mi-coffee"])]);
        assert_eq!(accrual.visit_promotion_ids, vec!["p-v"]);
    }

    #[test]
    fn test_no_visit_without_qualifying_item() {
        let items = vec![make_item("mi-tea")];
        let accrual = compute_accrual(&items, 5.0, &[visit_based("p-v", vec!["mi-coffee"])]);
        assert!(accrual.visit_promotion_ids.is_empty());
    }

    #[test]
    fn test_inactive_programs_do_not_accrue() {
        let mut promo = spend_based(1.0);
        promo.is_active = false;
        let accrual = compute_accrual(&[], 20.0, &[promo]);
        assert!(accrual.is_empty());
    }

    #[test]
    fn test_accrual_is_independent_of_discounts() {
        let items = vec![make_item("mi-coffee")];
        let promotions = vec![
            Promotion {
                promotion_id: "p-offer".to_string(),
                tenant_id: "t-1".to_string(),
                name: "Offer".to_string(),
                is_active: true,
                kind: PromotionKind::SpecialOffer(SpecialOffer {
                    discount: DiscountValue::Percentage(0.5),
                    applicable_item_ids: None,
                }),
            },
            spend_based(1.0),
            visit_based("p-v", vec!["mi-coffee"]),
        ];
        let accrual = compute_accrual(&items, 10.0, &promotions);
        assert_eq!(accrual.points, 10);
        assert_eq!(accrual.visit_promotion_ids, vec!["p-v"]);
    }

    #[test]
    fn test_redemption_preserves_surplus() {
        // At 7 visits with goal 5, redeeming leaves 2 - not 0
        assert_eq!(apply_redemption(7, 5), Some(2));
    }

    #[test]
    fn test_redemption_at_exact_goal() {
        assert_eq!(apply_redemption(5, 5), Some(0));
    }

    #[test]
    fn test_redemption_below_goal_rejected() {
        assert_eq!(apply_redemption(4, 5), None);
        assert_eq!(apply_redemption(0, 5), None);
    }

    #[test]
    fn test_redemption_rejects_degenerate_goal() {
        assert_eq!(apply_redemption(10, 0), None);
    }
}
