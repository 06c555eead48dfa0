//! Special-offer evaluation
//!
//! Given a finalized cart and the tenant's active promotions, computes
//! the single best applicable discount. Offers never stack: exactly
//! zero or one discount line is produced, and ties keep the first
//! offer encountered in the promotions collection.

use rust_decimal::Decimal;
use shared::models::{DiscountValue, Promotion, PromotionKind, SpecialOffer};
use shared::money::{to_decimal, to_f64};
use shared::{AppliedDiscount, OrderItem};

/// Pick the best active special offer for this cart, if any
pub fn best_special_offer(
    items: &[OrderItem],
    promotions: &[Promotion],
) -> Option<AppliedDiscount> {
    let mut best: Option<(Decimal, AppliedDiscount)> = None;

    for promotion in promotions.iter().filter(|p| p.is_active) {
        // Exhaustive on purpose: a new promotion kind must decide its
        // checkout behavior here before this compiles.
        let offer = match &promotion.kind {
            PromotionKind::SpecialOffer(offer) => offer,
            PromotionKind::Loyalty(_) => continue,
            PromotionKind::MultiBuy(_) => continue,
        };

        let amount = discount_amount(items, offer);
        if amount <= Decimal::ZERO {
            continue;
        }

        // Strictly-greater keeps the first encountered on ties
        let replace = match &best {
            None => true,
            Some((best_amount, _)) => amount > *best_amount,
        };
        if replace {
            best = Some((
                amount,
                AppliedDiscount {
                    promotion_name: promotion.name.clone(),
                    amount: to_f64(amount),
                },
            ));
        }
    }

    best.map(|(_, discount)| discount)
}

/// Discount this offer yields on the cart, at currency scale
fn discount_amount(items: &[OrderItem], offer: &SpecialOffer) -> Decimal {
    let applicable = applicable_subtotal(items, offer.applicable_item_ids.as_deref());
    if applicable <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    match &offer.discount {
        DiscountValue::Percentage(rate) => applicable * to_decimal(*rate),
        DiscountValue::FixedAmount(amount) => to_decimal(*amount).min(applicable),
    }
}

/// Subtotal of the cart lines the offer applies to; the whole cart
/// when the offer declares no restriction.
fn applicable_subtotal(items: &[OrderItem], restriction: Option<&[String]>) -> Decimal {
    items
        .iter()
        .filter(|item| match restriction {
            None => true,
            Some(ids) => ids.iter().any(|id| id == &item.menu_item_id),
        })
        .map(|item| to_decimal(item.price) * Decimal::from(item.quantity))
        .sum()
}
