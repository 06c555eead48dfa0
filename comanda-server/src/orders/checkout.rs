//! Checkout - order construction from a submitted cart
//!
//! Builds the persisted order from the customer's cart: resolves unit
//! prices (base + modifier deltas) into frozen item snapshots, applies
//! the best special offer, adds tip and the online platform fee, and
//! picks the entry status (Pending for table orders, New for takeaway
//! and online).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::models::Promotion;
use shared::money::{MAX_PRICE, MAX_QUANTITY, to_decimal, to_f64};
use shared::{CartLineInput, Order, OrderItem, OrderStatus};

use crate::promotions::best_special_offer;
use crate::utils::AppError;

/// Checkout payload submitted by the ordering client. The tenant comes
/// from the QR payload; customers carry no account or token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutRequest {
    pub tenant_id: String,
    #[serde(default)]
    pub store_id: Option<String>,
    /// Table/seat label scanned or typed by the customer
    #[serde(default)]
    pub plate_number: Option<String>,
    pub items: Vec<CartLineInput>,
    #[serde(default)]
    pub tip: f64,
    #[serde(default)]
    pub customer_phone_number: Option<String>,
}

/// Validate one cart line before snapshotting it
fn validate_line(line: &CartLineInput) -> Result<(), AppError> {
    if line.name.trim().is_empty() {
        return Err(AppError::validation("Item name must not be empty"));
    }
    if line.quantity <= 0 || line.quantity > MAX_QUANTITY {
        return Err(AppError::validation(format!(
            "Invalid quantity {} for '{}'",
            line.quantity, line.name
        )));
    }
    if !line.unit_price.is_finite() || line.unit_price < 0.0 || line.unit_price > MAX_PRICE {
        return Err(AppError::validation(format!(
            "Invalid price for '{}'",
            line.name
        )));
    }
    for modifier in &line.selected_modifiers {
        if !modifier.option_price.is_finite() || modifier.option_price < 0.0 {
            return Err(AppError::validation(format!(
                "Invalid modifier price for '{}'",
                line.name
            )));
        }
    }
    Ok(())
}

/// Resolve one cart line into a frozen item snapshot
fn snapshot_line(line: &CartLineInput) -> OrderItem {
    let modifier_total: Decimal = line
        .selected_modifiers
        .iter()
        .map(|m| to_decimal(m.option_price))
        .sum();
    OrderItem {
        menu_item_id: line.menu_item_id.clone(),
        name: line.name.clone(),
        quantity: line.quantity,
        price: to_f64(to_decimal(line.unit_price) + modifier_total),
        selected_modifiers: line.selected_modifiers.clone(),
        is_delivered: false,
        notes: line.notes.clone(),
    }
}

/// Build the order to persist. Pure: the caller supplies the id, the
/// clock and the tenant's promotions.
pub fn build_order(
    request: &CheckoutRequest,
    promotions: &[Promotion],
    order_id: String,
    now_millis: i64,
    platform_fee_rate: f64,
) -> Result<Order, AppError> {
    if request.items.is_empty() {
        return Err(AppError::validation("Cart must not be empty"));
    }
    if !request.tip.is_finite() || request.tip < 0.0 {
        return Err(AppError::validation("Invalid tip amount"));
    }
    for line in &request.items {
        validate_line(line)?;
    }

    let items: Vec<OrderItem> = request.items.iter().map(snapshot_line).collect();

    let subtotal: Decimal = items
        .iter()
        .map(|i| to_decimal(i.price) * Decimal::from(i.quantity))
        .sum();

    let discount = best_special_offer(&items, promotions);
    let discount_amount = discount
        .as_ref()
        .map(|d| to_decimal(d.amount))
        .unwrap_or(Decimal::ZERO);

    // Online orders (no store) carry the platform fee
    let platform_fee = if request.store_id.is_none() {
        subtotal * to_decimal(platform_fee_rate)
    } else {
        Decimal::ZERO
    };

    let tip = to_decimal(request.tip);
    let total = subtotal - discount_amount + tip + platform_fee;

    // Table orders await staff approval; takeaway/online go straight in
    let status = if request.plate_number.is_some() {
        OrderStatus::Pending
    } else {
        OrderStatus::New
    };

    Ok(Order {
        order_id,
        tenant_id: request.tenant_id.clone(),
        items,
        status,
        plate_number: request.plate_number.clone(),
        store_id: request.store_id.clone(),
        subtotal: to_f64(subtotal),
        tip: to_f64(tip),
        platform_fee: to_f64(platform_fee),
        total: to_f64(total),
        applied_discounts: discount.map(|d| vec![d]).unwrap_or_default(),
        created_at: now_millis,
        is_urgent: false,
        customer_phone_number: request.customer_phone_number.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::SelectedModifier;
    use shared::models::{DiscountValue, PromotionKind, SpecialOffer};

    const NOW: i64 = 10_000_000_000;

    fn make_line(id: &str, price: f64, quantity: i32) -> CartLineInput {
        CartLineInput {
            menu_item_id: id.to_string(),
            name: id.to_string(),
            quantity,
            unit_price: price,
            selected_modifiers: vec![],
            notes: None,
        }
    }

    fn make_request(plate: Option<&str>, store: Option<&str>) -> CheckoutRequest {
        CheckoutRequest {
            tenant_id: "t-1".to_string(),
            store_id: store.map(String::from),
            plate_number: plate.map(String::from),
            items: vec![make_line("mi-1", 10.0, 2)],
            tip: 1.0,
            customer_phone_number: None,
        }
    }

    #[test]
    fn test_table_orders_start_pending() {
        let order = build_order(&make_request(Some("A1"), Some("s-1")), &[], "o-1".into(), NOW, 0.05)
            .unwrap();
        assert_eq!(order.status, OrderStatus::Pending);
    }

    #[test]
    fn test_takeaway_orders_start_new() {
        let order =
            build_order(&make_request(None, Some("s-1")), &[], "o-1".into(), NOW, 0.05).unwrap();
        assert_eq!(order.status, OrderStatus::New);
    }

    #[test]
    fn test_online_orders_carry_platform_fee() {
        let order = build_order(&make_request(None, None), &[], "o-1".into(), NOW, 0.05).unwrap();
        assert_eq!(order.subtotal, 20.0);
        assert_eq!(order.platform_fee, 1.0);
        assert_eq!(order.total, 22.0);
    }

    #[test]
    fn test_store_orders_skip_platform_fee() {
        let order =
            build_order(&make_request(Some("A1"), Some("s-1")), &[], "o-1".into(), NOW, 0.05)
                .unwrap();
        assert_eq!(order.platform_fee, 0.0);
        assert_eq!(order.total, 21.0);
    }

    #[test]
    fn test_modifier_deltas_fold_into_unit_price() {
        let mut request = make_request(None, Some("s-1"));
        request.items = vec![CartLineInput {
            menu_item_id: "mi-1".to_string(),
            name: "Burger".to_string(),
            quantity: 2,
            unit_price: 8.0,
            selected_modifiers: vec![SelectedModifier {
                group_name: "Extras".to_string(),
                option_name: "Cheese".to_string(),
                option_price: 0.5,
            }],
            notes: None,
        }];
        request.tip = 0.0;
        let order = build_order(&request, &[], "o-1".into(), NOW, 0.05).unwrap();
        assert_eq!(order.items[0].price, 8.5);
        assert_eq!(order.subtotal, 17.0);
    }

    #[test]
    fn test_best_offer_becomes_the_single_discount_line() {
        let promotions = vec![Promotion {
            promotion_id: "p-1".to_string(),
            tenant_id: "t-1".to_string(),
            name: "Tenner off".to_string(),
            is_active: true,
            kind: PromotionKind::SpecialOffer(SpecialOffer {
                discount: DiscountValue::Percentage(0.10),
                applicable_item_ids: None,
            }),
        }];
        let order =
            build_order(&make_request(None, Some("s-1")), &promotions, "o-1".into(), NOW, 0.05)
                .unwrap();
        assert_eq!(order.applied_discounts.len(), 1);
        assert_eq!(order.applied_discounts[0].amount, 2.0);
        // 20 - 2 + 1 tip
        assert_eq!(order.total, 19.0);
    }

    #[test]
    fn test_empty_cart_rejected() {
        let mut request = make_request(None, None);
        request.items.clear();
        assert!(build_order(&request, &[], "o-1".into(), NOW, 0.05).is_err());
    }

    #[test]
    fn test_bad_lines_rejected() {
        let mut request = make_request(None, None);
        request.items = vec![make_line("mi-1", -1.0, 1)];
        assert!(build_order(&request, &[], "o-1".into(), NOW, 0.05).is_err());

        let mut request = make_request(None, None);
        request.items = vec![make_line("mi-1", 1.0, 0)];
        assert!(build_order(&request, &[], "o-1".into(), NOW, 0.05).is_err());
    }

    #[test]
    fn test_items_are_snapshots() {
        let order = build_order(&make_request(None, None), &[], "o-1".into(), NOW, 0.05).unwrap();
        assert!(!order.items[0].is_delivered);
        assert_eq!(order.items[0].name, "mi-1");
        assert_eq!(order.created_at, NOW);
    }
}
