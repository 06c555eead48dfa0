//! Prep-station aggregation
//!
//! Collapses every undelivered line item across the active orders into
//! grouped prep tickets. Delivered lines are excluded entirely: this
//! view reflects outstanding work only, never history.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use shared::Order;

/// Placeholder note used in the grouping key for items without notes
const NO_NOTE: &str = "no-note";

/// One contributing order line inside a prep group
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PrepContributor {
    pub order_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plate_number: Option<String>,
    pub quantity: i32,
}

/// One prep ticket: identical lines grouped across orders
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PrepItem {
    pub name: String,
    /// Modifier option names, sorted for a stable identity
    pub modifiers: Vec<String>,
    pub note: String,
    pub total_quantity: i32,
    pub contributors: Vec<PrepContributor>,
}

/// Group all undelivered line items, sorted by total quantity
/// descending (name ascending as tiebreak for a stable output).
pub fn aggregate_prep(orders: &[Order]) -> Vec<PrepItem> {
    // Key: (name, sorted-and-joined modifier names, note-or-placeholder)
    let mut groups: HashMap<(String, String, String), PrepItem> = HashMap::new();

    for order in orders.iter().filter(|o| o.status.is_active()) {
        for item in order.items.iter().filter(|i| !i.is_delivered) {
            let mut modifiers: Vec<String> = item
                .selected_modifiers
                .iter()
                .map(|m| m.option_name.clone())
                .collect();
            modifiers.sort();

            let note = item
                .notes
                .as_deref()
                .filter(|n| !n.trim().is_empty())
                .unwrap_or(NO_NOTE)
                .to_string();

            let key = (item.name.clone(), modifiers.join("|"), note.clone());
            let group = groups.entry(key).or_insert_with(|| PrepItem {
                name: item.name.clone(),
                modifiers,
                note,
                total_quantity: 0,
                contributors: Vec::new(),
            });
            group.total_quantity += item.quantity;
            group.contributors.push(PrepContributor {
                order_id: order.order_id.clone(),
                plate_number: order.plate_number.clone(),
                quantity: item.quantity,
            });
        }
    }

    let mut items: Vec<PrepItem> = groups.into_values().collect();
    items.sort_by(|a, b| {
        b.total_quantity
            .cmp(&a.total_quantity)
            .then_with(|| a.name.cmp(&b.name))
    });
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{OrderItem, OrderStatus, SelectedModifier};

    fn make_item(name: &str, modifiers: &[&str], note: &str, quantity: i32) -> OrderItem {
        OrderItem {
            menu_item_id: format!("mi-{}", name.to_lowercase()),
            name: name.to_string(),
            quantity,
            price: 5.0,
            selected_modifiers: modifiers
                .iter()
                .map(|m| SelectedModifier {
                    group_name: "Extras".to_string(),
                    option_name: m.to_string(),
                    option_price: 0.5,
                })
                .collect(),
            is_delivered: false,
            notes: (!note.is_empty()).then(|| note.to_string()),
        }
    }

    fn make_order(id: &str, plate: Option<&str>, items: Vec<OrderItem>) -> Order {
        Order {
            order_id: id.to_string(),
            tenant_id: "t-1".to_string(),
            items,
            status: OrderStatus::InProgress,
            plate_number: plate.map(String::from),
            store_id: None,
            subtotal: 0.0,
            tip: 0.0,
            platform_fee: 0.0,
            total: 0.0,
            applied_discounts: vec![],
            created_at: 0,
            is_urgent: false,
            customer_phone_number: None,
        }
    }

    #[test]
    fn test_groups_identical_lines_across_orders() {
        let orders = vec![
            make_order("o-1", Some("A1"), vec![make_item("Burger", &["Cheese"], "", 1)]),
            make_order("o-2", Some("A2"), vec![make_item("Burger", &["Cheese"], "", 2)]),
        ];
        let prep = aggregate_prep(&orders);
        assert_eq!(prep.len(), 1);
        assert_eq!(prep[0].total_quantity, 3);
        assert_eq!(prep[0].contributors.len(), 2);
        assert_eq!(prep[0].note, "no-note");
    }

    #[test]
    fn test_delivered_lines_are_excluded() {
        let mut delivered = make_item("Burger", &["Cheese"], "", 2);
        delivered.is_delivered = true;
        let orders = vec![
            make_order("o-1", Some("A1"), vec![make_item("Burger", &["Cheese"], "", 1)]),
            make_order("o-2", Some("A2"), vec![delivered]),
        ];
        let prep = aggregate_prep(&orders);
        assert_eq!(prep.len(), 1);
        assert_eq!(prep[0].total_quantity, 1);
        assert_eq!(prep[0].contributors.len(), 1);
    }

    #[test]
    fn test_modifier_order_does_not_split_groups() {
        let orders = vec![
            make_order("o-1", None, vec![make_item("Wrap", &["Spicy", "Extra"], "", 1)]),
            make_order("o-2", None, vec![make_item("Wrap", &["Extra", "Spicy"], "", 1)]),
        ];
        let prep = aggregate_prep(&orders);
        assert_eq!(prep.len(), 1);
        assert_eq!(prep[0].total_quantity, 2);
        assert_eq!(prep[0].modifiers, vec!["Extra", "Spicy"]);
    }

    #[test]
    fn test_notes_split_groups() {
        let orders = vec![make_order(
            "o-1",
            None,
            vec![
                make_item("Soup", &[], "no onion", 1),
                make_item("Soup", &[], "", 1),
            ],
        )];
        let prep = aggregate_prep(&orders);
        assert_eq!(prep.len(), 2);
    }

    #[test]
    fn test_sorted_by_quantity_descending() {
        let orders = vec![make_order(
            "o-1",
            None,
            vec![
                make_item("Salad", &[], "", 1),
                make_item("Burger", &[], "", 5),
                make_item("Fries", &[], "", 3),
            ],
        )];
        let prep = aggregate_prep(&orders);
        let names: Vec<&str> = prep.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Burger", "Fries", "Salad"]);
    }

    #[test]
    fn test_completed_orders_are_ignored() {
        let mut order = make_order("o-1", None, vec![make_item("Burger", &[], "", 1)]);
        order.status = OrderStatus::Completed;
        assert!(aggregate_prep(&[order]).is_empty());
    }
}
