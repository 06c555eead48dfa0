//! Order hub - active set cache and change fan-out
//!
//! The hub mirrors the store's non-Completed orders in memory so view
//! endpoints can run the pure aggregators over a coherent snapshot
//! without a round trip. It is updated only after a successful store
//! write: a failed write leaves the hub (and therefore every derived
//! view) untouched.

use std::collections::{HashMap, VecDeque};

use parking_lot::RwLock;
use shared::Order;
use tokio::sync::broadcast;

use crate::core::ChangeEvent;

/// Change broadcast capacity
const CHANGE_CHANNEL_CAPACITY: usize = 4096;

/// Default rolling window of completed orders kept for display
const DEFAULT_RECENT_WINDOW: usize = 50;

/// Active-order cache plus change broadcast
pub struct OrderHub {
    active: RwLock<HashMap<String, Order>>,
    recent_completed: RwLock<VecDeque<Order>>,
    recent_window: usize,
    change_tx: broadcast::Sender<ChangeEvent>,
}

impl Default for OrderHub {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderHub {
    pub fn new() -> Self {
        Self::with_recent_window(DEFAULT_RECENT_WINDOW)
    }

    pub fn with_recent_window(recent_window: usize) -> Self {
        let (change_tx, _) = broadcast::channel(CHANGE_CHANNEL_CAPACITY);
        Self {
            active: RwLock::new(HashMap::new()),
            recent_completed: RwLock::new(VecDeque::new()),
            recent_window,
            change_tx,
        }
    }

    /// Replace the active set wholesale (startup warm-up)
    pub fn load(&self, orders: Vec<Order>) {
        let mut active = self.active.write();
        active.clear();
        for order in orders.into_iter().filter(Order::is_active) {
            active.insert(order.order_id.clone(), order);
        }
    }

    /// Insert or update one order. Completed orders leave the active
    /// set and enter the bounded recent window.
    pub fn apply(&self, order: Order) {
        if order.is_active() {
            self.active.write().insert(order.order_id.clone(), order);
            return;
        }
        self.active.write().remove(&order.order_id);
        let mut recent = self.recent_completed.write();
        recent.push_front(order);
        recent.truncate(self.recent_window);
    }

    /// Drop one order entirely (rejection of a Pending order)
    pub fn remove(&self, order_id: &str) {
        self.active.write().remove(order_id);
    }

    /// One order from the active set, tenant-checked
    pub fn get(&self, tenant_id: &str, order_id: &str) -> Option<Order> {
        self.active
            .read()
            .get(order_id)
            .filter(|o| o.tenant_id == tenant_id)
            .cloned()
    }

    /// Coherent snapshot of a tenant's active orders, arrival order
    pub fn snapshot(&self, tenant_id: &str) -> Vec<Order> {
        let mut orders: Vec<Order> = self
            .active
            .read()
            .values()
            .filter(|o| o.tenant_id == tenant_id)
            .cloned()
            .collect();
        orders.sort_by_key(|o| o.created_at);
        orders
    }

    /// Recently completed orders of a tenant, newest first
    pub fn recent_completed(&self, tenant_id: &str) -> Vec<Order> {
        self.recent_completed
            .read()
            .iter()
            .filter(|o| o.tenant_id == tenant_id)
            .cloned()
            .collect()
    }

    /// Subscribe to change notifications
    pub fn subscribe(&self) -> broadcast::Receiver<ChangeEvent> {
        self.change_tx.subscribe()
    }

    /// Publish a change notification; lagging subscribers re-derive
    /// their views from the snapshot, so drops are tolerable
    pub fn publish(&self, event: ChangeEvent) {
        let _ = self.change_tx.send(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::OrderStatus;

    fn make_order(id: &str, tenant: &str, status: OrderStatus, created_at: i64) -> Order {
        Order {
            order_id: id.to_string(),
            tenant_id: tenant.to_string(),
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

    #[test]
    fn test_snapshot_is_tenant_scoped_and_sorted() {
        let hub = OrderHub::new();
        hub.apply(make_order("o-2", "t-1", OrderStatus::New, 200));
        hub.apply(make_order("o-1", "t-1", OrderStatus::New, 100));
        hub.apply(make_order("o-3", "t-2", OrderStatus::New, 50));

        let snapshot = hub.snapshot("t-1");
        let ids: Vec<&str> = snapshot.iter().map(|o| o.order_id.as_str()).collect();
        assert_eq!(ids, vec!["o-1", "o-2"]);
    }

    #[test]
    fn test_completed_orders_move_to_recent_window() {
        let hub = OrderHub::new();
        hub.apply(make_order("o-1", "t-1", OrderStatus::Ready, 100));
        assert_eq!(hub.snapshot("t-1").len(), 1);

        hub.apply(make_order("o-1", "t-1", OrderStatus::Completed, 100));
        assert!(hub.snapshot("t-1").is_empty());
        assert_eq!(hub.recent_completed("t-1").len(), 1);
    }

    #[test]
    fn test_recent_window_is_bounded() {
        let hub = OrderHub::with_recent_window(2);
        for i in 0..5 {
            hub.apply(make_order(
                &format!("o-{}", i),
                "t-1",
                OrderStatus::Completed,
                i,
            ));
        }
        let recent = hub.recent_completed("t-1");
        assert_eq!(recent.len(), 2);
        // Newest first
        assert_eq!(recent[0].order_id, "o-4");
    }

    #[test]
    fn test_load_skips_completed() {
        let hub = OrderHub::new();
        hub.load(vec![
            make_order("o-1", "t-1", OrderStatus::New, 1),
            make_order("o-2", "t-1", OrderStatus::Completed, 2),
        ]);
        assert_eq!(hub.snapshot("t-1").len(), 1);
    }

    #[test]
    fn test_remove_drops_the_order() {
        let hub = OrderHub::new();
        hub.apply(make_order("o-1", "t-1", OrderStatus::Pending, 1));
        hub.remove("o-1");
        assert!(hub.snapshot("t-1").is_empty());
    }

    #[test]
    fn test_get_enforces_tenant() {
        let hub = OrderHub::new();
        hub.apply(make_order("o-1", "t-1", OrderStatus::New, 1));
        assert!(hub.get("t-1", "o-1").is_some());
        assert!(hub.get("t-2", "o-1").is_none());
    }

    #[test]
    fn test_publish_reaches_subscribers() {
        let hub = OrderHub::new();
        let mut rx = hub.subscribe();
        hub.publish(ChangeEvent::new(
            "t-1",
            "order",
            crate::core::ChangeAction::Created,
            "o-1",
        ));
        let event = rx.try_recv().unwrap();
        assert_eq!(event.id, "o-1");
    }
}
