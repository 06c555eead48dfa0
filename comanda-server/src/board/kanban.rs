//! Kanban aggregator
//!
//! Groups the active orders of a tenant into the four board columns.
//! Column order is recomputed from the sort rule on every pass; manual
//! placement within a column is never persisted.

use serde::{Deserialize, Serialize};
use shared::{Order, OrderStatus};

use super::classifier::needs_attention;

/// Store scoping for the board
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StoreFilter {
    /// Every order of the tenant
    #[default]
    All,
    /// Orders without a store reference
    Online,
    /// Orders of one physical store
    Store(String),
}

impl StoreFilter {
    /// Parse the `store` query parameter ("all" / "online" / store id)
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            None | Some("all") => StoreFilter::All,
            Some("online") => StoreFilter::Online,
            Some(id) => StoreFilter::Store(id.to_string()),
        }
    }

    fn matches(&self, order: &Order) -> bool {
        match self {
            StoreFilter::All => true,
            StoreFilter::Online => order.store_id.is_none(),
            StoreFilter::Store(id) => order.store_id.as_deref() == Some(id.as_str()),
        }
    }
}

/// Board query filter
#[derive(Debug, Clone, Default)]
pub struct BoardFilter {
    pub store: StoreFilter,
    /// Substring match on plate number or order id, case-insensitive
    pub search: Option<String>,
}

impl BoardFilter {
    /// Whether one order passes the store scope and search term. The
    /// prep view reuses this so both views filter identically.
    pub fn matches(&self, order: &Order) -> bool {
        if !self.store.matches(order) {
            return false;
        }
        match &self.search {
            None => true,
            Some(term) => {
                let term = term.to_lowercase();
                order
                    .plate_number
                    .as_deref()
                    .is_some_and(|p| p.to_lowercase().contains(&term))
                    || order.order_id.to_lowercase().contains(&term)
            }
        }
    }
}

/// One card on the board
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BoardCard {
    #[serde(flatten)]
    pub order: Order,
    pub needs_attention: bool,
}

/// The four active columns, each ordered by urgency then arrival
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct KanbanBoard {
    pub pending: Vec<BoardCard>,
    pub new: Vec<BoardCard>,
    pub in_progress: Vec<BoardCard>,
    pub ready: Vec<BoardCard>,
}

impl KanbanBoard {
    pub fn column(&self, status: OrderStatus) -> Option<&Vec<BoardCard>> {
        match status {
            OrderStatus::Pending => Some(&self.pending),
            OrderStatus::New => Some(&self.new),
            OrderStatus::InProgress => Some(&self.in_progress),
            OrderStatus::Ready => Some(&self.ready),
            OrderStatus::Completed => None,
        }
    }
}

/// Build the board from the active set.
///
/// The sort is a stable partition: urgent orders float to the top of
/// their column while equal-urgency orders keep createdAt (arrival)
/// order.
pub fn build_board(orders: &[Order], filter: &BoardFilter, now_millis: i64) -> KanbanBoard {
    let mut filtered: Vec<&Order> = orders
        .iter()
        .filter(|o| o.status.is_active() && filter.matches(o))
        .collect();

    // Stable sort: urgent first, then FIFO within each urgency tier
    filtered.sort_by_key(|o| (!o.is_urgent, o.created_at));

    let mut board = KanbanBoard::default();
    for order in filtered {
        let card = BoardCard {
            needs_attention: needs_attention(order, now_millis),
            order: order.clone(),
        };
        match order.status {
            OrderStatus::Pending => board.pending.push(card),
            OrderStatus::New => board.new.push(card),
            OrderStatus::InProgress => board.in_progress.push(card),
            OrderStatus::Ready => board.ready.push(card),
            OrderStatus::Completed => {}
        }
    }
    board
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_order(id: &str, urgent: bool, created_at: i64) -> Order {
        Order {
            order_id: id.to_string(),
            tenant_id: "t-1".to_string(),
            items: vec![],
            status: OrderStatus::New,
            plate_number: None,
            store_id: None,
            subtotal: 0.0,
            tip: 0.0,
            platform_fee: 0.0,
            total: 0.0,
            applied_discounts: vec![],
            created_at,
            is_urgent: urgent,
            customer_phone_number: None,
        }
    }

    const NOW: i64 = 10_000_000_000;

    fn ids(cards: &[BoardCard]) -> Vec<&str> {
        cards.iter().map(|c| c.order.order_id.as_str()).collect()
    }

    #[test]
    fn test_urgency_stable_sort() {
        let orders = vec![
            make_order("1", false, 1),
            make_order("2", true, 2),
            make_order("3", true, 3),
            make_order("4", false, 4),
        ];
        let board = build_board(&orders, &BoardFilter::default(), NOW);
        assert_eq!(ids(&board.new), vec!["2", "3", "1", "4"]);
    }

    #[test]
    fn test_buckets_by_status() {
        let mut a = make_order("a", false, 1);
        a.status = OrderStatus::Pending;
        let mut b = make_order("b", false, 2);
        b.status = OrderStatus::InProgress;
        let mut c = make_order("c", false, 3);
        c.status = OrderStatus::Ready;
        let d = make_order("d", false, 4);

        let board = build_board(&[a, b, c, d], &BoardFilter::default(), NOW);
        assert_eq!(ids(&board.pending), vec!["a"]);
        assert_eq!(ids(&board.in_progress), vec!["b"]);
        assert_eq!(ids(&board.ready), vec!["c"]);
        assert_eq!(ids(&board.new), vec!["d"]);
    }

    #[test]
    fn test_completed_orders_are_excluded() {
        let mut done = make_order("done", false, 1);
        done.status = OrderStatus::Completed;
        let board = build_board(&[done], &BoardFilter::default(), NOW);
        assert!(board.pending.is_empty());
        assert!(board.new.is_empty());
        assert!(board.in_progress.is_empty());
        assert!(board.ready.is_empty());
    }

    #[test]
    fn test_online_store_filter() {
        let online = make_order("online", false, 1);
        let mut in_store = make_order("in-store", false, 2);
        in_store.store_id = Some("s-1".to_string());

        let filter = BoardFilter {
            store: StoreFilter::Online,
            search: None,
        };
        let board = build_board(&[online, in_store.clone()], &filter, NOW);
        assert_eq!(ids(&board.new), vec!["online"]);

        let filter = BoardFilter {
            store: StoreFilter::Store("s-1".to_string()),
            search: None,
        };
        let board = build_board(&[make_order("online", false, 1), in_store], &filter, NOW);
        assert_eq!(ids(&board.new), vec!["in-store"]);
    }

    #[test]
    fn test_search_matches_plate_or_id() {
        let mut by_plate = make_order("o-77", false, 1);
        by_plate.plate_number = Some("A12".to_string());
        let by_id = make_order("o-88", false, 2);
        let miss = make_order("o-99", false, 3);

        let filter = BoardFilter {
            store: StoreFilter::All,
            search: Some("a12".to_string()),
        };
        let board = build_board(
            &[by_plate.clone(), by_id.clone(), miss.clone()],
            &filter,
            NOW,
        );
        assert_eq!(ids(&board.new), vec!["o-77"]);

        let filter = BoardFilter {
            store: StoreFilter::All,
            search: Some("88".to_string()),
        };
        let board = build_board(&[by_plate, by_id, miss], &filter, NOW);
        assert_eq!(ids(&board.new), vec!["o-88"]);
    }

    #[test]
    fn test_store_filter_parse() {
        assert_eq!(StoreFilter::parse(None), StoreFilter::All);
        assert_eq!(StoreFilter::parse(Some("all")), StoreFilter::All);
        assert_eq!(StoreFilter::parse(Some("online")), StoreFilter::Online);
        assert_eq!(
            StoreFilter::parse(Some("s-9")),
            StoreFilter::Store("s-9".to_string())
        );
    }
}
