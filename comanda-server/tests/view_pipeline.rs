//! End-to-end tests of the view pipeline: orders flow through the hub
//! and every derived view (board, floor plan, prep) reflects the same
//! snapshot. No database - the pipeline is pure on purpose.

use comanda_server::board::{BoardFilter, build_board};
use comanda_server::floor::{TableStatus, resolve_floor_plan};
use comanda_server::orders::{OrderHub, plan_table_completion};
use comanda_server::prep::aggregate_prep;
use shared::models::{FloorPlanTable, MenuItem, RecipeLine, TableHint, TableShape};
use shared::{Order, OrderItem, OrderStatus};

const NOW: i64 = 10_000_000_000;

fn make_order(id: &str, plate: Option<&str>, status: OrderStatus, created_at: i64) -> Order {
    Order {
        order_id: id.to_string(),
        tenant_id: "t-1".to_string(),
        items: vec![OrderItem {
            menu_item_id: "mi-burger".to_string(),
            name: "Burger".to_string(),
            quantity: 2,
            price: 9.5,
            selected_modifiers: vec![],
            is_delivered: false,
            notes: None,
        }],
        status,
        plate_number: plate.map(String::from),
        store_id: None,
        subtotal: 19.0,
        tip: 0.0,
        platform_fee: 0.0,
        total: 19.0,
        applied_discounts: vec![],
        created_at,
        is_urgent: false,
        customer_phone_number: None,
    }
}

fn make_table(label: &str) -> FloorPlanTable {
    FloorPlanTable {
        table_id: format!("tbl-{}", label),
        tenant_id: "t-1".to_string(),
        label: label.to_string(),
        x: 0,
        y: 0,
        width: 4,
        height: 4,
        rotation: 0,
        shape: TableShape::Rectangle,
        hint: TableHint::Available,
    }
}

#[test]
fn views_share_one_snapshot() {
    let hub = OrderHub::new();
    hub.apply(make_order("o-1", Some("A1"), OrderStatus::New, NOW - 1000));
    hub.apply(make_order("o-2", Some("A1"), OrderStatus::Ready, NOW - 2000));
    hub.apply(make_order("o-3", None, OrderStatus::InProgress, NOW - 3000));

    let snapshot = hub.snapshot("t-1");

    let board = build_board(&snapshot, &BoardFilter::default(), NOW);
    assert_eq!(board.new.len(), 1);
    assert_eq!(board.ready.len(), 1);
    assert_eq!(board.in_progress.len(), 1);

    let floor = resolve_floor_plan(&[make_table("A1")], &snapshot, NOW);
    assert_eq!(floor.tables[0].status, TableStatus::Ordered);
    assert_eq!(floor.tables[0].orders.len(), 2);

    let prep = aggregate_prep(&snapshot);
    // Identical burger lines across all three orders collapse into one
    assert_eq!(prep.len(), 1);
    assert_eq!(prep[0].total_quantity, 6);
    assert_eq!(prep[0].contributors.len(), 3);
}

#[test]
fn completing_a_table_empties_its_views() {
    let hub = OrderHub::new();
    hub.apply(make_order("o-1", Some("A1"), OrderStatus::Ready, NOW - 1000));
    hub.apply(make_order("o-2", Some("A1"), OrderStatus::Ready, NOW - 2000));

    let menu = vec![MenuItem {
        menu_item_id: "mi-burger".to_string(),
        tenant_id: "t-1".to_string(),
        name: "Burger".to_string(),
        price: 9.5,
        recipe: vec![RecipeLine {
            ingredient_id: "ing-bun".to_string(),
            quantity: 1.0,
        }],
        is_available: true,
    }];

    let snapshot = hub.snapshot("t-1");
    let plan = plan_table_completion("tbl-A1", "A1", &snapshot, &menu);
    assert_eq!(plan.order_ids.len(), 2);
    // 2 orders x 2 burgers x 1 bun
    assert_eq!(plan.stock_decrements[0].quantity, 4.0);

    // Simulate the committed batch: only then does the hub change
    for order_id in &plan.order_ids {
        let mut order = hub.get("t-1", order_id).unwrap();
        order.status = OrderStatus::Completed;
        hub.apply(order);
    }

    let snapshot = hub.snapshot("t-1");
    assert!(snapshot.is_empty());
    assert!(aggregate_prep(&snapshot).is_empty());
    let floor = resolve_floor_plan(&[make_table("A1")], &snapshot, NOW);
    assert_eq!(floor.tables[0].status, TableStatus::Available);
    assert_eq!(hub.recent_completed("t-1").len(), 2);
}

#[test]
fn failed_batch_leaves_no_partial_state() {
    let hub = OrderHub::new();
    hub.apply(make_order("o-1", Some("A1"), OrderStatus::Ready, NOW - 1000));
    hub.apply(make_order("o-2", Some("A1"), OrderStatus::Ready, NOW - 2000));

    let snapshot_before = hub.snapshot("t-1");
    let plan = plan_table_completion("tbl-A1", "A1", &snapshot_before, &[]);

    // The store rejected the batch: the hub is not touched, so every
    // view still sees both orders unchanged
    let batch_result: Result<(), &str> = Err("simulated store failure");
    if batch_result.is_ok() {
        for order_id in &plan.order_ids {
            let mut order = hub.get("t-1", order_id).unwrap();
            order.status = OrderStatus::Completed;
            hub.apply(order);
        }
    }

    let snapshot_after = hub.snapshot("t-1");
    assert_eq!(snapshot_before, snapshot_after);
    let board = build_board(&snapshot_after, &BoardFilter::default(), NOW);
    assert_eq!(board.ready.len(), 2);
    assert!(hub.recent_completed("t-1").is_empty());
}

#[test]
fn recall_returns_an_order_to_the_board() {
    let hub = OrderHub::new();
    let mut order = make_order("o-1", Some("A1"), OrderStatus::Ready, NOW);

    order.status = OrderStatus::Completed;
    hub.apply(order.clone());
    assert!(hub.snapshot("t-1").is_empty());

    assert!(order.status.can_transition_to(OrderStatus::Ready));
    order.status = OrderStatus::Ready;
    hub.apply(order);

    let board = build_board(&hub.snapshot("t-1"), &BoardFilter::default(), NOW);
    assert_eq!(board.ready.len(), 1);
}
