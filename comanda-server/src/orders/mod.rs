//! Order lifecycle - hub and actions
//!
//! The hub holds the active order set and fans out change events; the
//! action modules validate and execute the staff/customer mutations
//! (checkout, approval, status moves, delivery toggles, batch table
//! completion).

pub mod checkout;
pub mod complete_table;
pub mod hub;
pub mod transition;

pub use checkout::{CheckoutRequest, build_order};
pub use complete_table::{
    CompletionPlan, StockDecrement, plan_order_completion, plan_table_completion,
};
pub use hub::OrderHub;
pub use transition::validate_move;
