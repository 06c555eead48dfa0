//! Order model and lifecycle status

pub mod status;
pub mod types;

pub use status::OrderStatus;
pub use types::{AppliedDiscount, CartLineInput, Order, OrderItem, SelectedModifier};
