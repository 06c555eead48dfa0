//! Shared types for the Comanda platform
//!
//! Pure data contracts used by the server and any future clients:
//! the order model and its lifecycle status, floor plan entities,
//! promotion sum types, loyalty progress, the soft plate-number join
//! key, and fixed-point money helpers. No I/O lives here.

pub mod models;
pub mod money;
pub mod order;
pub mod plate;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use order::{AppliedDiscount, CartLineInput, Order, OrderItem, OrderStatus, SelectedModifier};
pub use plate::PlateKey;
