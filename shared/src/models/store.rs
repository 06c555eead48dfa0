//! Store Model

use serde::{Deserialize, Serialize};

/// A physical store location of a tenant. Orders without a store
/// reference are online orders.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Store {
    pub store_id: String,
    pub tenant_id: String,
    pub name: String,
}

/// Create store payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreCreate {
    pub name: String,
}
