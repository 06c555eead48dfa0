//! Change events - the fan-out side of the live pipeline
//!
//! Every successful mutation publishes one `ChangeEvent` describing
//! which document changed. Subscribers (the SSE stream, any future
//! push channel) re-derive their views from the hub snapshot rather
//! than patching state incrementally, so a lost event at worst delays
//! a refresh.

use serde::{Deserialize, Serialize};

/// What happened to the document
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChangeAction {
    Created,
    Updated,
    Deleted,
}

/// Collection-change notification
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChangeEvent {
    /// Tenant the change belongs to
    pub tenant_id: String,
    /// Resource kind, e.g. "order", "table", "promotion"
    pub resource: String,
    pub action: ChangeAction,
    /// Domain id of the changed document
    pub id: String,
}

impl ChangeEvent {
    pub fn new(
        tenant_id: impl Into<String>,
        resource: impl Into<String>,
        action: ChangeAction,
        id: impl Into<String>,
    ) -> Self {
        Self {
            tenant_id: tenant_id.into(),
            resource: resource.into(),
            action,
            id: id.into(),
        }
    }
}
