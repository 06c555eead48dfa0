//! Order board - status classification and kanban aggregation

pub mod classifier;
pub mod kanban;

pub use classifier::{ATTENTION_AGE_MINUTES, Classification, classify, needs_attention};
pub use kanban::{BoardCard, BoardFilter, KanbanBoard, StoreFilter, build_board};
