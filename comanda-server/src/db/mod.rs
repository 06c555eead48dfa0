//! Database Module
//!
//! Embedded SurrealDB storage behind per-collection repositories. The
//! engine supplies the platform guarantees the application relies on:
//! per-document last-write-wins merges, multi-statement atomic
//! transactions (table completion, loyalty upsert) and in-place
//! numeric increments (stock, points).

pub mod repository;
