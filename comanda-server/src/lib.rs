//! Comanda Server - multi-tenant restaurant ordering backend
//!
//! # Architecture
//!
//! The server turns a stream of order mutations into live operational
//! views: a kanban board for order lifecycle, a floor-plan occupancy
//! map, and a prep-station aggregate. Persistence is an embedded
//! document store; every mutation publishes a change event through the
//! in-memory order hub, and all views are pure functions over the hub's
//! active-order snapshot.
//!
//! # Module structure
//!
//! ```text
//! comanda-server/src/
//! ├── core/          # Config, state, server
//! ├── auth/          # JWT verification, staff roles
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # SurrealDB repositories
//! ├── orders/        # Order hub and actions (checkout, transitions, completion)
//! ├── board/         # Status classifier + kanban aggregation
//! ├── floor/         # Floor-plan occupancy resolution
//! ├── prep/          # Prep-station aggregation
//! ├── promotions/    # Discount evaluation + loyalty accrual
//! └── utils/         # Errors, logging, time
//! ```

pub mod api;
pub mod auth;
pub mod board;
pub mod core;
pub mod db;
pub mod floor;
pub mod orders;
pub mod prep;
pub mod promotions;
pub mod utils;

// Re-export public types
pub use auth::{CurrentUser, JwtService, Role};
pub use core::{ChangeAction, ChangeEvent, Config, Server, ServerState};
pub use orders::OrderHub;
pub use utils::{AppError, AppResult};
pub use utils::logger::{init_logger, init_logger_with_file};

pub fn print_banner() {
    println!(
        r#"
   ______                                 __
  / ____/___  ____ ___  ____ _____  ____/ /___ _
 / /   / __ \/ __ `__ \/ __ `/ __ \/ __  / __ `/
/ /___/ /_/ / / / / / / /_/ / / / / /_/ / /_/ /
\____/\____/_/ /_/ /_/\__,_/_/ /_/\__,_/\__,_/
    "#
    );
}
