//! Core module - configuration, state, server

pub mod config;
pub mod events;
pub mod server;
pub mod state;

pub use config::Config;
pub use events::{ChangeAction, ChangeEvent};
pub use server::Server;
pub use state::ServerState;
