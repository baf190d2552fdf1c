//! TODO API: REST CRUD over a single `todos` table in SQLite.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::Settings;
pub use error::{AppError, ConfigError};
pub use migration::apply_migrations;
pub use model::Todo;
pub use routes::{app, ops_routes, todo_routes};
pub use service::TodoService;
pub use state::AppState;
