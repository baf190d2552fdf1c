//! HTTP handlers for the `/todos` resource.

pub mod todo;
pub use todo::*;
