//! TodoService: SQL for the `todos` table, plus request validation.

mod todo;
mod validation;
pub use todo::TodoService;
pub use validation::RequestValidator;
