//! Domain models with validation at construction
//!
//! Request payloads are deserialized loosely and then validated into
//! `New*` types before any query runs. Invalid input returns
//! `ValidationError`, never a panic.

pub mod todo;
pub mod user;
pub mod validation;

pub use todo::{NewTodo, Todo, TodoPayload};
pub use user::{NewUser, User, UserPayload};
pub use validation::ValidationError;
