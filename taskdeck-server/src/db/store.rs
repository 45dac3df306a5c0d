//! Persistence seam for route handlers

use async_trait::async_trait;

use super::DbError;
use crate::models::{NewTodo, NewUser, Todo, User};

/// One method per route operation; each maps to a single statement.
///
/// `PgStore` is the production backend. `MemoryStore` honors the same
/// constraints in process for tests.
#[async_trait]
pub trait Store: Send + Sync + 'static {
    /// Cheap round-trip used by the health check.
    async fn ping(&self) -> Result<(), DbError>;

    /// Insert a user. Duplicate email yields `DbError::UniqueViolation`.
    async fn create_user(&self, user: &NewUser) -> Result<User, DbError>;

    /// All users, unordered.
    async fn list_users(&self) -> Result<Vec<User>, DbError>;

    async fn get_user(&self, id: i32) -> Result<User, DbError>;

    /// Overwrite name and email.
    async fn update_user(&self, id: i32, user: &NewUser) -> Result<User, DbError>;

    /// Remove a user and, by cascade, their todos.
    async fn delete_user(&self, id: i32) -> Result<(), DbError>;

    /// Insert a todo. Unknown owner yields `DbError::ForeignKeyViolation`.
    async fn create_todo(&self, todo: &NewTodo) -> Result<Todo, DbError>;

    /// All todos, unordered.
    async fn list_todos(&self) -> Result<Vec<Todo>, DbError>;
}
