//! PostgreSQL store
//!
//! Each method is one parameterized statement on a pooled connection.
//! The connection returns to the pool when the statement completes.

use async_trait::async_trait;
use sqlx::PgPool;

use super::{DbError, Store};
use crate::models::{NewTodo, NewUser, Todo, User};

const USER_COLUMNS: &str = "id, name, email, age, phone, address, created_at, updated_at";

const TODO_COLUMNS: &str =
    "id, user_id, title, description, completed, due_date, created_at, updated_at";

/// Store backed by a shared `PgPool`
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Store for PgStore {
    async fn ping(&self) -> Result<(), DbError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn create_user(&self, user: &NewUser) -> Result<User, DbError> {
        let sql = format!(
            "INSERT INTO users (name, email) VALUES ($1, $2) RETURNING {USER_COLUMNS}"
        );
        let created = sqlx::query_as::<_, User>(&sql)
            .bind(&user.name)
            .bind(&user.email)
            .fetch_one(&self.pool)
            .await?;

        Ok(created)
    }

    async fn list_users(&self) -> Result<Vec<User>, DbError> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users");
        let users = sqlx::query_as::<_, User>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(users)
    }

    async fn get_user(&self, id: i32) -> Result<User, DbError> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DbError::not_found("user", id))
    }

    async fn update_user(&self, id: i32, user: &NewUser) -> Result<User, DbError> {
        let sql = format!(
            r#"
            UPDATE users
            SET name = $1, email = $2, updated_at = NOW()
            WHERE id = $3
            RETURNING {USER_COLUMNS}
            "#
        );
        sqlx::query_as::<_, User>(&sql)
            .bind(&user.name)
            .bind(&user.email)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DbError::not_found("user", id))
    }

    async fn delete_user(&self, id: i32) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("user", id));
        }
        Ok(())
    }

    async fn create_todo(&self, todo: &NewTodo) -> Result<Todo, DbError> {
        let sql = format!(
            "INSERT INTO todos (user_id, title) VALUES ($1, $2) RETURNING {TODO_COLUMNS}"
        );
        let created = sqlx::query_as::<_, Todo>(&sql)
            .bind(todo.user_id)
            .bind(&todo.title)
            .fetch_one(&self.pool)
            .await?;

        Ok(created)
    }

    async fn list_todos(&self) -> Result<Vec<Todo>, DbError> {
        let sql = format!("SELECT {TODO_COLUMNS} FROM todos");
        let todos = sqlx::query_as::<_, Todo>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(todos)
    }
}
