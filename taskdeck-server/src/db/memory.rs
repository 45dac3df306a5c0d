//! In-memory store for tests and local experiments
//!
//! Mirrors the PostgreSQL constraints the handlers depend on: unique
//! email, owner foreign key and cascading delete. Each call holds the
//! lock for its whole body, like a single statement.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{NaiveDateTime, Utc};
use tokio::sync::RwLock;

use super::{DbError, Store};
use crate::models::{NewTodo, NewUser, Todo, User};

const USERS_EMAIL_KEY: &str = "users_email_key";
const TODOS_USER_ID_FKEY: &str = "todos_user_id_fkey";

/// Store holding both tables in process memory
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

#[derive(Default)]
struct Tables {
    users: BTreeMap<i32, User>,
    todos: BTreeMap<i32, Todo>,
    user_seq: i32,
    todo_seq: i32,
}

impl Tables {
    fn email_taken(&self, email: &str, except: Option<i32>) -> bool {
        self.users
            .values()
            .any(|u| u.email == email && Some(u.id) != except)
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

fn email_conflict() -> DbError {
    DbError::UniqueViolation {
        constraint: USERS_EMAIL_KEY.to_owned(),
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn ping(&self) -> Result<(), DbError> {
        Ok(())
    }

    async fn create_user(&self, user: &NewUser) -> Result<User, DbError> {
        let mut tables = self.tables.write().await;
        if tables.email_taken(&user.email, None) {
            return Err(email_conflict());
        }

        tables.user_seq += 1;
        let ts = now();
        let created = User {
            id: tables.user_seq,
            name: user.name.clone(),
            email: user.email.clone(),
            age: None,
            phone: None,
            address: None,
            created_at: ts,
            updated_at: ts,
        };
        tables.users.insert(created.id, created.clone());
        Ok(created)
    }

    async fn list_users(&self) -> Result<Vec<User>, DbError> {
        Ok(self.tables.read().await.users.values().cloned().collect())
    }

    async fn get_user(&self, id: i32) -> Result<User, DbError> {
        self.tables
            .read()
            .await
            .users
            .get(&id)
            .cloned()
            .ok_or_else(|| DbError::not_found("user", id))
    }

    async fn update_user(&self, id: i32, user: &NewUser) -> Result<User, DbError> {
        let mut tables = self.tables.write().await;
        if !tables.users.contains_key(&id) {
            return Err(DbError::not_found("user", id));
        }
        if tables.email_taken(&user.email, Some(id)) {
            return Err(email_conflict());
        }

        let row = tables
            .users
            .get_mut(&id)
            .ok_or_else(|| DbError::not_found("user", id))?;
        row.name = user.name.clone();
        row.email = user.email.clone();
        row.updated_at = now();
        Ok(row.clone())
    }

    async fn delete_user(&self, id: i32) -> Result<(), DbError> {
        let mut tables = self.tables.write().await;
        if tables.users.remove(&id).is_none() {
            return Err(DbError::not_found("user", id));
        }
        tables.todos.retain(|_, t| t.user_id != Some(id));
        Ok(())
    }

    async fn create_todo(&self, todo: &NewTodo) -> Result<Todo, DbError> {
        let mut tables = self.tables.write().await;
        if let Some(owner) = todo.user_id {
            if !tables.users.contains_key(&owner) {
                return Err(DbError::ForeignKeyViolation {
                    constraint: TODOS_USER_ID_FKEY.to_owned(),
                });
            }
        }

        tables.todo_seq += 1;
        let ts = now();
        let created = Todo {
            id: tables.todo_seq,
            user_id: todo.user_id,
            title: todo.title.clone(),
            description: None,
            completed: false,
            due_date: None,
            created_at: ts,
            updated_at: ts,
        };
        tables.todos.insert(created.id, created.clone());
        Ok(created)
    }

    async fn list_todos(&self) -> Result<Vec<Todo>, DbError> {
        Ok(self.tables.read().await.todos.values().cloned().collect())
    }
}
