//! Todo rows and create payload

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::validation::required_text;
use super::ValidationError;

/// Matches `title VARCHAR(200)`
pub const MAX_TITLE_LEN: usize = 200;

/// Todo record from database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Todo {
    pub id: i32,
    pub user_id: Option<i32>,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    pub due_date: Option<NaiveDate>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Request body for creating a todo
#[derive(Debug, Default, Deserialize)]
pub struct TodoPayload {
    #[serde(default)]
    pub user_id: Option<i32>,
    #[serde(default)]
    pub title: Option<String>,
}

/// Validated todo fields.
///
/// `user_id` is not checked against the users table here; the foreign key
/// rejects unknown owners at insert time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    pub user_id: Option<i32>,
    pub title: String,
}

impl NewTodo {
    pub fn new(user_id: Option<i32>, title: Option<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            user_id,
            title: required_text("title", title, MAX_TITLE_LEN)?,
        })
    }
}

impl TryFrom<TodoPayload> for NewTodo {
    type Error = ValidationError;

    fn try_from(payload: TodoPayload) -> Result<Self, Self::Error> {
        Self::new(payload.user_id, payload.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_is_optional() {
        let payload: TodoPayload = serde_json::from_str(r#"{"title":"Buy milk"}"#).unwrap();
        let todo = NewTodo::try_from(payload).unwrap();
        assert_eq!(todo.user_id, None);
        assert_eq!(todo.title, "Buy milk");
    }

    #[test]
    fn blank_title_rejected() {
        let err = NewTodo::new(Some(1), Some("  ".into())).unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "title" });
    }

    #[test]
    fn non_integer_user_id_fails_to_parse() {
        let result: Result<TodoPayload, _> =
            serde_json::from_str(r#"{"user_id":"one","title":"x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn due_date_serializes_as_calendar_date() {
        let ts = NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let todo = Todo {
            id: 7,
            user_id: Some(1),
            title: "Ship".into(),
            description: None,
            completed: false,
            due_date: NaiveDate::from_ymd_opt(2024, 5, 31),
            created_at: ts,
            updated_at: ts,
        };

        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["due_date"], "2024-05-31");
        assert_eq!(json["completed"], false);
    }
}
