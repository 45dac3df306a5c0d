//! User rows and create/update payloads

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::validation::required_text;
use super::ValidationError;

/// Matches `name VARCHAR(100)`
pub const MAX_NAME_LEN: usize = 100;

/// Matches `email VARCHAR(100)`
pub const MAX_EMAIL_LEN: usize = 100;

/// User record from database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub age: Option<i32>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Request body for creating or replacing a user.
///
/// Fields are optional here so that a missing field becomes a 400 with a
/// readable message instead of a JSON rejection. `Name`/`Email` are
/// accepted for older clients.
#[derive(Debug, Default, Deserialize)]
pub struct UserPayload {
    #[serde(default, alias = "Name")]
    pub name: Option<String>,
    #[serde(default, alias = "Email")]
    pub email: Option<String>,
}

/// Validated user fields, ready to insert or overwrite
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

impl NewUser {
    /// Validate both fields. Updates are full overwrites, so creation and
    /// update share the same rules.
    ///
    /// # Example
    /// ```
    /// use taskdeck_server::models::NewUser;
    ///
    /// assert!(NewUser::new(Some("Ana".into()), Some("ana@x.com".into())).is_ok());
    /// assert!(NewUser::new(Some("Ana".into()), None).is_err());
    /// ```
    pub fn new(name: Option<String>, email: Option<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: required_text("name", name, MAX_NAME_LEN)?,
            email: required_text("email", email, MAX_EMAIL_LEN)?,
        })
    }
}

impl TryFrom<UserPayload> for NewUser {
    type Error = ValidationError;

    fn try_from(payload: UserPayload) -> Result<Self, Self::Error> {
        Self::new(payload.name, payload.email)
    }
}
