//! Response envelope shared by every JSON route

use serde::{Deserialize, Serialize};

/// `{success, message, data?, details?, path?}`; absent fields are omitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl<T> Envelope<T> {
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
            details: None,
            path: None,
        }
    }
}

impl Envelope<()> {
    /// Success without a payload (e.g. after a delete)
    pub fn done(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: None,
            details: None,
            path: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
            details: None,
            path: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn optional_fields_are_omitted() {
        let body = serde_json::to_value(Envelope::done("User deleted successfully")).unwrap();
        assert_eq!(
            body,
            json!({"success": true, "message": "User deleted successfully"})
        );
    }

    #[test]
    fn failure_carries_path() {
        let body =
            serde_json::to_value(Envelope::failure("Route not found").with_path("/nope")).unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["path"], "/nope");
        assert!(body.get("data").is_none());
    }
}
