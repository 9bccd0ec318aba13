//! API request and response types
//!
//! Field names follow the gateway's camelCase wire format.

use crate::menu::SessionStatus;
use crate::session::SessionRecord;
use serde::{Deserialize, Serialize};

/// One gateway callback
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UssdRequest {
    pub session_id: String,
    /// Carried for logging only
    #[serde(default)]
    pub phone_number: String,
    pub service_code: String,
    #[serde(default)]
    pub text: String,
}

/// Reply shown on the handset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UssdResponse {
    pub status: SessionStatus,
    pub message: String,
}

/// Response with the live sessions
#[derive(Debug, Serialize)]
pub struct SessionListResponse {
    pub sessions: Vec<SessionRecord>,
}

/// Menu parameters the browser emulator needs
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigResponse {
    pub entry_code: String,
}

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_uses_camel_case() {
        let req: UssdRequest = serde_json::from_value(json!({
            "sessionId": "abc",
            "phoneNumber": "243812345678",
            "serviceCode": "*123#",
            "text": "2"
        }))
        .unwrap();
        assert_eq!(req.session_id, "abc");
        assert_eq!(req.service_code, "*123#");
        assert_eq!(req.text, "2");
    }

    #[test]
    fn test_missing_text_defaults_to_empty() {
        let req: UssdRequest = serde_json::from_value(json!({
            "sessionId": "abc",
            "serviceCode": "*123#"
        }))
        .unwrap();
        assert_eq!(req.text, "");
        assert_eq!(req.phone_number, "");
    }

    #[test]
    fn test_response_wire_shape() {
        let resp = UssdResponse {
            status: SessionStatus::End,
            message: "bye".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&resp).unwrap(),
            json!({ "status": "END", "message": "bye" })
        );
    }
}
