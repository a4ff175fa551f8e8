//! JSON response envelope.
//!
//! Every response carries `{status, data? | message?}` where `status` is
//! `"success"` on 2xx, `"fail"` on 4xx, and `"error"` on 5xx.

use axum::Json;
use serde::Serialize;

/// The response envelope body.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// A successful response carrying data.
pub fn success<T: Serialize>(data: T) -> Json<Envelope<T>> {
    Json(Envelope {
        status: "success",
        data: Some(data),
        message: None,
    })
}

/// A successful response carrying only a human-readable message.
pub fn success_message(message: impl Into<String>) -> Json<Envelope<()>> {
    Json(Envelope {
        status: "success",
        data: None,
        message: Some(message.into()),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_success_shape() {
        let Json(body) = success(serde_json::json!({"token": "abc"}));
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["status"], "success");
        assert_eq!(json["data"]["token"], "abc");
        assert!(json.get("message").is_none());
    }

    #[test]
    fn test_message_shape() {
        let Json(body) = success_message("done");
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["status"], "success");
        assert_eq!(json["message"], "done");
        assert!(json.get("data").is_none());
    }
}
