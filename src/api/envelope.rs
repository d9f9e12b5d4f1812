//! JSON-RPC 2.0 response envelope builders.
//!
//! Every response carries exactly one of `result` or `error`. Identifiers
//! inside a success result (task id, context id, message ids, artifact id)
//! are freshly generated v4 UUIDs, unique within each response.

use chrono::Utc;
use serde_json::{Value, json};
use uuid::Uuid;

/// JSON-RPC error code: request envelope malformed.
pub const INVALID_REQUEST: i64 = -32600;
/// JSON-RPC error code: invalid or missing params.
pub const INVALID_PARAMS: i64 = -32602;
/// JSON-RPC error code: internal error.
pub const INTERNAL_ERROR: i64 = -32603;

/// Build a success envelope wrapping `result`, echoing the request `id`.
#[must_use]
pub fn result_envelope(id: &Value, result: Value) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "result": result,
    })
}

/// Build an error envelope. `id` echoes the request id when it is known,
/// `Value::Null` otherwise. `details` lands in `error.data.details`.
#[must_use]
pub fn error_envelope(id: &Value, code: i64, message: &str, details: Option<&str>) -> Value {
    let mut error = json!({
        "code": code,
        "message": message,
    });
    if let Some(details) = details {
        error["data"] = json!({ "details": details });
    }

    json!({
        "jsonrpc": "2.0",
        "id": id,
        "error": error,
    })
}

/// Build the task-shaped result object for a completed web summarization.
///
/// Carries a completion status with an RFC 3339 timestamp, an agent message
/// with the summary, one text artifact named `webSummary`, and a two-entry
/// history echoing the user request and the agent reply.
#[must_use]
pub fn task_result(url: &str, summary: &str) -> Value {
    let artifacts = json!([
        {
            "artifactId": Uuid::new_v4(),
            "name": "webSummary",
            "parts": [{ "kind": "text", "text": summary }],
        }
    ]);

    json!({
        "id": Uuid::new_v4(),
        "contextId": Uuid::new_v4(),
        "status": {
            "state": "completed",
            "timestamp": Utc::now().to_rfc3339(),
            "message": {
                "kind": "message",
                "messageId": Uuid::new_v4(),
                "role": "agent",
                "parts": [{ "kind": "text", "text": summary }],
            },
        },
        "artifacts": artifacts,
        "history": [
            {
                "kind": "message",
                "role": "user",
                "parts": [{ "kind": "text", "text": format!("Summarize this URL: {}", url) }],
                "messageId": Uuid::new_v4(),
                "taskId": Uuid::new_v4(),
            },
            {
                "kind": "message",
                "role": "agent",
                "parts": [{ "kind": "text", "text": summary }],
                "messageId": Uuid::new_v4(),
                "taskId": Uuid::new_v4(),
            },
        ],
        "kind": "task",
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn envelopes_carry_exactly_one_of_result_or_error() {
        let ok = result_envelope(&json!(1), json!({"x": 1}));
        assert!(ok.get("result").is_some());
        assert!(ok.get("error").is_none());

        let err = error_envelope(&json!(1), INVALID_REQUEST, "Invalid Request", None);
        assert!(err.get("error").is_some());
        assert!(err.get("result").is_none());
        assert_eq!(err["error"]["code"], json!(INVALID_REQUEST));
        assert!(err["error"].get("data").is_none());
    }

    #[test]
    fn error_details_land_in_data() {
        let err = error_envelope(&Value::Null, INTERNAL_ERROR, "Internal error", Some("boom"));
        assert_eq!(err["error"]["data"]["details"], json!("boom"));
        assert!(err["id"].is_null());
    }

    #[test]
    fn task_result_shape() {
        let task = task_result("https://example.com/", "a summary");

        assert_eq!(task["kind"], json!("task"));
        assert_eq!(task["status"]["state"], json!("completed"));
        assert_eq!(task["artifacts"].as_array().unwrap().len(), 1);
        assert_eq!(task["artifacts"][0]["name"], json!("webSummary"));
        assert_eq!(
            task["artifacts"][0]["parts"][0]["text"],
            json!("a summary")
        );

        let history = task["history"].as_array().unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0]["role"], json!("user"));
        assert_eq!(
            history[0]["parts"][0]["text"],
            json!("Summarize this URL: https://example.com/")
        );
        assert_eq!(history[1]["role"], json!("agent"));
    }

    #[test]
    fn task_result_identifiers_are_unique_per_response() {
        let task = task_result("https://example.com/", "s");

        let ids: Vec<&str> = [
            task["id"].as_str().unwrap(),
            task["contextId"].as_str().unwrap(),
            task["status"]["message"]["messageId"].as_str().unwrap(),
            task["artifacts"][0]["artifactId"].as_str().unwrap(),
            task["history"][0]["messageId"].as_str().unwrap(),
            task["history"][1]["messageId"].as_str().unwrap(),
        ]
        .to_vec();

        let unique: HashSet<&str> = ids.iter().copied().collect();
        assert_eq!(unique.len(), ids.len(), "identifiers must not repeat");
    }
}
