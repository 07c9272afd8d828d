use serde::{Deserialize, Serialize};

use crate::{domain::SentimentResult, error::ApiError, gauge::GaugeFigure};

/// Frames the page sends over `/ws`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum ClientMessage {
    InputChanged { text: String },
}

/// Frames the server pushes back over `/ws`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum ServerMessage {
    Computing,
    GaugeUpdated {
        result: SentimentResult,
        figure: GaugeFigure,
        svg: String,
    },
    Error {
        error: ApiError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn client_message_uses_tagged_wire_shape() {
        let raw = r#"{"type":"input_changed","payload":{"text":"I love this!"}}"#;
        let message: ClientMessage = serde_json::from_str(raw).expect("decode");
        assert_eq!(
            message,
            ClientMessage::InputChanged {
                text: "I love this!".into()
            }
        );
    }

    #[test]
    fn unit_server_message_has_no_payload() {
        let json = serde_json::to_value(ServerMessage::Computing).expect("json");
        assert_eq!(json, serde_json::json!({ "type": "computing" }));
    }

    #[test]
    fn error_message_carries_code() {
        let json = serde_json::to_value(ServerMessage::Error {
            error: ApiError::new(ErrorCode::Validation, "bad"),
        })
        .expect("json");
        assert_eq!(json["type"], "error");
        assert_eq!(json["payload"]["error"]["code"], "validation");
    }
}
