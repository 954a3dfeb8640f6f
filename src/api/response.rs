//! # Response Formatting
//!
//! Confirmation response type for mutating endpoints. List and get
//! endpoints serialize the store's record types directly, so the only
//! wrapper needed here is the confirmation message.

use serde::Serialize;

/// Confirmation message response
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_response_serialization() {
        let response = MessageResponse::new("city added");
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["message"], "city added");
    }
}
