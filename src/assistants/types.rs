// Per-turn request/response value types

use chrono::{DateTime, Local};

/// One user turn: raw text, capture time, and the normalized command.
/// Constructed fresh per turn and consumed once by a persona.
#[derive(Debug, Clone)]
pub struct Request {
    pub text: String,
    pub timestamp: DateTime<Local>,
    pub command: String,
}

impl Request {
    pub fn new(text: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            timestamp: Local::now(),
            command: command.into(),
        }
    }
}

/// A persona's reply, consumed once by the display layer.
#[derive(Debug, Clone)]
pub struct Response {
    pub message: String,
}

impl Response {
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
    fn test_request_carries_command() {
        let request = Request::new("play music", "play music");
        assert_eq!(request.text, "play music");
        assert_eq!(request.command, "play music");
    }

    #[test]
    fn test_response_wraps_message() {
        let response = Response::new("hello");
        assert_eq!(response.message, "hello");
    }
}
