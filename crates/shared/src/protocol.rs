//! Peer and relay message formats
//!
//! Everything on the wire is one JSON object per line, discriminated by a
//! `"type"` field.
//!
//! Peer messages travel between the two players:
//!
//! ```json
//! {"type":"init","hostColor":"white"}
//! {"type":"move","move":{"from":12,"to":28,"double":true}}
//! {"type":"resign"}
//! {"type":"rematch"}
//! ```
//!
//! Relay frames are exchanged with the matchmaking relay before the two
//! connections are paired; after `paired` the relay forwards peer messages
//! verbatim.

use chess_engine::{Color, Move};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::ProtocolError;

/// Message exchanged between the two players of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PeerMessage {
    /// Host to guest once the link opens; the guest plays the other color
    Init {
        #[serde(rename = "hostColor")]
        host_color: Color,
    },
    Move {
        #[serde(rename = "move")]
        mv: Move,
    },
    Resign,
    Rematch,
}

/// First line a client sends to the relay
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RelayHello {
    Host { code: String },
    Join { code: String },
}

impl RelayHello {
    pub fn code(&self) -> &str {
        match self {
            RelayHello::Host { code } | RelayHello::Join { code } => code,
        }
    }
}

/// Relay answers to a hello
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RelayReply {
    /// Host registered, no guest yet
    Waiting,
    /// Both sides connected; peer traffic follows
    Paired,
    Rejected { reason: RejectReason },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    RoomNotFound,
    CodeInUse,
    InvalidCode,
}

/// Serialize `value` as one newline-terminated line
pub fn encode_line<T: Serialize>(value: &T) -> Result<String, ProtocolError> {
    let mut line = serde_json::to_string(value)?;
    line.push('\n');
    Ok(line)
}

/// Parse one line, ignoring surrounding whitespace
pub fn decode_line<T: DeserializeOwned>(line: &str) -> Result<T, ProtocolError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(ProtocolError::EmptyLine);
    }
    Ok(serde_json::from_str(line)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_engine::CastleSide;

    #[test]
    fn test_init_uses_camel_case_host_color() {
        let line = encode_line(&PeerMessage::Init {
            host_color: Color::Black,
        })
        .unwrap();
        assert_eq!(line, "{\"type\":\"init\",\"hostColor\":\"black\"}\n");
    }

    #[test]
    fn test_move_message_shape() {
        let msg = PeerMessage::Move {
            mv: Move::double_push(12, 28),
        };
        let json = serde_json::to_string(&msg).unwrap();
        assert_eq!(json, r#"{"type":"move","move":{"from":12,"to":28,"double":true}}"#);
    }

    #[test]
    fn test_control_messages_have_no_payload() {
        assert_eq!(serde_json::to_string(&PeerMessage::Resign).unwrap(), r#"{"type":"resign"}"#);
        assert_eq!(serde_json::to_string(&PeerMessage::Rematch).unwrap(), r#"{"type":"rematch"}"#);
    }

    #[test]
    fn test_decode_castle_move_from_peer() {
        let msg: PeerMessage =
            decode_line(r#" {"type":"move","move":{"from":60,"to":62,"castle":"kingside"}} "#).unwrap();
        let mut expected = Move::new(60, 62);
        expected.castle = Some(CastleSide::Kingside);
        assert_eq!(msg, PeerMessage::Move { mv: expected });
    }

    #[test]
    fn test_decode_rejects_unknown_type() {
        assert!(decode_line::<PeerMessage>(r#"{"type":"chat","text":"hi"}"#).is_err());
        assert!(matches!(
            decode_line::<PeerMessage>("   "),
            Err(ProtocolError::EmptyLine)
        ));
    }

    #[test]
    fn test_relay_frames() {
        let hello = RelayHello::Join {
            code: "ABC234".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&hello).unwrap(),
            r#"{"type":"join","code":"ABC234"}"#
        );
        assert_eq!(hello.code(), "ABC234");

        let reply = RelayReply::Rejected {
            reason: RejectReason::RoomNotFound,
        };
        assert_eq!(
            serde_json::to_string(&reply).unwrap(),
            r#"{"type":"rejected","reason":"room_not_found"}"#
        );
        assert_eq!(decode_line::<RelayReply>(r#"{"type":"paired"}"#).unwrap(), RelayReply::Paired);
    }
}
