//! In-process channel pair
//!
//! Messages are encoded to the same JSON lines the TCP transport sends, so a
//! loopback game exercises the real wire format.

use crossbeam_channel::{unbounded, Receiver, Sender, TryRecvError};
use shared::protocol::{decode_line, encode_line};
use shared::PeerMessage;
use tracing::warn;

use super::channel::{ChannelEvent, PeerChannel};
use super::error::{SessionError, SessionResult};

pub struct LoopbackChannel {
    outgoing: Option<Sender<String>>,
    incoming: Receiver<String>,
    opened: bool,
    closed: bool,
}

impl LoopbackChannel {
    /// Two connected ends; each reports `Open` on its first poll
    pub fn pair() -> (Self, Self) {
        let (a_tx, a_rx) = unbounded();
        let (b_tx, b_rx) = unbounded();
        (Self::new(a_tx, b_rx), Self::new(b_tx, a_rx))
    }

    fn new(outgoing: Sender<String>, incoming: Receiver<String>) -> Self {
        Self {
            outgoing: Some(outgoing),
            incoming,
            opened: false,
            closed: false,
        }
    }
}

impl PeerChannel for LoopbackChannel {
    fn send(&mut self, message: &PeerMessage) -> SessionResult<()> {
        let outgoing = self.outgoing.as_ref().ok_or(SessionError::Disconnected)?;
        let line = encode_line(message)?;
        outgoing.send(line).map_err(|_| SessionError::Disconnected)
    }

    fn try_recv(&mut self) -> Option<ChannelEvent> {
        if self.closed {
            return None;
        }
        if !self.opened {
            self.opened = true;
            return Some(ChannelEvent::Open);
        }
        loop {
            match self.incoming.try_recv() {
                Ok(line) => match decode_line(&line) {
                    Ok(message) => return Some(ChannelEvent::Message(message)),
                    Err(e) => warn!("[NETWORK] Dropping malformed message: {}", e),
                },
                Err(TryRecvError::Empty) => return None,
                Err(TryRecvError::Disconnected) => {
                    self.closed = true;
                    self.outgoing = None;
                    return Some(ChannelEvent::Closed);
                }
            }
        }
    }

    fn close(&mut self) {
        self.outgoing = None;
        self.closed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_engine::Color;

    #[test]
    fn test_pair_opens_then_delivers_in_order() {
        let (mut a, mut b) = LoopbackChannel::pair();
        assert_eq!(a.try_recv(), Some(ChannelEvent::Open));
        assert_eq!(b.try_recv(), Some(ChannelEvent::Open));
        assert_eq!(b.try_recv(), None);

        a.send(&PeerMessage::Init {
            host_color: Color::Black,
        })
        .unwrap();
        a.send(&PeerMessage::Resign).unwrap();

        assert_eq!(
            b.try_recv(),
            Some(ChannelEvent::Message(PeerMessage::Init {
                host_color: Color::Black
            }))
        );
        assert_eq!(b.try_recv(), Some(ChannelEvent::Message(PeerMessage::Resign)));
        assert_eq!(b.try_recv(), None);
    }

    #[test]
    fn test_close_is_observed_once() {
        let (mut a, mut b) = LoopbackChannel::pair();
        b.try_recv();
        a.send(&PeerMessage::Rematch).unwrap();
        a.close();

        assert_eq!(b.try_recv(), Some(ChannelEvent::Message(PeerMessage::Rematch)));
        assert_eq!(b.try_recv(), Some(ChannelEvent::Closed));
        assert_eq!(b.try_recv(), None);
        assert!(matches!(b.send(&PeerMessage::Resign), Err(SessionError::Disconnected)));
        assert!(matches!(a.send(&PeerMessage::Resign), Err(SessionError::Disconnected)));
    }
}
