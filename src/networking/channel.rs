//! Transport abstraction for peer messages

use shared::{ConnectionError, PeerMessage};

use super::error::SessionResult;

/// Something a transport reports to its session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelEvent {
    /// Link is up; messages can flow both ways
    Open,
    Message(PeerMessage),
    /// Remote side went away
    Closed,
    /// Link could not be established or failed
    Error(ConnectionError),
}

/// A bidirectional, ordered message link to the opponent
///
/// Connecting is the job of the transport's constructor. Events are polled
/// without blocking so a session can be driven from any event loop.
pub trait PeerChannel: Send {
    fn send(&mut self, message: &PeerMessage) -> SessionResult<()>;

    /// Next pending event, if any
    fn try_recv(&mut self) -> Option<ChannelEvent>;

    /// Close the link; the remote side observes `Closed`
    fn close(&mut self);
}
