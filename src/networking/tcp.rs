//! Peer channel through the room-code relay
//!
//! The constructor spawns a tokio task that connects, sends the relay hello
//! and waits to be paired. From then on the task forwards outgoing lines to
//! the socket and incoming lines to the event queue. Must be created from
//! inside a tokio runtime.

use crossbeam_channel::{unbounded, Receiver, Sender};
use shared::protocol::{decode_line, encode_line};
use shared::{ConnectionError, PeerMessage, RelayHello, RelayReply, RoomCode};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::channel::{ChannelEvent, PeerChannel};
use super::error::{SessionError, SessionResult};

pub struct TcpChannel {
    outgoing: Option<mpsc::UnboundedSender<String>>,
    events: Receiver<ChannelEvent>,
    task: JoinHandle<()>,
    opened: bool,
}

impl TcpChannel {
    /// Register `code` at the relay and wait for a guest
    pub fn host(relay_addr: impl Into<String>, code: &RoomCode) -> Self {
        Self::connect(
            relay_addr.into(),
            RelayHello::Host {
                code: code.to_string(),
            },
        )
    }

    /// Join the room registered under `code`
    pub fn join(relay_addr: impl Into<String>, code: &RoomCode) -> Self {
        Self::connect(
            relay_addr.into(),
            RelayHello::Join {
                code: code.to_string(),
            },
        )
    }

    fn connect(relay_addr: String, hello: RelayHello) -> Self {
        let (out_tx, out_rx) = mpsc::unbounded_channel();
        let (event_tx, event_rx) = unbounded();

        let task = tokio::spawn(async move {
            let result = run_link(&relay_addr, hello, out_rx, &event_tx).await;
            let event = match result {
                Ok(()) => ChannelEvent::Closed,
                Err(e) => {
                    warn!("[NETWORK] Link to {} failed: {}", relay_addr, e);
                    ChannelEvent::Error(e)
                }
            };
            let _ = event_tx.send(event);
        });

        Self {
            outgoing: Some(out_tx),
            events: event_rx,
            task,
            opened: false,
        }
    }
}

/// Connect, handshake, then pump lines until either side stops
///
/// Returns `Ok` when the peer hung up or the local side closed.
async fn run_link(
    relay_addr: &str,
    hello: RelayHello,
    mut outgoing: mpsc::UnboundedReceiver<String>,
    events: &Sender<ChannelEvent>,
) -> Result<(), ConnectionError> {
    info!("[NETWORK] Connecting to relay at {}", relay_addr);
    let stream = TcpStream::connect(relay_addr).await?;
    let (read, mut write) = stream.into_split();
    let mut lines = BufReader::new(read).lines();

    let hello_line = encode_line(&hello).map_err(|e| ConnectionError::Transport(e.to_string()))?;
    write.write_all(hello_line.as_bytes()).await?;

    loop {
        let Some(line) = lines.next_line().await? else {
            return Err(ConnectionError::Transport("relay closed the connection".into()));
        };
        let reply: RelayReply =
            decode_line(&line).map_err(|e| ConnectionError::Transport(e.to_string()))?;
        match reply {
            RelayReply::Waiting => {
                info!("[NETWORK] Room {} registered, waiting for opponent", hello.code())
            }
            RelayReply::Paired => break,
            RelayReply::Rejected { reason } => return Err(reason.into()),
        }
    }

    info!("[NETWORK] Paired in room {}", hello.code());
    let _ = events.send(ChannelEvent::Open);

    loop {
        tokio::select! {
            incoming = lines.next_line() => {
                let Some(line) = incoming? else {
                    info!("[NETWORK] Opponent closed the connection");
                    return Ok(());
                };
                match decode_line::<PeerMessage>(&line) {
                    Ok(message) => {
                        debug!("[NETWORK] Received {:?}", message);
                        let _ = events.send(ChannelEvent::Message(message));
                    }
                    Err(e) => warn!("[NETWORK] Dropping malformed message: {}", e),
                }
            }
            next = outgoing.recv() => match next {
                Some(out) => write.write_all(out.as_bytes()).await?,
                None => {
                    debug!("[NETWORK] Local side closed the link");
                    let _ = write.shutdown().await;
                    return Ok(());
                }
            }
        }
    }
}

impl PeerChannel for TcpChannel {
    fn send(&mut self, message: &PeerMessage) -> SessionResult<()> {
        let outgoing = self.outgoing.as_ref().ok_or(SessionError::Disconnected)?;
        let line = encode_line(message)?;
        outgoing.send(line).map_err(|_| SessionError::Disconnected)
    }

    fn try_recv(&mut self) -> Option<ChannelEvent> {
        let event = self.events.try_recv().ok()?;
        match event {
            ChannelEvent::Open => self.opened = true,
            ChannelEvent::Closed | ChannelEvent::Error(_) => self.outgoing = None,
            ChannelEvent::Message(_) => {}
        }
        Some(event)
    }

    fn close(&mut self) {
        self.outgoing = None;
        // Still handshaking: nothing to flush
        if !self.opened {
            self.task.abort();
        }
    }
}

impl Drop for TcpChannel {
    fn drop(&mut self) {
        self.close();
    }
}
