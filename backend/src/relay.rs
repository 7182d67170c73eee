use std::collections::HashMap;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use parking_lot::Mutex;
use shared::protocol::{decode_line, encode_line};
use shared::{ProtocolError, RejectReason, RelayHello, RelayReply, RoomCode};
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream, ToSocketAddrs};
use tokio::sync::oneshot;
use tracing::{debug, info, warn};

pub const DEFAULT_RELAY_ADDR: &str = "0.0.0.0:7878";

type Peer = BufReader<TcpStream>;

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    #[error("Connection closed before hello")]
    NoHello,
}

/// Rooms whose host is waiting for a guest
///
/// Each waiting host owns the receiving end of a oneshot; a guest takes the
/// sender out of the map and hands its own connection over.
#[derive(Default)]
pub struct RoomRegistry {
    rooms: Mutex<HashMap<RoomCode, oneshot::Sender<Peer>>>,
}

impl RoomRegistry {
    fn register(&self, code: &RoomCode) -> Result<oneshot::Receiver<Peer>, RejectReason> {
        let mut rooms = self.rooms.lock();
        if rooms.get(code).is_some_and(|waiting| !waiting.is_closed()) {
            return Err(RejectReason::CodeInUse);
        }
        let (tx, rx) = oneshot::channel();
        rooms.insert(code.clone(), tx);
        Ok(rx)
    }

    fn take(&self, code: &RoomCode) -> Option<oneshot::Sender<Peer>> {
        self.rooms.lock().remove(code)
    }

    /// Drop a registration whose host went away
    fn release(&self, code: &RoomCode) {
        let mut rooms = self.rooms.lock();
        if rooms.get(code).is_some_and(|waiting| waiting.is_closed()) {
            rooms.remove(code);
        }
    }

    /// Number of hosts currently waiting
    pub fn waiting(&self) -> usize {
        self.rooms
            .lock()
            .values()
            .filter(|waiting| !waiting.is_closed())
            .count()
    }
}

pub struct Relay {
    listener: TcpListener,
    rooms: Arc<RoomRegistry>,
}

impl Relay {
    pub async fn bind<A: ToSocketAddrs>(addr: A) -> io::Result<Self> {
        Ok(Self {
            listener: TcpListener::bind(addr).await?,
            rooms: Arc::new(RoomRegistry::default()),
        })
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    pub fn rooms(&self) -> Arc<RoomRegistry> {
        Arc::clone(&self.rooms)
    }

    /// Accept connections forever, one task per connection
    pub async fn run(self) -> io::Result<()> {
        loop {
            let (stream, addr) = self.listener.accept().await?;
            debug!("[RELAY] Connection from {}", addr);
            let rooms = Arc::clone(&self.rooms);
            tokio::spawn(async move {
                if let Err(e) = handle_connection(rooms, stream).await {
                    warn!("[RELAY] Connection {} ended with error: {}", addr, e);
                }
            });
        }
    }
}

async fn handle_connection(rooms: Arc<RoomRegistry>, stream: TcpStream) -> Result<(), RelayError> {
    let mut peer = BufReader::new(stream);

    let mut line = String::new();
    if peer.read_line(&mut line).await? == 0 {
        return Err(RelayError::NoHello);
    }
    let hello: RelayHello = decode_line(&line)?;

    let code = match RoomCode::parse(hello.code()) {
        Ok(code) => code,
        Err(_) => {
            warn!("[RELAY] Rejected malformed room code {:?}", hello.code());
            return reject(&mut peer, RejectReason::InvalidCode).await;
        }
    };

    match hello {
        RelayHello::Host { .. } => host(rooms, code, peer).await,
        RelayHello::Join { .. } => join(rooms, code, peer).await,
    }
}

async fn host(rooms: Arc<RoomRegistry>, code: RoomCode, mut host: Peer) -> Result<(), RelayError> {
    let mut pending = match rooms.register(&code) {
        Ok(pending) => pending,
        Err(reason) => {
            info!("[RELAY] Room {} already in use", code);
            return reject(&mut host, reason).await;
        }
    };
    send(&mut host, &RelayReply::Waiting).await?;
    info!("[RELAY] Room {} waiting for guest", code);

    // Any activity from the host before pairing (normally a hang-up) ends the room
    let mut guest = tokio::select! {
        paired = &mut pending => match paired {
            Ok(guest) => guest,
            Err(_) => return Ok(()),
        },
        _ = host.fill_buf() => {
            info!("[RELAY] Host left room {} before a guest joined", code);
            drop(pending);
            rooms.release(&code);
            return Ok(());
        }
    };

    send(&mut host, &RelayReply::Paired).await?;
    send(&mut guest, &RelayReply::Paired).await?;
    info!("[RELAY] Room {} paired", code);

    match tokio::io::copy_bidirectional(&mut host, &mut guest).await {
        Ok((up, down)) => debug!("[RELAY] Room {} closed ({} / {} bytes)", code, up, down),
        Err(e) => debug!("[RELAY] Room {} closed: {}", code, e),
    }
    Ok(())
}

async fn join(rooms: Arc<RoomRegistry>, code: RoomCode, guest: Peer) -> Result<(), RelayError> {
    let Some(waiting) = rooms.take(&code) else {
        info!("[RELAY] No room {} to join", code);
        let mut guest = guest;
        return reject(&mut guest, RejectReason::RoomNotFound).await;
    };
    if let Err(mut guest) = waiting.send(guest) {
        info!("[RELAY] Host of room {} is gone", code);
        return reject(&mut guest, RejectReason::RoomNotFound).await;
    }
    Ok(())
}

async fn reject(peer: &mut Peer, reason: RejectReason) -> Result<(), RelayError> {
    send(peer, &RelayReply::Rejected { reason }).await
}

async fn send(peer: &mut Peer, reply: &RelayReply) -> Result<(), RelayError> {
    let line = encode_line(reply)?;
    peer.get_mut().write_all(line.as_bytes()).await?;
    Ok(())
}
