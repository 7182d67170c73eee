//! Peer-synchronized game session
//!
//! Both players run their own [`GameState`]. The session only ever forwards
//! moves that the local engine accepted, and applies incoming moves through
//! the same [`GameState::apply_move_for`] path with the opponent's color, so a
//! move can never be applied for the wrong side.

use chess_engine::{AppliedMove, Color, GameState, Move};
use shared::{ConnectionError, PeerMessage, RoomCode};
use tracing::{error, info, warn};

use super::channel::{ChannelEvent, PeerChannel};
use super::error::{SessionError, SessionResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Host,
    Guest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkState {
    Connecting,
    Connected,
    Disconnected,
}

/// What a poll changed, for the front end to report
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// Colors assigned and a fresh game started
    Started { color: Color },
    OpponentMoved(AppliedMove),
    OpponentResigned,
    RematchStarted,
    OpponentDisconnected,
    Failed(ConnectionError),
}

pub struct Session {
    role: Role,
    room_code: RoomCode,
    channel: Box<dyn PeerChannel>,
    link: LinkState,
    color: Option<Color>,
    host_color: Color,
    last_error: Option<ConnectionError>,
}

impl Session {
    /// Host a game; `host_color` is sent to the guest once the link opens
    pub fn host(channel: Box<dyn PeerChannel>, room_code: RoomCode, host_color: Color) -> Self {
        info!("[SESSION] Hosting room {} as {}", room_code, host_color);
        Self::new(Role::Host, channel, room_code, host_color)
    }

    /// Join a game; the color arrives with the host's `init`
    pub fn join(channel: Box<dyn PeerChannel>, room_code: RoomCode) -> Self {
        info!("[SESSION] Joining room {}", room_code);
        Self::new(Role::Guest, channel, room_code, Color::White)
    }

    fn new(role: Role, channel: Box<dyn PeerChannel>, room_code: RoomCode, host_color: Color) -> Self {
        Self {
            role,
            room_code,
            channel,
            link: LinkState::Connecting,
            color: None,
            host_color,
            last_error: None,
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn room_code(&self) -> &RoomCode {
        &self.room_code
    }

    pub fn link(&self) -> LinkState {
        self.link
    }

    /// Local player's color, once assigned
    pub fn color(&self) -> Option<Color> {
        self.color
    }

    pub fn last_error(&self) -> Option<&ConnectionError> {
        self.last_error.as_ref()
    }

    /// Drain pending channel events into `game`
    pub fn poll(&mut self, game: &mut GameState) -> Vec<SessionEvent> {
        let mut events = Vec::new();
        while self.link != LinkState::Disconnected {
            let Some(event) = self.channel.try_recv() else {
                break;
            };
            match event {
                ChannelEvent::Open => self.on_open(game, &mut events),
                ChannelEvent::Message(message) => self.on_message(message, game, &mut events),
                ChannelEvent::Closed => {
                    info!("[SESSION] Opponent disconnected from room {}", self.room_code);
                    self.link = LinkState::Disconnected;
                    events.push(SessionEvent::OpponentDisconnected);
                }
                ChannelEvent::Error(e) => {
                    error!("[SESSION] Connection error in room {}: {}", self.room_code, e);
                    self.link = LinkState::Disconnected;
                    self.last_error = Some(e.clone());
                    events.push(SessionEvent::Failed(e));
                }
            }
        }
        events
    }

    fn on_open(&mut self, game: &mut GameState, events: &mut Vec<SessionEvent>) {
        self.link = LinkState::Connected;
        info!("[SESSION] Link open in room {}", self.room_code);

        if self.role == Role::Host {
            let host_color = self.host_color;
            if let Err(e) = self.channel.send(&PeerMessage::Init { host_color }) {
                warn!("[SESSION] Failed to send init: {}", e);
                return;
            }
            self.color = Some(host_color);
            game.reset();
            events.push(SessionEvent::Started { color: host_color });
        }
    }

    fn on_message(&mut self, message: PeerMessage, game: &mut GameState, events: &mut Vec<SessionEvent>) {
        match message {
            PeerMessage::Init { host_color } => {
                if self.role == Role::Host {
                    warn!("[SESSION] Ignoring init sent to the host");
                    return;
                }
                let color = host_color.opposite();
                info!("[SESSION] Host plays {}, playing {}", host_color, color);
                self.color = Some(color);
                game.reset();
                events.push(SessionEvent::Started { color });
            }
            PeerMessage::Move { mv } => {
                let Some(color) = self.color else {
                    warn!("[SESSION] Move {} arrived before colors were assigned", mv);
                    return;
                };
                match game.apply_move_for(color.opposite(), mv) {
                    Ok(applied) => events.push(SessionEvent::OpponentMoved(applied)),
                    Err(e) => warn!("[SESSION] Ignoring opponent move {}: {}", mv, e),
                }
            }
            PeerMessage::Resign => {
                if game.is_over() {
                    return;
                }
                game.opponent_resigned();
                events.push(SessionEvent::OpponentResigned);
            }
            PeerMessage::Rematch => {
                info!("[SESSION] Opponent started a rematch");
                game.reset();
                events.push(SessionEvent::RematchStarted);
            }
        }
    }

    fn ensure_connected(&self) -> SessionResult<Color> {
        match self.link {
            LinkState::Connecting => Err(SessionError::NotConnected),
            LinkState::Disconnected => Err(SessionError::Disconnected),
            LinkState::Connected => self.color.ok_or(SessionError::NotConnected),
        }
    }

    fn transmit(&mut self, message: PeerMessage) -> SessionResult<()> {
        if let Err(e) = self.channel.send(&message) {
            warn!("[SESSION] Send failed: {}", e);
            self.link = LinkState::Disconnected;
            return Err(e);
        }
        Ok(())
    }

    /// Apply a local move and forward it to the opponent
    ///
    /// Nothing is sent unless the local engine accepted the move.
    pub fn send_move(&mut self, game: &mut GameState, mv: Move) -> SessionResult<AppliedMove> {
        let color = self.ensure_connected()?;
        let applied = game.apply_move_for(color, mv)?;
        self.transmit(PeerMessage::Move { mv })?;
        Ok(applied)
    }

    /// Resign locally and tell the opponent. No-op once the game is over.
    pub fn resign(&mut self, game: &mut GameState) -> SessionResult<()> {
        self.ensure_connected()?;
        if game.is_over() {
            return Ok(());
        }
        game.resign();
        self.transmit(PeerMessage::Resign)
    }

    /// Start a fresh game with the same colors on both sides
    pub fn rematch(&mut self, game: &mut GameState) -> SessionResult<()> {
        self.ensure_connected()?;
        game.reset();
        self.transmit(PeerMessage::Rematch)
    }

    pub fn close(&mut self) {
        if self.link != LinkState::Disconnected {
            info!("[SESSION] Leaving room {}", self.room_code);
        }
        self.channel.close();
        self.link = LinkState::Disconnected;
    }
}
