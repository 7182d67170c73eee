//! Session Integration Tests
//!
//! Two sessions joined by a loopback channel, each with its own GameState:
//! - Colors assigned from the host's init
//! - Moves mirrored on both replicas
//! - Resign, rematch and disconnect handling
//! - Bad moves from the peer dropped without touching the game

use chess_engine::{Color, GameState, GameStatus, Move};
use peerchess::networking::{
    ChannelEvent, LinkState, LoopbackChannel, PeerChannel, Session, SessionError, SessionEvent,
};
use shared::{PeerMessage, RoomCode};

struct Table {
    host: Session,
    guest: Session,
    host_game: GameState,
    guest_game: GameState,
}

impl Table {
    fn open(host_color: Color) -> Self {
        let code = RoomCode::parse("PQR567").unwrap();
        let (a, b) = LoopbackChannel::pair();
        let mut table = Self {
            host: Session::host(Box::new(a), code.clone(), host_color),
            guest: Session::join(Box::new(b), code),
            host_game: GameState::new(),
            guest_game: GameState::new(),
        };
        table.pump();
        table
    }

    fn pump(&mut self) -> (Vec<SessionEvent>, Vec<SessionEvent>) {
        let host_events = self.host.poll(&mut self.host_game);
        let guest_events = self.guest.poll(&mut self.guest_game);
        (host_events, guest_events)
    }

    /// Play `text` for whichever side is to move
    fn play(&mut self, text: &str) {
        let white_is_host = self.host.color() == Some(Color::White);
        let host_to_move = (self.host_game.turn() == Color::White) == white_is_host;
        if host_to_move {
            let mv = self.host_game.parse_move(text).unwrap();
            self.host.send_move(&mut self.host_game, mv).unwrap();
            self.guest.poll(&mut self.guest_game);
        } else {
            let mv = self.guest_game.parse_move(text).unwrap();
            self.guest.send_move(&mut self.guest_game, mv).unwrap();
            self.host.poll(&mut self.host_game);
        }
    }
}

#[test]
fn test_colors_are_complementary() {
    let table = Table::open(Color::Black);
    assert_eq!(table.host.color(), Some(Color::Black));
    assert_eq!(table.guest.color(), Some(Color::White));
    assert_eq!(table.host.link(), LinkState::Connected);
    assert_eq!(table.guest.link(), LinkState::Connected);
}

#[test]
fn test_replicas_stay_identical() {
    let mut table = Table::open(Color::White);
    for text in ["e2e4", "c7c5", "g1f3", "d7d6", "f1b5", "c8d7", "e1g1"] {
        table.play(text);
    }

    assert_eq!(table.host_game, table.guest_game);
    assert_eq!(table.guest_game.history().len(), 7);
}

#[test]
fn test_fools_mate_over_the_wire() {
    let mut table = Table::open(Color::White);
    for text in ["f2f3", "e7e5", "g2g4", "d8h4"] {
        table.play(text);
    }

    assert_eq!(table.host_game.status(), GameStatus::Checkmate);
    assert_eq!(table.guest_game.status(), GameStatus::Checkmate);
    assert!(table.host_game.legal_moves().is_empty());
}

#[test]
fn test_cannot_move_out_of_turn() {
    let mut table = Table::open(Color::White);
    let mv = table.guest_game.parse_move("e2e4").unwrap();

    let err = table.guest.send_move(&mut table.guest_game, mv).unwrap_err();

    assert!(matches!(err, SessionError::Engine(_)));
    assert!(table.guest_game.history().is_empty());
    assert_eq!(table.pump(), (vec![], vec![]));
}

#[test]
fn test_resign_reaches_opponent() {
    let mut table = Table::open(Color::White);
    table.play("d2d4");

    table.guest.resign(&mut table.guest_game).unwrap();
    let (host_events, _) = table.pump();

    assert_eq!(table.guest_game.status(), GameStatus::Resigned);
    assert_eq!(table.host_game.status(), GameStatus::OpponentResigned);
    assert_eq!(host_events, vec![SessionEvent::OpponentResigned]);
}

#[test]
fn test_rematch_resets_both_sides_keeping_colors() {
    let mut table = Table::open(Color::Black);
    table.play("e2e4");
    table.host.resign(&mut table.host_game).unwrap();
    table.pump();

    table.guest.rematch(&mut table.guest_game).unwrap();
    let (host_events, _) = table.pump();

    assert_eq!(host_events, vec![SessionEvent::RematchStarted]);
    assert_eq!(table.host_game, GameState::new());
    assert_eq!(table.guest_game, GameState::new());
    assert_eq!(table.host.color(), Some(Color::Black));

    table.play("g1f3");
    assert_eq!(table.host_game, table.guest_game);
}

#[test]
fn test_disconnect_freezes_the_game() {
    let mut table = Table::open(Color::White);
    table.play("e2e4");

    table.guest.close();
    let (host_events, _) = table.pump();
    assert_eq!(host_events, vec![SessionEvent::OpponentDisconnected]);
    assert_eq!(table.host.link(), LinkState::Disconnected);

    let before = table.host_game.clone();
    let mv = table.host_game.parse_move("d2d4");
    assert!(mv.is_err(), "it is Black's turn");
    let err = table.host.resign(&mut table.host_game).unwrap_err();
    assert!(matches!(err, SessionError::Disconnected));
    assert_eq!(table.host_game, before);
}

#[test]
fn test_send_move_after_disconnect_is_refused() {
    let mut table = Table::open(Color::White);

    table.guest.close();
    table.pump();
    assert_eq!(table.host.link(), LinkState::Disconnected);

    let before = table.host_game.clone();
    let mv = table.host_game.parse_move("e2e4").unwrap();
    let err = table.host.send_move(&mut table.host_game, mv).unwrap_err();
    assert!(matches!(err, SessionError::Disconnected));
    assert_eq!(table.host_game, before);
}

// ============================================================================
// Peer sending moves straight down the channel
// ============================================================================

/// Host session playing White against a bare channel end
fn host_against_raw_peer() -> (Session, GameState, LoopbackChannel) {
    let code = RoomCode::parse("PQR567").unwrap();
    let (a, mut raw) = LoopbackChannel::pair();
    let mut host = Session::host(Box::new(a), code, Color::White);
    let mut game = GameState::new();

    host.poll(&mut game);
    assert_eq!(raw.try_recv(), Some(ChannelEvent::Open));
    assert_eq!(
        raw.try_recv(),
        Some(ChannelEvent::Message(PeerMessage::Init {
            host_color: Color::White
        }))
    );
    (host, game, raw)
}

fn assert_dropped(host: &mut Session, game: &mut GameState, raw: &mut LoopbackChannel, mv: Move) {
    let before = game.clone();
    raw.send(&PeerMessage::Move { mv }).unwrap();

    let events = host.poll(game);

    assert!(events.is_empty(), "unexpected events {events:?}");
    assert_eq!(*game, before);
    assert_eq!(host.link(), LinkState::Connected);
}

#[test]
fn test_out_of_turn_peer_move_is_dropped() {
    let (mut host, mut game, mut raw) = host_against_raw_peer();
    // White to move, the peer plays Black
    assert_dropped(&mut host, &mut game, &mut raw, Move::new(52, 44));
}

#[test]
fn test_illegal_peer_move_is_dropped() {
    let (mut host, mut game, mut raw) = host_against_raw_peer();
    let mv = game.parse_move("e2e4").unwrap();
    host.send_move(&mut game, mv).unwrap();

    // Queen d8 to h4 through its own pawn
    assert_dropped(&mut host, &mut game, &mut raw, Move::new(59, 31));
    // Pawn e7 to e5 without the double-push flag
    assert_dropped(&mut host, &mut game, &mut raw, Move::new(52, 36));
}

#[test]
fn test_off_board_peer_move_is_dropped() {
    let (mut host, mut game, mut raw) = host_against_raw_peer();
    let mv = game.parse_move("d2d4").unwrap();
    host.send_move(&mut game, mv).unwrap();

    assert_dropped(&mut host, &mut game, &mut raw, Move::new(200, 12));
    assert_dropped(&mut host, &mut game, &mut raw, Move::new(51, 255));

    // The session keeps working afterwards
    raw.send(&PeerMessage::Move {
        mv: Move::double_push(51, 35),
    })
    .unwrap();
    let events = host.poll(&mut game);
    assert!(matches!(events.as_slice(), [SessionEvent::OpponentMoved(_)]));
    assert_eq!(game.turn(), Color::White);
}
