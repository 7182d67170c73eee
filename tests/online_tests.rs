//! Online Integration Tests
//!
//! Full stack over TCP: two sessions paired through a relay on localhost.

use std::time::Duration;

use backend::Relay;
use chess_engine::{Color, GameState, GameStatus};
use peerchess::networking::{LinkState, Session, SessionEvent, TcpChannel};
use shared::{ConnectionError, RoomCode};

const WAIT: Duration = Duration::from_secs(5);

async fn start_relay() -> String {
    let relay = Relay::bind("127.0.0.1:0").await.unwrap();
    let addr = relay.local_addr().unwrap().to_string();
    tokio::spawn(relay.run());
    addr
}

/// Poll until `done` holds for the collected events
async fn poll_until(
    session: &mut Session,
    game: &mut GameState,
    done: impl Fn(&[SessionEvent]) -> bool,
) -> Vec<SessionEvent> {
    let mut events = Vec::new();
    tokio::time::timeout(WAIT, async {
        loop {
            events.extend(session.poll(game));
            if done(&events) {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    })
    .await
    .unwrap_or_else(|_| panic!("timed out, events so far: {events:?}"));
    events
}

#[tokio::test]
async fn test_moves_flow_through_relay() {
    let relay = start_relay().await;
    let code = RoomCode::generate();

    let mut host = Session::host(Box::new(TcpChannel::host(&relay, &code)), code.clone(), Color::White);
    let mut host_game = GameState::new();

    // Let the host register before the guest joins
    tokio::time::sleep(Duration::from_millis(100)).await;
    let mut guest = Session::join(Box::new(TcpChannel::join(&relay, &code)), code);
    let mut guest_game = GameState::new();

    poll_until(&mut host, &mut host_game, |e| e.contains(&SessionEvent::Started { color: Color::White })).await;
    poll_until(&mut guest, &mut guest_game, |e| e.contains(&SessionEvent::Started { color: Color::Black })).await;

    let mv = host_game.parse_move("e2e4").unwrap();
    host.send_move(&mut host_game, mv).unwrap();
    poll_until(&mut guest, &mut guest_game, |e| !e.is_empty()).await;

    let reply = guest_game.parse_move("e7e5").unwrap();
    guest.send_move(&mut guest_game, reply).unwrap();
    poll_until(&mut host, &mut host_game, |e| !e.is_empty()).await;

    assert_eq!(host_game, guest_game);

    guest.resign(&mut guest_game).unwrap();
    poll_until(&mut host, &mut host_game, |e| e.contains(&SessionEvent::OpponentResigned)).await;
    assert_eq!(host_game.status(), GameStatus::OpponentResigned);

    guest.close();
    poll_until(&mut host, &mut host_game, |e| e.contains(&SessionEvent::OpponentDisconnected)).await;
    assert_eq!(host.link(), LinkState::Disconnected);
}

#[tokio::test]
async fn test_unknown_room_fails_session() {
    let relay = start_relay().await;
    let code = RoomCode::parse("WXY234").unwrap();

    let mut guest = Session::join(Box::new(TcpChannel::join(&relay, &code)), code);
    let mut game = GameState::new();

    let events = poll_until(&mut guest, &mut game, |e| !e.is_empty()).await;

    assert_eq!(events, vec![SessionEvent::Failed(ConnectionError::RoomNotFound)]);
    assert_eq!(guest.link(), LinkState::Disconnected);
    assert_eq!(guest.last_error(), Some(&ConnectionError::RoomNotFound));
}

#[tokio::test]
async fn test_unreachable_relay_reports_transport_error() {
    // Bind and drop to get a port nobody listens on
    let addr = {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap().to_string()
    };
    let code = RoomCode::generate();
    let mut host = Session::host(Box::new(TcpChannel::host(&addr, &code)), code, Color::White);
    let mut game = GameState::new();

    let events = poll_until(&mut host, &mut game, |e| !e.is_empty()).await;
    assert!(matches!(events[0], SessionEvent::Failed(ConnectionError::Transport(_))));
}
