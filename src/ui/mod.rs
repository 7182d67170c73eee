//! Text rendering for the terminal front end

use chess_engine::{Color, GameState, GameStatus};

use crate::networking::{LinkState, SessionEvent};

/// One-line summary of the game from `player`'s point of view
///
/// `player` is `None` for hot-seat games, where both sides share a screen.
pub fn status_line(game: &GameState, player: Option<Color>) -> String {
    let turn = game.turn();
    match game.status() {
        GameStatus::Playing => format!("{turn} to move"),
        GameStatus::Check => format!("Check! {turn} to move"),
        GameStatus::Checkmate => format!("Checkmate, {} wins", turn.opposite()),
        GameStatus::Stalemate => "Stalemate, draw".to_string(),
        GameStatus::Resigned => match player {
            Some(color) => format!("{color} resigned, {} wins", color.opposite()),
            None => format!("{turn} resigned, {} wins", turn.opposite()),
        },
        GameStatus::OpponentResigned => "Opponent resigned, you win".to_string(),
    }
}

/// Board diagram followed by the status line
pub fn render(game: &GameState, player: Option<Color>) -> String {
    format!("{}\n{}", game.board(), status_line(game, player))
}

pub fn legal_moves_line(game: &GameState) -> String {
    let moves: Vec<String> = game.legal_moves().iter().map(|m| m.to_string()).collect();
    if moves.is_empty() {
        "No legal moves".to_string()
    } else {
        moves.join(" ")
    }
}

pub fn link_label(link: LinkState) -> &'static str {
    match link {
        LinkState::Connecting => "Waiting for opponent...",
        LinkState::Connected => "Connected",
        LinkState::Disconnected => "Opponent disconnected",
    }
}

pub fn describe_event(event: &SessionEvent) -> String {
    match event {
        SessionEvent::Started { color } => format!("Game started, you play {color}"),
        SessionEvent::OpponentMoved(applied) => format!("Opponent plays {}", applied.mv),
        SessionEvent::OpponentResigned => "Opponent resigned".to_string(),
        SessionEvent::RematchStarted => "Opponent started a rematch".to_string(),
        SessionEvent::OpponentDisconnected => link_label(LinkState::Disconnected).to_string(),
        SessionEvent::Failed(e) => e.to_string(),
    }
}

pub const HELP: &str = "\
Commands:
  e2e4, e7e8q   play a move in coordinate notation
  moves         list legal moves
  board         show the board
  fen           print the position as FEN
  resign        give up the current game
  new           start a new game (rematch when online)
  quit          leave";
