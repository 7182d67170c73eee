//! Game controller
//!
//! Owns the canonical [`GameState`] for one front end and routes every change
//! through it: local input, AI replies and opponent messages. Whatever the
//! source, a move is only applied when its mover is the side to move.

use chess_engine::{AppliedMove, Color, GameState, Move};
use tracing::{info, warn};

use super::ai::{AiConfig, AiReply, AiScheduler};
use super::error::{GameError, GameResult};
use crate::networking::{Session, SessionEvent};

pub enum GameMode {
    /// Both sides at one keyboard
    Local,
    VsAi(AiConfig),
    Online(Session),
}

pub struct GameController {
    game: GameState,
    mode: GameMode,
    ai: AiScheduler,
}

impl GameController {
    pub fn new(mode: GameMode) -> Self {
        Self {
            game: GameState::new(),
            mode,
            ai: AiScheduler::new(),
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn mode(&self) -> &GameMode {
        &self.mode
    }

    pub fn session(&self) -> Option<&Session> {
        match &self.mode {
            GameMode::Online(session) => Some(session),
            _ => None,
        }
    }

    pub fn is_online(&self) -> bool {
        matches!(self.mode, GameMode::Online(_))
    }

    /// Color the local player controls; for local games, the side to move
    pub fn player_color(&self) -> Option<Color> {
        match &self.mode {
            GameMode::Local => Some(self.game.turn()),
            GameMode::VsAi(config) => Some(config.ai_color.opposite()),
            GameMode::Online(session) => session.color(),
        }
    }

    /// Kick off the AI if it has the first move
    pub fn start(&mut self) {
        self.schedule_ai_if_due();
    }

    pub fn is_ai_thinking(&self) -> bool {
        self.ai.is_thinking()
    }

    /// Play a move for the local player
    pub fn play(&mut self, mv: Move) -> GameResult<AppliedMove> {
        let applied = match &mut self.mode {
            GameMode::Local => self.game.apply_move(mv)?,
            GameMode::VsAi(config) => {
                if self.game.turn() == config.ai_color && !self.game.is_over() {
                    return Err(GameError::AiTurn);
                }
                self.game.apply_move_for(config.ai_color.opposite(), mv)?
            }
            GameMode::Online(session) => session.send_move(&mut self.game, mv)?,
        };
        self.schedule_ai_if_due();
        Ok(applied)
    }

    /// Play a move given in coordinate notation, e.g. `e2e4` or `e7e8q`
    pub fn play_text(&mut self, text: &str) -> GameResult<AppliedMove> {
        let mv = self.game.parse_move(text)?;
        self.play(mv)
    }

    pub fn resign(&mut self) -> GameResult<()> {
        self.ai.cancel();
        match &mut self.mode {
            GameMode::Online(session) => session.resign(&mut self.game)?,
            _ => self.game.resign(),
        }
        Ok(())
    }

    /// Start over; online this is a rematch with the same colors
    pub fn new_game(&mut self) -> GameResult<()> {
        self.ai.cancel();
        match &mut self.mode {
            GameMode::Online(session) => session.rematch(&mut self.game)?,
            _ => self.game.reset(),
        }
        info!("[ENGINE] New game started");
        self.schedule_ai_if_due();
        Ok(())
    }

    fn schedule_ai_if_due(&mut self) {
        let GameMode::VsAi(config) = &self.mode else {
            return;
        };
        if self.game.is_over() || self.game.turn() != config.ai_color || self.ai.is_thinking() {
            return;
        }
        self.ai
            .schedule(&self.game, config.difficulty.depth(), config.think_delay);
    }

    /// Wait for the current AI search; pends forever when none is running
    pub async fn next_ai_reply(&mut self) -> AiReply {
        self.ai.next_reply().await
    }

    /// Apply an AI reply if it belongs to the current game
    pub fn apply_ai_reply(&mut self, reply: AiReply) -> Option<AppliedMove> {
        if reply.generation != self.ai.generation() {
            return None;
        }
        let GameMode::VsAi(config) = &self.mode else {
            return None;
        };
        let mv = reply.result.best_move?;
        match self.game.apply_move_for(config.ai_color, mv) {
            Ok(applied) => Some(applied),
            Err(e) => {
                warn!("[AI] Reply {} rejected: {}", mv, e);
                None
            }
        }
    }

    /// Apply whatever the opponent sent since the last poll
    pub fn poll_network(&mut self) -> Vec<SessionEvent> {
        match &mut self.mode {
            GameMode::Online(session) => session.poll(&mut self.game),
            _ => Vec::new(),
        }
    }

    pub fn close(&mut self) {
        self.ai.cancel();
        if let GameMode::Online(session) = &mut self.mode {
            session.close();
        }
    }
}
