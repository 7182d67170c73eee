use std::time::{Duration, Instant};

use chess_engine::{GameState, SearchResult};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

/// Search result tagged with the generation that requested it
#[derive(Debug, Clone, Copy)]
pub struct AiReply {
    pub generation: u64,
    pub result: SearchResult,
    pub thinking_time: Duration,
}

pub struct AiScheduler {
    generation: u64,
    task: Option<JoinHandle<()>>,
    tx: mpsc::UnboundedSender<AiReply>,
    rx: mpsc::UnboundedReceiver<AiReply>,
}

impl AiScheduler {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            generation: 0,
            task: None,
            tx,
            rx,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// A search is scheduled or running and its reply not yet taken
    pub fn is_thinking(&self) -> bool {
        self.task.is_some()
    }

    /// Search a reply for the side to move in `game` after `delay`
    ///
    /// Replaces any search already in flight. Must be called from inside a
    /// tokio runtime.
    pub fn schedule(&mut self, game: &GameState, depth: u8, delay: Duration) {
        self.cancel();

        let generation = self.generation;
        let snapshot = game.clone();
        let tx = self.tx.clone();
        info!(
            "[AI] Scheduling search for {} at depth {} (generation {})",
            snapshot.turn(),
            depth,
            generation
        );

        self.task = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            let started = Instant::now();
            let search = tokio::task::spawn_blocking(move || snapshot.reply(depth)).await;
            match search {
                Ok(result) => {
                    let _ = tx.send(AiReply {
                        generation,
                        result,
                        thinking_time: started.elapsed(),
                    });
                }
                Err(e) => error!("[AI] Search task failed: {}", e),
            }
        }));
    }

    /// Drop any pending search; its reply will be ignored if it still arrives
    pub fn cancel(&mut self) {
        self.generation += 1;
        if let Some(task) = self.task.take() {
            debug!("[AI] Cancelled search, now at generation {}", self.generation);
            task.abort();
        }
    }

    /// Wait for the reply of the current generation
    ///
    /// Stale replies are discarded. Pends forever when nothing is scheduled.
    pub async fn next_reply(&mut self) -> AiReply {
        loop {
            // The scheduler holds a sender, so the channel never closes
            let Some(reply) = self.rx.recv().await else {
                return std::future::pending().await;
            };
            if reply.generation == self.generation {
                self.task = None;
                info!(
                    "[AI] Reply {:?} score {} ({} nodes, {} cutoffs) in {:?}",
                    reply.result.best_move.map(|m| m.to_string()),
                    reply.result.score,
                    reply.result.nodes,
                    reply.result.cutoffs,
                    reply.thinking_time
                );
                return reply;
            }
            debug!(
                "[AI] Discarding stale reply from generation {} (current {})",
                reply.generation, self.generation
            );
        }
    }
}

impl Default for AiScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for AiScheduler {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_reply_carries_current_generation() {
        let mut scheduler = AiScheduler::new();
        let game = GameState::new();

        scheduler.schedule(&game, 1, Duration::ZERO);
        assert!(scheduler.is_thinking());

        let reply = scheduler.next_reply().await;
        assert_eq!(reply.generation, scheduler.generation());
        assert!(reply.result.best_move.is_some());
        assert!(!scheduler.is_thinking());
    }

    #[tokio::test]
    async fn test_rescheduling_discards_previous_search() {
        let mut scheduler = AiScheduler::new();
        let game = GameState::new();

        scheduler.schedule(&game, 1, Duration::from_secs(60));
        let first = scheduler.generation();

        let mut after_e4 = GameState::new();
        after_e4.apply_move(after_e4.parse_move("e2e4").unwrap()).unwrap();
        scheduler.schedule(&after_e4, 1, Duration::ZERO);

        let reply = tokio::time::timeout(Duration::from_secs(10), scheduler.next_reply())
            .await
            .unwrap();
        assert!(reply.generation > first);
        // The surviving search answered for Black
        let mv = reply.result.best_move.unwrap();
        assert!(after_e4.board().piece_at(mv.from).unwrap().color == chess_engine::Color::Black);
    }
}
