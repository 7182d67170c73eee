//! Chess AI opponent
//!
//! The search itself is synchronous. [`AiScheduler`] runs it as a scheduled
//! task: wait for the think delay, search on the blocking pool, then deliver
//! the reply over a channel to the event loop that owns the game.
//!
//! # Cancellation
//!
//! Every scheduled search carries a generation number. Restarting the game
//! (or cancelling) bumps the generation and aborts the task, and replies
//! whose generation is stale are discarded rather than applied.

pub mod resource;
pub mod task;

pub use resource::AiConfig;
pub use task::{AiReply, AiScheduler};
