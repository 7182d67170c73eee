//! Static position evaluation
//!
//! Evaluates chess positions using:
//! - Material count (piece values)
//! - Positional bonuses (piece-square tables)
//!
//! Scores are in centipawns and always signed from White's point of view:
//! positive favors White, negative favors Black.
//!
//! ## Module Organization
//!
//! - `pst` - Piece-square tables for positional evaluation
//! - `material` - Material balance evaluation
//! - `position` - Full position evaluation (material + positional)

mod material;
mod position;
mod pst;

pub use material::evaluate_material;
pub use position::evaluate_position;
pub use pst::pst_value;
