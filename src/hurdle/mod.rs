//! Hurdle mode: chained puzzles scored by hurdle number and guesses used

mod controller;
mod score;
mod state;

pub use controller::{ChainPhase, HurdleController, HurdleProgress, HurdleSession};
pub use score::{
    BASE_POINTS, calculate_final_score, calculate_hurdle_score, multiplier, multiplier_quarters,
};
pub use state::{CompletedHurdle, EndReason, HurdleState};
