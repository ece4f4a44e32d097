//! Single puzzle play
//!
//! `GameState` holds one puzzle, `GameController` validates input and drives it.

mod controller;
mod state;

pub use controller::GameController;
pub use state::{GameState, GameStatus, Guess};
