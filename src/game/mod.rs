//! Game engine
//!
//! Word selection and the round state machine the front-ends drive.

mod error;
mod source;
mod state;

pub use error::GameError;
pub use source::{ListSource, WordSource};
pub use state::{Game, GuessResult, MAX_FAILURES, Status};
