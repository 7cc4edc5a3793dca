//! CLI infrastructure for the tictactoe binary
//!
//! The shell owns everything the core does not: reading input, rendering
//! boards, looping games and reprompting on bad human input. The library
//! never corrects an illegal action on its own.

pub mod analyze;
pub mod play;
