//! Repository functions for the domain layer.

pub mod games;
pub mod pictures;
pub mod players;
pub mod turns;
