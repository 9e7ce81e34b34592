//! Domain - closed sets the engine matches on exhaustively

pub mod alignment;
pub mod tiles;
