//! Rules engine for the game of Connect Four.
//!
//! The [`core`] module owns the board, the turn order and the outcome of
//! every move. Drawing the board and collecting input are left to the
//! embedding program; the bundled binary is one such program for the
//! terminal.

pub mod core;
