//! Cipher modes implementation

pub mod block;
pub mod caesar;

pub use block::*;
pub use caesar::*;
