//! Impostor game engine - core FSM and game logic.
//!
//! This module provides the foundational game implementation including:
//! - Type-safe finite state machine with 6 game phases
//! - Player registration (name, photo and custom words)
//! - Word drawing and impostor assignment
//! - Guess evaluation, events and render views

// Submodules
pub mod assigner;
pub mod constants;
pub mod entities;
pub mod functional;
pub mod timers;
pub mod words;

mod state_machine;
mod states;
mod engine;

pub use engine::ImpostorState;
pub use state_machine::*;
pub use states::*;
