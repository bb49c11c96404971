//! Internal modules for the impostor terminal client.
//!
//! This library provides command parsing, configuration, the photo and
//! sound collaborators, and the TUI used by the imp_client binary.

pub mod camera;
pub mod commands;
pub mod config;
pub mod effects;
pub mod tui_app;
