//! LazyFolio Library
//!
//! This library provides the core functionality for the LazyFolio
//! terminal portfolio viewer: the content model and validation, the
//! reveal/filter/toast behaviors, exporters, and the TUI itself.

// Module declarations
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod constants;
pub mod content;
pub mod export;
pub mod filter;
pub mod models;
pub mod reveal;
pub mod toast;
pub mod tui;
