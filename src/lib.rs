//! AIText Library
//!
//! Core modules for the AIText processor: entries, the AI host seam,
//! the capability probe, the action dispatcher and the iced GUI.

pub mod actions;
pub mod config;
pub mod entry;
pub mod error;
pub mod gui;
pub mod host;
pub mod language;
pub mod probe;
pub mod session;
