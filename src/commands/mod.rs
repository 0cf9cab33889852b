//! Tauri command handlers
//!
//! IPC command handlers the frontend reaches through
//! `invoke("plugin:dash-shield|...")`.

pub mod shield;
