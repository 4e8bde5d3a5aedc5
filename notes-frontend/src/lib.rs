//! Terminal client for the notes summarizer service.
//!
//! Notes live in the remote service; this crate keeps a per-session view of
//! them, re-fetching the list after every change.

pub mod api;
pub mod commands;
pub mod config;
pub mod http;
pub mod session;
pub mod state;
pub mod upload;
pub mod views;

#[cfg(test)]
pub(crate) mod testing;
