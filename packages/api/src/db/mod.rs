//! # Database module — PostgreSQL connection pool management
//!
//! Entirely gated behind `#[cfg(feature = "server")]` so client (WASM)
//! builds never pull in SQLx or Tokio networking code.
//!
//! The pool is a **lazy, process-wide singleton** backed by a
//! [`tokio::sync::OnceCell`]. The first call to [`get_pool`] reads the
//! database section of [`Settings`](crate::settings::Settings), opens a pool
//! with up to 5 connections, and caches it for every later caller.
//! [`MIGRATOR`] embeds the SQL files under `migrations/`.

#[cfg(feature = "server")]
mod pool;

#[cfg(feature = "server")]
pub use pool::{get_pool, MIGRATOR};
