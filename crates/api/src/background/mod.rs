//! Background tasks run alongside the HTTP server.
//!
//! Each submodule provides an async function intended to be spawned via
//! `tokio::spawn`. Tasks log their own failures and never return errors to
//! the spawner.

pub mod catalog_seed;
