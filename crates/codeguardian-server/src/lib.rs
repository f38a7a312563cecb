//! `CodeGuardian AI` landing site server.
//!
//! Wires the page from `codeguardian-core` into a running Axum server. Serves
//! the landing page at `/`, the favicon, and a health probe for load
//! balancers.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
