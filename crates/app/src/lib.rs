//! # todohub-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** that storage adapters implement
//!   (driven/outbound port): `TodoRepository`, the todo store
//! - Define the **driving/inbound port** as a use-case struct:
//!   `TodoService` — list, get, create, update, delete with the
//!   request-level checks (identity match, existence pre-checks)
//! - Orchestrate domain objects without knowing *how* persistence or IO works
//!
//! ## Dependency rule
//! Depends on `todohub-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
