//! # todohub-domain
//!
//! Pure domain model for the todohub service.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define the **Todo** entity (a task with a completion state)
//! - Own the lifecycle rules: `created_at` is stamped once at creation,
//!   `completed_at` is stamped the first time a todo is completed and is
//!   never cleared afterwards
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod todo;
