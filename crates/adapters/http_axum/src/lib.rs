//! # todohub-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a **JSON REST API** for todos under `/api/todo`
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results into HTTP responses and status codes
//! - Describe the API as an OpenAPI document at `/api-docs/openapi.json`
//!
//! ## Dependency rule
//! Depends on `todohub-app` (for port traits and services) and `todohub-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod openapi;
pub mod router;
pub mod state;
