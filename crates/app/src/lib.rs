//! # clientele-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the driven port `CustomerRepository`: create, look up, update,
//!   soft-delete, search, and list customers
//! - Define the driving use-case struct `CustomerService`, which turns the
//!   repository's boolean outcomes into typed errors
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `clientele-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
