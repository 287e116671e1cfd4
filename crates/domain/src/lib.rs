//! # clientele-domain
//!
//! Pure domain model for the clientele customer store.
//!
//! ## Responsibilities
//! - Define the [`Customer`](customer::Customer) record and its builder
//! - Enforce record invariants (required account number and name,
//!   non-negative credit limit)
//! - Provide the error conventions shared by every layer
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod customer;
pub mod error;
