//! `Homebound` - A household budgeting and move-planning tracker
//!
//! This crate provides the state and derivation engine behind a personal
//! move-out tracker: monthly income and expenses across two lifecycle modes
//! (preparation vs. living independently), a shopping list with
//! savings-toward-purchase tracking, a move-readiness checklist, saved budget
//! scenarios, and an append-only timeline of notable changes. State is held
//! in an immutable-snapshot [`store::Store`] and persisted through one of two
//! interchangeable backends: a versioned local JSON document or a remote
//! multi-table database.
//!
//! The crate is presentation-agnostic: a UI layer embeds it, calls the
//! store's mutation functions, and reads its derived views.

// Deny the most critical lints that could lead to bugs or security issues
#![deny(
    // Security and correctness
    unsafe_code,
    unsafe_op_in_unsafe_fn,

    // Code quality - things that are almost always bugs
    unreachable_code,
    unreachable_patterns,
    unused_must_use,

    // Documentation - broken links are bugs
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
)]
// Warn on things that should be fixed but aren't necessarily bugs
#![warn(
    missing_docs,

    // Clippy categories for overall code quality
    clippy::all,
    clippy::pedantic,

    // Performance
    clippy::inefficient_to_string,
    clippy::needless_pass_by_value,

    // Correctness
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::exit,
    clippy::expect_used,
    clippy::float_cmp,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used,

    // Style consistency
    clippy::enum_glob_use,
    clippy::semicolon_if_nothing_returned,
    clippy::wildcard_imports,

    // Future compatibility
    future_incompatible,
    rust_2018_idioms,
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,  // Common pattern in Rust
    clippy::missing_errors_doc,        // Will add gradually
    clippy::missing_panics_doc,        // Will add gradually
)]

/// Configuration loading - storage backend selection and seed overrides
pub mod config;
/// Pure derivation functions - totals, health indicator, purchase progress
pub mod core;
/// SeaORM entity definitions for the remote backend tables
pub mod entities;
/// Unified error types and result handling
pub mod errors;
/// Domain model - entity shapes and enumerations
pub mod models;
/// Persistence adapters - local JSON document and remote database
pub mod persist;
/// Cross-cutting mode and timeline policy rules
pub mod policy;
/// Built-in seeded dataset used on first run and full reset
pub mod seed;
/// The state store - canonical collections, mutations, and filtered views
pub mod store;

#[cfg(test)]
pub mod test_utils;
