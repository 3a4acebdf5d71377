//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate platform and repository calls into use-case level APIs.
//! - Keep UI/FFI layers decoupled from storage and platform details.

pub mod ledger;
pub mod preferences;
