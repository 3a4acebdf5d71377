//! Domain model for captured locations and UI preferences.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Validate coordinate values before they reach persistence.
//!
//! # Invariants
//! - Every persisted location is identified by a stable store-assigned `id`.
//! - Persisted locations are immutable; there is no update or delete path.

pub mod location;
pub mod theme;
