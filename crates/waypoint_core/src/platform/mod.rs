//! Platform service seams consumed by the capture workflow.
//!
//! # Responsibility
//! - Define the contracts for platform permission and position APIs.
//! - Keep core logic independent of how the embedding shell obtains them.

pub mod location;
