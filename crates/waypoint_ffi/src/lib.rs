//! Flutter-facing FFI crate for Waypoint.
//!
//! Exposes use-case level functions from `waypoint_core` to Dart through
//! flutter_rust_bridge. Generated bridge glue lives outside this tree.

pub mod api;
