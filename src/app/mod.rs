// CreatorScope - app/mod.rs
//
// Application layer: catalog snapshot and query state lifecycle.
// Dependencies: core layer.
// Must NOT depend on: platform specifics.

pub mod catalog;
pub mod state;
