// CreatorScope - platform/mod.rs
//
// Platform abstraction layer: config directories and filesystem access.
// Dependencies: core model types, directories crate.
// Must NOT depend on: app.

pub mod config;
pub mod fs;
