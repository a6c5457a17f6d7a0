// CreatorScope - lib.rs
//
// Library entry point, exposing the query engine and its application and
// platform layers for the CLI binary, integration tests, and embedding in
// other front ends.

pub mod app;
pub mod core;
pub mod platform;
pub mod util;
